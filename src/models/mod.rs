mod advice;
mod portfolio;

pub use advice::{AdviceRequest, AdviceResponse};
pub use portfolio::{Holding, Portfolio};
