pub(crate) mod advice;
pub(crate) mod health;
