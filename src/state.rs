use std::sync::Arc;

use crate::db::portfolio_store::PortfolioStore;
use crate::services::llm_service::LlmProvider;

#[derive(Clone)]
pub struct AppState {
    pub portfolio_store: Arc<dyn PortfolioStore>,
    pub llm_provider: Arc<dyn LlmProvider>,
}
