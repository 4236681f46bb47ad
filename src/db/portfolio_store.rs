use async_trait::async_trait;

use crate::models::Portfolio;

/// Read access to the analytical holdings store, abstracted so handlers
/// can be exercised against fakes.
#[async_trait]
pub trait PortfolioStore: Send + Sync {
    async fn fetch_customer_portfolio(
        &self,
        customer_id: &str,
    ) -> Result<Portfolio, sqlx::Error>;
}
