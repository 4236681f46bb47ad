use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::db::portfolio_store::PortfolioStore;
use crate::models::{Holding, Portfolio};

pub struct PgPortfolioStore {
    pool: PgPool,
}

impl PgPortfolioStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PortfolioStore for PgPortfolioStore {
    async fn fetch_customer_portfolio(
        &self,
        customer_id: &str,
    ) -> Result<Portfolio, sqlx::Error> {
        let rows = sqlx::query(
            "SELECT asset_class, sub_category, SUM(amount) AS total_amount
             FROM customer_portfolio
             WHERE customer_id = $1
             GROUP BY asset_class, sub_category
             ORDER BY asset_class, sub_category",
        )
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await?;

        // Group by asset class as rows arrive; map order follows the
        // query's ORDER BY and drives the formatted line order.
        let mut portfolio = Portfolio::new();
        for row in rows {
            let asset_class: String = row.try_get("asset_class")?;
            let holding = Holding {
                sub_category: row.try_get("sub_category")?,
                amount: row.try_get("total_amount")?,
            };
            portfolio.entry(asset_class).or_default().push(holding);
        }

        Ok(portfolio)
    }
}
