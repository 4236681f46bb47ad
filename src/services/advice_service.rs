use std::sync::Arc;

use tracing::info;

use crate::db::portfolio_store::PortfolioStore;
use crate::errors::AppError;
use crate::models::AdviceResponse;
use crate::services::format::format_portfolio;
use crate::services::llm_service::LlmProvider;

/// Run the full advice pipeline: fetch the customer's holdings, format
/// them, build the advisor prompt, and ask the model. Returns the
/// generated advice together with the raw portfolio mapping.
pub async fn generate_advice(
    store: Arc<dyn PortfolioStore>,
    llm: Arc<dyn LlmProvider>,
    customer_id: &str,
    query: &str,
) -> Result<AdviceResponse, AppError> {
    let portfolio = store
        .fetch_customer_portfolio(customer_id)
        .await
        .map_err(AppError::Db)?;

    info!(
        "Fetched portfolio for customer {} ({} asset classes)",
        customer_id,
        portfolio.len()
    );

    let formatted = format_portfolio(&portfolio);
    let prompt = build_advisor_prompt(&formatted, query);

    let advice = llm.generate_content(prompt).await?;

    Ok(AdviceResponse { advice, portfolio })
}

/// Fixed advisor template; the portfolio summary and the user's query
/// are interpolated verbatim.
fn build_advisor_prompt(portfolio: &str, user_query: &str) -> String {
    format!(
        "You are a professional financial advisor. Please provide advice based on the following portfolio:

{portfolio}

Customer asks: \"{user_query}\"

Please provide clear, compliant, and actionable suggestions. Consider:
1. Current market conditions
2. Risk management
3. Portfolio diversification
4. Long-term investment goals

Response should be:
- Professional and clear
- Regulatory compliant
- Based on the portfolio data
- Actionable but not overly prescriptive
"
    )
}
