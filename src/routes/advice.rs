use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::{AdviceRequest, AdviceResponse};
use crate::services::advice_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(get_financial_advice))
}

/// POST /advice
///
/// Request body:
/// {
///   "customer_id": "CUST-42",
///   "query": "Should I rebalance before the end of the year?"
/// }
///
/// Returns the generated advice plus the raw portfolio mapping.
async fn get_financial_advice(
    State(state): State<AppState>,
    Json(request): Json<AdviceRequest>,
) -> Result<Json<AdviceResponse>, AppError> {
    let (customer_id, query) = match (request.customer_id.as_deref(), request.query.as_deref())
    {
        (Some(c), Some(q)) if !c.is_empty() && !q.is_empty() => (c, q),
        _ => {
            return Err(AppError::Validation(
                "Missing customer_id or query".to_string(),
            ))
        }
    };

    info!("POST /advice - customer: {}", customer_id);

    let response = advice_service::generate_advice(
        state.portfolio_store.clone(),
        state.llm_provider.clone(),
        customer_id,
        query,
    )
    .await
    .map_err(|e| {
        error!("Failed to generate advice: {}", e);
        e
    })?;

    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::app::create_app;
    use crate::db::portfolio_store::PortfolioStore;
    use crate::models::{Holding, Portfolio};
    use crate::services::llm_service::{LlmError, LlmProvider};
    use crate::state::AppState;

    struct FixedStore(Portfolio);

    #[async_trait]
    impl PortfolioStore for FixedStore {
        async fn fetch_customer_portfolio(
            &self,
            _customer_id: &str,
        ) -> Result<Portfolio, sqlx::Error> {
            Ok(self.0.clone())
        }
    }

    struct FailingStore;

    #[async_trait]
    impl PortfolioStore for FailingStore {
        async fn fetch_customer_portfolio(
            &self,
            _customer_id: &str,
        ) -> Result<Portfolio, sqlx::Error> {
            Err(sqlx::Error::Protocol("connection reset".to_string()))
        }
    }

    struct CannedLlm(&'static str);

    #[async_trait]
    impl LlmProvider for CannedLlm {
        async fn generate_content(&self, _prompt: String) -> Result<String, LlmError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingLlm;

    #[async_trait]
    impl LlmProvider for FailingLlm {
        async fn generate_content(&self, _prompt: String) -> Result<String, LlmError> {
            Err(LlmError::Api("HTTP 503: model overloaded".to_string()))
        }
    }

    fn sample_portfolio() -> Portfolio {
        Portfolio::from([
            (
                "Equity".to_string(),
                vec![
                    Holding {
                        sub_category: "Large Cap".to_string(),
                        amount: 600000.0,
                    },
                    Holding {
                        sub_category: "Mid Cap".to_string(),
                        amount: 200000.0,
                    },
                ],
            ),
            (
                "Debt".to_string(),
                vec![Holding {
                    sub_category: "Government Bonds".to_string(),
                    amount: 150000.0,
                }],
            ),
        ])
    }

    fn advice_request(body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/advice")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_advice_happy_path_returns_advice_and_portfolio() {
        let app = create_app(AppState {
            portfolio_store: Arc::new(FixedStore(sample_portfolio())),
            llm_provider: Arc::new(CannedLlm("Consider shifting 10% into debt funds.")),
        });

        let response = app
            .oneshot(advice_request(
                r#"{"customer_id":"CUST-42","query":"Should I rebalance?"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["advice"], "Consider shifting 10% into debt funds.");
        assert_eq!(json["portfolio"]["Equity"][0]["sub_category"], "Large Cap");
        assert_eq!(json["portfolio"]["Equity"][0]["amount"], 600000.0);
        assert_eq!(
            json["portfolio"]["Debt"][0]["sub_category"],
            "Government Bonds"
        );
    }

    #[tokio::test]
    async fn test_advice_missing_query_is_rejected() {
        let app = create_app(AppState {
            portfolio_store: Arc::new(FixedStore(sample_portfolio())),
            llm_provider: Arc::new(CannedLlm("unused")),
        });

        let response = app
            .oneshot(advice_request(r#"{"customer_id":"CUST-42"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Missing customer_id or query");
    }

    #[tokio::test]
    async fn test_advice_empty_customer_id_is_rejected() {
        let app = create_app(AppState {
            portfolio_store: Arc::new(FixedStore(sample_portfolio())),
            llm_provider: Arc::new(CannedLlm("unused")),
        });

        let response = app
            .oneshot(advice_request(r#"{"customer_id":"","query":"hi"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Missing customer_id or query");
    }

    #[tokio::test]
    async fn test_advice_store_failure_maps_to_500() {
        let app = create_app(AppState {
            portfolio_store: Arc::new(FailingStore),
            llm_provider: Arc::new(CannedLlm("unused")),
        });

        let response = app
            .oneshot(advice_request(
                r#"{"customer_id":"CUST-42","query":"Should I rebalance?"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert!(json["error"].as_str().unwrap().contains("Database error"));
    }

    #[tokio::test]
    async fn test_advice_model_failure_maps_to_500() {
        let app = create_app(AppState {
            portfolio_store: Arc::new(FixedStore(sample_portfolio())),
            llm_provider: Arc::new(FailingLlm),
        });

        let response = app
            .oneshot(advice_request(
                r#"{"customer_id":"CUST-42","query":"Should I rebalance?"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert!(json["error"]
            .as_str()
            .unwrap()
            .contains("HTTP 503: model overloaded"));
    }
}
