mod app;
mod config;
mod db;
mod errors;
mod logging;
mod models;
mod routes;
mod services;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;

use crate::config::Config;
use crate::db::portfolio_queries::PgPortfolioStore;
use crate::services::llm_service::GeminiProvider;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging FIRST
    logging::init_logging();

    let config = Config::from_env()?;

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await?;

    let llm_provider = GeminiProvider::new(
        &config.project_id,
        &config.location,
        &config.model_name,
        config.vertex_access_token.clone(),
    )?;
    tracing::info!(
        "Using generative model {} in {}",
        config.model_name,
        config.location
    );

    let state = AppState {
        portfolio_store: Arc::new(PgPortfolioStore::new(pool)),
        llm_provider: Arc::new(llm_provider),
    };
    let app = app::create_app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Advisor copilot listening at http://{}/", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
