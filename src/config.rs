use anyhow::Context;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub project_id: String,
    pub location: String,
    pub model_name: String,
    pub vertex_access_token: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .context("DATABASE_URL is not set")?,
            project_id: std::env::var("PROJECT_ID").context("PROJECT_ID is not set")?,
            location: std::env::var("LOCATION")
                .unwrap_or_else(|_| "us-central1".to_string()),
            model_name: std::env::var("MODEL_NAME")
                .unwrap_or_else(|_| "gemini-2.0-flash-lite-001".to_string()),
            vertex_access_token: std::env::var("VERTEX_ACCESS_TOKEN")
                .context("VERTEX_ACCESS_TOKEN is not set")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid port number")?,
        })
    }
}
