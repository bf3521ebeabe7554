use anyhow::Result;
use std::env;

/// Process-wide configuration, built once at startup and carried in
/// `AppState`. Handlers never read the environment directly.
#[derive(Debug, Clone)]
pub struct Config {
    pub environment: String,
    pub port: u16,
    pub database_url: String,
    /// Base URL of the Clerk REST API. Overridable so tests can point
    /// the client at a local mock server.
    pub clerk_api_url: String,
    pub clerk_api_key: String,
    pub clerk_webhook_secret: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        Ok(Config {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()?,
            database_url: env::var("DATABASE_URL")
                .map_err(|_| anyhow::anyhow!("DATABASE_URL environment variable is required"))?,
            clerk_api_url: env::var("CLERK_API_URL")
                .unwrap_or_else(|_| "https://api.clerk.dev".to_string()),
            clerk_api_key: env::var("CLERK_API_KEY")
                .map_err(|_| anyhow::anyhow!("CLERK_API_KEY environment variable is required"))?,
            clerk_webhook_secret: env::var("CLERK_WEBHOOK_SECRET").map_err(|_| {
                anyhow::anyhow!("CLERK_WEBHOOK_SECRET environment variable is required")
            })?,
        })
    }
}
