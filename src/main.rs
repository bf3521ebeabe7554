use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use profile_sync::database::{self, PgUserStore};
use profile_sync::services::ClerkClient;
use profile_sync::{build_router, AppState, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file first
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "profile_sync=debug,tower_http=debug".into()),
        )
        .init();

    // Load configuration; missing secrets abort startup here
    let config = Config::from_env()?;
    info!("Loaded configuration for environment: {}", config.environment);

    // Setup database connection
    let db_pool = database::setup_database(&config.database_url).await?;
    info!("PostgreSQL connection established");

    let identity = ClerkClient::new(&config.clerk_api_url, &config.clerk_api_key);
    let users = PgUserStore::new(db_pool);

    let app_state = AppState {
        config: config.clone(),
        identity: Arc::new(identity),
        users: Arc::new(users),
    };

    let app = build_router(app_state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Starting profile sync server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Setup graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for SIGTERM or SIGINT signal for graceful shutdown
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, shutting down gracefully");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, shutting down gracefully");
        },
    }
}
