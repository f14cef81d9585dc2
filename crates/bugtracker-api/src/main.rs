use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bugtracker_api::{ApiState, ServerConfig};
use bugtracker_core::BugStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "bugtracker_api=debug,bugtracker_core=debug,tower_http=debug,axum::rejection=trace"
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenv::dotenv().ok();

    // Get configuration
    let config = ServerConfig::from_env()?;

    // The store lives for the whole process; handlers get a handle through the state
    let state = ApiState::new(BugStore::new(), config.clone());

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::debug!(
        "Starting server on port {} (environment: {})",
        config.port,
        config.environment
    );

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Bug tracker API listening on http://{}", addr);

    bugtracker_api::serve(listener, state).await
}
