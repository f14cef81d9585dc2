pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod routes;
pub mod state;

use tokio::net::TcpListener;

pub use config::ServerConfig;
pub use error::{ApiError, Result};
pub use state::ApiState;

/// Serve the API on an already-bound listener until the process stops.
pub async fn serve(listener: TcpListener, state: ApiState) -> anyhow::Result<()> {
    let app = routes::create_router(state);
    axum::serve(listener, app).await?;
    Ok(())
}
