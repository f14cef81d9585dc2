use axum::{
    middleware,
    routing::{get, patch},
    Router,
};
use std::sync::Arc;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

use crate::{config::ServerConfig, error, handlers, state::ApiState};

pub fn create_router(state: ApiState) -> Router {
    let config = state.config.clone();

    let router = Router::new()
        // Health check
        .route("/health", get(handlers::health::health_check))

        // Bug endpoints
        .route(
            "/api/bugs",
            get(handlers::bugs::list_bugs).post(handlers::bugs::create_bug),
        )
        .route(
            "/api/bugs/:id",
            patch(handlers::bugs::update_bug).delete(handlers::bugs::delete_bug),
        )

        // Add state
        .with_state(state);

    with_error_handling(router, config)
}

/// Wrap `router` in the panic catcher and the terminal error middleware,
/// followed by request tracing and CORS.
pub fn with_error_handling(router: Router, config: Arc<ServerConfig>) -> Router {
    router
        .layer(CatchPanicLayer::custom(error::handle_panic))
        .layer(middleware::from_fn_with_state(config, error::handle_errors))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
