//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `/shortlinks`, `/go/{short}`, `/check/{short}` - see [`crate::api::routes`]
//! - `/api/*` - Static API documentation, when the directory exists
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use std::path::Path;

use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;

/// API routes with state applied and request tracing, without static files.
pub fn api_router(state: AppState) -> Router {
    api::routes::shortlink_routes()
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router.
///
/// `swagger_dir` is served under `/api` only if it exists at startup.
pub fn app_router(state: AppState, swagger_dir: &str) -> NormalizePath<Router> {
    let mut router = api_router(state);

    if Path::new(swagger_dir).is_dir() {
        ::tracing::info!(dir = swagger_dir, "Serving API docs at /api");
        router = router.nest_service("/api", ServeDir::new(swagger_dir));
    } else {
        ::tracing::debug!(dir = swagger_dir, "API docs directory not found, /api disabled");
    }

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
