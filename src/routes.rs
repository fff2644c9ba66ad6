//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `/*`        - Resource and index routes
//! - `/api/v1/*` - The same routes under the versioned prefix
//!
//! Anything else answers `404 {"error": "Not found"}`.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::not_found_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// Trailing slashes are trimmed before routing, so `/amenities/` and
/// `/amenities` reach the same handler.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .merge(api::routes::resource_routes())
        .nest("/api/v1", api::routes::resource_routes())
        .fallback(not_found_handler)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
