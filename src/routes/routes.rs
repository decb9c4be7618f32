//! Defines routes for the landing page and the metadata API.
//!
//! ## Structure
//! - `GET  /` — landing page
//! - `GET  /api/health` — liveness
//! - `GET  /api/ready` — readiness (SQLite check)
//! - `GET  /api/file-metadata` — list records
//! - `POST /api/file-metadata` — create a record
//! - `GET  /api/file-metadata/{id}` — fetch one record

use crate::{
    handlers::{
        health_handlers::{healthz, readyz},
        metadata_handlers::{create_file_metadata, get_file_metadata, list_file_metadata},
        site_handlers::landing_page,
    },
    services::metadata_service::MetadataService,
};
use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

/// Build the router for all site and API routes.
///
/// The router carries shared state (`MetadataService`) to all handlers.
pub fn routes() -> Router<MetadataService> {
    Router::new()
        .route("/", get(landing_page))
        .route("/api/health", get(healthz))
        .route("/api/ready", get(readyz))
        .route(
            "/api/file-metadata",
            get(list_file_metadata).post(create_file_metadata),
        )
        .route("/api/file-metadata/{id}", get(get_file_metadata))
}

/// The complete application: routes, request tracing and state.
pub fn app(service: MetadataService) -> Router {
    routes()
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}
