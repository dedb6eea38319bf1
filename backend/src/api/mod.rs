//! API module
//!
//! Contains HTTP request handlers for the ride endpoints and the router that
//! wires them to shared state.

pub mod health;
pub mod middleware;
pub mod pagination;
pub mod rides;

use crate::config::PaginationConfig;
use crate::storage::RideStore;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// State shared by all handlers
///
/// Holds the injected storage handle; there is no other cross-request state.
#[derive(Clone)]
pub struct AppState {
    /// Storage handle for the `Rides` table
    pub store: Arc<dyn RideStore>,
    /// Pagination rules for `GET /rides`
    pub pagination: PaginationConfig,
}

impl AppState {
    /// Create state around a ride store
    pub fn new(store: Arc<dyn RideStore>, pagination: PaginationConfig) -> Self {
        Self { store, pagination }
    }
}

/// Handler state as extracted by axum
pub type SharedState = Arc<AppState>;

/// Build the application router with all routes and middleware
pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/rides", get(rides::list_rides).post(rides::create_ride))
        .route("/rides/:id", get(rides::get_ride))
        // Middleware (order matters - request_id should be first)
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
