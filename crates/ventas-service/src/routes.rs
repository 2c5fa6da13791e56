//! Router configuration.
//!
//! This module sets up the Axum router with all routes and middleware.

use std::sync::Arc;
use std::time::Duration;

use axum::routing::get;
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{customers, health, sales};
use crate::state::AppState;

/// Create the service router with all routes and middleware.
///
/// # Routes
///
/// - `GET /` - Sale registration form
/// - `POST /` - Register a sale, redirect to the listing
/// - `GET /listado` - All recorded sales
/// - `GET /cliente/:cliente_id` - Customer aggregate and classification
/// - `GET /health` - Health check
pub fn create_router(state: AppState) -> Router {
    let max_body_bytes = state.config.max_body_bytes;
    let request_timeout_seconds = state.config.request_timeout_seconds;

    let state = Arc::new(state);

    Router::new()
        .route(
            "/",
            get(sales::registration_form).post(sales::register_sale),
        )
        .route("/listado", get(sales::list_sales))
        .route("/cliente/:cliente_id", get(customers::customer_detail))
        .route("/health", get(health::health))
        .layer(TraceLayer::new_for_http())
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TimeoutLayer::new(Duration::from_secs(
            request_timeout_seconds,
        )))
        .with_state(state)
}
