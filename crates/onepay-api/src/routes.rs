//! # Routes
//!
//! Axum router configuration for the checkout demo.

use crate::handlers;
use crate::pages;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the main application router
///
/// Routes:
/// - Pages:
///   - GET  /         - Landing page with the Pay button
///   - GET  /success  - Post-payment confirmation
///   - GET  /cancel   - Cancelled-checkout page
///
/// - API:
///   - POST /api/checkout - Create a checkout session
///   - POST /api/webhook  - Stripe webhook receiver (raw body)
///
/// - Ops:
///   - GET  /health - Health check
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/checkout", post(handlers::create_checkout))
        .route("/webhook", post(handlers::stripe_webhook));

    Router::new()
        .route("/", get(pages::landing))
        .route("/success", get(pages::success))
        .route("/cancel", get(pages::cancel))
        .route("/health", get(handlers::health))
        .nest("/api", api_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
