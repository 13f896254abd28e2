//! # Request Handlers
//!
//! Axum request handlers for the checkout API: session creation and the
//! webhook receiver.

use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use onepay_stripe::{dispatch_event, verify_event};
use serde::Serialize;
use tracing::{error, info, instrument};

// =============================================================================
// Request/Response Types
// =============================================================================

/// Create checkout response
#[derive(Debug, Serialize)]
pub struct CreateCheckoutResponse {
    /// Hosted checkout URL (redirect the browser here)
    pub url: String,
}

/// Webhook acknowledgement
#[derive(Debug, Serialize)]
pub struct WebhookAck {
    pub received: bool,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "onepay",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Create a checkout session for the configured product.
///
/// No request body: the demo sells exactly one product at a fixed price.
#[instrument(skip(state))]
pub async fn create_checkout(
    State(state): State<AppState>,
) -> Result<Json<CreateCheckoutResponse>, (StatusCode, Json<ErrorResponse>)> {
    let session = state
        .stripe
        .create_session(&state.product, &state.success_url(), &state.cancel_url())
        .await
        .map_err(|e| {
            error!("Failed to create checkout: {}", e);
            let code = StatusCode::from_u16(e.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (code, Json(ErrorResponse::new(e.to_string())))
        })?;

    info!("Created checkout session: {}", session.session_id);

    Ok(Json(CreateCheckoutResponse {
        url: session.checkout_url,
    }))
}

/// Handle a Stripe webhook delivery.
///
/// Verification runs over the raw body bytes. A missing or invalid signature
/// is a 400 with `{"error":"Invalid signature"}` and nothing is dispatched.
/// Once an event verifies, the response is always 200 `{"received":true}` —
/// the provider treats any non-2xx as "retry delivery", so a verified event
/// must be acknowledged even when its branch does nothing of consequence.
#[instrument(skip(state, headers, body))]
pub async fn stripe_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<WebhookAck>, (StatusCode, Json<ErrorResponse>)> {
    // An absent header fails verification exactly like a bad signature.
    let signature = headers
        .get("stripe-signature")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    let event = verify_event(state.stripe.config(), &body, signature).map_err(|e| {
        error!("Webhook verification failed: {}", e);
        let message = if e.is_verification_failure() {
            "Invalid signature"
        } else {
            "Invalid payload"
        };
        (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message)))
    })?;

    info!(
        "Received webhook: type={}, id={}",
        event.kind.type_tag(),
        event.id
    );

    dispatch_event(state.recorder.as_ref(), &event).await;

    Ok(Json(WebhookAck { received: true }))
}
