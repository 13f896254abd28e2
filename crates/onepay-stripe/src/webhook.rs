//! # Stripe Webhook Handling
//!
//! Signature verification and event classification for Stripe webhooks.
//!
//! Verification is computed over the exact raw body bytes the provider sent.
//! Re-serializing a parsed body would change the bytes and break the HMAC, so
//! callers must hand this module the untouched request body.

use crate::config::StripeConfig;
use chrono::{DateTime, Utc};
use onepay_core::{
    CheckoutCompleted, OrderRecorder, PaidOrder, PaymentError, PaymentFailed, PaymentResult,
    WebhookEvent, WebhookEventKind,
};
use serde::Deserialize;
use tracing::{debug, error, info, warn};

/// Signature timestamp tolerance in seconds (5 minutes)
const TIMESTAMP_TOLERANCE_SECS: i64 = 300;

/// Events the Stripe endpoint must be subscribed to
pub const REQUIRED_WEBHOOK_EVENTS: &[&str] =
    &["checkout.session.completed", "payment_intent.payment_failed"];

/// Verify a webhook signature and classify the event.
///
/// # Arguments
/// * `config` - Stripe configuration holding the signing secret
/// * `payload` - Raw webhook body bytes, exactly as received
/// * `signature` - Value of the `Stripe-Signature` header
///
/// # Returns
/// The classified `WebhookEvent` if the signature is valid and the payload
/// parses. Rejects signatures whose timestamp falls outside the 5-minute
/// tolerance window.
pub fn verify_event(
    config: &StripeConfig,
    payload: &[u8],
    signature: &str,
) -> PaymentResult<WebhookEvent> {
    // Parse signature header
    let sig_parts = parse_signature_header(signature)?;

    // Verify timestamp is within tolerance
    let timestamp = sig_parts.timestamp;
    let now = Utc::now().timestamp();

    if (now - timestamp).abs() > TIMESTAMP_TOLERANCE_SECS {
        return Err(PaymentError::WebhookVerificationFailed(
            "Timestamp outside tolerance".to_string(),
        ));
    }

    // Compute expected signature
    let signed_payload = format!("{}.{}", timestamp, String::from_utf8_lossy(payload));
    let expected_sig = compute_hmac_sha256(&config.webhook_secret, &signed_payload);

    // Compare signatures (constant-time)
    let valid = sig_parts
        .signatures
        .iter()
        .any(|sig| constant_time_compare(sig, &expected_sig));

    if !valid {
        return Err(PaymentError::WebhookVerificationFailed(
            "Signature mismatch".to_string(),
        ));
    }

    // Parse and classify the event
    let envelope: StripeWebhookEvent = serde_json::from_slice(payload).map_err(|e| {
        PaymentError::WebhookParseError(format!("Failed to parse webhook: {}", e))
    })?;

    debug!("Verified Stripe webhook: type={}", envelope.event_type);

    let kind = classify_event(&envelope);

    Ok(WebhookEvent {
        id: envelope.id,
        created: DateTime::from_timestamp(envelope.created, 0).unwrap_or_else(Utc::now),
        kind,
    })
}

/// Dispatch a verified event to its side effects.
///
/// Completed checkouts are handed to the injected `OrderRecorder`; failed
/// payments and unknown event types only log. Recorder errors are logged and
/// swallowed: once an event is verified, the receiver owns it, and a non-2xx
/// response would only make the provider redeliver a payload we already saw.
pub async fn dispatch_event(recorder: &dyn OrderRecorder, event: &WebhookEvent) {
    match &event.kind {
        WebhookEventKind::CheckoutCompleted(data) => {
            info!(
                "Payment successful: session={}, email={:?}, amount={}, status={}",
                data.session_id, data.customer_email, data.amount_total, data.payment_status
            );

            let order = PaidOrder::from_completed(data);
            if let Err(e) = recorder.record_paid_order(&order).await {
                error!("Failed to record paid order {}: {}", order.session_id, e);
            }
        }
        WebhookEventKind::PaymentFailed(data) => {
            warn!("Payment failed: {}", data.payment_intent_id);
        }
        WebhookEventKind::Unknown { event_type } => {
            debug!("Unhandled webhook event type: {}", event_type);
        }
    }
}

/// Map the provider's type tag and variant payload onto the event sum type.
///
/// A verified event always classifies: fields the object does not carry
/// default, they never reject. Rejecting here would make the provider
/// redeliver an event we already authenticated.
fn classify_event(envelope: &StripeWebhookEvent) -> WebhookEventKind {
    let object = &envelope.data.object;

    match envelope.event_type.as_str() {
        "checkout.session.completed" => {
            let session_id = object
                .get("id")
                .and_then(|v| v.as_str())
                .unwrap_or("unknown")
                .to_string();

            let customer_email = object
                .get("customer_details")
                .and_then(|cd| cd.get("email"))
                .and_then(|v| v.as_str())
                .map(String::from);

            let amount_total = object
                .get("amount_total")
                .and_then(|v| v.as_i64())
                .unwrap_or(0);

            let payment_status = object
                .get("payment_status")
                .and_then(|v| v.as_str())
                .unwrap_or("unknown")
                .to_string();

            WebhookEventKind::CheckoutCompleted(CheckoutCompleted {
                session_id,
                customer_email,
                amount_total,
                payment_status,
            })
        }
        "payment_intent.payment_failed" => {
            let payment_intent_id = object
                .get("id")
                .and_then(|v| v.as_str())
                .unwrap_or("unknown")
                .to_string();

            WebhookEventKind::PaymentFailed(PaymentFailed { payment_intent_id })
        }
        other => WebhookEventKind::Unknown {
            event_type: other.to_string(),
        },
    }
}

// =============================================================================
// Stripe API Types
// =============================================================================

#[derive(Debug, Deserialize)]
struct StripeWebhookEvent {
    id: String,
    #[serde(rename = "type")]
    event_type: String,
    created: i64,
    data: StripeEventData,
}

#[derive(Debug, Deserialize)]
struct StripeEventData {
    object: serde_json::Map<String, serde_json::Value>,
}

// =============================================================================
// Webhook Signature Verification
// =============================================================================

struct SignatureHeader {
    timestamp: i64,
    signatures: Vec<String>,
}

fn parse_signature_header(header: &str) -> PaymentResult<SignatureHeader> {
    let mut timestamp = None;
    let mut signatures = Vec::new();

    for part in header.split(',') {
        let kv: Vec<&str> = part.split('=').collect();
        if kv.len() != 2 {
            continue;
        }
        match kv[0] {
            "t" => {
                timestamp = kv[1].parse().ok();
            }
            "v1" => {
                signatures.push(kv[1].to_string());
            }
            _ => {}
        }
    }

    let timestamp = timestamp.ok_or_else(|| {
        PaymentError::WebhookVerificationFailed("Missing timestamp in signature".to_string())
    })?;

    if signatures.is_empty() {
        return Err(PaymentError::WebhookVerificationFailed(
            "No v1 signature found".to_string(),
        ));
    }

    Ok(SignatureHeader {
        timestamp,
        signatures,
    })
}

fn compute_hmac_sha256(secret: &str, message: &str) -> String {
    use hmac::{Hmac, Mac};
    use sha2::Sha256;

    type HmacSha256 = Hmac<Sha256>;

    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(message.as_bytes());
    let result = mac.finalize();
    hex::encode(result.into_bytes())
}

fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.bytes()
        .zip(b.bytes())
        .fold(0, |acc, (x, y)| acc | (x ^ y))
        == 0
}
