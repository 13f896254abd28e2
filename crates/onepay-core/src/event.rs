//! # Webhook Event Types
//!
//! Provider-independent representation of the webhook events this demo
//! reacts to. The provider's loose `type` tag / variant payload shape is
//! normalized into a sum type so dispatch can match exhaustively, with an
//! explicit `Unknown` arm for every event kind we do not handle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A verified webhook event, classified by kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookEvent {
    /// Event ID from the provider (e.g., `evt_...`)
    pub id: String,

    /// When the provider created the event
    pub created: DateTime<Utc>,

    /// Classified payload
    pub kind: WebhookEventKind,
}

/// The event kinds this receiver distinguishes.
///
/// Unknown event types are not errors. The provider sends every event the
/// endpoint is subscribed to; anything we do not recognize is carried through
/// as `Unknown` and logged, never rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WebhookEventKind {
    /// `checkout.session.completed`
    CheckoutCompleted(CheckoutCompleted),
    /// `payment_intent.payment_failed`
    PaymentFailed(PaymentFailed),
    /// Any other event type (passthrough, informational only)
    Unknown { event_type: String },
}

impl WebhookEventKind {
    /// The provider-side type tag for this kind
    pub fn type_tag(&self) -> &str {
        match self {
            WebhookEventKind::CheckoutCompleted(_) => "checkout.session.completed",
            WebhookEventKind::PaymentFailed(_) => "payment_intent.payment_failed",
            WebhookEventKind::Unknown { event_type } => event_type,
        }
    }
}

/// Payload of a completed checkout session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutCompleted {
    /// Provider session ID (`cs_...`)
    pub session_id: String,

    /// Customer email, when the provider collected one
    pub customer_email: Option<String>,

    /// Total amount in the smallest currency unit (cents)
    pub amount_total: i64,

    /// Provider payment status (e.g., "paid", "unpaid")
    pub payment_status: String,
}

impl CheckoutCompleted {
    /// Check if payment was successful
    pub fn is_paid(&self) -> bool {
        self.payment_status == "paid"
    }
}

/// Payload of a failed payment intent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentFailed {
    /// Provider payment intent ID (`pi_...`)
    pub payment_intent_id: String,
}
