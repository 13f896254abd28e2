//! # Checkout Session Types
//!
//! The result of asking the payment provider for a hosted checkout page.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A checkout session created by the payment provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutSession {
    /// Provider's session ID (`cs_...`)
    pub session_id: String,

    /// Hosted page URL to redirect the customer to
    pub checkout_url: String,

    /// Payment intent ID, when the provider returns one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_intent_id: Option<String>,

    /// When the session expires
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl CheckoutSession {
    /// Check if session is still open for payment
    pub fn is_active(&self) -> bool {
        self.expires_at.map(|exp| exp > Utc::now()).unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_session_active_without_expiry() {
        let session = CheckoutSession {
            session_id: "cs_test".into(),
            checkout_url: "https://checkout.stripe.com/c/pay/cs_test".into(),
            payment_intent_id: None,
            expires_at: None,
        };
        assert!(session.is_active());
    }

    #[test]
    fn test_session_expired() {
        let session = CheckoutSession {
            session_id: "cs_test".into(),
            checkout_url: "https://checkout.stripe.com/c/pay/cs_test".into(),
            payment_intent_id: None,
            expires_at: Some(Utc::now() - Duration::hours(1)),
        };
        assert!(!session.is_active());
    }
}
