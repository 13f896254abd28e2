//! # Order Recorder
//!
//! Collaborator interface for recording paid orders. The webhook receiver
//! hands every completed checkout to an `OrderRecorder`; the default
//! implementation only logs. A real implementation would write to a database.

use crate::error::PaymentResult;
use crate::event::CheckoutCompleted;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// A paid order extracted from a completed checkout session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaidOrder {
    /// Provider session ID. Deliveries are at-least-once, so persistent
    /// recorder implementations must deduplicate on this field.
    pub session_id: String,

    /// Customer email, when collected
    pub customer_email: Option<String>,

    /// Amount paid in the smallest currency unit (cents)
    pub amount_total: i64,

    /// Provider payment status (e.g., "paid")
    pub payment_status: String,

    /// When this receiver saw the event
    pub received_at: DateTime<Utc>,
}

impl PaidOrder {
    /// Build a paid order from a completed-checkout payload
    pub fn from_completed(data: &CheckoutCompleted) -> Self {
        Self {
            session_id: data.session_id.clone(),
            customer_email: data.customer_email.clone(),
            amount_total: data.amount_total,
            payment_status: data.payment_status.clone(),
            received_at: Utc::now(),
        }
    }
}

/// Sink for paid orders.
///
/// Implementations must tolerate duplicate deliveries of the same session:
/// the provider retries until it sees a 2xx, and the receiver re-dispatches
/// every verified event it is handed.
#[async_trait]
pub trait OrderRecorder: Send + Sync {
    /// Record a paid order. Called once per delivered
    /// `checkout.session.completed` event.
    async fn record_paid_order(&self, order: &PaidOrder) -> PaymentResult<()>;
}

/// Type alias for a shared recorder (dynamic dispatch)
pub type BoxedOrderRecorder = Arc<dyn OrderRecorder>;

/// Default recorder: logs the order and drops it.
pub struct LogOnlyRecorder;

#[async_trait]
impl OrderRecorder for LogOnlyRecorder {
    async fn record_paid_order(&self, order: &PaidOrder) -> PaymentResult<()> {
        info!(
            "Recorded paid order (log only): session={}, email={:?}, amount={}, status={}",
            order.session_id, order.customer_email, order.amount_total, order.payment_status
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paid_order_from_completed() {
        let data = CheckoutCompleted {
            session_id: "cs_test_123".into(),
            customer_email: Some("buyer@example.com".into()),
            amount_total: 1000,
            payment_status: "paid".into(),
        };

        let order = PaidOrder::from_completed(&data);

        assert_eq!(order.session_id, "cs_test_123");
        assert_eq!(order.customer_email, Some("buyer@example.com".into()));
        assert_eq!(order.amount_total, 1000);
        assert_eq!(order.payment_status, "paid");
    }

    #[tokio::test]
    async fn test_log_only_recorder_accepts_orders() {
        let recorder = LogOnlyRecorder;
        let data = CheckoutCompleted {
            session_id: "cs_test".into(),
            customer_email: None,
            amount_total: 500,
            payment_status: "paid".into(),
        };

        let result = recorder.record_paid_order(&PaidOrder::from_completed(&data)).await;
        assert!(result.is_ok());
    }
}
