//! # onepay-core
//!
//! Core types and traits for the onepay-rs checkout demo.
//!
//! This crate provides:
//! - `WebhookEvent` and `WebhookEventKind` — verified provider events as a sum type
//! - `OrderRecorder` trait and `PaidOrder` for the persistence seam
//! - `Product` — the single product sold at checkout
//! - `CheckoutSession` — the provider's hosted-page handle
//! - `PaymentError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use onepay_core::{LogOnlyRecorder, Product, WebhookEventKind};
//!
//! let product = Product::default_product();
//!
//! // Ask the provider crate for a session, then redirect the customer
//! let session = stripe.create_session(&product, &success_url, &cancel_url).await?;
//!
//! // In the webhook receiver, verified events dispatch on kind
//! match event.kind {
//!     WebhookEventKind::CheckoutCompleted(data) => { /* record the order */ }
//!     WebhookEventKind::PaymentFailed(data) => { /* log it */ }
//!     WebhookEventKind::Unknown { event_type } => { /* informational only */ }
//! }
//! ```

pub mod checkout;
pub mod error;
pub mod event;
pub mod product;
pub mod recorder;

// Re-exports for convenience
pub use checkout::CheckoutSession;
pub use error::{PaymentError, PaymentResult};
pub use event::{CheckoutCompleted, PaymentFailed, WebhookEvent, WebhookEventKind};
pub use product::Product;
pub use recorder::{BoxedOrderRecorder, LogOnlyRecorder, OrderRecorder, PaidOrder};
