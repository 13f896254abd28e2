//! # onepay-stripe
//!
//! Stripe integration for the onepay-rs checkout demo.
//!
//! This crate provides:
//!
//! 1. **StripeCheckout** - hosted Checkout Session creation over the Stripe
//!    REST API for the single configured product
//! 2. **Webhook verification** - HMAC-SHA256 signature verification over the
//!    raw request body, and classification of the event envelope into
//!    `onepay_core::WebhookEvent`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use onepay_stripe::StripeCheckout;
//! use onepay_core::Product;
//!
//! // Create client from environment (fails fast on missing secrets)
//! let stripe = StripeCheckout::from_env()?;
//!
//! // Create checkout session
//! let session = stripe.create_session(
//!     &Product::default_product(),
//!     "https://example.com/success?session_id={CHECKOUT_SESSION_ID}",
//!     "https://example.com/cancel",
//! ).await?;
//!
//! // Redirect user to session.checkout_url
//! ```
//!
//! ## Webhook Handling
//!
//! ```rust,ignore
//! use onepay_stripe::{dispatch_event, verify_event};
//! use onepay_core::LogOnlyRecorder;
//!
//! // In your webhook endpoint, with the raw body bytes:
//! let event = verify_event(stripe.config(), &body, signature)?;
//! dispatch_event(&LogOnlyRecorder, &event).await;
//! ```

pub mod checkout;
pub mod config;
pub mod webhook;

// Re-exports
pub use checkout::StripeCheckout;
pub use config::StripeConfig;
pub use webhook::{dispatch_event, verify_event, REQUIRED_WEBHOOK_EVENTS};
