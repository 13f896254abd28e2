//! # onepay-api
//!
//! HTTP layer for the onepay-rs checkout demo.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - Checkout and webhook endpoints
//! - The landing/success/cancel pages
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/` | Landing page |
//! | GET | `/success` | Payment confirmation |
//! | GET | `/cancel` | Cancelled checkout |
//! | GET | `/health` | Health check |
//! | POST | `/api/checkout` | Create checkout session |
//! | POST | `/api/webhook` | Stripe webhook receiver |

pub mod handlers;
pub mod pages;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
