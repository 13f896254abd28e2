//! # onepay-rs
//!
//! Minimal single-product checkout demo backed by Stripe.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables
//! export STRIPE_SECRET_KEY=sk_test_...
//! export STRIPE_WEBHOOK_SECRET=whsec_...
//!
//! # Run the server
//! onepay
//! ```

use onepay_api::{routes, state::AppState};
use onepay_stripe::REQUIRED_WEBHOOK_EVENTS;
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    // Print banner
    print_banner();

    // Initialize application state (fails fast on missing Stripe secrets)
    let state = AppState::new()?;

    let addr = state.config.socket_addr()?;
    let is_prod = state.config.is_production();

    info!("Environment: {}", state.config.environment);
    info!(
        "Product: {} ({})",
        state.product.name,
        state.product.display_price()
    );

    // Create router
    let app = routes::create_router(state);

    // Start server
    info!("🚀 onepay starting on http://{}", addr);

    if !is_prod {
        info!("🛒 Landing page: http://{}/", addr);
        info!("💳 Checkout: POST http://{}/api/checkout", addr);
        info!("🔔 Webhook: POST http://{}/api/webhook", addr);
        info!(
            "   Subscribe the Stripe endpoint to: {}",
            REQUIRED_WEBHOOK_EVENTS.join(", ")
        );
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn print_banner() {
    println!(
        r#"
  💳 onepay-rs 💳
  ━━━━━━━━━━━━━━━
  Single-product checkout demo
  Version: {}

"#,
        env!("CARGO_PKG_VERSION")
    );
}
