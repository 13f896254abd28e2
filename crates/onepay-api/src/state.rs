//! # Application State
//!
//! Shared state for the Axum application. Everything a handler needs is
//! carried here explicitly: configuration, the product, the Stripe client,
//! and the order recorder. No module-level globals.

use onepay_core::{BoxedOrderRecorder, LogOnlyRecorder, Product};
use onepay_stripe::StripeCheckout;
use std::sync::Arc;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Base URL for success/cancel redirects
    pub base_url: String,
    /// Environment (development, staging, production)
    pub environment: String,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            base_url: std::env::var("BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<std::net::SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Application config
    pub config: AppConfig,
    /// The product sold at checkout
    pub product: Product,
    /// Stripe client
    pub stripe: Arc<StripeCheckout>,
    /// Sink for paid orders
    pub recorder: BoxedOrderRecorder,
}

impl AppState {
    /// Create the AppState from the environment.
    ///
    /// Fails fast when the Stripe secrets are missing or malformed; the
    /// process should never come up half-configured.
    pub fn new() -> anyhow::Result<Self> {
        let config = AppConfig::from_env();
        let product = load_product();

        let stripe = StripeCheckout::from_env()
            .map_err(|e| anyhow::anyhow!("Failed to initialize Stripe: {}", e))?;

        Ok(Self::with_parts(
            config,
            product,
            stripe,
            Arc::new(LogOnlyRecorder),
        ))
    }

    /// Create the AppState from explicit parts (dependency injection)
    pub fn with_parts(
        config: AppConfig,
        product: Product,
        stripe: StripeCheckout,
        recorder: BoxedOrderRecorder,
    ) -> Self {
        Self {
            config,
            product,
            stripe: Arc::new(stripe),
            recorder,
        }
    }

    /// Success URL with the provider's session-id placeholder
    pub fn success_url(&self) -> String {
        format!(
            "{}/success?session_id={{CHECKOUT_SESSION_ID}}",
            self.config.base_url
        )
    }

    /// Cancel URL
    pub fn cancel_url(&self) -> String {
        format!("{}/cancel", self.config.base_url)
    }
}

/// Load the product from config, falling back to the built-in test product
fn load_product() -> Product {
    let config_paths = [
        "config/product.toml",
        "../config/product.toml",
        "../../config/product.toml",
    ];

    for path in config_paths {
        if let Ok(content) = std::fs::read_to_string(path) {
            match Product::from_toml(&content) {
                Ok(product) => {
                    tracing::info!("Loaded product '{}' from {}", product.name, path);
                    return product;
                }
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {}", path, e);
                }
            }
        }
    }

    tracing::warn!("No product config found, using built-in test product");
    Product::default_product()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> AppConfig {
        AppConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            base_url: "http://localhost:8080".to_string(),
            environment: "test".to_string(),
        }
    }

    #[test]
    fn test_socket_addr() {
        let mut config = test_config();
        config.host = "0.0.0.0".to_string();
        config.port = 3000;

        let addr = config.socket_addr().unwrap();
        assert_eq!(addr.to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn test_redirect_urls() {
        let state = AppState::with_parts(
            test_config(),
            Product::default_product(),
            onepay_stripe::StripeCheckout::new(onepay_stripe::StripeConfig::new(
                "sk_test_abc",
                "whsec_test",
            )),
            Arc::new(LogOnlyRecorder),
        );

        assert_eq!(
            state.success_url(),
            "http://localhost:8080/success?session_id={CHECKOUT_SESSION_ID}"
        );
        assert_eq!(state.cancel_url(), "http://localhost:8080/cancel");
    }

    #[test]
    fn test_is_production() {
        let mut config = test_config();
        assert!(!config.is_production());
        config.environment = "production".to_string();
        assert!(config.is_production());
    }
}
