//! # Stripe Checkout Sessions
//!
//! Implementation of Stripe Checkout Sessions API.
//! The demo sells one fixed product, so every session is a single
//! payment-mode line item built from the configured `Product`.

use crate::config::StripeConfig;
use chrono::{DateTime, Duration, Utc};
use onepay_core::{CheckoutSession, PaymentError, PaymentResult, Product};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error, info, instrument};
use uuid::Uuid;

/// Stripe Checkout Session client
///
/// Uses Stripe's hosted checkout page for secure payments.
/// This is the recommended approach for PCI compliance.
pub struct StripeCheckout {
    config: StripeConfig,
    client: Client,
}

impl StripeCheckout {
    /// Create a new Stripe checkout client
    pub fn new(config: StripeConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Create from environment variables
    pub fn from_env() -> PaymentResult<Self> {
        let config = StripeConfig::from_env()?;
        Ok(Self::new(config))
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &StripeConfig {
        &self.config
    }

    /// Create a hosted checkout session for the product.
    ///
    /// Returns the session handle including the URL to redirect the
    /// customer to. Each call sends a fresh `Idempotency-Key`, so a retried
    /// request from the browser creates a new session rather than colliding.
    #[instrument(skip(self, product), fields(product = %product.name))]
    pub async fn create_session(
        &self,
        product: &Product,
        success_url: &str,
        cancel_url: &str,
    ) -> PaymentResult<CheckoutSession> {
        debug!("Creating Stripe checkout session for {}", product.name);

        let mut form_params: Vec<(String, String)> = vec![
            ("mode".to_string(), "payment".to_string()),
            ("success_url".to_string(), success_url.to_string()),
            ("cancel_url".to_string(), cancel_url.to_string()),
            (
                "line_items[0][price_data][currency]".to_string(),
                product.currency.clone(),
            ),
            (
                "line_items[0][price_data][unit_amount]".to_string(),
                product.unit_amount.to_string(),
            ),
            (
                "line_items[0][price_data][product_data][name]".to_string(),
                product.name.clone(),
            ),
            ("line_items[0][quantity]".to_string(), "1".to_string()),
        ];

        if !product.description.is_empty() {
            form_params.push((
                "line_items[0][price_data][product_data][description]".to_string(),
                product.description.clone(),
            ));
        }

        let idempotency_key = Uuid::new_v4().to_string();
        let url = format!("{}/v1/checkout/sessions", self.config.api_base_url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", self.config.auth_header())
            .header("Stripe-Version", &self.config.api_version)
            .header("Idempotency-Key", &idempotency_key)
            .form(&form_params)
            .send()
            .await
            .map_err(|e| PaymentError::NetworkError(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| PaymentError::NetworkError(e.to_string()))?;

        if !status.is_success() {
            error!("Stripe API error: status={}, body={}", status, body);

            // Parse Stripe error
            if let Ok(error_response) = serde_json::from_str::<StripeErrorResponse>(&body) {
                return Err(PaymentError::ProviderError {
                    provider: "stripe".to_string(),
                    message: error_response.error.message,
                });
            }

            return Err(PaymentError::ProviderError {
                provider: "stripe".to_string(),
                message: format!("HTTP {}: {}", status, body),
            });
        }

        let session_response: StripeCheckoutSessionResponse = serde_json::from_str(&body)
            .map_err(|e| {
                PaymentError::Serialization(format!("Failed to parse Stripe response: {}", e))
            })?;

        info!(
            "Created Stripe checkout session: id={}, url={}",
            session_response.id, session_response.url
        );

        let expires_at = session_response
            .expires_at
            .map(|ts| DateTime::from_timestamp(ts, 0).unwrap_or(Utc::now() + Duration::hours(24)));

        Ok(CheckoutSession {
            session_id: session_response.id,
            checkout_url: session_response.url,
            payment_intent_id: session_response.payment_intent,
            expires_at,
        })
    }
}

// =============================================================================
// Stripe API Types
// =============================================================================

#[derive(Debug, Deserialize)]
struct StripeCheckoutSessionResponse {
    id: String,
    url: String,
    #[serde(default)]
    payment_intent: Option<String>,
    #[serde(default)]
    expires_at: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct StripeErrorResponse {
    error: StripeError,
}

#[derive(Debug, Deserialize)]
struct StripeError {
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: &str) -> StripeCheckout {
        let config =
            StripeConfig::new("sk_test_abc123", "whsec_secret").with_api_base_url(base_url);
        StripeCheckout::new(config)
    }

    #[tokio::test]
    async fn test_create_session_success() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/checkout/sessions"))
            .and(header("Authorization", "Bearer sk_test_abc123"))
            .and(body_string_contains("mode=payment"))
            .and(body_string_contains("unit_amount%5D=1000"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "cs_test_abc",
                "url": "https://checkout.stripe.com/c/pay/cs_test_abc",
                "payment_intent": "pi_test_123",
                "expires_at": 4102444800i64
            })))
            .mount(&server)
            .await;

        let stripe = test_client(&server.uri());
        let product = Product::default_product();

        let session = stripe
            .create_session(
                &product,
                "http://localhost:8080/success?session_id={CHECKOUT_SESSION_ID}",
                "http://localhost:8080/cancel",
            )
            .await
            .unwrap();

        assert_eq!(session.session_id, "cs_test_abc");
        assert_eq!(
            session.checkout_url,
            "https://checkout.stripe.com/c/pay/cs_test_abc"
        );
        assert_eq!(session.payment_intent_id, Some("pi_test_123".into()));
        assert!(session.is_active());
    }

    #[tokio::test]
    async fn test_create_session_provider_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/checkout/sessions"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": {
                    "message": "Invalid API Key provided",
                    "type": "invalid_request_error"
                }
            })))
            .mount(&server)
            .await;

        let stripe = test_client(&server.uri());
        let product = Product::default_product();

        let err = stripe
            .create_session(&product, "http://x/success", "http://x/cancel")
            .await
            .unwrap_err();

        match err {
            PaymentError::ProviderError { provider, message } => {
                assert_eq!(provider, "stripe");
                assert_eq!(message, "Invalid API Key provided");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_session_malformed_response() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/checkout/sessions"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let stripe = test_client(&server.uri());
        let product = Product::default_product();

        let err = stripe
            .create_session(&product, "http://x/success", "http://x/cancel")
            .await
            .unwrap_err();

        assert!(matches!(err, PaymentError::Serialization(_)));
    }
}
