//! # Payment Error Types
//!
//! Typed error handling for the onepay checkout demo.
//! All payment operations return `Result<T, PaymentError>`.

use thiserror::Error;

/// Core error type for all payment operations
#[derive(Debug, Error)]
pub enum PaymentError {
    /// Configuration errors (missing keys, invalid config)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Payment provider API error
    #[error("Provider error [{provider}]: {message}")]
    ProviderError { provider: String, message: String },

    /// Network/HTTP error communicating with provider
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Webhook signature verification failed
    #[error("Webhook verification failed: {0}")]
    WebhookVerificationFailed(String),

    /// Webhook payload parsing error
    #[error("Webhook parse error: {0}")]
    WebhookParseError(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl PaymentError {
    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            PaymentError::Configuration(_) => 500,
            PaymentError::InvalidRequest(_) => 400,
            PaymentError::ProviderError { .. } => 502,
            PaymentError::NetworkError(_) => 503,
            PaymentError::WebhookVerificationFailed(_) => 400,
            PaymentError::WebhookParseError(_) => 400,
            PaymentError::Serialization(_) => 500,
        }
    }

    /// Returns true if this error came from webhook signature verification
    pub fn is_verification_failure(&self) -> bool {
        matches!(self, PaymentError::WebhookVerificationFailed(_))
    }
}

/// Result type alias for payment operations
pub type PaymentResult<T> = Result<T, PaymentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            PaymentError::InvalidRequest("test".into()).status_code(),
            400
        );
        assert_eq!(
            PaymentError::WebhookVerificationFailed("bad sig".into()).status_code(),
            400
        );
        assert_eq!(
            PaymentError::ProviderError {
                provider: "stripe".into(),
                message: "boom".into()
            }
            .status_code(),
            502
        );
        assert_eq!(
            PaymentError::Configuration("missing key".into()).status_code(),
            500
        );
    }

    #[test]
    fn test_verification_failure_check() {
        assert!(PaymentError::WebhookVerificationFailed("x".into()).is_verification_failure());
        assert!(!PaymentError::WebhookParseError("x".into()).is_verification_failure());
    }
}
