//! # Checkout Error Types
//!
//! Typed error handling for the checkout gateway.
//! Dispatch operations return `Result<T, CheckoutError>`.
//!
//! Declined or failed charges are not errors: processors report them through
//! `PaymentResult::success`, which keeps `checkout` total over registered ids.

use thiserror::Error;

/// Core error type for checkout dispatch
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    /// No processor is registered under the resolved provider id
    #[error("No payment processor found for id: {provider_id}")]
    ProviderNotFound { provider_id: String },

    /// Missing or malformed request parameters
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Configuration errors (bad bind address, unreadable config file)
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl CheckoutError {
    /// Shorthand for a `ProviderNotFound` error
    pub fn provider_not_found(provider_id: impl Into<String>) -> Self {
        CheckoutError::ProviderNotFound {
            provider_id: provider_id.into(),
        }
    }

    /// Returns true if the caller can fix this error by changing the request
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }

    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            CheckoutError::ProviderNotFound { .. } => 400,
            CheckoutError::InvalidRequest(_) => 400,
            CheckoutError::Configuration(_) => 500,
        }
    }
}

/// Result type alias for checkout operations
pub type CheckoutResult<T> = Result<T, CheckoutError>;
