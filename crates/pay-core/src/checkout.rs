//! # Checkout Service
//!
//! Resolves which processor handles a checkout and invokes it.
//!
//! The routing rule is a single step: an explicit, non-empty provider id wins,
//! otherwise the configured default is used. There is no fallback chain; an
//! unknown id is reported as [`CheckoutError::ProviderNotFound`].

use crate::error::{CheckoutError, CheckoutResult};
use crate::payment::{PaymentRequest, PaymentResult};
use crate::registry::ProcessorRegistry;
use std::sync::Arc;
use tracing::{debug, instrument, Span};

/// Provider used when neither the caller nor the deployment picks one
pub const DEFAULT_PROVIDER_ID: &str = "stripe";

/// Dispatches checkout requests to registered processors
#[derive(Debug, Clone)]
pub struct CheckoutService {
    registry: Arc<ProcessorRegistry>,
    default_provider_id: String,
}

impl CheckoutService {
    /// Create a new service over a shared registry
    pub fn new(registry: Arc<ProcessorRegistry>, default_provider_id: impl Into<String>) -> Self {
        Self {
            registry,
            default_provider_id: default_provider_id.into(),
        }
    }

    /// The configured default provider id
    pub fn default_provider_id(&self) -> &str {
        &self.default_provider_id
    }

    /// The registry this service dispatches into
    pub fn registry(&self) -> &Arc<ProcessorRegistry> {
        &self.registry
    }

    /// Apply the selection rule: explicit non-empty id, else the default.
    pub fn resolve_provider_id<'a>(&'a self, selected: Option<&'a str>) -> &'a str {
        match selected {
            Some(id) if !id.is_empty() => id,
            _ => &self.default_provider_id,
        }
    }

    /// Run a checkout against the selected (or default) processor.
    ///
    /// The processor's result is returned verbatim. The error carries the id
    /// that was actually looked up, which is the default when `selected` is
    /// absent or empty.
    #[instrument(skip(self, request), fields(order_id = %request.order_id, provider = tracing::field::Empty))]
    pub async fn checkout(
        &self,
        request: &PaymentRequest,
        selected: Option<&str>,
    ) -> CheckoutResult<PaymentResult> {
        let provider_id = self.resolve_provider_id(selected);
        Span::current().record("provider", provider_id);

        let processor = self
            .registry
            .get(provider_id)
            .ok_or_else(|| CheckoutError::provider_not_found(provider_id))?;

        debug!(
            "Dispatching checkout to {}: {} {}",
            processor.name(),
            request.amount,
            request.currency
        );

        Ok(processor.process_payment(request).await)
    }
}
