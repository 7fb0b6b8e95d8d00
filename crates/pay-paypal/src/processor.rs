//! # PayPal Processor
//!
//! Simulated PayPal order capture. Always succeeds.

use async_trait::async_trait;
use pay_core::{next_transaction_id, PaymentProcessor, PaymentRequest, PaymentResult};
use tracing::{info, instrument};

/// Provider id used for registration and routing
pub const PAYPAL_PROVIDER_ID: &str = "paypal";

/// Simulated PayPal payment processor
#[derive(Debug, Clone, Copy, Default)]
pub struct PaypalProcessor;

impl PaypalProcessor {
    /// Create a new PayPal processor
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PaymentProcessor for PaypalProcessor {
    fn id(&self) -> &str {
        PAYPAL_PROVIDER_ID
    }

    fn name(&self) -> &str {
        "Paypal (Simulated)"
    }

    #[instrument(skip(self, request), fields(order_id = %request.order_id))]
    async fn process_payment(&self, request: &PaymentRequest) -> PaymentResult {
        let transaction_id = next_transaction_id(PAYPAL_PROVIDER_ID);

        info!(
            "PayPal capture simulated: tx={}, amount={} {}",
            transaction_id, request.amount, request.currency
        );

        PaymentResult::succeeded(transaction_id, "Paypal Payment processed successfully")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let processor = PaypalProcessor::new();
        assert_eq!(processor.id(), "paypal");
        assert_eq!(processor.name(), "Paypal (Simulated)");
    }

    #[tokio::test]
    async fn test_process_payment_succeeds() {
        let request = PaymentRequest::new("o2", 500, "EUR");
        let result = PaypalProcessor.process_payment(&request).await;

        assert!(result.success);
        assert!(result.transaction_id.starts_with("tx-paypal_"));
        assert_eq!(result.message, "Paypal Payment processed successfully");
    }

    #[tokio::test]
    async fn test_factory_registers_under_paypal() {
        let processor = crate::processor().unwrap();
        assert_eq!(processor.id(), PAYPAL_PROVIDER_ID);
    }
}
