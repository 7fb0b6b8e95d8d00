//! # Stripe Processor
//!
//! Simulated Stripe charge. Every payment succeeds with a fabricated
//! transaction id; a real integration would call the Stripe API here and map
//! declines onto `PaymentResult::failed`.

use async_trait::async_trait;
use pay_core::{next_transaction_id, PaymentProcessor, PaymentRequest, PaymentResult};
use tracing::{info, instrument};

/// Provider id used for registration and routing
pub const STRIPE_PROVIDER_ID: &str = "stripe";

/// Simulated Stripe payment processor
#[derive(Debug, Clone, Copy, Default)]
pub struct StripeProcessor;

impl StripeProcessor {
    /// Create a new Stripe processor
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PaymentProcessor for StripeProcessor {
    fn id(&self) -> &str {
        STRIPE_PROVIDER_ID
    }

    fn name(&self) -> &str {
        "Stripe (simulated)"
    }

    #[instrument(skip(self, request), fields(order_id = %request.order_id))]
    async fn process_payment(&self, request: &PaymentRequest) -> PaymentResult {
        let transaction_id = next_transaction_id(STRIPE_PROVIDER_ID);

        info!(
            "Stripe charge simulated: tx={}, amount={} {}",
            transaction_id, request.amount, request.currency
        );

        PaymentResult::succeeded(transaction_id, "Stripe Payment processed successfully")
    }
}
