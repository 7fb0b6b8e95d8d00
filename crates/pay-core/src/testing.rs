//! Test doubles shared by the unit tests of this crate.

use crate::payment::{PaymentRequest, PaymentResult};
use crate::processor::PaymentProcessor;
use async_trait::async_trait;

/// Processor that answers with a deterministic transaction id
pub struct FixedProcessor {
    id: String,
    name: String,
}

impl FixedProcessor {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
        }
    }
}

#[async_trait]
impl PaymentProcessor for FixedProcessor {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    async fn process_payment(&self, request: &PaymentRequest) -> PaymentResult {
        PaymentResult::succeeded(
            format!("tx-{}_{}", self.id, request.order_id),
            format!("{} charged {} {}", self.name, request.amount, request.currency),
        )
    }
}
