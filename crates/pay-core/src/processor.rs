//! # Payment Processor Trait
//!
//! Capability contract implemented by every provider plugin.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  PaymentProcessor (trait)                   │
//! │  ├── id()                                                   │
//! │  ├── name()                                                 │
//! │  └── process_payment()                                      │
//! └─────────────────────────────────────────────────────────────┘
//!                            ▲
//!                 ┌──────────┴──────────┐
//!                 │                     │
//!         ┌───────┴───────┐     ┌───────┴───────┐
//!         │StripeProcessor│     │PaypalProcessor│
//!         └───────────────┘     └───────────────┘
//! ```
//!
//! Plugins are discovered through a static table of [`ProcessorFactory`]
//! functions, see [`ProcessorRegistry::initialize`](crate::ProcessorRegistry::initialize).

use crate::payment::{PaymentRequest, PaymentResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Core trait for payment provider implementations.
///
/// Gateway-level failures (declines, timeouts) must be reported through
/// `PaymentResult::success = false`, never by panicking.
#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    /// Stable short identifier, unique across registered processors (e.g. "stripe")
    fn id(&self) -> &str;

    /// Display name (e.g. "Stripe (simulated)")
    fn name(&self) -> &str;

    /// Charge the request and return a normalized result.
    async fn process_payment(&self, request: &PaymentRequest) -> PaymentResult;

    /// Id/name pair for listings.
    fn describe(&self) -> ProviderInfo {
        ProviderInfo {
            id: self.id().to_string(),
            name: self.name().to_string(),
        }
    }
}

/// Shared handle to a payment processor (dynamic dispatch)
pub type BoxedPaymentProcessor = Arc<dyn PaymentProcessor>;

/// Entry of the plugin table. Returns `None` when the plugin cannot be
/// loaded in the current process; such entries are skipped.
pub type ProcessorFactory = fn() -> Option<BoxedPaymentProcessor>;

/// Public description of a registered provider
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProviderInfo {
    pub id: String,
    pub name: String,
}
