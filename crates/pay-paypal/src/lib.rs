//! # pay-paypal
//!
//! PayPal payment processor plugin for the checkout gateway.
//!
//! The processor is simulated: it never leaves the process and always
//! reports success.
//!
//! ## Registration
//!
//! ```rust,ignore
//! use pay_core::ProcessorRegistry;
//!
//! let registry = ProcessorRegistry::initialize(&[pay_paypal::processor]);
//! assert!(registry.contains("paypal"));
//! ```

pub mod processor;

use pay_core::BoxedPaymentProcessor;
use std::sync::Arc;

// Re-exports
pub use processor::{PaypalProcessor, PAYPAL_PROVIDER_ID};

/// Plugin factory for the processor registry
pub fn processor() -> Option<BoxedPaymentProcessor> {
    Some(Arc::new(PaypalProcessor::new()))
}
