//! # pay-core
//!
//! Core types and traits for the checkout gateway.
//!
//! This crate provides:
//! - `PaymentRequest` and `PaymentResult` value types
//! - `PaymentProcessor` trait for implementing payment providers
//! - `ProcessorRegistry` for discovering providers from a plugin table
//! - `CheckoutService` for selecting a provider and dispatching to it
//! - `CheckoutError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use pay_core::{CheckoutService, PaymentRequest, ProcessorRegistry};
//! use std::sync::Arc;
//!
//! // Discover providers once at startup
//! let registry = Arc::new(ProcessorRegistry::initialize(&[pay_stripe::processor]));
//!
//! // Dispatch a checkout (None selects the default provider)
//! let service = CheckoutService::new(registry, "stripe");
//! let result = service.checkout(&PaymentRequest::new("o1", 1000, "USD"), None).await?;
//! ```

pub mod checkout;
pub mod error;
pub mod payment;
pub mod processor;
pub mod registry;
pub mod transaction;

#[cfg(test)]
mod testing;

// Re-exports for convenience
pub use checkout::{CheckoutService, DEFAULT_PROVIDER_ID};
pub use error::{CheckoutError, CheckoutResult};
pub use payment::{PaymentRequest, PaymentResult};
pub use processor::{BoxedPaymentProcessor, PaymentProcessor, ProcessorFactory, ProviderInfo};
pub use registry::ProcessorRegistry;
pub use transaction::{next_transaction_id, TransactionIdGenerator};
