//! # Payment Types
//!
//! Value carriers for a checkout request and its outcome.
//! Both serialize with camelCase field names to match the HTTP wire format.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A checkout request handed to a payment processor.
///
/// Only presence of the fields is enforced; sign and unit of `amount` are
/// the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    /// Merchant order identifier
    pub order_id: String,

    /// Amount to charge, integer or decimal
    pub amount: Decimal,

    /// ISO 4217 style currency code (e.g. "USD")
    pub currency: String,
}

impl PaymentRequest {
    /// Create a new payment request
    pub fn new(
        order_id: impl Into<String>,
        amount: impl Into<Decimal>,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            order_id: order_id.into(),
            amount: amount.into(),
            currency: currency.into(),
        }
    }
}

/// Normalized outcome of a payment processor call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResult {
    /// Whether the charge went through
    pub success: bool,

    /// Provider-generated, opaque transaction id
    pub transaction_id: String,

    /// Human-readable outcome description
    pub message: String,
}

impl PaymentResult {
    /// A successful charge
    pub fn succeeded(transaction_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: true,
            transaction_id: transaction_id.into(),
            message: message.into(),
        }
    }

    /// A declined or failed charge
    pub fn failed(transaction_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            transaction_id: transaction_id.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_accepts_integer_and_decimal_amounts() {
        let int: PaymentRequest =
            serde_json::from_str(r#"{"orderId":"o1","amount":1000,"currency":"USD"}"#).unwrap();
        assert_eq!(int.amount, Decimal::from(1000));

        let dec: PaymentRequest =
            serde_json::from_str(r#"{"orderId":"o2","amount":"12.50","currency":"EUR"}"#)
                .unwrap();
        assert_eq!(dec.amount, Decimal::new(1250, 2));
        assert_eq!(dec.order_id, "o2");
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let result = PaymentResult::succeeded("tx-stripe_1", "ok");
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["transactionId"], "tx-stripe_1");
        assert_eq!(json["message"], "ok");
    }

    #[test]
    fn test_failed_result() {
        let result = PaymentResult::failed("tx-paypal_2", "declined");
        assert!(!result.success);
    }
}
