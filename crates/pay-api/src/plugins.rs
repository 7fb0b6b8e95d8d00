//! # Plugin Table
//!
//! Static list of provider factories compiled into this binary.
//! Each provider crate sits behind a Cargo feature of the same name, so a
//! build without `--features paypal` simply never discovers PayPal.

use pay_core::ProcessorFactory;

/// Factories for every provider enabled at build time
pub const PLUGINS: &[ProcessorFactory] = &[
    #[cfg(feature = "stripe")]
    pay_stripe::processor,
    #[cfg(feature = "paypal")]
    pay_paypal::processor,
];

#[cfg(test)]
mod tests {
    use super::*;
    use pay_core::ProcessorRegistry;

    #[test]
    #[cfg(all(feature = "stripe", feature = "paypal"))]
    fn test_default_plugins() {
        let registry = ProcessorRegistry::initialize(PLUGINS);
        assert_eq!(registry.ids(), vec!["paypal", "stripe"]);
    }
}
