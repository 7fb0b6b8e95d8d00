//! # Application State
//!
//! Shared state for the Axum application.
//! Contains the processor registry, checkout service and configuration.

use crate::config::AppConfig;
use crate::plugins::PLUGINS;
use pay_core::{CheckoutService, ProcessorFactory, ProcessorRegistry};
use std::sync::Arc;
use tracing::warn;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Registry built once at startup, read-only afterwards
    pub registry: Arc<ProcessorRegistry>,
    /// Checkout dispatch
    pub checkout: CheckoutService,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Load configuration and discover the compiled-in providers
    pub fn new() -> anyhow::Result<Self> {
        let config = AppConfig::load()?;
        Ok(Self::with_plugins(config, PLUGINS))
    }

    /// Build state from an explicit plugin table
    pub fn with_plugins(config: AppConfig, plugins: &[ProcessorFactory]) -> Self {
        let registry = Arc::new(ProcessorRegistry::initialize(plugins));
        Self::with_registry(config, registry)
    }

    /// Build state around an existing registry
    pub fn with_registry(config: AppConfig, registry: Arc<ProcessorRegistry>) -> Self {
        // Not fatal: checkouts naming another provider still work
        if !registry.contains(&config.default_provider) {
            warn!(
                "Default payment provider '{}' is not registered (available: {:?})",
                config.default_provider,
                registry.ids()
            );
        }

        let checkout = CheckoutService::new(Arc::clone(&registry), config.default_provider.clone());

        Self {
            registry,
            checkout,
            config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_shares_registry() {
        let state = AppState::with_registry(AppConfig::default(), Arc::new(ProcessorRegistry::new()));

        assert!(Arc::ptr_eq(&state.registry, state.checkout.registry()));
        assert_eq!(state.checkout.default_provider_id(), "stripe");
    }

    #[test]
    fn test_default_provider_from_config() {
        let config = AppConfig::default().with_default_provider("paypal");
        let state = AppState::with_plugins(config, &[]);

        assert_eq!(state.checkout.default_provider_id(), "paypal");
        assert!(state.registry.is_empty());
    }
}
