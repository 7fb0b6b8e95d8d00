//! # Processor Registry
//!
//! Id-indexed set of payment processors, built once at startup.
//!
//! Registration is insert-if-absent: the first processor registered under an
//! id wins and later duplicates are dropped. Mutation needs `&mut self`, so a
//! registry shared behind `Arc` is read-only for the rest of the process.

use crate::processor::{BoxedPaymentProcessor, ProcessorFactory, ProviderInfo};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, info, warn};

/// Registry of all discovered payment processors
#[derive(Clone, Default)]
pub struct ProcessorRegistry {
    processors: HashMap<String, BoxedPaymentProcessor>,
}

impl ProcessorRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            processors: HashMap::new(),
        }
    }

    /// Discover processors from a plugin table.
    ///
    /// Every factory is invoked once. Factories yielding `None` are skipped,
    /// and ids already taken by an earlier entry are ignored.
    pub fn initialize(factories: &[ProcessorFactory]) -> Self {
        let mut registry = Self::new();

        for factory in factories {
            match factory() {
                Some(processor) => {
                    registry.register(processor);
                }
                None => debug!("Plugin factory yielded no processor, skipping"),
            }
        }

        info!(
            "Processor registry initialized with {} provider(s)",
            registry.len()
        );
        registry
    }

    /// Build a registry from already constructed processors
    pub fn from_processors<I>(processors: I) -> Self
    where
        I: IntoIterator<Item = BoxedPaymentProcessor>,
    {
        let mut registry = Self::new();
        for processor in processors {
            registry.register(processor);
        }
        registry
    }

    /// Register a processor under its id.
    ///
    /// Returns `false` (and keeps the existing entry) if the id is taken.
    pub fn register(&mut self, processor: BoxedPaymentProcessor) -> bool {
        match self.processors.entry(processor.id().to_string()) {
            Entry::Occupied(existing) => {
                warn!(
                    "Ignoring duplicate payment processor: {} {} (already registered: {})",
                    processor.id(),
                    processor.name(),
                    existing.get().name()
                );
                false
            }
            Entry::Vacant(slot) => {
                info!(
                    "Discovered payment processor: {} {}",
                    processor.id(),
                    processor.name()
                );
                slot.insert(processor);
                true
            }
        }
    }

    /// Register with builder pattern
    pub fn with_processor(mut self, processor: BoxedPaymentProcessor) -> Self {
        self.register(processor);
        self
    }

    /// Get a processor by id
    pub fn get(&self, id: &str) -> Option<BoxedPaymentProcessor> {
        self.processors.get(id).cloned()
    }

    /// Snapshot of all registered processors, in no particular order
    pub fn all(&self) -> Vec<BoxedPaymentProcessor> {
        self.processors.values().cloned().collect()
    }

    /// Id/name pairs of all processors, sorted by id
    pub fn describe_all(&self) -> Vec<ProviderInfo> {
        let mut infos: Vec<_> = self.processors.values().map(|p| p.describe()).collect();
        infos.sort();
        infos
    }

    /// All registered ids, sorted
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<_> = self.processors.keys().map(|s| s.as_str()).collect();
        ids.sort_unstable();
        ids
    }

    /// Check if a processor is registered
    pub fn contains(&self, id: &str) -> bool {
        self.processors.contains_key(id)
    }

    /// Number of registered processors
    pub fn len(&self) -> usize {
        self.processors.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }
}

impl fmt::Debug for ProcessorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcessorRegistry")
            .field("processors", &self.ids())
            .finish()
    }
}
