//! # Transaction Ids
//!
//! Simulated processors fabricate transaction ids of the form
//! `tx-<provider_id>_<n>`, where `n` is the Unix time in milliseconds.
//!
//! Two calls inside the same millisecond would collide on a raw timestamp,
//! so the generator never hands out a value lower than or equal to the last
//! one it issued: `n = max(now_ms, last + 1)`.

use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};

static GLOBAL_GENERATOR: TransactionIdGenerator = TransactionIdGenerator::new();

/// Monotonic, time-based transaction id generator
#[derive(Debug)]
pub struct TransactionIdGenerator {
    last: AtomicU64,
}

impl TransactionIdGenerator {
    /// Create a generator that has not issued any value yet
    pub const fn new() -> Self {
        Self {
            last: AtomicU64::new(0),
        }
    }

    /// Next numeric suffix: current millis, or last + 1 if the clock lags
    pub fn next_value(&self) -> u64 {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or_default();
        let mut prev = self.last.load(Ordering::Relaxed);

        loop {
            let candidate = now.max(prev + 1);
            match self.last.compare_exchange_weak(
                prev,
                candidate,
                Ordering::AcqRel,
                Ordering::Relaxed,
            ) {
                Ok(_) => return candidate,
                Err(actual) => prev = actual,
            }
        }
    }

    /// Next transaction id for the given provider
    pub fn next_id(&self, provider_id: &str) -> String {
        format!("tx-{}_{}", provider_id, self.next_value())
    }
}

impl Default for TransactionIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Issue a transaction id from the process-wide generator
pub fn next_transaction_id(provider_id: &str) -> String {
    GLOBAL_GENERATOR.next_id(provider_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    fn suffix(id: &str, provider_id: &str) -> u64 {
        id.strip_prefix(&format!("tx-{}_", provider_id))
            .expect("prefix")
            .parse()
            .expect("numeric suffix")
    }

    #[test]
    fn test_id_shape() {
        let id = TransactionIdGenerator::new().next_id("stripe");
        assert!(id.starts_with("tx-stripe_"));
        assert!(suffix(&id, "stripe") > 0);
    }

    #[test]
    fn test_values_strictly_increase() {
        let generator = TransactionIdGenerator::new();
        let mut prev = generator.next_value();

        for _ in 0..10_000 {
            let next = generator.next_value();
            assert!(next > prev);
            prev = next;
        }
    }

    #[test]
    fn test_values_track_wall_clock() {
        let before = Utc::now().timestamp_millis() as u64;
        let value = TransactionIdGenerator::new().next_value();
        assert!(value >= before);
    }

    #[test]
    fn test_unique_across_threads() {
        let generator = Arc::new(TransactionIdGenerator::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let generator = Arc::clone(&generator);
                std::thread::spawn(move || {
                    (0..1_000).map(|_| generator.next_value()).collect::<Vec<_>>()
                })
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for value in handle.join().unwrap() {
                assert!(seen.insert(value), "duplicate value {}", value);
            }
        }
        assert_eq!(seen.len(), 4_000);
    }

    #[test]
    fn test_global_generator() {
        let a = next_transaction_id("paypal");
        let b = next_transaction_id("paypal");
        assert!(suffix(&b, "paypal") > suffix(&a, "paypal"));
    }
}
