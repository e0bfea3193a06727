//! Deterministic test environment setup
//!
//! Provides utilities for creating reproducible tests by controlling
//! normally non-deterministic values like UUIDs and timestamps.

use chatdeck::ui::{Clock, IdSource};
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Setup environment variables for deterministic test execution
pub fn setup_deterministic_env() {
    std::env::set_var("TZ", "UTC");
    std::env::set_var("NO_COLOR", "1");
    std::env::set_var("LANG", "en_US.UTF-8");
    std::env::remove_var("CHATDECK_COLOR_SCHEME");
}

/// Generates deterministic UUIDs for testing
///
/// Produces sequential UUIDs starting from a known seed,
/// ensuring notification and toast ids are reproducible.
pub struct DeterministicUuidGenerator {
    counter: AtomicU64,
}

impl DeterministicUuidGenerator {
    pub fn new() -> Self {
        Self {
            counter: AtomicU64::new(1),
        }
    }

    /// Get the current counter value without incrementing
    pub fn current(&self) -> u64 {
        self.counter.load(Ordering::SeqCst)
    }
}

impl Default for DeterministicUuidGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for DeterministicUuidGenerator {
    fn next_id(&self) -> Uuid {
        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        Uuid::from_u128(n as u128)
    }
}

/// Fixed timestamp for testing (2024-01-01 00:00:00 UTC)
pub const TEST_TIMESTAMP: &str = "2024-01-01T00:00:00Z";

/// Get a fixed chrono DateTime for testing
pub fn test_now() -> chrono::DateTime<chrono::Utc> {
    chrono::DateTime::parse_from_rfc3339(TEST_TIMESTAMP)
        .expect("Invalid test timestamp")
        .with_timezone(&chrono::Utc)
}

/// Clock pinned at [`TEST_TIMESTAMP`]
pub struct TestClock;

impl Clock for TestClock {
    fn now(&self) -> chrono::DateTime<chrono::Utc> {
        test_now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_deterministic_uuid_generator() {
        let gen = DeterministicUuidGenerator::new();
        let id1 = gen.next_id();
        let id2 = gen.next_id();

        assert_ne!(id1, id2);
        assert_eq!(gen.current(), 3); // Started at 1, incremented twice
    }

    #[test]
    fn test_timestamp() {
        let ts = TestClock.now();
        assert_eq!(ts.year(), 2024);
        assert_eq!(ts.month(), 1);
        assert_eq!(ts.day(), 1);
    }
}
