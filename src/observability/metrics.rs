//! Validation counters
//!
//! - Counters only
//! - Monotonic increase
//! - Reset only on process start

use std::sync::atomic::{AtomicU64, Ordering};

/// Process-wide validation counters.
///
/// Relaxed ordering: counters are observational and never gate behavior.
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    /// Completed validation passes
    passes: AtomicU64,
    /// Passes that produced at least one violation
    invalid_passes: AtomicU64,
    /// Violations recorded across all passes
    violations: AtomicU64,
    /// JSON inputs that failed to parse
    parse_failures: AtomicU64,
}

static GLOBAL: MetricsRegistry = MetricsRegistry {
    passes: AtomicU64::new(0),
    invalid_passes: AtomicU64::new(0),
    violations: AtomicU64::new(0),
    parse_failures: AtomicU64::new(0),
};

impl MetricsRegistry {
    /// Create a registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry
    pub fn global() -> &'static MetricsRegistry {
        &GLOBAL
    }

    /// Record one finished pass and the number of violations it found
    pub fn record_pass(&self, violations: usize) {
        self.passes.fetch_add(1, Ordering::Relaxed);
        if violations > 0 {
            self.invalid_passes.fetch_add(1, Ordering::Relaxed);
            self.violations
                .fetch_add(violations as u64, Ordering::Relaxed);
        }
    }

    /// Record a JSON parse failure
    pub fn record_parse_failure(&self) {
        self.parse_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Point-in-time copy of all counters
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            passes: self.passes.load(Ordering::Relaxed),
            invalid_passes: self.invalid_passes.load(Ordering::Relaxed),
            violations: self.violations.load(Ordering::Relaxed),
            parse_failures: self.parse_failures.load(Ordering::Relaxed),
        }
    }
}

/// Immutable copy of the counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MetricsSnapshot {
    pub passes: u64,
    pub invalid_passes: u64,
    pub violations: u64,
    pub parse_failures: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_registry_is_zero() {
        assert_eq!(MetricsRegistry::new().snapshot(), MetricsSnapshot::default());
    }

    #[test]
    fn test_record_pass_counts_invalid_only_when_violations() {
        let metrics = MetricsRegistry::new();
        metrics.record_pass(0);
        metrics.record_pass(3);
        metrics.record_pass(1);

        let snap = metrics.snapshot();
        assert_eq!(snap.passes, 3);
        assert_eq!(snap.invalid_passes, 2);
        assert_eq!(snap.violations, 4);
    }

    #[test]
    fn test_parse_failures() {
        let metrics = MetricsRegistry::new();
        metrics.record_parse_failure();
        assert_eq!(metrics.snapshot().parse_failures, 1);
    }
}
