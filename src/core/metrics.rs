//! Logger metrics for observability
//!
//! The level-specific convenience methods discard write errors, so these
//! counters are the only place a caller can see that lines went missing.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters describing what happened to each emission attempt.
///
/// # Example
///
/// ```
/// use logf::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_written();
/// metrics.record_failed();
///
/// assert_eq!(metrics.written_count(), 1);
/// assert_eq!(metrics.failed_count(), 1);
/// assert_eq!(metrics.failure_rate(), 50.0);
/// ```
#[derive(Debug, Default)]
pub struct LoggerMetrics {
    /// Lines handed to the line writer that it accepted
    written: AtomicU64,

    /// Lines suppressed by the minimum level
    filtered: AtomicU64,

    /// Lines the line writer failed to write
    failed: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            written: AtomicU64::new(0),
            filtered: AtomicU64::new(0),
            failed: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn written_count(&self) -> u64 {
        self.written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn filtered_count(&self) -> u64 {
        self.filtered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn failed_count(&self) -> u64 {
        self.failed.load(Ordering::Relaxed)
    }

    /// Returns the previous count.
    #[inline]
    pub fn record_written(&self) -> u64 {
        self.written.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_filtered(&self) -> u64 {
        self.filtered.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_failed(&self) -> u64 {
        self.failed.fetch_add(1, Ordering::Relaxed)
    }

    /// Percentage (0.0 - 100.0) of forwarded lines that failed to write.
    ///
    /// Filtered lines are not counted. Returns 0.0 if nothing was forwarded.
    pub fn failure_rate(&self) -> f64 {
        let written = self.written_count();
        let failed = self.failed_count();
        let total = written + failed;
        if total == 0 {
            return 0.0;
        }
        (failed as f64 / total as f64) * 100.0
    }

    /// Reset all counters to zero
    pub fn reset(&self) {
        self.written.store(0, Ordering::Relaxed);
        self.filtered.store(0, Ordering::Relaxed);
        self.failed.store(0, Ordering::Relaxed);
    }
}
