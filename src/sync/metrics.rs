//! Sync Metrics
//!
//! Counters over push and pull outcomes, kept by the sync service for
//! inspection. Not an export layer.

/// Counters over synchronization operations.
#[derive(Debug, Clone, Default)]
pub struct SyncMetrics {
    pub pushes_started: u64,
    pub pushes_succeeded: u64,
    pub pushes_failed: u64,
    pub pulls_succeeded: u64,
    pub pulls_failed: u64,
}

impl SyncMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_push_start(&mut self) {
        self.pushes_started += 1;
    }

    pub fn record_push_success(&mut self) {
        self.pushes_succeeded += 1;
    }

    pub fn record_push_failure(&mut self) {
        self.pushes_failed += 1;
    }

    pub fn record_pull_success(&mut self) {
        self.pulls_succeeded += 1;
    }

    pub fn record_pull_failure(&mut self) {
        self.pulls_failed += 1;
    }

    /// Fraction of started pushes that completed successfully.
    pub fn push_success_rate(&self) -> f64 {
        if self.pushes_started == 0 {
            0.0
        } else {
            self.pushes_succeeded as f64 / self.pushes_started as f64
        }
    }
}
