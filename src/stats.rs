//! Operation Statistics Module
//!
//! Tracks per-status operation counts for workload runs. The harness
//! driving the adapter owns aggregation; the adapter itself never touches
//! these counters.

use serde::Serialize;

use crate::adapter::Status;

// == Op Stats ==
/// Counts operation outcomes by status.
#[derive(Debug, Clone, Default, Serialize)]
pub struct OpStats {
    /// Operations that completed successfully
    pub ok: u64,
    /// Operations that targeted a missing record or field
    pub not_found: u64,
    /// Operations that failed
    pub error: u64,
    /// Operations the adapter does not support
    pub not_implemented: u64,
}

impl OpStats {
    /// Creates a new OpStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one operation outcome.
    pub fn record(&mut self, status: Status) {
        match status {
            Status::Ok => self.ok += 1,
            Status::NotFound => self.not_found += 1,
            Status::Error => self.error += 1,
            Status::NotImplemented => self.not_implemented += 1,
        }
    }

    /// Total number of operations recorded.
    pub fn total(&self) -> u64 {
        self.ok + self.not_found + self.error + self.not_implemented
    }

    /// Fraction of recorded operations that failed, or 0.0 if none were
    /// recorded.
    pub fn error_rate(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self.error as f64 / total as f64
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = OpStats::new();
        assert_eq!(stats.ok, 0);
        assert_eq!(stats.not_found, 0);
        assert_eq!(stats.error, 0);
        assert_eq!(stats.not_implemented, 0);
        assert_eq!(stats.total(), 0);
    }

    #[test]
    fn test_record_each_status() {
        let mut stats = OpStats::new();
        stats.record(Status::Ok);
        stats.record(Status::Ok);
        stats.record(Status::NotFound);
        stats.record(Status::Error);
        stats.record(Status::NotImplemented);

        assert_eq!(stats.ok, 2);
        assert_eq!(stats.not_found, 1);
        assert_eq!(stats.error, 1);
        assert_eq!(stats.not_implemented, 1);
        assert_eq!(stats.total(), 5);
    }

    #[test]
    fn test_error_rate_no_operations() {
        let stats = OpStats::new();
        assert_eq!(stats.error_rate(), 0.0);
    }

    #[test]
    fn test_error_rate_mixed() {
        let mut stats = OpStats::new();
        stats.record(Status::Ok);
        stats.record(Status::Error);
        assert_eq!(stats.error_rate(), 0.5);
    }
}
