//! Timing measurements collected by the performance harness

use crate::types::MatchStrategy;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Both matchers' timings for one list size
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SizeMeasurement {
    /// Length of each generated list
    pub size: usize,

    /// Elapsed time of the nested-loop matcher
    pub nested_duration: Duration,

    /// Elapsed time of the set-based matcher
    pub set_duration: Duration,

    /// Matches found by the nested-loop matcher
    pub nested_matches: usize,

    /// Matches found by the set-based matcher
    pub set_matches: usize,

    /// When the measurement finished
    pub measured_at: DateTime<Utc>,
}

impl SizeMeasurement {
    /// Elapsed time for one strategy
    pub fn duration(&self, strategy: MatchStrategy) -> Duration {
        match strategy {
            MatchStrategy::NestedLoops => self.nested_duration,
            MatchStrategy::SetLookup => self.set_duration,
        }
    }

    /// Nested/set timing ratio, `None` when the set timing rounds to zero
    pub fn speedup(&self) -> Option<f64> {
        let set_secs = self.set_duration.as_secs_f64();
        if set_secs > 0.0 {
            Some(self.nested_duration.as_secs_f64() / set_secs)
        } else {
            None
        }
    }
}

/// Outcome of one harness run, ordered like the requested sizes
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PerformanceReport {
    pub measurements: Vec<SizeMeasurement>,

    /// Seed used for identifier generation, if the run was seeded
    pub seed: Option<u64>,

    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl PerformanceReport {
    /// Create an empty report
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            measurements: Vec::new(),
            seed,
            started_at: Some(Utc::now()),
            completed_at: None,
        }
    }

    pub fn add_measurement(&mut self, measurement: SizeMeasurement) {
        self.measurements.push(measurement);
    }

    /// Mark the run as finished
    pub fn complete(&mut self) {
        self.completed_at = Some(Utc::now());
    }

    pub fn len(&self) -> usize {
        self.measurements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }

    /// Tested sizes
    pub fn sizes(&self) -> Vec<usize> {
        self.measurements.iter().map(|m| m.size).collect()
    }

    /// Duration series of the nested-loop matcher
    pub fn nested_times(&self) -> Vec<Duration> {
        self.durations(MatchStrategy::NestedLoops)
    }

    /// Duration series of the set-based matcher
    pub fn set_times(&self) -> Vec<Duration> {
        self.durations(MatchStrategy::SetLookup)
    }

    /// Duration series of one strategy, index-aligned with [`Self::sizes`]
    pub fn durations(&self, strategy: MatchStrategy) -> Vec<Duration> {
        self.measurements.iter().map(|m| m.duration(strategy)).collect()
    }

    /// Per-size nested/set ratios
    pub fn speedups(&self) -> Vec<Option<f64>> {
        self.measurements.iter().map(SizeMeasurement::speedup).collect()
    }

    /// Wall-clock time of the whole run
    pub fn total_elapsed(&self) -> Option<chrono::Duration> {
        match (self.started_at, self.completed_at) {
            (Some(start), Some(end)) => Some(end - start),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measurement(size: usize, nested_ms: u64, set_ms: u64) -> SizeMeasurement {
        SizeMeasurement {
            size,
            nested_duration: Duration::from_millis(nested_ms),
            set_duration: Duration::from_millis(set_ms),
            nested_matches: 0,
            set_matches: 0,
            measured_at: Utc::now(),
        }
    }

    #[test]
    fn test_series_are_index_aligned() {
        let mut report = PerformanceReport::new(Some(1));
        report.add_measurement(measurement(100, 4, 1));
        report.add_measurement(measurement(500, 90, 3));

        assert_eq!(report.sizes(), vec![100, 500]);
        assert_eq!(report.nested_times(), vec![Duration::from_millis(4), Duration::from_millis(90)]);
        assert_eq!(report.set_times(), vec![Duration::from_millis(1), Duration::from_millis(3)]);
        assert_eq!(report.len(), 2);
    }

    #[test]
    fn test_speedups() {
        let mut report = PerformanceReport::new(None);
        report.add_measurement(measurement(100, 10_000, 2_000));
        report.add_measurement(measurement(200, 10, 0));

        let speedups = report.speedups();
        assert_eq!(speedups[0], Some(5.0));
        assert_eq!(speedups[1], None);
    }

    #[test]
    fn test_completion_sets_elapsed() {
        let mut report = PerformanceReport::new(None);
        assert!(report.total_elapsed().is_none());

        report.complete();
        let elapsed = report.total_elapsed().unwrap();
        assert!(elapsed >= chrono::Duration::zero());
    }

    #[test]
    fn test_report_serializes() {
        let mut report = PerformanceReport::new(Some(42));
        report.add_measurement(measurement(10, 1, 1));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["seed"], 42);
        assert_eq!(json["measurements"][0]["size"], 10);
    }
}
