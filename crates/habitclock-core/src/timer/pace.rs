//! Wall-clock pace policy.
//!
//! The eating tracker's "Finish" rule: a run that ends under a configured
//! number of wall-clock minutes earns a "too fast" advisory. Layered on top
//! of the interval timer as an optional hook, not baked into it.
//!
//! Timestamps are passed in by the caller so the policy is testable without
//! sleeping.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Advisory raised by the pace policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PaceAdvisory {
    TooFast {
        wall_secs: i64,
        threshold_min: u32,
    },
}

/// Records start/stop wall-clock timestamps for one run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaceMonitor {
    threshold_min: Option<u32>,
    started_at: Option<DateTime<Utc>>,
    stopped_at: Option<DateTime<Utc>>,
}

impl PaceMonitor {
    /// `None` disables the check; `mark_stop` then never advises.
    pub fn new(threshold_min: Option<u32>) -> Self {
        Self {
            threshold_min,
            started_at: None,
            stopped_at: None,
        }
    }

    pub fn mark_start(&mut self, at: DateTime<Utc>) {
        self.started_at = Some(at);
        self.stopped_at = None;
    }

    /// Record the stop timestamp and check the pace. Without a recorded
    /// start there is nothing to measure, so no advisory fires.
    pub fn mark_stop(&mut self, at: DateTime<Utc>) -> Option<PaceAdvisory> {
        self.stopped_at = Some(at);
        let started = self.started_at?;
        let threshold_min = self.threshold_min?;
        let wall_secs = (at - started).num_seconds().max(0);
        if wall_secs < i64::from(threshold_min) * 60 {
            return Some(PaceAdvisory::TooFast {
                wall_secs,
                threshold_min,
            });
        }
        None
    }

    pub fn clear(&mut self) {
        self.started_at = None;
        self.stopped_at = None;
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }
}
