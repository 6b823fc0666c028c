use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::habit::HabitKind;

/// Every observable timer transition produces an Event.
/// The rendering layer subscribes to these instead of polling timer fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerStarted {
        max_secs: u32,
        at: DateTime<Utc>,
    },
    /// One second elapsed; carries the new clamped progress ratio.
    ProgressChanged {
        elapsed_secs: u32,
        progress: f64,
        at: DateTime<Utc>,
    },
    /// The cap was reached. Emitted exactly once per run; the timer
    /// self-stops with `elapsed_secs` pinned at the cap.
    CapReached {
        elapsed_secs: u32,
        at: DateTime<Utc>,
    },
    /// The user stopped tracking before the cap.
    TimerStopped {
        elapsed_secs: u32,
        at: DateTime<Utc>,
    },
    TimerReset {
        at: DateTime<Utc>,
    },
    StateSnapshot {
        habit: HabitKind,
        running: bool,
        elapsed_secs: u32,
        max_secs: u32,
        progress: f64,
        display: String,
        at: DateTime<Utc>,
    },
}
