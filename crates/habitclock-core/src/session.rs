//! One tracked run of a habit.
//!
//! A `Session` wires the pieces together: the interval timer, the pace
//! monitor, and the habit profile that parameterizes both. This is the
//! single abstraction behind every tracking surface; nothing else owns
//! timer state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clock::format_duration;
use crate::error::ValidationError;
use crate::events::Event;
use crate::habit::{HabitKind, HabitProfile};
use crate::timer::{IntervalTimer, PaceAdvisory, PaceMonitor};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    profile: HabitProfile,
    timer: IntervalTimer,
    pace: PaceMonitor,
}

impl Session {
    /// # Errors
    ///
    /// Rejects a profile with a zero cap.
    pub fn new(profile: HabitProfile) -> Result<Self, ValidationError> {
        let timer = IntervalTimer::new(profile.max_secs)?;
        let pace = PaceMonitor::new(profile.pace_threshold_min);
        Ok(Self {
            profile,
            timer,
            pace,
        })
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn profile(&self) -> &HabitProfile {
        &self.profile
    }

    pub fn timer(&self) -> &IntervalTimer {
        &self.timer
    }

    pub fn kind(&self) -> HabitKind {
        self.profile.kind
    }

    /// `"HH : MM : SS"` of the current elapsed time.
    pub fn display(&self) -> String {
        format_duration(self.timer.elapsed_secs())
    }

    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            habit: self.profile.kind,
            running: self.timer.is_running(),
            elapsed_secs: self.timer.elapsed_secs(),
            max_secs: self.timer.max_secs(),
            progress: self.timer.progress_ratio(),
            display: self.display(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Start tracking at `at`. No-op when already running or at the cap.
    pub fn start(&mut self, at: DateTime<Utc>) -> Option<Event> {
        let event = self.timer.start()?;
        self.pace.mark_start(at);
        Some(event)
    }

    /// Advance one second. The caller's loop provides the cadence.
    pub fn tick(&mut self) -> Option<Event> {
        self.timer.tick()
    }

    /// Manual stop ("Finish"). Returns the stop event plus the pace
    /// advisory, if the run landed under the profile's threshold.
    pub fn finish(&mut self, at: DateTime<Utc>) -> Option<(Event, Option<PaceAdvisory>)> {
        let event = self.timer.stop()?;
        let advisory = self.pace.mark_stop(at);
        Some((event, advisory))
    }

    /// Back to zero, pace marks cleared. Safe at any time.
    pub fn reset(&mut self) -> Option<Event> {
        self.pace.clear();
        self.timer.reset()
    }

    /// Apply a picker-confirmed or explicit new cap.
    pub fn set_max_secs(&mut self, new_max: u32) -> Result<(), ValidationError> {
        self.timer.set_max_secs(new_max)?;
        self.profile.max_secs = new_max;
        Ok(())
    }
}
