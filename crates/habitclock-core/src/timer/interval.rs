//! Interval timer implementation.
//!
//! The timer is a per-second state machine. It does not use internal
//! threads - the caller is responsible for calling `tick()` once per second
//! while `is_running()` is true.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running -> (Stopped | CapReached) -> Idle (via reset)
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut timer = IntervalTimer::new(1200)?;
//! timer.start();
//! // Once per second:
//! timer.tick(); // Returns Some(Event::CapReached) when the cap is hit
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::events::Event;

/// Count-up timer with a cap.
///
/// `elapsed_secs` advances by one per tick and never passes `max_secs`; the
/// tick that reaches the cap stops the timer and emits `CapReached` exactly
/// once. The caller's tick loop is the only periodic driver, so start/stop
/// here double as the "register/cancel the recurring callback" guard: a
/// second `start()` while running is a no-op and cannot double the tick rate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntervalTimer {
    /// Cap in seconds. Always positive.
    max_secs: u32,
    elapsed_secs: u32,
    running: bool,
}

impl IntervalTimer {
    /// Create a timer counting up to `max_secs`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::ZeroMaxDuration` when `max_secs` is zero,
    /// which would make the progress ratio undefined.
    pub fn new(max_secs: u32) -> Result<Self, ValidationError> {
        if max_secs == 0 {
            return Err(ValidationError::ZeroMaxDuration);
        }
        Ok(Self {
            max_secs,
            elapsed_secs: 0,
            running: false,
        })
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    pub fn max_secs(&self) -> u32 {
        self.max_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn at_cap(&self) -> bool {
        self.elapsed_secs >= self.max_secs
    }

    /// 0.0 .. 1.0 progress toward the cap.
    ///
    /// Clamped: even while a lowered cap waits for the next tick to catch
    /// it, the ratio never exceeds 1.0.
    pub fn progress_ratio(&self) -> f64 {
        f64::from(self.elapsed_secs.min(self.max_secs)) / f64::from(self.max_secs)
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Begin ticking. No-op (returns `None`) when already running or when
    /// the cap has been reached; a reset is required after a capped run.
    pub fn start(&mut self) -> Option<Event> {
        if self.running || self.at_cap() {
            return None;
        }
        self.running = true;
        Some(Event::TimerStarted {
            max_secs: self.max_secs,
            at: Utc::now(),
        })
    }

    /// Stop ticking without clearing elapsed time.
    pub fn stop(&mut self) -> Option<Event> {
        if !self.running {
            return None;
        }
        self.running = false;
        Some(Event::TimerStopped {
            elapsed_secs: self.elapsed_secs,
            at: Utc::now(),
        })
    }

    /// Return to zero. Always succeeds, running or not.
    pub fn reset(&mut self) -> Option<Event> {
        self.elapsed_secs = 0;
        self.running = false;
        Some(Event::TimerReset { at: Utc::now() })
    }

    /// Replace the cap.
    ///
    /// Elapsed time is not clamped here. Lowering the cap below the current
    /// elapsed value leaves the timer running until the next `tick()`, which
    /// observes `elapsed >= max`, pins elapsed to the new cap, and performs
    /// the normal cap-reached stop. Keeping every transition inside `tick()`
    /// means there is exactly one place that can emit `CapReached`.
    pub fn set_max_secs(&mut self, new_max: u32) -> Result<(), ValidationError> {
        if new_max == 0 {
            return Err(ValidationError::ZeroMaxDuration);
        }
        self.max_secs = new_max;
        Ok(())
    }

    /// Advance one second. Call once per second while running.
    ///
    /// Returns `None` when not running, `Some(CapReached)` on the tick that
    /// reaches (or catches a lowered) cap, and `Some(ProgressChanged)`
    /// otherwise.
    pub fn tick(&mut self) -> Option<Event> {
        if !self.running {
            return None;
        }
        if self.elapsed_secs >= self.max_secs {
            // The cap was lowered below elapsed since the last tick.
            return Some(self.reach_cap());
        }
        self.elapsed_secs += 1;
        if self.elapsed_secs == self.max_secs {
            return Some(self.reach_cap());
        }
        Some(Event::ProgressChanged {
            elapsed_secs: self.elapsed_secs,
            progress: self.progress_ratio(),
            at: Utc::now(),
        })
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn reach_cap(&mut self) -> Event {
        self.elapsed_secs = self.max_secs;
        self.running = false;
        Event::CapReached {
            elapsed_secs: self.elapsed_secs,
            at: Utc::now(),
        }
    }
}
