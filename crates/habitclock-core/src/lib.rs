//! # Habitclock Core Library
//!
//! Core logic for habitclock, a tracker for two personal habits: sitting
//! time and eating time. All timing behavior lives here; the CLI binary is
//! a thin layer over this crate.
//!
//! ## Architecture
//!
//! - **Interval Timer**: a per-second state machine that requires the caller
//!   to invoke `tick()` on a one-second cadence; it clamps elapsed time at a
//!   configurable cap and self-stops when the cap is reached
//! - **Pace Policy**: wall-clock check that flags runs stopped under a
//!   minimum duration
//! - **Habit Profiles**: the per-habit parameters (cap, advisory text,
//!   pace threshold) that the duplicated tracking screens collapsed into
//! - **Config**: TOML-based settings under `~/.config/habitclock/`
//!
//! ## Key Components
//!
//! - [`IntervalTimer`]: count-up timer with clamped progress
//! - [`Session`]: one tracked run (timer + pace monitor + profile)
//! - [`Config`]: application configuration management

pub mod clock;
pub mod config;
pub mod error;
pub mod events;
pub mod habit;
pub mod session;
pub mod timer;

pub use clock::{format_duration, PickedDuration};
pub use config::Config;
pub use error::{ConfigError, CoreError, ValidationError};
pub use events::Event;
pub use habit::{HabitKind, HabitProfile};
pub use session::Session;
pub use timer::{IntervalTimer, PaceAdvisory, PaceMonitor};
