//! Habit profiles.
//!
//! The two tracked habits share one timer implementation; everything that
//! differed between their screens (cap, labels, advisory text, the meal pace
//! check) lives here as data.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HabitKind {
    Sitting,
    Eating,
}

impl HabitKind {
    pub fn label(self) -> &'static str {
        match self {
            HabitKind::Sitting => "Sitting Time",
            HabitKind::Eating => "Eating Time",
        }
    }

    pub fn all() -> [HabitKind; 2] {
        [HabitKind::Sitting, HabitKind::Eating]
    }
}

/// Per-habit timer parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitProfile {
    pub kind: HabitKind,
    /// Cap in seconds; the timer self-stops when elapsed time reaches it.
    pub max_secs: u32,
    /// Display theme accent, as a hex color for the rendering layer.
    pub accent_color: String,
    /// Minimum wall-clock minutes a run should last before a manual stop.
    /// `None` disables the pace check.
    pub pace_threshold_min: Option<u32>,
    /// Advisory shown when the cap is reached.
    pub cap_message: String,
    /// Advisory shown when a manual stop lands under the pace threshold.
    pub pace_message: String,
}

impl HabitProfile {
    /// Sitting: count up to a stand-up reminder. No pace policy.
    pub fn sitting() -> Self {
        Self {
            kind: HabitKind::Sitting,
            max_secs: 60,
            accent_color: "#1d3557".into(),
            pace_threshold_min: None,
            cap_message: "Time to stand!".into(),
            pace_message: String::new(),
        }
    }

    /// Eating: a meal should last at least 20 minutes.
    pub fn eating() -> Self {
        Self {
            kind: HabitKind::Eating,
            max_secs: 20 * 60,
            accent_color: "#ff8585".into(),
            pace_threshold_min: Some(20),
            cap_message: "Great job!".into(),
            pace_message: "You need to eat slower!".into(),
        }
    }

    pub fn for_kind(kind: HabitKind) -> Self {
        match kind {
            HabitKind::Sitting => Self::sitting(),
            HabitKind::Eating => Self::eating(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eating_profile_defaults() {
        let p = HabitProfile::eating();
        assert_eq!(p.max_secs, 1200);
        assert_eq!(p.pace_threshold_min, Some(20));
    }

    #[test]
    fn sitting_has_no_pace_policy() {
        let p = HabitProfile::sitting();
        assert_eq!(p.pace_threshold_min, None);
        assert_eq!(p.cap_message, "Time to stand!");
    }

    #[test]
    fn profiles_carry_their_theme_accent() {
        assert_eq!(HabitProfile::sitting().accent_color, "#1d3557");
        assert_eq!(HabitProfile::eating().accent_color, "#ff8585");
    }

    #[test]
    fn accent_color_survives_serialization() {
        let json = serde_json::to_value(HabitProfile::eating()).unwrap();
        assert_eq!(json["accent_color"], "#ff8585");
    }

    #[test]
    fn kind_serializes_lowercase() {
        let json = serde_json::to_string(&HabitKind::Eating).unwrap();
        assert_eq!(json, "\"eating\"");
    }
}
