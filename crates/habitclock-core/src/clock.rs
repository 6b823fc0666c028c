//! Duration display and duration-picker conversion.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Format a second count as `"HH : MM : SS"`, zero-padded per field.
///
/// The spacing around the colons is part of the display contract.
pub fn format_duration(total_secs: u32) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    format!("{hours:02} : {minutes:02} : {seconds:02}")
}

/// An hours + minutes pair confirmed in a duration picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickedDuration {
    pub hours: u32,
    pub minutes: u32,
}

impl PickedDuration {
    /// Total seconds represented by the pick.
    ///
    /// Uses saturating arithmetic to prevent overflow with large values.
    pub fn total_secs(self) -> u32 {
        self.hours
            .saturating_mul(3600)
            .saturating_add(self.minutes.saturating_mul(60))
    }

    /// Convert into a timer cap. A 0h 0m pick is rejected rather than
    /// producing a zero cap (which would make the progress ratio undefined).
    pub fn into_max_secs(self) -> Result<u32, ValidationError> {
        let secs = self.total_secs();
        if secs == 0 {
            return Err(ValidationError::EmptyPickedDuration);
        }
        Ok(secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_zero() {
        assert_eq!(format_duration(0), "00 : 00 : 00");
    }

    #[test]
    fn format_under_a_minute() {
        assert_eq!(format_duration(59), "00 : 00 : 59");
    }

    #[test]
    fn format_carries_each_field() {
        assert_eq!(format_duration(3661), "01 : 01 : 01");
    }

    #[test]
    fn format_large_hours() {
        assert_eq!(format_duration(36_000), "10 : 00 : 00");
    }

    #[test]
    fn picked_duration_totals() {
        let pick = PickedDuration { hours: 1, minutes: 30 };
        assert_eq!(pick.total_secs(), 5400);
        assert_eq!(pick.into_max_secs().unwrap(), 5400);
    }

    #[test]
    fn picked_duration_minutes_only() {
        let pick = PickedDuration { hours: 0, minutes: 20 };
        assert_eq!(pick.into_max_secs().unwrap(), 1200);
    }

    #[test]
    fn empty_pick_is_rejected() {
        let pick = PickedDuration { hours: 0, minutes: 0 };
        assert_eq!(
            pick.into_max_secs(),
            Err(ValidationError::EmptyPickedDuration)
        );
    }
}
