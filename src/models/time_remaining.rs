use {
    crate::utils::{TimeUtils, bengali_digits},
    serde::Serialize,
};

/// Non-negative duration until a target time of day, always under 24 hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
pub struct TimeRemaining {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl TimeRemaining {
    pub const ZERO: Self = Self {
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    pub fn from_seconds(total: u32) -> Self {
        let per_hour = TimeUtils::SECS_IN_H as u32;
        let per_min = TimeUtils::SECS_IN_MIN as u32;
        Self {
            hours: total / per_hour,
            minutes: (total % per_hour) / per_min,
            seconds: total % per_min,
        }
    }

    pub fn total_seconds(&self) -> u32 {
        self.hours * TimeUtils::SECS_IN_H as u32
            + self.minutes * TimeUtils::SECS_IN_MIN as u32
            + self.seconds
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// "HH:MM:SS" with Bengali digits.
    pub fn to_bengali(&self) -> String {
        bengali_digits(&self.to_string())
    }
}

impl std::fmt::Display for TimeRemaining {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}
