use chrono::{FixedOffset, NaiveDateTime, Utc};

/// Monotonic instant that also works on wasm targets.
pub type AppInstant = web_time::Instant;

pub struct TimeUtils;

impl TimeUtils {
    pub const SECS_IN_MIN: i64 = 60;
    pub const SECS_IN_H: i64 = Self::SECS_IN_MIN * 60;
    pub const SECS_IN_D: i64 = Self::SECS_IN_H * 24;
    pub const CLI_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
}

const BENGALI_DIGITS: [char; 10] = ['০', '১', '২', '৩', '৪', '৫', '৬', '৭', '৮', '৯'];

/// Replace ASCII digits with Bengali digits, leaving everything else untouched.
pub fn bengali_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => BENGALI_DIGITS[d as usize],
            None => c,
        })
        .collect()
}

/// Inverse of [`bengali_digits`].
pub fn ascii_digits(text: &str) -> String {
    text.chars()
        .map(|c| match BENGALI_DIGITS.iter().position(|&b| b == c) {
            Some(d) => char::from(b'0' + d as u8),
            None => c,
        })
        .collect()
}

/// Current wall-clock time in the civil time of `offset`.
pub fn local_now(offset: FixedOffset) -> NaiveDateTime {
    Utc::now().with_timezone(&offset).naive_local()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bengali_digits_round_trip() {
        assert_eq!(bengali_digits("05:07"), "০৫:০৭");
        assert_eq!(ascii_digits("০৫:০৭"), "05:07");
        assert_eq!(ascii_digits(&bengali_digits("Day 29")), "Day 29");
    }
}
