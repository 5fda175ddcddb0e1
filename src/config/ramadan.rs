//! The fixed observance window the time table is written for.

use chrono::{Duration, FixedOffset, NaiveDate};

pub struct RamadanConfig {
    /// Day 1 of Ramadan, in Bangladesh civil time.
    pub anchor: NaiveDate,
    /// Number of observance days covered by a schedule.
    pub days_count: u32,
    /// Offset of the civil time the table is written in (BST has no DST).
    pub utc_offset_secs: i32,
}

impl RamadanConfig {
    /// Calendar date of a 1-based Ramadan day. Values below 1 count backwards from the anchor.
    pub fn date_of_day(&self, day: i64) -> NaiveDate {
        self.anchor + Duration::days(day - 1)
    }

    pub fn contains_day(&self, day: i64) -> bool {
        day >= 1 && day <= i64::from(self.days_count)
    }

    pub fn last_date(&self) -> NaiveDate {
        self.date_of_day(i64::from(self.days_count))
    }

    pub fn utc_offset(&self) -> Option<FixedOffset> {
        FixedOffset::east_opt(self.utc_offset_secs)
    }
}

pub const RAMADAN: RamadanConfig = RamadanConfig {
    anchor: NaiveDate::from_ymd_opt(2026, 2, 19).unwrap(),
    days_count: 30,
    utc_offset_secs: 6 * 60 * 60,
};
