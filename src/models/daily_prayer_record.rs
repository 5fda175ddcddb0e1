use {
    crate::{domain::TimeOfDay, models::PrayerTimes},
    chrono::NaiveDate,
    serde::Serialize,
};

/// One Ramadan day for one location, assembled from the time table on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyPrayerRecord {
    /// 1-based Ramadan day number
    pub day: u32,
    pub date: NaiveDate,
    #[serde(flatten)]
    pub times: PrayerTimes,
    /// Iftar is taken at Maghrib
    pub iftar: TimeOfDay,
}

impl DailyPrayerRecord {
    pub fn new(day: u32, date: NaiveDate, times: PrayerTimes) -> Self {
        Self {
            day,
            date,
            times,
            iftar: times.maghrib,
        }
    }

    /// Record for a date the table has no entry for.
    pub fn zeroed(day: u32, date: NaiveDate) -> Self {
        Self::new(day, date, PrayerTimes::ZERO)
    }

    /// Sehri ends when Fajr begins.
    pub fn sehri_end(&self) -> TimeOfDay {
        self.times.fajr
    }

    pub fn is_zeroed(&self) -> bool {
        self.times.is_zero()
    }
}
