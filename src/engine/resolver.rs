use {
    crate::{
        config::{DF, RAMADAN, RamadanConfig},
        data::TimeTable,
        domain::TimeOfDay,
        models::DailyPrayerRecord,
    },
    chrono::NaiveDateTime,
    serde::Serialize,
};

/// Why `resolve_today_detailed` returned the record it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ResolveStatus {
    /// Today is a Ramadan day and the table has it.
    InRange,
    /// Before day 1; the day-1 preview was returned.
    BeforeRamadan,
    /// After the last day; the day-1 preview was returned.
    AfterRamadan,
    /// Inside the window but the table has no entry; the day-1 preview was returned.
    MissingEntry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub record: DailyPrayerRecord,
    pub status: ResolveStatus,
    /// The day number the clock pointed at, before any fallback. May be outside the window.
    pub resolved_day: i64,
}

/// Pure lookups of Ramadan days against a loaded time table.
/// Holds no state of its own, so it is cheap to build per call site.
pub struct PrayerResolver<'a> {
    table: &'a TimeTable,
    ramadan: &'a RamadanConfig,
}

impl<'a> PrayerResolver<'a> {
    pub fn new(table: &'a TimeTable) -> Self {
        Self::with_calendar(table, &RAMADAN)
    }

    pub fn with_calendar(table: &'a TimeTable, ramadan: &'a RamadanConfig) -> Self {
        Self { table, ramadan }
    }

    pub fn calendar(&self) -> &RamadanConfig {
        self.ramadan
    }

    /// The full observance window for `location`, one record per day, in day order.
    /// Days the table has no entry for come back zeroed rather than missing.
    pub fn schedule_for_location(&self, location: &str) -> Vec<DailyPrayerRecord> {
        let key = self.table.resolve_location(location);
        (1..=self.ramadan.days_count)
            .map(|day| self.day_record(key, day))
            .collect()
    }

    /// Today's record at `now` (Bangladesh civil time). Falls back to the day-1 preview outside
    /// the window.
    pub fn resolve_today(&self, location: &str, now: NaiveDateTime) -> DailyPrayerRecord {
        self.resolve_today_detailed(location, now).record
    }

    /// Like [`Self::resolve_today`], also reporting whether a fallback was used.
    ///
    /// The observance day advances at sunset: once `now` is strictly past today's Maghrib
    /// (compared at minute resolution), tomorrow's record is returned.
    pub fn resolve_today_detailed(&self, location: &str, now: NaiveDateTime) -> Resolution {
        let key = self.table.resolve_location(location);

        let mut days_since_anchor = now
            .date()
            .signed_duration_since(self.ramadan.anchor)
            .num_days();
        if let Some(today) = self.table.entry(key, now.date()) {
            if TimeOfDay::of(&now) > today.times.maghrib {
                days_since_anchor += 1;
            }
        }
        let resolved_day = days_since_anchor + 1;

        let status = if resolved_day < 1 {
            ResolveStatus::BeforeRamadan
        } else if !self.ramadan.contains_day(resolved_day) {
            ResolveStatus::AfterRamadan
        } else {
            let date = self.ramadan.date_of_day(resolved_day);
            match self.table.entry(key, date) {
                Some(entry) => {
                    return Resolution {
                        record: DailyPrayerRecord::new(resolved_day as u32, date, entry.times),
                        status: ResolveStatus::InRange,
                        resolved_day,
                    };
                }
                None => ResolveStatus::MissingEntry,
            }
        };

        if DF.log_fallbacks {
            log::debug!(
                "{}: day {} at {} is {:?}, showing day 1",
                key,
                resolved_day,
                now,
                status
            );
        }
        Resolution {
            record: self.day_record(key, 1),
            status,
            resolved_day,
        }
    }

    /// Ramadan days in the window the table has no entry for.
    pub fn missing_days(&self, location: &str) -> Vec<u32> {
        (1..=self.ramadan.days_count)
            .filter(|&day| {
                let date = self.ramadan.date_of_day(i64::from(day));
                self.table.entry(location, date).is_none()
            })
            .collect()
    }

    /// Per location, the Ramadan days without an entry. Locations the table lacks entirely
    /// report every day. Complete locations are left out.
    pub fn table_gaps(&self, locations: &[&str]) -> Vec<(String, Vec<u32>)> {
        locations
            .iter()
            .map(|&location| (location.to_string(), self.missing_days(location)))
            .filter(|(_, missing)| !missing.is_empty())
            .collect()
    }

    fn day_record(&self, key: &str, day: u32) -> DailyPrayerRecord {
        let date = self.ramadan.date_of_day(i64::from(day));
        match self.table.entry(key, date) {
            Some(entry) => DailyPrayerRecord::new(day, date, entry.times),
            None => DailyPrayerRecord::zeroed(day, date),
        }
    }
}
