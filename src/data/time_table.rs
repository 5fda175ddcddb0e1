use {
    crate::{
        config::{DEFAULT_LOCATION, DF, RAMADAN},
        data::raw::RawTable,
        domain::TimeOfDay,
        models::PrayerTimes,
    },
    anyhow::{Context, Result, anyhow},
    chrono::{Datelike, NaiveDate},
    std::{collections::BTreeMap, fs, path::Path},
};

/// The prayer times of one date at one location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeTableEntry {
    pub times: PrayerTimes,
    /// Carried through from the source; the resolver does not use it.
    pub sunrise: Option<TimeOfDay>,
}

impl TimeTableEntry {
    pub fn new(times: PrayerTimes) -> Self {
        Self {
            times,
            sunrise: None,
        }
    }
}

/// (month, day-of-month). The table is implicitly scoped to a single year.
type DayKey = (u32, u32);

/// Read-only mapping (location, month, day-of-month) -> prayer times, in Bangladesh civil time.
/// Loaded once at start-up and shared by reference afterwards.
#[derive(Debug, Clone, Default)]
pub struct TimeTable {
    source: String,
    year: Option<i32>,
    locations: BTreeMap<String, BTreeMap<DayKey, TimeTableEntry>>,
}

impl TimeTable {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..Default::default()
        }
    }

    /// The table compiled into the binary.
    pub fn bundled() -> Result<Self> {
        Self::from_json_str(include_str!(crate::bundled_table_file!()))
            .context("Bundled time table is invalid")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read time table: {}", path.display()))?;
        crate::trace_time!("Parse time table", 5_000, { Self::from_json_str(&json) })
            .with_context(|| format!("Failed to parse time table: {}", path.display()))
    }

    /// Accepts either the nested per-division shape or a flat list of days.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let table = Self::from_raw(RawTable::from_json_str(json)?)?;
        if DF.log_table_load {
            log::info!(
                "Loaded time table '{}': {} locations, {} entries",
                table.source,
                table.locations.len(),
                table.len()
            );
        }
        Ok(table)
    }

    fn from_raw(raw: RawTable) -> Result<Self> {
        match raw {
            RawTable::Nested(nested) => {
                let mut table = Self {
                    source: nested.source,
                    year: Some(nested.year),
                    locations: BTreeMap::new(),
                };
                for (location, division) in &nested.divisions {
                    for (month_key, days) in &division.months {
                        let month: u32 = month_key.trim().parse().with_context(|| {
                            format!("{}: invalid month key '{}'", location, month_key)
                        })?;
                        for raw_day in days {
                            let date = NaiveDate::from_ymd_opt(nested.year, month, raw_day.day)
                                .ok_or_else(|| {
                                    anyhow!(
                                        "{}: {}-{:02}-{:02} is not a calendar date",
                                        location,
                                        nested.year,
                                        month,
                                        raw_day.day
                                    )
                                })?;
                            let entry = raw_day
                                .to_entry(nested.clock)
                                .with_context(|| format!("{} on {}", location, date))?;
                            table.insert_logged(location, date, entry);
                        }
                    }
                }
                table.warn_on_other_year();
                Ok(table)
            }
            RawTable::Flat(flat) => {
                let location = flat
                    .location
                    .unwrap_or_else(|| DEFAULT_LOCATION.key.to_string());
                let mut table = Self {
                    source: format!("{} day list", location),
                    year: flat.days.first().map(|d| d.gregorian_date.year()),
                    locations: BTreeMap::new(),
                };
                for day in &flat.days {
                    let expected = RAMADAN.date_of_day(i64::from(day.day));
                    if expected != day.gregorian_date {
                        log::warn!(
                            "{}: row says Ramadan day {} is {} but the calendar puts it on {}",
                            location,
                            day.day,
                            day.gregorian_date,
                            expected
                        );
                    }
                    let entry = day
                        .to_entry(flat.clock)
                        .with_context(|| format!("{} on {}", location, day.gregorian_date))?;
                    table.insert_logged(&location, day.gregorian_date, entry);
                }
                table.warn_on_other_year();
                Ok(table)
            }
        }
    }

    fn warn_on_other_year(&self) {
        if let Some(year) = self.year.filter(|_| !self.matches_calendar_year()) {
            log::warn!(
                "Time table '{}' is for {} but Ramadan is configured for {}",
                self.source,
                year,
                RAMADAN.anchor.year()
            );
        }
    }

    /// False when the table declares a year other than the configured Ramadan's.
    pub fn matches_calendar_year(&self) -> bool {
        self.year.is_none_or(|year| year == RAMADAN.anchor.year())
    }

    /// Add or replace the entry for `date`. Returns the replaced entry.
    pub fn insert(
        &mut self,
        location: &str,
        date: NaiveDate,
        entry: TimeTableEntry,
    ) -> Option<TimeTableEntry> {
        self.locations
            .entry(location.to_string())
            .or_default()
            .insert((date.month(), date.day()), entry)
    }

    fn insert_logged(&mut self, location: &str, date: NaiveDate, entry: TimeTableEntry) {
        if self.insert(location, date, entry).is_some() {
            log::warn!(
                "Duplicate entry for {} on {}, keeping the later one",
                location,
                date
            );
        }
    }

    pub fn entry(&self, location: &str, date: NaiveDate) -> Option<&TimeTableEntry> {
        self.locations
            .get(location)?
            .get(&(date.month(), date.day()))
    }

    pub fn has_location(&self, location: &str) -> bool {
        self.locations.contains_key(location)
    }

    /// The key to look `location` up under: itself if known, otherwise the capital. A table
    /// without the capital falls back to its first location instead.
    pub fn resolve_location<'a>(&'a self, location: &'a str) -> &'a str {
        if self.has_location(location) {
            return location;
        }
        let fallback = if self.has_location(DEFAULT_LOCATION.key) {
            DEFAULT_LOCATION.key
        } else {
            match self.location_keys().next() {
                Some(first) => {
                    log::warn!(
                        "Time table '{}' has no {}, falling back to {}",
                        self.source,
                        DEFAULT_LOCATION.key,
                        first
                    );
                    first
                }
                None => DEFAULT_LOCATION.key,
            }
        };
        if DF.log_fallbacks {
            log::debug!("No time table for '{}', using {}", location, fallback);
        }
        fallback
    }

    pub fn location_keys(&self) -> impl Iterator<Item = &str> {
        self.locations.keys().map(String::as_str)
    }

    /// Total number of entries across all locations.
    pub fn len(&self) -> usize {
        self.locations.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn year(&self) -> Option<i32> {
        self.year
    }
}
