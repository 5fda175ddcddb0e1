//! Serde models for the two time table shapes found in the wild.
//!
//! Nested: `{ source, year, divisions: { <key>: { months: { "02": [ {day, fajr, ...} ] } } } }`
//! Flat:   `{ location?, days: [ {day, gregorianDate, sehriEnd, iftar} ] }` or a bare list of days.

use {
    crate::{
        data::TimeTableEntry,
        domain::{HalfDay, Prayer, TimeOfDay},
        models::PrayerTimes,
    },
    anyhow::{Context, Result, anyhow, bail},
    chrono::NaiveDate,
    serde::Deserialize,
    serde_json::Value,
    std::collections::BTreeMap,
};

/// How the times in a table are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum ClockFormat {
    #[default]
    #[serde(rename = "24h")]
    TwentyFourHour,
    /// 12-hour readings, usually without AM/PM markers.
    #[serde(rename = "12h")]
    BareTwelveHour,
}

impl ClockFormat {
    pub(crate) fn parse(self, raw: &str, half_for_hour: impl Fn(u32) -> HalfDay) -> Result<TimeOfDay> {
        match self {
            Self::TwentyFourHour => raw.parse(),
            Self::BareTwelveHour => TimeOfDay::parse_bare_12h(raw, half_for_hour),
        }
    }

    fn parse_prayer(self, raw: &str, prayer: Prayer) -> Result<TimeOfDay> {
        self.parse(raw, |hour| prayer.half_day_for_bare_hour(hour))
            .with_context(|| format!("bad {} time", prayer))
    }
}

#[derive(Debug)]
pub(crate) enum RawTable {
    Nested(NestedTable),
    Flat(FlatTable),
}

impl RawTable {
    pub(crate) fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json).context("Time table is not valid JSON")?;

        if value.is_array() {
            let days: Vec<FlatDay> =
                serde_json::from_value(value).context("Invalid list of days")?;
            return Ok(Self::Flat(FlatTable {
                location: None,
                clock: ClockFormat::default(),
                days,
            }));
        }

        let is_nested = value.get("divisions").is_some();
        let is_flat = value.get("days").is_some();
        match (is_nested, is_flat) {
            (true, _) => Ok(Self::Nested(
                serde_json::from_value(value).context("Invalid nested time table")?,
            )),
            (false, true) => Ok(Self::Flat(
                serde_json::from_value(value).context("Invalid flat time table")?,
            )),
            (false, false) => bail!(
                "Unrecognised time table shape: expected a 'divisions' object, a 'days' list or a bare list of days"
            ),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct NestedTable {
    #[serde(default)]
    pub source: String,
    pub year: i32,
    #[serde(default)]
    pub clock: ClockFormat,
    pub divisions: BTreeMap<String, RawDivision>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawDivision {
    /// Keyed by zero-padded month number ("02", "03", ...)
    pub months: BTreeMap<String, Vec<RawMonthlyDay>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawMonthlyDay {
    pub day: u32,
    #[serde(default)]
    pub sehri_end: Option<String>,
    #[serde(default)]
    pub fajr: Option<String>,
    #[serde(default)]
    pub sunrise: Option<String>,
    pub dhuhr: String,
    pub asr: String,
    pub maghrib: String,
    pub isha: String,
}

impl RawMonthlyDay {
    /// Fajr marks the end of Sehri, so either column can stand in for the other.
    pub(crate) fn to_entry(&self, clock: ClockFormat) -> Result<TimeTableEntry> {
        let dawn = self
            .fajr
            .as_deref()
            .or(self.sehri_end.as_deref())
            .ok_or_else(|| anyhow!("day {} has neither fajr nor sehri_end", self.day))?;

        let sunrise = self
            .sunrise
            .as_deref()
            .map(|raw| clock.parse(raw, |_| HalfDay::Morning))
            .transpose()
            .context("bad sunrise time")?;

        Ok(TimeTableEntry {
            times: PrayerTimes {
                fajr: clock.parse_prayer(dawn, Prayer::Fajr)?,
                dhuhr: clock.parse_prayer(&self.dhuhr, Prayer::Dhuhr)?,
                asr: clock.parse_prayer(&self.asr, Prayer::Asr)?,
                maghrib: clock.parse_prayer(&self.maghrib, Prayer::Maghrib)?,
                isha: clock.parse_prayer(&self.isha, Prayer::Isha)?,
            },
            sunrise,
        })
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct FlatTable {
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub clock: ClockFormat,
    pub days: Vec<FlatDay>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FlatDay {
    /// Ramadan day number as printed in the source
    pub day: u32,
    pub gregorian_date: NaiveDate,
    pub sehri_end: String,
    pub iftar: String,
}

impl FlatDay {
    /// Only Sehri end and Iftar are known; the other prayers stay zero.
    pub(crate) fn to_entry(&self, clock: ClockFormat) -> Result<TimeTableEntry> {
        Ok(TimeTableEntry {
            times: PrayerTimes {
                fajr: clock.parse_prayer(&self.sehri_end, Prayer::Fajr)?,
                maghrib: clock.parse_prayer(&self.iftar, Prayer::Maghrib)?,
                ..PrayerTimes::ZERO
            },
            sunrise: None,
        })
    }
}
