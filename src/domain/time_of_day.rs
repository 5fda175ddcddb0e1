use {
    crate::utils::{ascii_digits, bengali_digits},
    anyhow::{Context, Result, anyhow},
    chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike},
    serde::{Deserialize, Serialize},
    std::str::FromStr,
};

/// Half of a 12-hour clock face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HalfDay {
    Morning,
    Afternoon,
}

/// A naive civil time of day at minute resolution, as written in the time table.
/// `00:00` doubles as the "no data" value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    pub const MIDNIGHT: Self = Self(NaiveTime::from_hms_opt(0, 0, 0).unwrap());

    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    /// Build from a 12-hour reading. `hour` must be in 1..=12.
    pub fn from_12h(hour: u32, minute: u32, half: HalfDay) -> Option<Self> {
        if !(1..=12).contains(&hour) {
            return None;
        }
        let hour_24 = match (half, hour) {
            (HalfDay::Morning, 12) => 0,
            (HalfDay::Morning, h) => h,
            (HalfDay::Afternoon, 12) => 12,
            (HalfDay::Afternoon, h) => h + 12,
        };
        Self::new(hour_24, minute)
    }

    /// Time of day of `at`, seconds truncated.
    pub fn of(at: &NaiveDateTime) -> Self {
        let time = at.time();
        Self(
            time.with_nanosecond(0)
                .and_then(|t| t.with_second(0))
                .unwrap_or(time),
        )
    }

    /// Parse a reading that may lack an AM/PM marker. Hours 1..=12 without a marker are placed
    /// by `half_for_hour`; anything else is read as a 24-hour value.
    pub fn parse_bare_12h(raw: &str, half_for_hour: impl Fn(u32) -> HalfDay) -> Result<Self> {
        let (hour, minute, marker) = split_clock(raw)?;
        let parsed = match marker {
            Some(half) => Self::from_12h(hour, minute, half),
            None if (1..=12).contains(&hour) => Self::from_12h(hour, minute, half_for_hour(hour)),
            None => Self::new(hour, minute),
        };
        parsed.ok_or_else(|| anyhow!("time out of range: '{}'", raw))
    }

    /// This time of day on `date`.
    pub fn on(&self, date: NaiveDate) -> NaiveDateTime {
        date.and_time(self.0)
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::MIDNIGHT
    }

    /// 12-hour clock in Bengali digits without a period marker, e.g. 18:00 -> "৬:০০".
    pub fn to_bengali_12h(&self) -> String {
        let hour_12 = match self.hour() % 12 {
            0 => 12,
            h => h,
        };
        bengali_digits(&format!("{}:{:02}", hour_12, self.minute()))
    }
}

impl Default for TimeOfDay {
    fn default() -> Self {
        Self::MIDNIGHT
    }
}

// Splits "H:MM", "HH:MM", "h:mm AM" (ASCII or Bengali digits) into hour, minute and marker.
fn split_clock(raw: &str) -> Result<(u32, u32, Option<HalfDay>)> {
    let upper = ascii_digits(raw.trim()).to_ascii_uppercase();
    let (clock, marker) = if let Some(rest) = upper.strip_suffix("AM") {
        (rest.trim_end(), Some(HalfDay::Morning))
    } else if let Some(rest) = upper.strip_suffix("PM") {
        (rest.trim_end(), Some(HalfDay::Afternoon))
    } else {
        (upper.as_str(), None)
    };

    let (hour, minute) = clock
        .split_once(':')
        .ok_or_else(|| anyhow!("expected HH:MM, got '{}'", raw))?;
    let hour: u32 = hour
        .trim()
        .parse()
        .with_context(|| format!("invalid hour in '{}'", raw))?;
    let minute: u32 = minute
        .trim()
        .parse()
        .with_context(|| format!("invalid minute in '{}'", raw))?;
    Ok((hour, minute, marker))
}

impl FromStr for TimeOfDay {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (hour, minute, marker) = split_clock(s)?;
        let parsed = match marker {
            Some(half) => Self::from_12h(hour, minute, half),
            None => Self::new(hour, minute),
        };
        parsed.ok_or_else(|| anyhow!("time out of range: '{}'", s))
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Prayer;

    fn tod(h: u32, m: u32) -> TimeOfDay {
        TimeOfDay::new(h, m).unwrap()
    }

    #[test]
    fn parses_24h_and_markers() {
        assert_eq!("05:07".parse::<TimeOfDay>().unwrap(), tod(5, 7));
        assert_eq!("5:07".parse::<TimeOfDay>().unwrap(), tod(5, 7));
        assert_eq!("18:00".parse::<TimeOfDay>().unwrap(), tod(18, 0));
        assert_eq!("6:02 pm".parse::<TimeOfDay>().unwrap(), tod(18, 2));
        assert_eq!("12:15 AM".parse::<TimeOfDay>().unwrap(), tod(0, 15));
        assert_eq!("১৮:০৫".parse::<TimeOfDay>().unwrap(), tod(18, 5));
    }

    #[test]
    fn rejects_garbage() {
        assert!("".parse::<TimeOfDay>().is_err());
        assert!("1800".parse::<TimeOfDay>().is_err());
        assert!("24:00".parse::<TimeOfDay>().is_err());
        assert!("12:60".parse::<TimeOfDay>().is_err());
        assert!("13:00 PM".parse::<TimeOfDay>().is_err());
    }

    #[test]
    fn bare_12h_follows_the_prayer_rule() {
        let dhuhr = |raw| TimeOfDay::parse_bare_12h(raw, |h| Prayer::Dhuhr.half_day_for_bare_hour(h));
        assert_eq!(dhuhr("11:58").unwrap(), tod(11, 58));
        assert_eq!(dhuhr("12:10").unwrap(), tod(12, 10));
        assert_eq!(dhuhr("01:05").unwrap(), tod(13, 5));
        assert_eq!(dhuhr("10:00").unwrap(), tod(22, 0));
        // an explicit marker wins over the rule
        assert_eq!(dhuhr("11:58 PM").unwrap(), tod(23, 58));
        // already 24-hour values pass through
        assert_eq!(dhuhr("13:05").unwrap(), tod(13, 5));

        let maghrib =
            TimeOfDay::parse_bare_12h("5:58", |h| Prayer::Maghrib.half_day_for_bare_hour(h));
        assert_eq!(maghrib.unwrap(), tod(17, 58));
    }

    #[test]
    fn of_truncates_seconds() {
        let at = NaiveDate::from_ymd_opt(2026, 2, 19)
            .unwrap()
            .and_hms_milli_opt(17, 57, 42, 500)
            .unwrap();
        assert_eq!(TimeOfDay::of(&at), tod(17, 57));
        assert_eq!(tod(17, 57).on(at.date()).time().second(), 0);
    }

    #[test]
    fn bengali_12h_display() {
        assert_eq!(tod(18, 0).to_bengali_12h(), "৬:০০");
        assert_eq!(tod(5, 7).to_bengali_12h(), "৫:০৭");
        assert_eq!(tod(0, 30).to_bengali_12h(), "১২:৩০");
        assert_eq!(tod(12, 5).to_bengali_12h(), "১২:০৫");
    }

    #[test]
    fn serde_uses_the_clock_string() {
        let json = serde_json::to_string(&tod(4, 9)).unwrap();
        assert_eq!(json, "\"04:09\"");
        let back: TimeOfDay = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tod(4, 9));
        assert!(serde_json::from_str::<TimeOfDay>("\"nope\"").is_err());
    }
}
