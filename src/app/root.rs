use {
    crate::{
        Cli, Command,
        config::{DF, RAMADAN},
        data::{
            JsonFilePreferences, PreferenceStore, TimeTable, select_location, selected_location,
        },
        domain::Location,
        engine::{PrayerResolver, ResolveStatus, Resolution, countdown_to_next},
        ui::{Language, UiText, render_calendar, render_cities, render_today},
    },
    anyhow::{Context, Result, bail},
    std::{thread, time::Duration},
};

use super::Clock;

/// Terminal front-end: owns the loaded table, the preference store and the clock, and hands
/// the engine plain values.
pub struct App {
    table: TimeTable,
    preferences: Box<dyn PreferenceStore>,
    location: &'static Location,
    clock: Clock,
    text: &'static UiText,
}

impl App {
    pub fn new(args: &Cli) -> Result<Self> {
        let table = match &args.table {
            Some(path) => TimeTable::load(path)?,
            None => TimeTable::bundled()?,
        };
        let preferences = JsonFilePreferences::open(&args.state)?;
        let clock = match args.now {
            Some(now) => Clock::pinned(now),
            None => Clock::System(
                RAMADAN
                    .utc_offset()
                    .context("Invalid UTC offset in Ramadan config")?,
            ),
        };
        let language = if args.bengali {
            Language::Bengali
        } else {
            Language::English
        };
        Ok(Self::with_parts(
            table,
            Box::new(preferences),
            clock,
            language,
            args.city.as_deref(),
        ))
    }

    /// `city` overrides the saved city for this run only.
    pub fn with_parts(
        table: TimeTable,
        preferences: Box<dyn PreferenceStore>,
        clock: Clock,
        language: Language,
        city: Option<&str>,
    ) -> Self {
        let location = match city {
            Some(query) => Location::resolve(query),
            None => selected_location(preferences.as_ref()),
        };
        Self {
            table,
            preferences,
            location,
            clock,
            text: UiText::for_language(language),
        }
    }

    pub fn run(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Today => println!("{}", self.today()),
            Command::Calendar { json } => println!("{}", self.calendar(json)?),
            Command::Countdown { watch } => self.watch_countdown(watch),
            Command::Cities => println!("{}", self.cities()),
            Command::Select { city } => println!("{}", self.select(&city)?),
        }
        Ok(())
    }

    fn resolve(&self) -> Resolution {
        PrayerResolver::new(&self.table).resolve_today_detailed(self.location.key, self.clock.now())
    }

    pub fn today(&self) -> String {
        let now = self.clock.now();
        let resolution =
            PrayerResolver::new(&self.table).resolve_today_detailed(self.location.key, now);
        render_today(self.text, self.location, &resolution, now)
    }

    pub fn calendar(&self, json: bool) -> Result<String> {
        let schedule = PrayerResolver::new(&self.table).schedule_for_location(self.location.key);
        if json {
            return serde_json::to_string_pretty(&schedule)
                .context("Failed to serialise the schedule");
        }
        let resolution = self.resolve();
        let today = (resolution.status == ResolveStatus::InRange).then_some(resolution.record.day);
        Ok(format!(
            "{}\n{}",
            self.text.location(self.location),
            render_calendar(self.text, &schedule, today)
        ))
    }

    pub fn countdown_line(&self) -> String {
        let now = self.clock.now();
        let record =
            PrayerResolver::new(&self.table).resolve_today(self.location.key, now);
        let (next, remaining) = countdown_to_next(&record.times, now);
        let when = if next.is_tomorrow {
            format!(" ({})", self.text.label_tomorrow)
        } else {
            String::new()
        };
        format!(
            "{}: {} {}{} · {} {}",
            self.text.label_next,
            self.text.prayer(next.prayer),
            self.text.time(next.time),
            when,
            self.text.label_remaining,
            self.text.remaining(remaining)
        )
    }

    /// Prints the countdown once, then once per second for `seconds` more ticks.
    fn watch_countdown(&self, seconds: u64) {
        for tick in 0..=seconds {
            if tick > 0 {
                thread::sleep(Duration::from_secs(1));
            }
            let line = self.countdown_line();
            if DF.log_countdown_ticks {
                log::info!("tick {}: {}", tick, line);
            }
            println!("{}", line);
        }
    }

    pub fn cities(&self) -> String {
        render_cities(self.text, self.location)
    }

    pub fn select(&mut self, query: &str) -> Result<String> {
        let Some(location) = Location::find(query) else {
            bail!("Unknown city '{}'. Run `cities` to list them.", query);
        };
        select_location(self.preferences.as_mut(), location)?;
        self.location = location;
        Ok(format!(
            "{} {}",
            self.text.note_city_saved,
            self.text.location(location)
        ))
    }

    pub fn location(&self) -> &'static Location {
        self.location
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MemoryPreferences;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn app(now: NaiveDateTime, language: Language, city: Option<&str>) -> App {
        App::with_parts(
            TimeTable::bundled().unwrap(),
            Box::new(MemoryPreferences::default()),
            Clock::pinned(now),
            language,
            city,
        )
    }

    #[test]
    fn today_after_sunset_shows_tomorrow() {
        // Dhaka sunset on 19 Feb is 17:57 in the bundled table
        let screen = app(at(2, 19, 18, 30), Language::English, None).today();
        assert!(screen.starts_with("Dhaka · Ramadan 02 · Fri 20 Feb"), "{}", screen);
        assert!(screen.contains("Isha"));
    }

    #[test]
    fn today_before_ramadan_says_so() {
        let screen = app(at(2, 1, 9, 0), Language::English, None).today();
        assert!(screen.contains("Ramadan has not started yet"), "{}", screen);
        assert!(screen.contains("Ramadan 01"));
    }

    #[test]
    fn bengali_today() {
        let screen = app(at(2, 19, 12, 0), Language::Bengali, Some("Sylhet")).today();
        assert!(screen.starts_with("সিলেট · রমজান ০১"), "{}", screen);
        assert!(screen.contains("ইফতার"));
    }

    #[test]
    fn calendar_marks_today() {
        let screen = app(at(2, 21, 12, 0), Language::English, None)
            .calendar(false)
            .unwrap();
        let marked: Vec<&str> = screen.lines().filter(|l| l.contains('*') && l.contains("Ramadan 03")).collect();
        assert_eq!(marked.len(), 1, "{}", screen);
        assert!(screen.contains("Ramadan 30"));
    }

    #[test]
    fn calendar_json_has_thirty_days() {
        let json = app(at(2, 21, 12, 0), Language::English, None)
            .calendar(true)
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        let days = parsed.as_array().unwrap();
        assert_eq!(days.len(), 30);
        assert_eq!(days[0]["day"], 1);
        assert_eq!(days[0]["date"], "2026-02-19");
        assert_eq!(days[0]["iftar"], days[0]["maghrib"]);
    }

    #[test]
    fn countdown_after_isha_points_at_tomorrow() {
        let line = app(at(2, 25, 23, 0), Language::English, None).countdown_line();
        assert!(line.starts_with("next: Fajr"), "{}", line);
        assert!(line.contains("(tomorrow)"));
    }

    #[test]
    fn select_persists_and_rejects_unknown() {
        let mut app = app(at(2, 25, 12, 0), Language::English, None);
        assert_eq!(app.location().key, "Dhaka");
        assert!(app.select("Rangpur").unwrap().contains("Rangpur"));
        assert_eq!(app.location().key, "Rangpur");
        assert_eq!(selected_location(app.preferences.as_ref()).key, "Rangpur");
        assert!(app.select("Paris").is_err());
        assert!(app.cities().contains("রংপুর  (selected)"));
    }
}
