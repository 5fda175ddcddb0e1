use chrono::{NaiveDate, NaiveDateTime};
use ramadan_timings::{
    PrayerResolver, TimeTable,
    config::{LOCATIONS, RAMADAN},
    domain::{Prayer, TimeOfDay},
    engine::{ResolveStatus, next_upcoming, time_until},
};

fn at(m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, m, d)
        .unwrap()
        .and_hms_opt(h, min, s)
        .unwrap()
}

fn tod(h: u32, m: u32) -> TimeOfDay {
    TimeOfDay::new(h, m).unwrap()
}

#[test]
fn bundled_table_covers_every_division() {
    let table = TimeTable::bundled().unwrap();
    let resolver = PrayerResolver::new(&table);
    for location in LOCATIONS {
        assert!(table.has_location(location.key), "{}", location.key);
        assert!(resolver.missing_days(location.key).is_empty(), "{}", location.key);
    }
}

#[test]
fn table_missing_a_division_reports_every_day() {
    let mut json: serde_json::Value =
        serde_json::from_str(include_str!("../data/prayer.json")).unwrap();
    json["divisions"].as_object_mut().unwrap().remove("Sylhet");
    let table = TimeTable::from_json_str(&json.to_string()).unwrap();

    let keys: Vec<&str> = LOCATIONS.iter().map(|l| l.key).collect();
    let gaps = PrayerResolver::new(&table).table_gaps(&keys);
    assert_eq!(gaps.len(), 1);
    assert_eq!(gaps[0].0, "Sylhet");
    assert_eq!(gaps[0].1.len(), RAMADAN.days_count as usize);

    let bundled = TimeTable::bundled().unwrap();
    assert!(PrayerResolver::new(&bundled).table_gaps(&keys).is_empty());
}

#[test]
fn schedule_is_thirty_aligned_days() {
    let table = TimeTable::bundled().unwrap();
    let schedule = PrayerResolver::new(&table).schedule_for_location("Chattogram");
    assert_eq!(schedule.len(), 30);
    for (i, record) in schedule.iter().enumerate() {
        assert_eq!(record.day as usize, i + 1);
        assert_eq!(record.date, RAMADAN.date_of_day(i as i64 + 1));
        assert_eq!(record.iftar, record.times.maghrib);
        assert!(!record.is_zeroed());
    }
    assert_eq!(schedule[29].date, NaiveDate::from_ymd_opt(2026, 3, 20).unwrap());
}

#[test]
fn unknown_city_gets_the_capital_schedule() {
    let table = TimeTable::bundled().unwrap();
    let resolver = PrayerResolver::new(&table);
    assert_eq!(
        resolver.schedule_for_location("Gotham"),
        resolver.schedule_for_location("Dhaka")
    );
}

#[test]
fn dhaka_first_day_rolls_over_after_sunset() {
    let table = TimeTable::bundled().unwrap();
    let resolver = PrayerResolver::new(&table);

    let noon = resolver.resolve_today("Dhaka", at(2, 19, 12, 0, 0));
    assert_eq!(noon.day, 1);
    assert_eq!(noon.times.fajr, tod(5, 1));
    assert_eq!(noon.iftar, tod(17, 57));

    assert_eq!(resolver.resolve_today("Dhaka", at(2, 19, 17, 57, 0)).day, 1);
    assert_eq!(resolver.resolve_today("Dhaka", at(2, 19, 17, 57, 59)).day, 1);
    assert_eq!(resolver.resolve_today("Dhaka", at(2, 19, 17, 58, 0)).day, 2);
}

#[test]
fn last_day_and_beyond() {
    let table = TimeTable::bundled().unwrap();
    let resolver = PrayerResolver::new(&table);

    let last = resolver.resolve_today_detailed("Dhaka", at(3, 20, 12, 0, 0));
    assert_eq!(last.status, ResolveStatus::InRange);
    assert_eq!(last.record.day, 30);
    assert_eq!(last.record.times.fajr, tod(4, 34));
    assert_eq!(last.record.iftar, tod(18, 14));

    // After the last sunset the window is exhausted: day 1 preview
    let after = resolver.resolve_today_detailed("Dhaka", at(3, 20, 18, 30, 0));
    assert_eq!(after.status, ResolveStatus::AfterRamadan);
    assert_eq!(after.resolved_day, 31);
    assert_eq!(after.record.day, 1);

    let before = resolver.resolve_today_detailed("Dhaka", at(1, 5, 8, 0, 0));
    assert_eq!(before.status, ResolveStatus::BeforeRamadan);
    assert_eq!(before.record.day, 1);
}

#[test]
fn countdown_against_real_times() {
    let table = TimeTable::bundled().unwrap();
    let record = PrayerResolver::new(&table).resolve_today("Dhaka", at(2, 19, 17, 0, 0));

    let next = next_upcoming(&record.times, at(2, 19, 17, 0, 0));
    assert_eq!(next.prayer, Prayer::Maghrib);
    assert!(!next.is_tomorrow);

    let left = time_until(record.iftar, at(2, 19, 17, 0, 0));
    assert_eq!((left.hours, left.minutes, left.seconds), (0, 57, 0));
}
