use chrono::{NaiveDate, NaiveDateTime};
use ramadan_timings::{
    PrayerResolver, TimeTable,
    domain::{Location, TimeOfDay},
    ui::{Language, UiText, render_calendar, render_countdown_card, render_today},
};

fn at(m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

#[test]
fn countdown_card_in_both_languages() {
    let iftar = TimeOfDay::new(17, 57).unwrap();
    let now = at(2, 19, 15, 42);

    let en = render_countdown_card(UiText::for_language(Language::English), "Iftar", iftar, now);
    assert!(en.contains("17:57"), "{}", en);
    assert!(en.contains("Time left 02:15:00"), "{}", en);

    let bn = render_countdown_card(UiText::for_language(Language::Bengali), "ইফতার", iftar, now);
    assert!(bn.contains("৫:৫৭"), "{}", bn);
    assert!(bn.contains("০২:১৫:০০"), "{}", bn);
}

#[test]
fn today_marks_the_next_prayer() {
    let table = TimeTable::bundled().unwrap();
    let now = at(3, 5, 14, 0);
    let resolution = PrayerResolver::new(&table).resolve_today_detailed("Khulna", now);
    let text = UiText::for_language(Language::English);
    let screen = render_today(text, Location::resolve("Khulna"), &resolution, now);

    assert!(screen.starts_with("Khulna · Ramadan 15 · Thu 05 Mar"), "{}", screen);
    let marked: Vec<&str> = screen.lines().filter(|l| l.contains("<- next")).collect();
    assert_eq!(marked.len(), 1);
    assert!(marked[0].contains("Asr"), "{}", marked[0]);
    assert!(!screen.contains(&text.note_before_ramadan));
}

#[test]
fn calendar_lists_every_day_once() {
    let table = TimeTable::bundled().unwrap();
    let schedule = PrayerResolver::new(&table).schedule_for_location("Mymensingh");
    let text = UiText::for_language(Language::English);
    let screen = render_calendar(text, &schedule, None);

    assert!(screen.starts_with(&text.title_calendar));
    for day in 1..=30 {
        let label = format!("Ramadan {:02}", day);
        assert_eq!(screen.matches(&label).count(), 1, "{}", label);
    }
    assert!(!screen.contains('*'));
    assert!(screen.ends_with(&text.note_accuracy));
}
