use {
    crate::{models::DailyPrayerRecord, ui::UiText},
    tabled::{builder::Builder, settings::Style},
};

/// The 30-day table. `today` is the day number to mark, if any.
pub fn render_calendar(text: &UiText, schedule: &[DailyPrayerRecord], today: Option<u32>) -> String {
    let mut builder = Builder::default();
    builder.push_record([
        text.col_today.clone(),
        text.col_day.clone(),
        text.col_date.clone(),
        text.label_sehri_end.clone(),
        text.label_iftar.clone(),
    ]);

    for record in schedule {
        let marker = if Some(record.day) == today { "*" } else { "" };
        builder.push_record([
            marker.to_string(),
            format!("{} {}", text.label_ramadan_day, text.day_number(record.day)),
            text.date(record.date),
            text.time(record.sehri_end()),
            text.time(record.iftar),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    format!("{}\n{}\n{}", text.title_calendar, table, text.note_accuracy)
}
