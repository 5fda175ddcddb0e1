use {
    crate::{
        domain::Location,
        engine::{ResolveStatus, Resolution, next_upcoming},
        ui::{UiText, render_countdown_card},
    },
    chrono::NaiveDateTime,
    itertools::Itertools,
};

/// Today's card: heading, fallback note, Sehri/Iftar countdowns and the five prayers with the
/// next one marked.
pub fn render_today(
    text: &UiText,
    location: &Location,
    resolution: &Resolution,
    now: NaiveDateTime,
) -> String {
    let record = &resolution.record;
    let mut lines = vec![format!(
        "{} · {} {} · {}",
        text.location(location),
        text.label_ramadan_day,
        text.day_number(record.day),
        text.date(record.date)
    )];

    let note = match resolution.status {
        ResolveStatus::InRange => None,
        ResolveStatus::BeforeRamadan => Some(&text.note_before_ramadan),
        ResolveStatus::AfterRamadan => Some(&text.note_after_ramadan),
        ResolveStatus::MissingEntry => Some(&text.note_missing_entry),
    };
    if let Some(note) = note {
        lines.push(note.clone());
    }

    lines.push(String::new());
    lines.push(render_countdown_card(text, &text.label_sehri_end, record.sehri_end(), now));
    lines.push(render_countdown_card(text, &text.label_iftar, record.iftar, now));
    lines.push(String::new());
    lines.push(text.title_today.clone());

    let next = next_upcoming(&record.times, now);
    let rows = record.times.iter().map(|(prayer, time)| {
        let marker = if prayer == next.prayer {
            if next.is_tomorrow {
                format!("  <- {} ({})", text.label_next, text.label_tomorrow)
            } else {
                format!("  <- {}", text.label_next)
            }
        } else {
            String::new()
        };
        format!("  {:<10} {:>6}{}", text.prayer(prayer), text.time(time), marker)
    });
    lines.extend(rows);

    lines.iter().join("\n")
}
