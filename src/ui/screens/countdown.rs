use {
    crate::{domain::TimeOfDay, engine::time_until, ui::UiText},
    chrono::NaiveDateTime,
};

/// One countdown line, e.g. "Iftar  17:57  Time left 02:14:09 (h:m:s)".
pub fn render_countdown_card(
    text: &UiText,
    title: &str,
    target: TimeOfDay,
    now: NaiveDateTime,
) -> String {
    let remaining = time_until(target, now);
    let (h, m, s) = &text.label_hms;
    format!(
        "{:<12} {:>6}   {} {} ({}:{}:{})",
        title,
        text.time(target),
        text.label_remaining,
        text.remaining(remaining),
        h,
        m,
        s
    )
}
