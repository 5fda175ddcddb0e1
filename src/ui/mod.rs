mod screens;
mod ui_text;

pub use screens::{render_calendar, render_cities, render_countdown_card, render_today};
pub use ui_text::{Language, UI_TEXT_BN, UI_TEXT_EN, UiText};
