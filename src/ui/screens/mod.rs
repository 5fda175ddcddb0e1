mod calendar;
mod cities;
mod countdown;
mod today;

pub use {
    calendar::render_calendar, cities::render_cities, countdown::render_countdown_card,
    today::render_today,
};
