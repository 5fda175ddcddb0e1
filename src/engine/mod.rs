mod countdown;
mod resolver;

pub use {
    countdown::{countdown_to_next, next_upcoming, time_until},
    resolver::{PrayerResolver, ResolveStatus, Resolution},
};
