use {
    crate::{
        domain::{Prayer, TimeOfDay},
        models::{PrayerTimes, TimeRemaining, UpcomingPrayer},
        utils::TimeUtils,
    },
    chrono::{Duration, NaiveDateTime},
};

/// Time left until the next occurrence of `target`.
///
/// The target is placed on `now`'s date; if that is not after `now` it moves to the next day.
/// The result is reduced modulo one day, so it is always in `00:00:00..=23:59:59` and reads
/// exactly zero at the target instant itself. Recomputed from scratch on every call, so ticking
/// once per second cannot drift.
pub fn time_until(target: TimeOfDay, now: NaiveDateTime) -> TimeRemaining {
    let mut target_at = target.on(now.date());
    if target_at <= now {
        target_at += Duration::days(1);
    }
    let remaining = (target_at - now)
        .num_seconds()
        .rem_euclid(TimeUtils::SECS_IN_D);
    TimeRemaining::from_seconds(remaining as u32)
}

/// First prayer of the day whose time is strictly after `now`.
/// When all five have passed, Fajr is returned flagged as tomorrow's.
pub fn next_upcoming(times: &PrayerTimes, now: NaiveDateTime) -> UpcomingPrayer {
    let today = now.date();
    times
        .iter()
        .find(|(_, time)| time.on(today) > now)
        .map(|(prayer, time)| UpcomingPrayer {
            prayer,
            time,
            is_tomorrow: false,
        })
        .unwrap_or(UpcomingPrayer {
            prayer: Prayer::Fajr,
            time: times.fajr,
            is_tomorrow: true,
        })
}

/// The next prayer together with the time left until it.
pub fn countdown_to_next(times: &PrayerTimes, now: NaiveDateTime) -> (UpcomingPrayer, TimeRemaining) {
    let next = next_upcoming(times, now);
    (next, time_until(next.time, now))
}
