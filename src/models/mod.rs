mod daily_prayer_record;
mod prayer_times;
mod time_remaining;
mod upcoming_prayer;

pub use {
    daily_prayer_record::DailyPrayerRecord, prayer_times::PrayerTimes,
    time_remaining::TimeRemaining, upcoming_prayer::UpcomingPrayer,
};
