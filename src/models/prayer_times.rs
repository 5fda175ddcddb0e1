use {
    crate::domain::{Prayer, TimeOfDay},
    serde::{Deserialize, Serialize},
};

/// The five prayer times of one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PrayerTimes {
    pub fajr: TimeOfDay,
    pub dhuhr: TimeOfDay,
    pub asr: TimeOfDay,
    pub maghrib: TimeOfDay,
    pub isha: TimeOfDay,
}

impl PrayerTimes {
    /// All-zero times used when the table has no entry for a date.
    pub const ZERO: Self = Self {
        fajr: TimeOfDay::MIDNIGHT,
        dhuhr: TimeOfDay::MIDNIGHT,
        asr: TimeOfDay::MIDNIGHT,
        maghrib: TimeOfDay::MIDNIGHT,
        isha: TimeOfDay::MIDNIGHT,
    };

    pub fn get(&self, prayer: Prayer) -> TimeOfDay {
        match prayer {
            Prayer::Fajr => self.fajr,
            Prayer::Dhuhr => self.dhuhr,
            Prayer::Asr => self.asr,
            Prayer::Maghrib => self.maghrib,
            Prayer::Isha => self.isha,
        }
    }

    /// Prayers with their times, in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = (Prayer, TimeOfDay)> + '_ {
        Prayer::ALL.into_iter().map(|p| (p, self.get(p)))
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}
