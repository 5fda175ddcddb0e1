use {
    crate::domain::HalfDay,
    serde::{Deserialize, Serialize},
    strum_macros::{Display, EnumIter},
};

/// The five daily prayers, declared in chronological order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Prayer {
    Fajr,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl Prayer {
    pub const ALL: [Prayer; 5] = [
        Prayer::Fajr,
        Prayer::Dhuhr,
        Prayer::Asr,
        Prayer::Maghrib,
        Prayer::Isha,
    ];

    pub fn name_bn(&self) -> &'static str {
        match self {
            Self::Fajr => "ফজর",
            Self::Dhuhr => "যোহর",
            Self::Asr => "আসর",
            Self::Maghrib => "মাগরিব",
            Self::Isha => "ইশা",
        }
    }

    /// Which half of the day a bare 12-hour reading (no AM/PM marker) for this prayer belongs to.
    /// Dhuhr straddles noon: 11 is still morning, 12 and 1..10 are afternoon.
    pub fn half_day_for_bare_hour(&self, hour: u32) -> HalfDay {
        match self {
            Self::Fajr => HalfDay::Morning,
            Self::Dhuhr if hour == 11 => HalfDay::Morning,
            Self::Dhuhr | Self::Asr | Self::Maghrib | Self::Isha => HalfDay::Afternoon,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn iteration_order_is_chronological() {
        let order: Vec<Prayer> = Prayer::iter().collect();
        assert_eq!(order, Prayer::ALL.to_vec());
        assert!(Prayer::Fajr < Prayer::Isha);
    }

    #[test]
    fn dhuhr_bare_hours() {
        assert_eq!(Prayer::Dhuhr.half_day_for_bare_hour(11), HalfDay::Morning);
        assert_eq!(Prayer::Dhuhr.half_day_for_bare_hour(12), HalfDay::Afternoon);
        for hour in 1..=10 {
            assert_eq!(Prayer::Dhuhr.half_day_for_bare_hour(hour), HalfDay::Afternoon);
        }
        assert_eq!(Prayer::Fajr.half_day_for_bare_hour(5), HalfDay::Morning);
        assert_eq!(Prayer::Isha.half_day_for_bare_hour(7), HalfDay::Afternoon);
    }
}
