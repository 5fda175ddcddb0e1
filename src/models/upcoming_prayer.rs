use {
    crate::domain::{Prayer, TimeOfDay},
    serde::Serialize,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UpcomingPrayer {
    pub prayer: Prayer,
    pub time: TimeOfDay,
    /// Every prayer of the day has passed; this is tomorrow's Fajr.
    pub is_tomorrow: bool,
}
