use {
    crate::utils::{AppInstant, local_now},
    chrono::{Duration, FixedOffset, NaiveDateTime},
};

/// Source of "now" for the presentation layer. The engine never reads a clock itself.
pub enum Clock {
    /// Wall clock shifted into the table's civil time.
    System(FixedOffset),
    /// Starts at a fixed instant and advances in real time (for `--now`).
    Pinned {
        start: NaiveDateTime,
        started: AppInstant,
    },
}

impl Clock {
    pub fn pinned(start: NaiveDateTime) -> Self {
        Self::Pinned {
            start,
            started: AppInstant::now(),
        }
    }

    pub fn now(&self) -> NaiveDateTime {
        match self {
            Self::System(offset) => local_now(*offset),
            Self::Pinned { start, started } => {
                *start + Duration::from_std(started.elapsed()).unwrap_or(Duration::zero())
            }
        }
    }
}
