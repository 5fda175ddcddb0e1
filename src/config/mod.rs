//! Configuration module for the Ramadan timings application.

// Can all be private now because we have a public re-export.
mod debug;
mod locations;
mod persistence;
mod ramadan;

// Re-export commonly used items
pub use debug::{DF, LOG_PERFORMANCE, LogFlags};
pub use locations::{DEFAULT_LOCATION, LOCATIONS};
pub use persistence::PERSISTENCE;
pub use ramadan::{RAMADAN, RamadanConfig};
