mod preferences;
mod raw;
mod time_table;

pub use {
    preferences::{
        JsonFilePreferences, MemoryPreferences, PreferenceStore, select_location,
        selected_location,
    },
    raw::ClockFormat,
    time_table::{TimeTable, TimeTableEntry},
};
