//! Debugging feature flags.

/// Activate trace_time macro (for scope-level timing)
pub const LOG_PERFORMANCE: bool = false;

pub struct LogFlags {
    /// Log a summary (locations, entry count, source) whenever a time table is loaded.
    pub log_table_load: bool,

    /// Log when a lookup silently substitutes the default location, a zero record or the day-1 preview.
    pub log_fallbacks: bool,

    /// Log reads and writes of the preference file.
    pub log_preferences: bool,

    /// Emit one line per countdown tick in watch mode.
    pub log_countdown_ticks: bool,
}

pub const DF: LogFlags = LogFlags {
    log_table_load: true,
    log_fallbacks: true,

    log_preferences: false,
    log_countdown_ticks: false,
};
