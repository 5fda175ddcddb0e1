//! File persistence configuration

/// Configuration for the prayer time table
pub struct TablePersistenceConfig {
    /// Directory holding the bundled table (relative to the crate root)
    pub directory: &'static str,
    /// File name of the bundled table
    pub filename: &'static str,
}

/// Configuration for Application State Persistence
pub struct AppPersistenceConfig {
    /// Path for saving/loading user preferences
    pub state_path: &'static str,
    /// Preference key holding the selected location
    pub city_key: &'static str,
}

/// The Master Persistence Configuration
pub struct PersistenceConfig {
    pub table: TablePersistenceConfig,
    pub app: AppPersistenceConfig,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    table: TablePersistenceConfig {
        directory: "data",
        filename: "prayer.json",
    },
    app: AppPersistenceConfig {
        state_path: ".states.json",
        city_key: "city-storage",
    },
};

// --- MACROS FOR COMPILE-TIME INCLUDES ---
// include_str! needs a literal, so the bundled path is spelled out here.
// Keep in sync with PERSISTENCE.table.

#[macro_export]
macro_rules! bundled_table_file {
    () => {
        concat!(env!("CARGO_MANIFEST_DIR"), "/data/prayer.json")
    };
}
