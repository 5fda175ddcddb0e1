//! The persisted "selected city" cell. Owned by the presentation layer; the resolver never reads it.

use {
    crate::{
        config::{DEFAULT_LOCATION, DF, PERSISTENCE},
        domain::Location,
    },
    anyhow::{Context, Result},
    std::{
        collections::BTreeMap,
        fs::{self, File},
        io::{BufReader, BufWriter, Write},
        path::{Path, PathBuf},
    },
};

/// A flat string key-value store.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Preferences kept in a JSON object on disk. Every `set` writes the file.
pub struct JsonFilePreferences {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl JsonFilePreferences {
    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.exists() {
            return Ok(Self {
                path,
                values: BTreeMap::new(),
            });
        }
        let file = File::open(&path)
            .with_context(|| format!("Failed to open preferences: {}", path.display()))?;
        let values: BTreeMap<String, String> = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse preferences: {}", path.display()))?;
        if DF.log_preferences {
            log::info!("Loaded {} preferences from {}", values.len(), path.display());
        }
        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        let file = File::create(&self.path)
            .with_context(|| format!("Failed to create file: {}", self.path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &self.values)?;
        writer.flush()?;
        if DF.log_preferences {
            log::info!("Saved preferences to {}", self.path.display());
        }
        Ok(())
    }
}

impl PreferenceStore for JsonFilePreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.save()
    }
}

/// In-memory store for callers that do not persist anything.
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    values: BTreeMap<String, String>,
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// The stored city, or the capital if nothing (or something unknown) is stored.
pub fn selected_location(store: &dyn PreferenceStore) -> &'static Location {
    store
        .get(PERSISTENCE.app.city_key)
        .map(|key| Location::resolve(&key))
        .unwrap_or(DEFAULT_LOCATION)
}

pub fn select_location(store: &mut dyn PreferenceStore, location: &Location) -> Result<()> {
    store.set(PERSISTENCE.app.city_key, location.key)
}
