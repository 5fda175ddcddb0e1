use crate::config::{DEFAULT_LOCATION, DF, LOCATIONS};

/// A division headquarters the time table is keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    /// Lookup key into the time table (e.g. "Dhaka")
    pub key: &'static str,
    pub name: &'static str,
    pub name_bn: &'static str,
}

impl Location {
    pub const fn new(key: &'static str, name: &'static str, name_bn: &'static str) -> Self {
        Self { key, name, name_bn }
    }

    /// Look up a division by key, English name or Bengali name. ASCII case is ignored.
    pub fn find(query: &str) -> Option<&'static Location> {
        let query = query.trim();
        LOCATIONS.iter().find(|loc| {
            loc.key.eq_ignore_ascii_case(query)
                || loc.name.eq_ignore_ascii_case(query)
                || loc.name_bn == query
        })
    }

    /// Same as [`Location::find`] but never fails: unknown queries resolve to the capital.
    pub fn resolve(query: &str) -> &'static Location {
        match Self::find(query) {
            Some(loc) => loc,
            None => {
                if DF.log_fallbacks {
                    log::warn!(
                        "Unknown location '{}', using {}",
                        query,
                        DEFAULT_LOCATION.name
                    );
                }
                DEFAULT_LOCATION
            }
        }
    }

    pub fn is_default(&self) -> bool {
        self.key == DEFAULT_LOCATION.key
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
