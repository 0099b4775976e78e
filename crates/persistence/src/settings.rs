//! Startup settings read from the process environment.
use std::env;
use std::path::PathBuf;

/// Environment variable naming the data root for entity records.
pub const DATA_PATH_VAR: &str = "DATA_PATH";
/// Environment variable naming the config file loaded at startup.
pub const CONFIG_FILE_VAR: &str = "CONFIG_FILE";

/// Where the stores find their files.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StoreSettings {
    pub data_path: Option<PathBuf>,
    pub config_file: Option<PathBuf>,
}

impl StoreSettings {
    pub fn new(data_path: impl Into<PathBuf>, config_file: impl Into<PathBuf>) -> Self {
        Self {
            data_path: Some(data_path.into()),
            config_file: Some(config_file.into()),
        }
    }

    /// Construct settings from process environment variables.
    ///
    /// Environment variables:
    /// - `DATA_PATH` - Root directory for player/account records (default: unset)
    /// - `CONFIG_FILE` - JSON or YAML config file to load (default: unset)
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Construct settings from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read_path = |key: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .map(PathBuf::from)
        };

        Self {
            data_path: read_path(DATA_PATH_VAR),
            config_file: read_path(CONFIG_FILE_VAR),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_from_vars() {
        let vars = HashMap::from([
            (DATA_PATH_VAR, "/srv/mud/data"),
            (CONFIG_FILE_VAR, "/srv/mud/server.yaml"),
        ]);

        let settings = StoreSettings::from_vars(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(
            settings,
            StoreSettings::new("/srv/mud/data", "/srv/mud/server.yaml")
        );
    }

    #[test]
    fn test_empty_values_are_unset() {
        let settings = StoreSettings::from_vars(|key| match key {
            DATA_PATH_VAR => Some("  ".to_string()),
            _ => None,
        });

        assert_eq!(settings, StoreSettings::default());
    }
}
