//! Configuration for the storage key, presentation flag, and preference file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

/// Environment variable that overrides [`ThemeConfig::storage_path`].
pub const STORAGE_PATH_ENV: &str = "THEME_SWITCH_STORAGE";

const APP_DIR: &str = "theme-switch";
const PREFERENCES_FILE: &str = "preferences.json";
const CONFIG_FILE: &str = "config.json";

fn default_storage_key() -> String {
    "theme".to_string()
}

fn default_flag_name() -> String {
    "dark".to_string()
}

/// Names and locations used when reading and applying a preference.
///
/// Every field has a default, so an empty JSON object is a valid config:
///
/// ```rust
/// use theme_switch::ThemeConfig;
///
/// let config: ThemeConfig = serde_json::from_str("{}").unwrap();
/// assert_eq!(config.storage_key, "theme");
/// assert_eq!(config.flag_name, "dark");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Key under which the preference is stored.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Name of the presentation flag (the CSS class toggled on the root).
    #[serde(default = "default_flag_name")]
    pub flag_name: String,
    /// Preference file used by the native environment.
    #[serde(default)]
    pub storage_path: Option<PathBuf>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            flag_name: default_flag_name(),
            storage_path: None,
        }
    }
}

impl ThemeConfig {
    /// Loads configuration from `path`, or from the default location when
    /// `path` is `None`.
    ///
    /// A missing file yields the defaults. `THEME_SWITCH_STORAGE`, when set,
    /// replaces the storage path from the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ThemeError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => default_config_path(),
        };

        let mut config = match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content)
                .map_err(|source| ThemeError::Config {
                    path: path.clone(),
                    source,
                })?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Self::default()
            }
            Err(source) => return Err(ThemeError::Io { path, source }),
        };

        if let Some(value) = std::env::var_os(STORAGE_PATH_ENV) {
            if !value.is_empty() {
                config.storage_path = Some(PathBuf::from(value));
            }
        }

        Ok(config)
    }

    /// Sets the preference file, returning the updated config for chaining.
    pub fn with_storage_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage_path = Some(path.into());
        self
    }

    /// The preference file, falling back to the per-user config directory.
    pub fn storage_path(&self) -> PathBuf {
        match &self.storage_path {
            Some(path) => path.clone(),
            None => app_dir().join(PREFERENCES_FILE),
        }
    }
}

/// Default location of the configuration file.
pub fn default_config_path() -> PathBuf {
    app_dir().join(CONFIG_FILE)
}

fn app_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}
