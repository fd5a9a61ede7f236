//! Native environment: a JSON preference file and OS color-scheme detection.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use serde_json::Value;
use tempfile::NamedTempFile;

use super::ThemeEnvironment;
use crate::config::ThemeConfig;
use crate::error::ThemeError;

/// Function used to query the OS dark-mode signal.
pub type DarkModeDetector = fn() -> bool;

/// Queries the OS color scheme through `dark-light`.
pub fn os_prefers_dark() -> bool {
    match detect_os_theme() {
        OsThemeMode::Dark => true,
        OsThemeMode::Light => false,
    }
}

type PreferenceMap = BTreeMap<String, Value>;

/// A [`ThemeEnvironment`] for desktop and command-line use.
///
/// Preferences live in a JSON object on disk (`{ "theme": "dark" }`); keys
/// this crate does not own are preserved on write. The presentation flag is
/// held in process for the caller to render.
///
/// The OS signal defaults to [`os_prefers_dark`] and can be replaced with
/// [`SystemEnvironment::with_detector`] to pin it in tests.
#[derive(Debug, Clone)]
pub struct SystemEnvironment {
    path: PathBuf,
    detector: DarkModeDetector,
    flags: BTreeSet<String>,
}

impl SystemEnvironment {
    /// Uses the preference file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            detector: os_prefers_dark,
            flags: BTreeSet::new(),
        }
    }

    /// Uses the preference file named by `config`.
    pub fn from_config(config: &ThemeConfig) -> Self {
        Self::new(config.storage_path())
    }

    /// Replaces the OS dark-mode detector.
    pub fn with_detector(mut self, detector: DarkModeDetector) -> Self {
        self.detector = detector;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_map(&self) -> Result<PreferenceMap, ThemeError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(PreferenceMap::new()),
            Err(source) => {
                return Err(ThemeError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        match serde_json::from_str(&content) {
            Ok(map) => Ok(map),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "preference file is not a JSON object, treating it as empty"
                );
                Ok(PreferenceMap::new())
            }
        }
    }
}

impl ThemeEnvironment for SystemEnvironment {
    fn read(&self, key: &str) -> Result<Option<String>, ThemeError> {
        let map = self.load_map()?;
        Ok(map.get(key).map(|value| match value {
            Value::String(s) => s.clone(),
            // Non-string values are malformed; keep their text so they coerce.
            other => other.to_string(),
        }))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        let mut map = self.load_map()?;
        map.insert(key.to_string(), Value::String(value.to_string()));

        let parent = match self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => parent.to_path_buf(),
            None => PathBuf::from("."),
        };
        fs::create_dir_all(&parent).map_err(|source| ThemeError::Io {
            path: parent.clone(),
            source,
        })?;

        // Write beside the target and rename over it, so an interrupted write
        // never leaves a truncated preference file behind.
        let content = serde_json::to_string_pretty(&map)?;
        let mut staged = NamedTempFile::new_in(&parent).map_err(|source| ThemeError::Io {
            path: parent.clone(),
            source,
        })?;
        staged
            .write_all(content.as_bytes())
            .and_then(|()| staged.as_file().sync_all())
            .map_err(|source| ThemeError::Io {
                path: staged.path().to_path_buf(),
                source,
            })?;
        staged
            .persist(&self.path)
            .map_err(|e| ThemeError::Io {
                path: self.path.clone(),
                source: e.error,
            })?;
        Ok(())
    }

    fn prefers_dark(&self) -> bool {
        (self.detector)()
    }

    fn set_flag(&mut self, name: &str, enabled: bool) -> Result<(), ThemeError> {
        if enabled {
            self.flags.insert(name.to_string());
        } else {
            self.flags.remove(name);
        }
        Ok(())
    }

    fn flag(&self, name: &str) -> bool {
        self.flags.contains(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_reads_none() {
        let dir = TempDir::new().unwrap();
        let env = SystemEnvironment::new(dir.path().join("prefs.json"));
        assert_eq!(env.read("theme").unwrap(), None);
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/deeper/prefs.json");
        let mut env = SystemEnvironment::new(&path);

        env.write("theme", "dark").unwrap();

        assert!(path.exists());
        assert_eq!(env.read("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_write_preserves_other_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, r#"{ "font": "serif", "size": 14 }"#).unwrap();

        let mut env = SystemEnvironment::new(&path);
        env.write("theme", "light").unwrap();

        let map: PreferenceMap = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(map.get("font"), Some(&Value::String("serif".into())));
        assert_eq!(map.get("size"), Some(&Value::from(14)));
        assert_eq!(map.get("theme"), Some(&Value::String("light".into())));
    }

    #[test]
    fn test_repeated_writes_keep_other_keys_and_leave_no_staging_files() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, r#"{ "font": "serif", "theme": "light" }"#).unwrap();

        let mut env = SystemEnvironment::new(&path);
        for value in ["dark", "light", "dark"] {
            env.write("theme", value).unwrap();
        }

        let map: PreferenceMap = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(map.get("font"), Some(&Value::String("serif".into())));
        assert_eq!(map.get("theme"), Some(&Value::String("dark".into())));

        let entries: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("prefs.json")]);
    }

    #[test]
    fn test_write_under_regular_file_fails() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let mut env = SystemEnvironment::new(blocker.join("prefs.json"));
        let err = env.write("theme", "dark").unwrap_err();
        assert!(matches!(err, ThemeError::Io { .. }));
        assert_eq!(fs::read_to_string(&blocker).unwrap(), "not a directory");
    }

    #[test]
    fn test_corrupt_file_reads_empty_and_is_replaced() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "{{ garbage").unwrap();

        let mut env = SystemEnvironment::new(&path);
        assert_eq!(env.read("theme").unwrap(), None);

        env.write("theme", "dark").unwrap();
        assert_eq!(env.read("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_non_string_value_is_returned_as_text() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, r#"{ "theme": true }"#).unwrap();

        let env = SystemEnvironment::new(&path);
        assert_eq!(env.read("theme").unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn test_detector_override() {
        let dir = TempDir::new().unwrap();
        let env = SystemEnvironment::new(dir.path().join("prefs.json")).with_detector(|| true);
        assert!(env.prefers_dark());

        let env = env.with_detector(|| false);
        assert!(!env.prefers_dark());
    }

    #[test]
    fn test_from_config_uses_storage_path() {
        let config = ThemeConfig::default().with_storage_path("/tmp/x/prefs.json");
        let env = SystemEnvironment::from_config(&config);
        assert_eq!(env.path(), Path::new("/tmp/x/prefs.json"));
    }
}
