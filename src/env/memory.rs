//! In-memory environment.

use std::collections::{BTreeSet, HashMap};

use super::ThemeEnvironment;
use crate::error::ThemeError;

/// A [`ThemeEnvironment`] that keeps everything in memory.
///
/// # Example
///
/// ```rust
/// use theme_switch::{MemoryEnvironment, ThemeEnvironment};
///
/// let env = MemoryEnvironment::new()
///     .with_stored("theme", "dark")
///     .with_os_dark(false);
/// assert_eq!(env.read("theme").unwrap().as_deref(), Some("dark"));
/// assert!(!env.prefers_dark());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryEnvironment {
    storage: HashMap<String, String>,
    os_dark: Option<bool>,
    flags: BTreeSet<String>,
}

impl MemoryEnvironment {
    /// Empty storage, no OS signal, no flags.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates storage, returning the updated environment for chaining.
    pub fn with_stored(mut self, key: &str, value: &str) -> Self {
        self.storage.insert(key.to_string(), value.to_string());
        self
    }

    /// Sets the OS dark-mode signal.
    pub fn with_os_dark(mut self, dark: bool) -> Self {
        self.os_dark = Some(dark);
        self
    }

    /// Removes the OS signal, as on platforms that do not report one.
    pub fn without_os_signal(mut self) -> Self {
        self.os_dark = None;
        self
    }

    /// Raw access to stored values.
    pub fn stored(&self, key: &str) -> Option<&str> {
        self.storage.get(key).map(String::as_str)
    }

    /// The currently set presentation flags.
    pub fn flags(&self) -> impl Iterator<Item = &str> {
        self.flags.iter().map(String::as_str)
    }
}

impl ThemeEnvironment for MemoryEnvironment {
    fn read(&self, key: &str) -> Result<Option<String>, ThemeError> {
        Ok(self.storage.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.storage.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn prefers_dark(&self) -> bool {
        self.os_dark.unwrap_or(false)
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

    #[test]
    fn test_write_overwrites() {
        let mut env = MemoryEnvironment::new().with_stored("theme", "light");
        env.write("theme", "dark").unwrap();
        assert_eq!(env.stored("theme"), Some("dark"));
    }

    #[test]
    fn test_missing_key_reads_none() {
        let env = MemoryEnvironment::new();
        assert_eq!(env.read("theme").unwrap(), None);
    }

    #[test]
    fn test_os_signal_unavailable_is_not_dark() {
        let env = MemoryEnvironment::new().with_os_dark(true).without_os_signal();
        assert!(!env.prefers_dark());
    }

    #[test]
    fn test_flags_set_and_clear() {
        let mut env = MemoryEnvironment::new();
        env.set_flag("dark", true).unwrap();
        env.set_flag("dark", true).unwrap();
        assert_eq!(env.flags().collect::<Vec<_>>(), vec!["dark"]);

        env.set_flag("dark", false).unwrap();
        assert!(!env.flag("dark"));
        assert_eq!(env.flags().count(), 0);
    }
}
