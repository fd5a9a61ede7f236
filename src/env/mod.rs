//! Environment capabilities used to resolve and apply a theme.
//!
//! A [`ThemeEnvironment`] bundles the three things theme persistence touches:
//!
//! - durable key-value storage (`read` / `write`)
//! - the OS dark-mode signal (`prefers_dark`)
//! - the presentation flag the rendering layer observes (`set_flag` / `flag`)
//!
//! Implementations:
//!
//! - [`MemoryEnvironment`]: in-memory double, for tests and previews
//! - [`SystemEnvironment`]: JSON preference file plus OS detection via `dark-light`
//! - `BrowserEnvironment` (feature `web`): `localStorage`, `matchMedia`, and
//!   the root element's class list

#[cfg(feature = "web")]
mod browser;
mod memory;
mod system;

#[cfg(feature = "web")]
pub use browser::BrowserEnvironment;
pub use memory::MemoryEnvironment;
pub use system::{os_prefers_dark, DarkModeDetector, SystemEnvironment};

use crate::error::ThemeError;

/// Side-effecting boundary between theme logic and its runtime.
pub trait ThemeEnvironment {
    /// Returns the stored value for `key`, or `None` when nothing is stored.
    fn read(&self, key: &str) -> Result<Option<String>, ThemeError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn write(&mut self, key: &str, value: &str) -> Result<(), ThemeError>;

    /// Whether the OS reports an active dark-mode preference.
    ///
    /// Returns `false` when the signal is unavailable.
    fn prefers_dark(&self) -> bool;

    /// Sets or clears the named presentation flag.
    fn set_flag(&mut self, name: &str, enabled: bool) -> Result<(), ThemeError>;

    /// Whether the named presentation flag is currently set.
    fn flag(&self, name: &str) -> bool;
}

impl<E: ThemeEnvironment + ?Sized> ThemeEnvironment for &mut E {
    fn read(&self, key: &str) -> Result<Option<String>, ThemeError> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        (**self).write(key, value)
    }

    fn prefers_dark(&self) -> bool {
        (**self).prefers_dark()
    }

    fn set_flag(&mut self, name: &str, enabled: bool) -> Result<(), ThemeError> {
        (**self).set_flag(name, enabled)
    }

    fn flag(&self, name: &str) -> bool {
        (**self).flag(name)
    }
}
