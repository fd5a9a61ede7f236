//! Resolving, applying, and toggling the persisted theme.
//!
//! Resolution precedence:
//!
//! 1. A value in durable storage. `"light"` and `"dark"` are taken as-is; any
//!    other stored value is malformed and resolves to light.
//! 2. The OS dark-mode signal.
//! 3. Light.
//!
//! [`resolve`] and [`apply`] are the boundary operations over a
//! [`ThemeEnvironment`]; [`ThemeStore`] pairs an environment with the current
//! value so callers pass state explicitly instead of sharing a global.

use crate::config::ThemeConfig;
use crate::env::ThemeEnvironment;
use crate::error::ThemeError;
use crate::preference::ThemePreference;

/// Resolves the theme to use. Never fails.
///
/// A storage read error counts as "nothing stored".
pub fn resolve<E: ThemeEnvironment + ?Sized>(env: &E, config: &ThemeConfig) -> ThemePreference {
    let stored = match env.read(&config.storage_key) {
        Ok(stored) => stored,
        Err(e) => {
            tracing::warn!(error = %e, "could not read stored theme, ignoring it");
            None
        }
    };

    if let Some(value) = stored {
        let pref = ThemePreference::from_stored(&value);
        if pref.as_str() != value {
            tracing::debug!(stored = %value, "malformed stored theme, using light");
        }
        tracing::debug!(theme = %pref, source = "storage", "resolved theme");
        return pref;
    }

    let pref = if env.prefers_dark() {
        ThemePreference::Dark
    } else {
        ThemePreference::Light
    };
    tracing::debug!(theme = %pref, source = "os", "resolved theme");
    pref
}

/// Sets the presentation flag for `pref` and persists it.
///
/// # Errors
///
/// Returns the first adapter failure. The flag is updated before storage, so
/// the UI reflects `pref` even when persisting fails.
pub fn try_apply<E: ThemeEnvironment + ?Sized>(
    env: &mut E,
    config: &ThemeConfig,
    pref: ThemePreference,
) -> Result<(), ThemeError> {
    env.set_flag(&config.flag_name, pref.is_dark())?;
    env.write(&config.storage_key, pref.as_str())
}

/// Sets the presentation flag for `pref` and persists it, logging failures.
pub fn apply<E: ThemeEnvironment + ?Sized>(env: &mut E, config: &ThemeConfig, pref: ThemePreference) {
    if let Err(e) = try_apply(env, config, pref) {
        tracing::warn!(theme = %pref, error = %e, "could not apply theme");
    }
}

/// The current theme together with the environment it is persisted in.
///
/// # Example
///
/// ```rust
/// use theme_switch::{MemoryEnvironment, ThemePreference, ThemeStore};
///
/// let env = MemoryEnvironment::new().with_os_dark(true);
/// let mut store = ThemeStore::new(env);
///
/// assert_eq!(store.load(), ThemePreference::Dark);
/// assert_eq!(store.toggle_and_apply(), ThemePreference::Light);
/// assert_eq!(store.env().stored("theme"), Some("light"));
/// ```
#[derive(Debug, Clone)]
pub struct ThemeStore<E> {
    env: E,
    config: ThemeConfig,
    current: ThemePreference,
}

impl<E: ThemeEnvironment> ThemeStore<E> {
    /// Creates a store with the default config. Nothing is read until
    /// [`load`](Self::load) or [`resolve`](Self::resolve).
    pub fn new(env: E) -> Self {
        Self::with_config(env, ThemeConfig::default())
    }

    pub fn with_config(env: E, config: ThemeConfig) -> Self {
        Self {
            env,
            config,
            current: ThemePreference::default(),
        }
    }

    /// Resolves the theme from the environment and makes it current.
    pub fn resolve(&mut self) -> ThemePreference {
        self.current = resolve(&self.env, &self.config);
        self.current
    }

    /// Applies `pref` and makes it current, logging adapter failures.
    pub fn apply(&mut self, pref: ThemePreference) {
        self.current = pref;
        apply(&mut self.env, &self.config, pref);
    }

    /// Applies `pref` and makes it current.
    ///
    /// # Errors
    ///
    /// Returns the adapter failure; `pref` is still current afterwards.
    pub fn try_apply(&mut self, pref: ThemePreference) -> Result<(), ThemeError> {
        self.current = pref;
        try_apply(&mut self.env, &self.config, pref)
    }

    /// Page-load step: resolves, then applies the result.
    pub fn load(&mut self) -> ThemePreference {
        let pref = self.resolve();
        self.apply(pref);
        pref
    }

    /// Toggles the current theme and applies it.
    pub fn toggle_and_apply(&mut self) -> ThemePreference {
        let next = self.current.toggle();
        self.apply(next);
        next
    }

    pub fn current(&self) -> ThemePreference {
        self.current
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    pub fn env(&self) -> &E {
        &self.env
    }

    pub fn env_mut(&mut self) -> &mut E {
        &mut self.env
    }

    /// Whether the environment's presentation flag is set.
    pub fn flag_set(&self) -> bool {
        self.env.flag(&self.config.flag_name)
    }

    pub fn into_env(self) -> E {
        self.env
    }
}
