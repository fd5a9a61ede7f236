//! # Theme Switch - persisted light/dark theme selection
//!
//! `theme-switch` decides whether a UI should render light or dark, remembers
//! the user's choice, and flips a presentation flag so the rendering layer can
//! follow along.
//!
//! ## Core Concepts
//!
//! - [`ThemePreference`]: `Light` or `Dark`, nothing else
//! - [`ThemeEnvironment`]: storage, OS signal, and presentation flag behind one trait
//! - [`ThemeStore`]: the current theme plus the environment it lives in
//! - [`ThemeSwitcher`]: the toggle button component
//! - [`ThemeConfig`]: storage key, flag name, preference file
//!
//! ## Resolution
//!
//! An explicit stored choice wins. Without one, the OS dark-mode signal
//! decides. Without that, the theme is light. A stored value other than
//! exactly `"light"` or `"dark"` resolves to light rather than falling
//! through to the OS.
//!
//! ```rust
//! use theme_switch::{resolve, MemoryEnvironment, ThemeConfig, ThemePreference};
//!
//! let config = ThemeConfig::default();
//!
//! let env = MemoryEnvironment::new().with_os_dark(true);
//! assert_eq!(resolve(&env, &config), ThemePreference::Dark);
//!
//! let env = env.with_stored("theme", "light");
//! assert_eq!(resolve(&env, &config), ThemePreference::Light);
//!
//! let env = env.with_stored("theme", "sepia");
//! assert_eq!(resolve(&env, &config), ThemePreference::Light);
//! ```
//!
//! ## Environments
//!
//! - [`MemoryEnvironment`] for tests and previews
//! - [`SystemEnvironment`] for native apps: a JSON preference file and the
//!   OS color scheme from `dark-light`
//! - `BrowserEnvironment` (feature `web`): `localStorage`, `matchMedia`, and
//!   the `dark` class on the document root

pub mod config;
pub mod env;
pub mod error;
pub mod preference;
pub mod store;
pub mod switcher;

pub use config::{default_config_path, ThemeConfig, STORAGE_PATH_ENV};
#[cfg(feature = "web")]
pub use env::BrowserEnvironment;
pub use env::{os_prefers_dark, DarkModeDetector, MemoryEnvironment, SystemEnvironment, ThemeEnvironment};
pub use error::{ParsePreferenceError, ThemeError};
pub use preference::{toggle, ThemePreference};
pub use store::{apply, resolve, try_apply, ThemeStore};
pub use switcher::{label_for, ThemeSwitcher, BUTTON_CLASS};
