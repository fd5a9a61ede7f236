//! Browser environment backed by `web-sys`.

use web_sys::{Element, Storage, Window};

use super::ThemeEnvironment;
use crate::error::ThemeError;

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// A [`ThemeEnvironment`] over `window.localStorage`, `matchMedia`, and the
/// class list of `document.documentElement`.
#[derive(Debug, Clone)]
pub struct BrowserEnvironment {
    window: Window,
}

impl BrowserEnvironment {
    /// Binds to the global `window`.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Unavailable`] outside a browser context.
    pub fn new() -> Result<Self, ThemeError> {
        let window = web_sys::window().ok_or_else(|| ThemeError::Unavailable("window".into()))?;
        Ok(Self { window })
    }

    fn storage(&self) -> Result<Storage, ThemeError> {
        self.window
            .local_storage()
            .ok()
            .flatten()
            .ok_or_else(|| ThemeError::Unavailable("localStorage".into()))
    }

    fn root(&self) -> Result<Element, ThemeError> {
        self.window
            .document()
            .and_then(|doc| doc.document_element())
            .ok_or_else(|| ThemeError::Unavailable("document element".into()))
    }
}

impl ThemeEnvironment for BrowserEnvironment {
    fn read(&self, key: &str) -> Result<Option<String>, ThemeError> {
        self.storage()?
            .get_item(key)
            .map_err(|_| ThemeError::Unavailable("localStorage.getItem".into()))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|_| ThemeError::Unavailable("localStorage.setItem".into()))
    }

    fn prefers_dark(&self) -> bool {
        self.window
            .match_media(DARK_QUERY)
            .ok()
            .flatten()
            .map(|query| query.matches())
            .unwrap_or(false)
    }

    fn set_flag(&mut self, name: &str, enabled: bool) -> Result<(), ThemeError> {
        let classes = self.root()?.class_list();
        let result = if enabled {
            classes.add_1(name)
        } else {
            classes.remove_1(name)
        };
        result.map_err(|_| ThemeError::Unavailable("classList".into()))
    }

    fn flag(&self, name: &str) -> bool {
        self.root()
            .map(|root| root.class_list().contains(name))
            .unwrap_or(false)
    }
}
