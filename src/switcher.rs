//! The theme switcher button.
//!
//! The button label names the theme a click switches *to*: `[Dark]` while the
//! page is light, `[Light]` while it is dark. Clicking toggles and applies in
//! one step, so storage and the presentation flag never lag behind the label.

use minijinja::{context, Environment, Error};
use once_cell::sync::Lazy;

use crate::env::ThemeEnvironment;
use crate::preference::ThemePreference;
use crate::store::ThemeStore;

const BUTTON_TEMPLATE: &str = r#"<button type="button" class="{{ class }}" data-theme="{{ theme }}" aria-pressed="{{ pressed }}">{{ label }}</button>"#;

/// Class carried by the button itself so it stays legible in dark mode.
pub const BUTTON_CLASS: &str = "dark:text-white";

static TEMPLATES: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();
    env.add_template("button.html", BUTTON_TEMPLATE)
        .expect("built-in button template is valid");
    env
});

/// Label shown on the switcher while `current` is active.
pub fn label_for(current: ThemePreference) -> &'static str {
    match current {
        ThemePreference::Light => "[Dark]",
        ThemePreference::Dark => "[Light]",
    }
}

/// Interactive switcher over a [`ThemeStore`].
///
/// # Example
///
/// ```rust
/// use theme_switch::{MemoryEnvironment, ThemePreference, ThemeSwitcher};
///
/// let mut switcher = ThemeSwitcher::new(MemoryEnvironment::new());
/// assert_eq!(switcher.label(), "[Dark]");
///
/// switcher.click();
/// assert_eq!(switcher.current(), ThemePreference::Dark);
/// assert_eq!(switcher.root_class(), "dark");
/// ```
#[derive(Debug, Clone)]
pub struct ThemeSwitcher<E> {
    store: ThemeStore<E>,
}

impl<E: ThemeEnvironment> ThemeSwitcher<E> {
    /// Mounts a switcher with the default config, loading the current theme.
    pub fn new(env: E) -> Self {
        Self::from_store(ThemeStore::new(env))
    }

    /// Mounts a switcher over an existing store, loading the current theme.
    pub fn from_store(mut store: ThemeStore<E>) -> Self {
        store.load();
        Self { store }
    }

    pub fn current(&self) -> ThemePreference {
        self.store.current()
    }

    pub fn label(&self) -> &'static str {
        label_for(self.current())
    }

    /// Toggles and applies, returning the new theme.
    pub fn click(&mut self) -> ThemePreference {
        self.store.toggle_and_apply()
    }

    /// Value for the document root's `class` attribute.
    pub fn root_class(&self) -> &str {
        if self.store.flag_set() {
            &self.store.config().flag_name
        } else {
            ""
        }
    }

    /// Renders the button markup.
    ///
    /// # Errors
    ///
    /// Returns a template error if rendering fails.
    pub fn render_button(&self) -> Result<String, Error> {
        let tmpl = TEMPLATES.get_template("button.html")?;
        // ARIA expects lowercase tokens; minijinja prints bools as True/False.
        let pressed = if self.current().is_dark() { "true" } else { "false" };
        tmpl.render(context! {
            class => BUTTON_CLASS,
            theme => self.current().as_str(),
            pressed => pressed,
            label => self.label(),
        })
    }

    pub fn store(&self) -> &ThemeStore<E> {
        &self.store
    }

    pub fn into_store(self) -> ThemeStore<E> {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThemeConfig;
    use crate::env::MemoryEnvironment;

    #[test]
    fn test_label_names_target_theme() {
        assert_eq!(label_for(ThemePreference::Light), "[Dark]");
        assert_eq!(label_for(ThemePreference::Dark), "[Light]");
    }

    #[test]
    fn test_mount_applies_resolved_theme() {
        let switcher = ThemeSwitcher::new(MemoryEnvironment::new().with_os_dark(true));
        assert_eq!(switcher.current(), ThemePreference::Dark);
        assert_eq!(switcher.label(), "[Light]");
        assert_eq!(switcher.store().env().stored("theme"), Some("dark"));
    }

    #[test]
    fn test_click_toggles_and_persists() {
        let mut switcher = ThemeSwitcher::new(MemoryEnvironment::new());
        assert_eq!(switcher.root_class(), "");

        assert_eq!(switcher.click(), ThemePreference::Dark);
        assert_eq!(switcher.root_class(), "dark");
        assert_eq!(switcher.store().env().stored("theme"), Some("dark"));

        assert_eq!(switcher.click(), ThemePreference::Light);
        assert_eq!(switcher.root_class(), "");
        assert_eq!(switcher.store().env().stored("theme"), Some("light"));
    }

    #[test]
    fn test_root_class_uses_configured_flag() {
        let config = ThemeConfig {
            flag_name: "theme-dark".into(),
            ..ThemeConfig::default()
        };
        let env = MemoryEnvironment::new().with_stored("theme", "dark");
        let switcher = ThemeSwitcher::from_store(ThemeStore::with_config(env, config));
        assert_eq!(switcher.root_class(), "theme-dark");
    }

    #[test]
    fn test_render_button_light() {
        let switcher = ThemeSwitcher::new(MemoryEnvironment::new());
        let html = switcher.render_button().unwrap();
        assert_eq!(
            html,
            r#"<button type="button" class="dark:text-white" data-theme="light" aria-pressed="false">[Dark]</button>"#
        );
    }

    #[test]
    fn test_render_button_dark() {
        let mut switcher = ThemeSwitcher::new(MemoryEnvironment::new());
        switcher.click();
        let html = switcher.render_button().unwrap();
        assert_eq!(
            html,
            r#"<button type="button" class="dark:text-white" data-theme="dark" aria-pressed="true">[Light]</button>"#
        );
        assert!(!html.contains("True"));
    }
}
