//! Light/dark theme preference.
//!
//! The preference is read once at startup and written back on every toggle.
//! Storage sits behind [`ThemeStore`] so the controller can be exercised
//! without a browser; the client backs it with `localStorage`.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;

/// Key the preference is persisted under.
pub const STORAGE_KEY: &str = "theme";

/// Attribute on the document root carrying the active theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything unrecognized is `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon class shown on toggle controls: the theme you would switch to.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "fa-moon",
            Self::Dark => "fa-sun",
        }
    }

    /// Icon class that must be removed when [`Theme::icon`] is shown.
    #[must_use]
    pub fn stale_icon(self) -> &'static str {
        self.toggled().icon()
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persistent key/value storage for the preference.
pub trait ThemeStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&mut self, key: &str, value: &str);
}

/// Owns the active theme and keeps the store in step with it.
pub struct ThemeController<S> {
    store: S,
    current: Theme,
}

impl<S: ThemeStore> ThemeController<S> {
    /// Read the stored preference, defaulting to light.
    pub fn load(store: S) -> Self {
        let current = store
            .load(STORAGE_KEY)
            .and_then(|raw| Theme::parse(&raw))
            .unwrap_or_default();
        Self { store, current }
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Make `theme` active and persist it. Applying the active theme again
    /// changes nothing.
    pub fn apply(&mut self, theme: Theme) -> Theme {
        self.current = theme;
        self.store.save(STORAGE_KEY, theme.as_str());
        theme
    }

    /// Flip the theme and persist it.
    pub fn toggle(&mut self) -> Theme {
        self.apply(self.current.toggled())
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}
