//! Light/dark theme selection and its single persisted preference.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const THEME_STORAGE_KEY: &str = "portfolio-theme";
pub const THEME_ATTRIBUTE: &str = "data-theme";
pub const PREFERS_LIGHT_QUERY: &str = "(prefers-color-scheme: light)";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown theme {0:?}")]
pub struct ParseThemeError(pub String);

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Value of the root `data-theme` attribute; dark is the page default and
    /// is expressed by removing the attribute.
    pub fn attribute_value(self) -> Option<&'static str> {
        match self {
            Theme::Light => Some("light"),
            Theme::Dark => None,
        }
    }

    /// Read the theme currently shown from the root attribute.
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn from_prefers_light(prefers_light: bool) -> Self {
        if prefers_light {
            Theme::Light
        } else {
            Theme::Dark
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

/// Key/value store holding the theme preference (localStorage in the browser).
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

pub struct ThemeController<S> {
    store: S,
}

impl<S: PreferenceStore> ThemeController<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Stored preference, if any. Empty values count as absent; unrecognized
    /// values fall back to dark.
    pub fn stored(&self) -> Option<Theme> {
        self.store
            .get(THEME_STORAGE_KEY)
            .filter(|s| !s.is_empty())
            .map(|s| s.parse().unwrap_or(Theme::Dark))
    }

    /// Theme to apply at page load. `None` leaves the page default in place.
    pub fn initial(&self) -> Option<Theme> {
        self.stored()
    }

    /// Flip `current`, persist the result and return it.
    pub fn toggle(&mut self, current: Theme) -> Theme {
        let next = current.toggled();
        self.store.set(THEME_STORAGE_KEY, next.as_str());
        log::info!("[theme] switched to {}", next);
        next
    }

    /// Follow an OS color-scheme change only while the user has no stored preference.
    pub fn on_system_change(&self, prefers_light: bool) -> Option<Theme> {
        match self.stored() {
            Some(_) => None,
            None => Some(Theme::from_prefers_light(prefers_light)),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
