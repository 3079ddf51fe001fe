//! Light/dark theme preference.
//!
//! A stored choice wins; otherwise the OS colour-scheme preference decides.
//! Storage failures are never surfaced: a failed read counts as "no stored
//! preference" and a failed write only loses persistence.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::SiteResult;

/// Key under which the choice is persisted
pub const THEME_STORAGE_KEY: &str = "bravonest:theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == Theme::Dark
    }

    /// Class applied to the site root
    pub fn root_class(&self) -> &'static str {
        match self {
            Theme::Light => "site-root",
            Theme::Dark => "site-root dark",
        }
    }

    /// Tooltip for the toggle button
    pub fn toggle_title(&self) -> &'static str {
        match self {
            Theme::Light => "Switch to dark mode",
            Theme::Dark => "Switch to light mode",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme '{}'", other)),
        }
    }
}

/// Client-side key/value persistence
pub trait PreferenceStore {
    fn get(&self, key: &str) -> SiteResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> SiteResult<()>;
}

/// Stored theme, ignoring unreadable storage and unknown values
pub fn stored_theme(store: &dyn PreferenceStore) -> Option<Theme> {
    match store.get(THEME_STORAGE_KEY) {
        Ok(Some(value)) => value.parse().ok(),
        Ok(None) => None,
        Err(e) => {
            debug!("Theme preference unreadable, ignoring: {}", e);
            None
        }
    }
}

/// Theme to show on start-up
pub fn resolve_theme(store: &dyn PreferenceStore, system_prefers_dark: bool) -> Theme {
    stored_theme(store).unwrap_or(if system_prefers_dark {
        Theme::Dark
    } else {
        Theme::Light
    })
}

/// Persist `theme`. Returns false when storage refused the write.
pub fn persist_theme(store: &mut dyn PreferenceStore, theme: Theme) -> bool {
    match store.set(THEME_STORAGE_KEY, theme.as_str()) {
        Ok(()) => true,
        Err(e) => {
            debug!("Theme preference not saved: {}", e);
            false
        }
    }
}

/// Flip `current`, persist the result and return it
pub fn toggle_theme(store: &mut dyn PreferenceStore, current: Theme) -> Theme {
    let next = current.toggled();
    persist_theme(store, next);
    next
}
