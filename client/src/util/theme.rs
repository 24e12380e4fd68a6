//! Light/dark theme selection, application, and persistence.
//!
//! Reads the stored preference, applies the `dark-mode` class to `<body>`,
//! and writes the new preference back on every toggle. Applying the class
//! requires a browser environment; other builds only track the value.
//!
//! TRADE-OFFS
//! ==========
//! Only the exact stored string `dark` selects the dark theme. Anything else,
//! including a missing key, falls back to light rather than erroring.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use super::preference::PreferenceStore;

/// Storage key holding the theme preference.
pub const STORAGE_KEY: &str = "theme";

/// Body class present while the dark theme is active.
pub const DARK_CLASS: &str = "dark-mode";

/// The two page themes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Interpret a raw stored value. Unset or unrecognized means light.
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    /// Literal persisted for this theme.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Toggle control label. Names the theme a click switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Toggle Dark Mode",
            Self::Dark => "Toggle Light Mode",
        }
    }
}

/// Read the theme preference from `store`.
pub fn read_preference(store: &impl PreferenceStore) -> Theme {
    Theme::from_stored(store.load(STORAGE_KEY).as_deref())
}

/// Add or remove the dark class on `<body>`.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            leptos::logging::warn!("document body unavailable; theme not applied");
            return;
        };
        let _ = body.class_list().toggle_with_force(DARK_CLASS, theme.is_dark());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Flip `current`, apply it, and persist it before returning the new theme.
pub fn toggle(current: Theme, store: &mut impl PreferenceStore) -> Theme {
    let next = current.toggled();
    apply(next);
    store.save(STORAGE_KEY, next.as_str());
    next
}
