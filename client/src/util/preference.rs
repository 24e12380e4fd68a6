//! Key-value preference storage backed by browser `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page persists exactly one preference (the theme). Handlers take the
//! store as a `PreferenceStore` so state transitions can be exercised without
//! a browser; hydrate builds talk to `window.localStorage`, everything else
//! sees an empty store that ignores writes.

#[cfg(test)]
#[path = "preference_test.rs"]
mod preference_test;

/// Durable string key-value store outliving a single page load.
pub trait PreferenceStore {
    /// Read the raw value stored for `key`, if any.
    fn load(&self, key: &str) -> Option<String>;

    /// Write `value` for `key`. Completes before returning.
    fn save(&mut self, key: &str, value: &str);
}

/// Browser `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl PreferenceStore for LocalStorage {
    fn load(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn save(&mut self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
                leptos::logging::warn!("localStorage unavailable; {key} not persisted");
                return;
            };
            if storage.set_item(key, value).is_err() {
                leptos::logging::warn!("localStorage write rejected for {key}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }
}

/// In-process store used by tests in place of `localStorage`.
#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub(crate) struct MemoryStore {
    entries: std::collections::HashMap<String, String>,
}

#[cfg(test)]
impl MemoryStore {
    pub(crate) fn with(key: &str, value: &str) -> Self {
        let mut store = Self::default();
        store.save(key, value);
        store
    }
}

#[cfg(test)]
impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
    }
}
