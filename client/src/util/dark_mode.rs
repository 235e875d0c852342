//! Browser binding for the theme store.
//!
//! Reads and writes the preference in `localStorage`, samples the
//! `prefers-color-scheme` media query, and toggles the `dark` class on the
//! `<html>` element. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! safely no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::theme::{AppliedMode, PreferenceStorage, ThemePreference, ThemeState};

#[cfg(feature = "hydrate")]
use crate::state::theme::STORAGE_KEY;

/// `localStorage`-backed preference slot.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl PreferenceStorage for LocalStorage {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(STORAGE_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn save(&self, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
                if storage.set_item(STORAGE_KEY, value).is_err() {
                    log::warn!("theme preference not persisted");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = value;
        }
    }
}

/// Whether the OS currently asks for a dark color scheme.
pub fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Add or remove the `dark` class on the `<html>` element.
pub fn apply(mode: AppliedMode) {
    #[cfg(feature = "hydrate")]
    {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        else {
            return;
        };
        let classes = root.class_list();
        let _ = if mode.is_dark() { classes.add_1("dark") } else { classes.remove_1("dark") };
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = mode;
    }
}

/// Load the stored preference and apply it to the document.
pub fn init() -> ThemeState {
    let state = ThemeState::init(&LocalStorage, system_prefers_dark());
    apply(state.applied);
    state
}

/// Persist `preference`, re-derive the applied mode, and apply it.
pub fn set_theme(state: &mut ThemeState, preference: ThemePreference) {
    state.set_theme(preference, &LocalStorage, system_prefers_dark());
    apply(state.applied);
    log::debug!("theme set to {} ({:?})", preference.as_str(), state.applied);
}
