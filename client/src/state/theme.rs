//! Theme preference and the applied light/dark mode.
//!
//! DESIGN
//! ======
//! The preference is what the user picked (`light`, `dark`, `system`); the
//! applied mode is what the document shows. For `system` the OS signal is
//! sampled whenever the mode is derived and is not tracked afterwards.
//! Storage goes through [`PreferenceStorage`] so the browser binding in
//! `util::dark_mode` stays thin and tests can use an in-memory store.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Storage key holding the preference string.
pub const STORAGE_KEY: &str = "theme";

/// Theme picked by the user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemePreference {
    /// Toggle order.
    pub const ALL: [Self; 3] = [Self::Light, Self::Dark, Self::System];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "system" => Some(Self::System),
            _ => None,
        }
    }

    /// Derive the applied mode, consulting the OS signal only for `System`.
    #[must_use]
    pub fn resolve(self, system_prefers_dark: bool) -> AppliedMode {
        match self {
            Self::Light => AppliedMode::Light,
            Self::Dark => AppliedMode::Dark,
            Self::System if system_prefers_dark => AppliedMode::Dark,
            Self::System => AppliedMode::Light,
        }
    }
}

/// Mode actually rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AppliedMode {
    #[default]
    Light,
    Dark,
}

impl AppliedMode {
    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// Persistent key-value slot for the preference string.
pub trait PreferenceStorage {
    fn load(&self) -> Option<String>;
    fn save(&self, value: &str);
}

/// Current preference and the mode derived from it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub preference: ThemePreference,
    pub applied: AppliedMode,
}

impl ThemeState {
    /// Read the stored preference, falling back to `System` when the slot is
    /// empty or holds an unknown value.
    pub fn init(storage: &impl PreferenceStorage, system_prefers_dark: bool) -> Self {
        let preference = storage
            .load()
            .as_deref()
            .and_then(ThemePreference::parse)
            .unwrap_or_default();
        Self {
            preference,
            applied: preference.resolve(system_prefers_dark),
        }
    }

    /// Persist `preference` and re-derive the applied mode.
    pub fn set_theme(
        &mut self,
        preference: ThemePreference,
        storage: &impl PreferenceStorage,
        system_prefers_dark: bool,
    ) {
        storage.save(preference.as_str());
        self.preference = preference;
        self.applied = preference.resolve(system_prefers_dark);
    }
}
