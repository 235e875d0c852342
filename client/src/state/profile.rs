//! Static profile shown in the header and sidebar.
//!
//! There is no authentication; the signed-in user is a fixed record.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub team: &'static str,
    /// Deployment badge shown under the top bar.
    pub environment: &'static str,
}

pub const CURRENT_PROFILE: Profile = Profile {
    name: "Hubert Arlin",
    role: "Gestionnaire RH",
    team: "Ressources humaines",
    environment: "DEV",
};

impl Profile {
    #[must_use]
    pub fn initials(&self) -> String {
        initials(self.name)
    }
}

/// Uppercased first letter of each whitespace-separated word, at most two.
#[must_use]
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}
