//! Navigation links shown in the page shell.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Top-level routes reachable from the navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavLink {
    Home,
    Requests,
}

impl NavLink {
    pub const ALL: [Self; 2] = [Self::Home, Self::Requests];

    #[must_use]
    pub fn href(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Requests => "/demandes",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Accueil",
            Self::Requests => "Demandes",
        }
    }

    /// Exact path match; no prefix or trailing-slash leniency.
    #[must_use]
    pub fn is_active(self, path: &str) -> bool {
        path == self.href()
    }
}

/// The link to highlight for `path`, if any.
#[must_use]
pub fn active_link(path: &str) -> Option<NavLink> {
    NavLink::ALL.into_iter().find(|link| link.is_active(path))
}
