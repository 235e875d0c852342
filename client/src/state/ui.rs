//! Local UI chrome state shared across routes.
//!
//! DESIGN
//! ======
//! Each route renders its own page shell, so chrome settings that should
//! survive navigation live here in context instead of inside the shell.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the sidebar.
#[derive(Clone, Debug)]
pub struct UiState {
    pub sidebar_expanded: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self { sidebar_expanded: true }
    }
}

impl UiState {
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_expanded = !self.sidebar_expanded;
    }
}
