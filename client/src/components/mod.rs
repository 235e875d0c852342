//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and dialogs while reading/writing shared
//! state from Leptos context providers.

pub mod form_modal;
pub mod nav_bar;
pub mod page_shell;
pub mod sidebar;
pub mod theme_toggle;
