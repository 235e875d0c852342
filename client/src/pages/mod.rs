//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page renders only its own content; the router wraps it in
//! `components::page_shell::PageShell`.

pub mod home;
pub mod not_found;
pub mod requests;
