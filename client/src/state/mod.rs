//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is plain data split by concern (modal lifecycle, drafts, theme,
//! navigation) so components stay thin and the logic is testable without a
//! browser.

pub mod draft;
pub mod modal;
pub mod nav;
pub mod profile;
pub mod request_draft;
pub mod theme;
pub mod ui;
pub mod user_draft;
