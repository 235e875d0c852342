//! Sink for submitted drafts.
//!
//! Nothing is sent anywhere yet: drafts are serialized and written to the
//! log (browser console under `hydrate`, the server subscriber under `ssr`).

#[cfg(test)]
#[path = "submit_log_test.rs"]
mod submit_log_test;

use serde::Serialize;

/// JSON payload for a submitted draft.
///
/// # Errors
///
/// Propagates the serializer error.
pub fn submission_payload<T: Serialize>(draft: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(draft)
}

/// Log a submitted draft at `info`.
pub fn log_submission<T: Serialize>(kind: &str, draft: &T) {
    match submission_payload(draft) {
        Ok(payload) => log::info!("{kind} submitted: {payload}"),
        Err(e) => log::warn!("{kind} submission not serializable: {e}"),
    }
}
