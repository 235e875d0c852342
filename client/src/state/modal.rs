//! Open/close lifecycle for animated modal dialogs.
//!
//! DESIGN
//! ======
//! A dialog mounts hidden, becomes visible one short tick later, and on close
//! stays mounted while its exit transition runs. Every transition request
//! issues a fresh ticket; the timer that completes a transition carries that
//! ticket, so a completion from a superseded request is ignored. This keeps
//! rapid open/close toggles from leaving the dialog half-mounted.
//!
//! The lifecycle is plain data. The `FormModal` component owns the actual
//! timers and feeds completions back through [`ModalLifecycle::complete`].

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use std::time::Duration;

use super::draft::{Draft, DraftError};

/// Delay between mounting and showing, so the hidden frame paints first.
pub const OPEN_DELAY: Duration = Duration::from_millis(10);

/// Exit transition length; matches the CSS transition duration.
pub const CLOSE_DELAY: Duration = Duration::from_millis(200);

/// Where a dialog is in its mount/animation cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalPhase {
    /// Not mounted; renders nothing.
    #[default]
    Closed,
    /// Mounted with hidden styles, waiting for the enter transition.
    Opening,
    /// Mounted and fully visible.
    Open,
    /// Exit transition running. `notify` is set when the owner must be told
    /// once the dialog unmounts.
    Closing { notify: bool },
}

/// Origin of a close request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseReason {
    /// Close button, backdrop click, Escape, or submit.
    User,
    /// The owner flipped its `open` flag to false.
    Owner,
}

/// A timer the caller must arm; on expiry pass `ticket` to `complete`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingTransition {
    pub ticket: u64,
    pub delay: Duration,
}

/// Result of a completed transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Settled {
    Opened,
    Closed { notify: bool },
}

/// Ticketed modal state machine: `Closed -> Opening -> Open -> Closing -> Closed`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModalLifecycle {
    phase: ModalPhase,
    ticket: u64,
}

impl ModalLifecycle {
    #[must_use]
    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    /// Whether the dialog is in the render tree.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.phase != ModalPhase::Closed
    }

    /// Whether the dialog carries its visible (entered) styles.
    #[must_use]
    pub fn is_shown(&self) -> bool {
        self.phase == ModalPhase::Open
    }

    /// Whether the form accepts edits and submission.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        matches!(self.phase, ModalPhase::Opening | ModalPhase::Open)
    }

    /// Mount the dialog hidden. Reopening during an exit transition cancels it.
    pub fn request_open(&mut self) -> Option<PendingTransition> {
        match self.phase {
            ModalPhase::Opening | ModalPhase::Open => None,
            ModalPhase::Closed | ModalPhase::Closing { .. } => {
                self.phase = ModalPhase::Opening;
                Some(self.schedule(OPEN_DELAY))
            }
        }
    }

    /// Start the exit transition. Closing before the enter delay elapsed
    /// cancels the pending open.
    pub fn request_close(&mut self, reason: CloseReason) -> Option<PendingTransition> {
        match self.phase {
            ModalPhase::Closed | ModalPhase::Closing { .. } => None,
            ModalPhase::Opening | ModalPhase::Open => {
                self.phase = ModalPhase::Closing {
                    notify: reason == CloseReason::User,
                };
                Some(self.schedule(CLOSE_DELAY))
            }
        }
    }

    /// Finish the transition identified by `ticket`. Stale tickets are ignored.
    pub fn complete(&mut self, ticket: u64) -> Option<Settled> {
        if ticket != self.ticket {
            return None;
        }
        match self.phase {
            ModalPhase::Opening => {
                self.phase = ModalPhase::Open;
                Some(Settled::Opened)
            }
            ModalPhase::Closing { notify } => {
                self.phase = ModalPhase::Closed;
                Some(Settled::Closed { notify })
            }
            ModalPhase::Closed | ModalPhase::Open => None,
        }
    }

    fn schedule(&mut self, delay: Duration) -> PendingTransition {
        self.ticket = self.ticket.wrapping_add(1);
        PendingTransition {
            ticket: self.ticket,
            delay,
        }
    }
}

/// A dialog's lifecycle together with the draft it edits.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DialogState<D> {
    lifecycle: ModalLifecycle,
    draft: D,
}

/// Draft handed off by a submit, plus the close timer to arm.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission<D> {
    pub draft: D,
    pub pending: Option<PendingTransition>,
}

impl<D: Draft> DialogState<D> {
    #[must_use]
    pub fn lifecycle(&self) -> ModalLifecycle {
        self.lifecycle
    }

    #[must_use]
    pub fn draft(&self) -> &D {
        &self.draft
    }

    pub fn open(&mut self) -> Option<PendingTransition> {
        self.lifecycle.request_open()
    }

    /// Start closing and discard the draft.
    pub fn close(&mut self, reason: CloseReason) -> Option<PendingTransition> {
        let pending = self.lifecycle.request_close(reason);
        if pending.is_some() {
            self.draft = D::default();
        }
        pending
    }

    pub fn complete(&mut self, ticket: u64) -> Option<Settled> {
        self.lifecycle.complete(ticket)
    }

    /// Apply one field edit. Ignored outside the interactive phases.
    ///
    /// # Errors
    ///
    /// Returns the draft's error for unknown fields or unparsable values; the
    /// draft is left unchanged in that case.
    pub fn input(&mut self, name: &str, raw: &str) -> Result<(), DraftError> {
        if !self.lifecycle.is_interactive() {
            return Ok(());
        }
        self.draft.set_value(name, raw)
    }

    /// Hand off the current draft, reset it, and start closing.
    ///
    /// Returns `None` when the dialog is not interactive, so a second submit
    /// during the exit transition emits nothing.
    pub fn submit(&mut self) -> Option<Submission<D>> {
        if !self.lifecycle.is_interactive() {
            return None;
        }
        let draft = std::mem::take(&mut self.draft);
        let pending = self.lifecycle.request_close(CloseReason::User);
        Some(Submission { draft, pending })
    }
}
