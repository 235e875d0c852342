use super::*;
use crate::state::request_draft::{FIELD_DESCRIPTION, FIELD_PRIORITY, FIELD_TITLE, Priority, RequestDraft};
use crate::state::user_draft::{FIELD_ROLE, Role, UserDraft};

fn opened<D: Draft>() -> DialogState<D> {
    let mut state = DialogState::<D>::default();
    let pending = state.open().expect("open from closed schedules");
    assert_eq!(state.complete(pending.ticket), Some(Settled::Opened));
    state
}

// =============================================================
// ModalLifecycle
// =============================================================

#[test]
fn lifecycle_default_is_closed_and_unmounted() {
    let lifecycle = ModalLifecycle::default();
    assert_eq!(lifecycle.phase(), ModalPhase::Closed);
    assert!(!lifecycle.is_mounted());
    assert!(!lifecycle.is_shown());
}

#[test]
fn open_mounts_hidden_before_the_enter_delay() {
    let mut lifecycle = ModalLifecycle::default();
    let pending = lifecycle.request_open().unwrap();
    assert_eq!(pending.delay, OPEN_DELAY);
    assert!(lifecycle.is_mounted());
    assert!(!lifecycle.is_shown());

    assert_eq!(lifecycle.complete(pending.ticket), Some(Settled::Opened));
    assert_eq!(lifecycle.phase(), ModalPhase::Open);
    assert!(lifecycle.is_shown());
}

#[test]
fn open_while_open_is_a_noop() {
    let mut lifecycle = ModalLifecycle::default();
    let pending = lifecycle.request_open().unwrap();
    assert_eq!(lifecycle.request_open(), None);
    lifecycle.complete(pending.ticket);
    assert_eq!(lifecycle.request_open(), None);
    assert_eq!(lifecycle.phase(), ModalPhase::Open);
}

#[test]
fn user_close_hides_immediately_and_notifies_after_delay() {
    let mut lifecycle = ModalLifecycle::default();
    let open = lifecycle.request_open().unwrap();
    lifecycle.complete(open.ticket);

    let close = lifecycle.request_close(CloseReason::User).unwrap();
    assert_eq!(close.delay, CLOSE_DELAY);
    assert!(lifecycle.is_mounted());
    assert!(!lifecycle.is_shown());

    assert_eq!(lifecycle.complete(close.ticket), Some(Settled::Closed { notify: true }));
    assert!(!lifecycle.is_mounted());
}

#[test]
fn owner_close_does_not_notify() {
    let mut lifecycle = ModalLifecycle::default();
    let open = lifecycle.request_open().unwrap();
    lifecycle.complete(open.ticket);

    let close = lifecycle.request_close(CloseReason::Owner).unwrap();
    assert_eq!(lifecycle.complete(close.ticket), Some(Settled::Closed { notify: false }));
}

#[test]
fn close_while_closed_or_closing_is_a_noop() {
    let mut lifecycle = ModalLifecycle::default();
    assert_eq!(lifecycle.request_close(CloseReason::User), None);

    let open = lifecycle.request_open().unwrap();
    lifecycle.complete(open.ticket);
    let close = lifecycle.request_close(CloseReason::User).unwrap();
    assert_eq!(lifecycle.request_close(CloseReason::User), None);
    assert_eq!(lifecycle.complete(close.ticket), Some(Settled::Closed { notify: true }));
}

#[test]
fn close_before_enter_delay_cancels_the_pending_open() {
    let mut lifecycle = ModalLifecycle::default();
    let open = lifecycle.request_open().unwrap();
    let close = lifecycle.request_close(CloseReason::User).unwrap();

    assert_eq!(lifecycle.complete(open.ticket), None);
    assert!(!lifecycle.is_shown());
    assert_eq!(lifecycle.complete(close.ticket), Some(Settled::Closed { notify: true }));
    assert_eq!(lifecycle.phase(), ModalPhase::Closed);
}

#[test]
fn reopen_during_exit_cancels_the_close() {
    let mut lifecycle = ModalLifecycle::default();
    let open = lifecycle.request_open().unwrap();
    lifecycle.complete(open.ticket);
    let close = lifecycle.request_close(CloseReason::User).unwrap();
    let reopen = lifecycle.request_open().unwrap();

    assert_eq!(lifecycle.complete(close.ticket), None);
    assert!(lifecycle.is_mounted());
    assert_eq!(lifecycle.complete(reopen.ticket), Some(Settled::Opened));
    assert!(lifecycle.is_shown());
}

#[test]
fn tickets_are_unique_per_request() {
    let mut lifecycle = ModalLifecycle::default();
    let a = lifecycle.request_open().unwrap();
    let b = lifecycle.request_close(CloseReason::User).unwrap();
    let c = lifecycle.request_open().unwrap();
    assert_ne!(a.ticket, b.ticket);
    assert_ne!(b.ticket, c.ticket);
    assert_ne!(a.ticket, c.ticket);
}

#[test]
fn completing_the_same_ticket_twice_settles_once() {
    let mut lifecycle = ModalLifecycle::default();
    let open = lifecycle.request_open().unwrap();
    assert_eq!(lifecycle.complete(open.ticket), Some(Settled::Opened));
    assert_eq!(lifecycle.complete(open.ticket), None);
}

// =============================================================
// DialogState
// =============================================================

#[test]
fn edits_apply_last_value_and_keep_untouched_defaults() {
    let mut state = opened::<RequestDraft>();
    state.input(FIELD_TITLE, "Draft").unwrap();
    state.input(FIELD_TITLE, "Fix printer").unwrap();
    state.input(FIELD_PRIORITY, "haute").unwrap();

    let draft = state.draft();
    assert_eq!(draft.title, "Fix printer");
    assert_eq!(draft.priority, Priority::Haute);
    assert_eq!(draft.description, "");
    assert_eq!(draft.due_date, None);
}

#[test]
fn rejected_edit_leaves_draft_untouched() {
    let mut state = opened::<UserDraft>();
    state.input(FIELD_ROLE, "admin").unwrap();
    assert!(state.input(FIELD_ROLE, "root").is_err());
    assert!(state.input("nickname", "x").is_err());
    assert_eq!(state.draft().role, Role::Admin);
}

#[test]
fn edits_are_ignored_while_closed() {
    let mut state = DialogState::<RequestDraft>::default();
    state.input(FIELD_TITLE, "ghost").unwrap();
    assert_eq!(state.draft(), &RequestDraft::default());
}

#[test]
fn submit_emits_draft_resets_and_starts_closing() {
    let mut state = opened::<RequestDraft>();
    state.input(FIELD_TITLE, "Fix printer").unwrap();
    state.input(FIELD_DESCRIPTION, "Printer jam on 3rd floor").unwrap();

    let submission = state.submit().expect("interactive dialog submits");
    assert_eq!(submission.draft.title, "Fix printer");
    assert_eq!(state.draft(), &RequestDraft::default());

    let pending = submission.pending.expect("submit schedules close");
    assert_eq!(pending.delay, CLOSE_DELAY);
    assert!(!state.lifecycle().is_shown());
    assert_eq!(state.complete(pending.ticket), Some(Settled::Closed { notify: true }));
    assert!(!state.lifecycle().is_mounted());
}

#[test]
fn second_submit_during_exit_emits_nothing() {
    let mut state = opened::<UserDraft>();
    assert!(state.submit().is_some());
    assert_eq!(state.submit(), None);
}

#[test]
fn close_discards_draft() {
    let mut state = opened::<UserDraft>();
    state.input("name", "alice").unwrap();
    let pending = state.close(CloseReason::User).unwrap();
    assert_eq!(state.draft(), &UserDraft::default());
    state.complete(pending.ticket);

    let reopen = state.open().unwrap();
    state.complete(reopen.ticket);
    assert_eq!(state.draft().name, "");
}
