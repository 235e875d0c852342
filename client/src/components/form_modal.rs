//! Animated modal dialog rendering a form from a draft's field schema.
//!
//! ARCHITECTURE
//! ============
//! Transition logic lives in `state::modal::DialogState`; this component arms
//! the timers it asks for and renders from it. Only one timer is kept per
//! dialog: arming a new one drops the previous `Timeout`, which cancels it,
//! and the ticket check in `DialogState::complete` covers any callback that
//! already fired.

use leptos::prelude::*;

use crate::state::draft::{Draft, FieldKind, FieldSpec};
use crate::state::modal::{CloseReason, DialogState, PendingTransition, Settled};

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Timeout;

/// Modal form dialog.
///
/// Mounts when `open` turns true and unmounts after its exit transition. The
/// submitted draft goes to `on_submit`; `on_close` fires once the dialog has
/// unmounted after a user close or submit.
#[component]
pub fn FormModal<D>(
    #[prop(into)] open: Signal<bool>,
    title: &'static str,
    submit_label: &'static str,
    on_close: Callback<()>,
    on_submit: Callback<D>,
) -> impl IntoView
where
    D: Draft,
{
    let state = RwSignal::new(DialogState::<D>::default());

    #[cfg(feature = "hydrate")]
    let timer = StoredValue::new_local(None::<Timeout>);

    let settle = move |ticket: u64| {
        let mut settled = None;
        state.update(|s| settled = s.complete(ticket));
        if settled == Some(Settled::Closed { notify: true }) {
            on_close.run(());
        }
    };

    let arm = move |pending: Option<PendingTransition>| {
        let Some(pending) = pending else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let millis = u32::try_from(pending.delay.as_millis()).unwrap_or(u32::MAX);
            let timeout = Timeout::new(millis, move || settle(pending.ticket));
            timer.set_value(Some(timeout));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (pending, settle);
        }
    };

    // Follow the owner's flag. Effects only run in the browser.
    Effect::new(move || {
        let wanted = open.get();
        let mut pending = None;
        state.update(|s| {
            pending = if wanted { s.open() } else { s.close(CloseReason::Owner) };
        });
        arm(pending);
    });

    let close = move || {
        let mut pending = None;
        state.update(|s| pending = s.close(CloseReason::User));
        arm(pending);
    };

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut submission = None;
        state.update(|s| submission = s.submit());
        if let Some(submission) = submission {
            on_submit.run(submission.draft);
            arm(submission.pending);
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            close();
        }
    };

    let mounted = move || state.with(|s| s.lifecycle().is_mounted());
    let shown = move || state.with(|s| s.lifecycle().is_shown());

    view! {
        <Show when=mounted>
            <div
                class="modal-backdrop"
                class:modal-backdrop--shown=shown
                on:click=move |_| close()
            >
                <div
                    class="modal"
                    class:modal--shown=shown
                    role="dialog"
                    aria-modal="true"
                    tabindex="0"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=on_keydown
                >
                    <div class="modal__header">
                        <h3 class="modal__title">{title}</h3>
                        <button class="modal__close" type="button" title="Fermer" on:click=move |_| close()>
                            <CloseIcon/>
                        </button>
                    </div>
                    <form class="modal__body" on:submit=on_form_submit>
                        <div class="modal__fields">
                            {D::FIELDS.iter().map(|spec| field_view(spec, state)).collect_view()}
                        </div>
                        <div class="modal__actions">
                            <button class="btn btn--primary" type="submit">
                                <UploadIcon/>
                                {submit_label}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}

/// One floating-label input bound to a single draft field.
fn field_view<D: Draft>(spec: &'static FieldSpec, state: RwSignal<DialogState<D>>) -> impl IntoView {
    let name = spec.name;
    let value = move || state.with(|s| s.draft().value(name).unwrap_or_default());
    let set = move |raw: String| {
        state.update(|s| {
            if let Err(e) = s.input(name, &raw) {
                log::warn!("ignored form input: {e}");
            }
        });
    };

    let control = match spec.kind {
        FieldKind::TextArea { rows } => view! {
            <textarea
                class="modal-field__input modal-field__input--textarea"
                id=name
                name=name
                rows=rows.to_string()
                placeholder=" "
                required=spec.required
                prop:value=value
                on:input=move |ev| set(event_target_value(&ev))
            ></textarea>
        }
        .into_any(),
        FieldKind::Select(choices) => view! {
            <select
                class="modal-field__input"
                id=name
                name=name
                required=spec.required
                prop:value=value
                on:change=move |ev| set(event_target_value(&ev))
            >
                {choices
                    .iter()
                    .map(|choice| {
                        view! {
                            <option value=choice.value selected=move || value() == choice.value>
                                {choice.label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        }
        .into_any(),
        FieldKind::Text | FieldKind::Email | FieldKind::Date => view! {
            <input
                class="modal-field__input"
                type=spec.kind.input_type()
                id=name
                name=name
                placeholder=" "
                required=spec.required
                prop:value=value
                on:input=move |ev| set(event_target_value(&ev))
            />
        }
        .into_any(),
    };

    view! {
        <div class="modal-field">
            {control}
            <label class="modal-field__label" for=name>
                {spec.label}
            </label>
        </div>
    }
}

#[component]
fn CloseIcon() -> impl IntoView {
    view! {
        <svg class="icon" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke-width="1.5" stroke="currentColor">
            <path
                stroke-linecap="round"
                stroke-linejoin="round"
                d="m9.75 9.75 4.5 4.5m0-4.5-4.5 4.5M21 12a9 9 0 1 1-18 0 9 9 0 0 1 18 0Z"
            />
        </svg>
    }
}

#[component]
fn UploadIcon() -> impl IntoView {
    view! {
        <svg class="icon icon--small" fill="none" stroke="currentColor" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg">
            <path
                stroke-linecap="round"
                stroke-linejoin="round"
                stroke-width="2"
                d="M8 7H5a2 2 0 00-2 2v9a2 2 0 002 2h14a2 2 0 002-2V9a2 2 0 00-2-2h-3m-1 4l-3-3m0 0l-3 3m3-3v12"
            ></path>
        </svg>
    }
}
