//! Page chrome: top bar, environment strip, navigation, sidebar, and the
//! request creation dialog.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route renders its page inside this shell. The shell owns the open
//! flag of the "Nouvelle Demande" dialog; submitted requests only go to the
//! log until a backend exists.

use leptos::prelude::*;

use crate::components::form_modal::FormModal;
use crate::components::nav_bar::NavBar;
use crate::components::sidebar::Sidebar;
use crate::components::theme_toggle::ThemeToggle;
use crate::state::profile::CURRENT_PROFILE;
use crate::state::request_draft::RequestDraft;
use crate::util::submit_log::log_submission;

#[component]
pub fn PageShell(children: Children) -> impl IntoView {
    let request_open = RwSignal::new(false);
    let on_request_close = Callback::new(move |()| request_open.set(false));
    let on_request_submit = Callback::new(move |draft: RequestDraft| log_submission("request", &draft));
    let profile = CURRENT_PROFILE;

    view! {
        <div class="page-shell">
            <header class="top-bar">
                <div class="top-bar__brand">
                    <div class="top-bar__logo">
                        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
                            <path
                                d="M12 2L2 7l10 5 10-5-10-5zM2 17l10 5 10-5M2 12l10 5 10-5"
                                stroke="currentColor"
                                stroke-width="2"
                                stroke-linecap="round"
                                stroke-linejoin="round"
                            />
                        </svg>
                    </div>
                    <span class="top-bar__company">"VICTUS"</span>
                    <span class="top-bar__divider" aria-hidden="true"></span>
                    <div class="top-bar__product">
                        <span class="top-bar__product-code">"AMT"</span>
                        <span class="top-bar__product-name">"Absence Management Tool"</span>
                    </div>
                </div>
                <div class="top-bar__account">
                    <ThemeToggle/>
                    <span class="top-bar__user">{profile.name}</span>
                    <button class="avatar" type="button" title=profile.name>
                        {profile.initials()}
                    </button>
                </div>
            </header>

            <div class="env-strip">
                <span class="env-strip__badge">{profile.environment}</span>
            </div>

            <NavBar>
                <button class="btn btn--primary nav-bar__create" type="button" on:click=move |_| request_open.set(true)>
                    "+ Nouvelle demande"
                </button>
            </NavBar>

            <div class="page-shell__body">
                <Sidebar/>
                <main class="page-shell__content">{children()}</main>
            </div>

            <FormModal
                open=request_open
                title="Nouvelle Demande"
                submit_label="Créer"
                on_close=on_request_close
                on_submit=on_request_submit
            />
        </div>
    }
}
