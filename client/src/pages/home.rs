//! Home page: welcome card and team management entry point.

use leptos::prelude::*;

use crate::components::form_modal::FormModal;
use crate::state::profile::CURRENT_PROFILE;
use crate::state::user_draft::UserDraft;
use crate::util::submit_log::log_submission;

/// Landing route. Hosts the user creation dialog.
#[component]
pub fn HomePage() -> impl IntoView {
    let user_open = RwSignal::new(false);
    let on_user_close = Callback::new(move |()| user_open.set(false));
    let on_user_submit = Callback::new(move |draft: UserDraft| log_submission("user", &draft));

    view! {
        <section class="home-page">
            <h1 class="page-title">"Bienvenue, " {CURRENT_PROFILE.name}</h1>
            <p class="page-lead">
                "Suivez les demandes d'absence de votre équipe et créez-en de nouvelles depuis la barre de navigation."
            </p>

            <div class="card">
                <h2 class="card__title">"Équipe"</h2>
                <p class="card__text">"Ajoutez un collaborateur pour lui ouvrir l'accès à l'outil."</p>
                <button class="btn" type="button" on:click=move |_| user_open.set(true)>
                    "Ajouter un utilisateur"
                </button>
            </div>

            <FormModal
                open=user_open
                title="New"
                submit_label="Save"
                on_close=on_user_close
                on_submit=on_user_submit
            />
        </section>
    }
}
