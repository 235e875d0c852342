//! Collapsible sidebar holding the static profile panel.

use leptos::prelude::*;

use crate::state::profile::CURRENT_PROFILE;
use crate::state::ui::UiState;

/// Left sidebar; collapsing keeps only the avatar column.
#[component]
pub fn Sidebar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let expanded = move || ui.get().sidebar_expanded;
    let profile = CURRENT_PROFILE;

    view! {
        <aside class="sidebar" class:sidebar--collapsed=move || !expanded()>
            <button
                class="sidebar__toggle"
                type="button"
                title="Réduire / déplier"
                on:click=move |_| ui.update(UiState::toggle_sidebar)
            >
                {move || if expanded() { "\u{25C0}" } else { "\u{25B6}" }}
            </button>
            <div class="sidebar__profile">
                <div class="avatar avatar--large">{profile.initials()}</div>
                <Show when=expanded>
                    <dl class="sidebar__details">
                        <dt>"Nom"</dt>
                        <dd>{profile.name}</dd>
                        <dt>"Rôle"</dt>
                        <dd>{profile.role}</dd>
                        <dt>"Équipe"</dt>
                        <dd>{profile.team}</dd>
                    </dl>
                </Show>
            </div>
        </aside>
    }
}
