//! Requests page ("Demandes").

use leptos::prelude::*;

#[component]
pub fn RequestsPage() -> impl IntoView {
    view! {
        <section class="requests-page">
            <h1 class="page-title">"Demandes"</h1>
            <p class="page-lead">"Utilisez « Nouvelle demande » pour soumettre une absence ou un besoin."</p>
            <div class="card card--empty">
                <p class="card__text">"Aucune demande pour le moment."</p>
            </div>
        </section>
    }
}
