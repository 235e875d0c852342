//! Three-way light/dark/system theme switch.

use leptos::prelude::*;

use crate::state::theme::{ThemePreference, ThemeState};

/// Segmented control; the button matching the stored preference is active.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeState>>();

    view! {
        <div class="theme-toggle" role="group" aria-label="Thème">
            {ThemePreference::ALL
                .into_iter()
                .map(|pref| {
                    view! {
                        <button
                            class="theme-toggle__option"
                            class:theme-toggle__option--active=move || theme.get().preference == pref
                            type="button"
                            title=format!("{} theme", pref.as_str())
                            on:click=move |_| {
                                theme.update(|t| crate::util::dark_mode::set_theme(t, pref));
                            }
                        >
                            <ThemeIcon pref=pref/>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ThemeIcon(pref: ThemePreference) -> impl IntoView {
    match pref {
        ThemePreference::Light => view! {
            <svg width="16" height="16" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
                <circle cx="12" cy="12" r="5" stroke="currentColor" stroke-width="2"/>
                <path
                    d="M12 1v2m0 16v2M4.22 4.22l1.42 1.42m11.31 11.31l1.42 1.42M1 12h2m16 0h2M4.22 19.78l1.42-1.42M18.36 5.64l1.42-1.42"
                    stroke="currentColor"
                    stroke-width="2"
                    stroke-linecap="round"
                />
            </svg>
        }
        .into_any(),
        ThemePreference::Dark => view! {
            <svg width="16" height="16" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
                <path
                    d="M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z"
                    stroke="currentColor"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                />
            </svg>
        }
        .into_any(),
        ThemePreference::System => view! {
            <svg width="16" height="16" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
                <rect x="2" y="3" width="20" height="14" rx="2" ry="2" stroke="currentColor" stroke-width="2"/>
                <line x1="8" y1="21" x2="16" y2="21" stroke="currentColor" stroke-width="2"/>
                <line x1="12" y1="17" x2="12" y2="21" stroke="currentColor" stroke-width="2"/>
            </svg>
        }
        .into_any(),
    }
}
