//! Primary navigation bar with exact-path link highlighting.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::nav::NavLink;

/// Route links plus an action slot on the right (the shell's create button).
#[component]
pub fn NavBar(children: Children) -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <nav class="nav-bar">
            <ul class="nav-bar__links">
                {NavLink::ALL
                    .into_iter()
                    .map(|link| {
                        let active = move || pathname.with(|path| link.is_active(path));
                        view! {
                            <li>
                                <a
                                    href=link.href()
                                    class="nav-bar__link"
                                    class:nav-bar__link--active=active
                                    aria-current=move || active().then_some("page")
                                >
                                    {link.label()}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <span class="nav-bar__spacer"></span>
            {children()}
        </nav>
    }
}
