//! Page header with app title, variant navigation, search and dark toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both pages share this header; each passes its own query signal so search
//! text is kept per variant.

use leptos::prelude::*;

use crate::state::ui::{UiState, Variant};

/// Top toolbar shared by the board and tracker pages.
#[component]
pub fn Toolbar(
    variant: Variant,
    #[prop(into)] query: Signal<String>,
    on_query: Callback<String>,
    placeholder: &'static str,
) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let nav = Variant::ALL
        .into_iter()
        .map(|v| {
            let active = v == variant;
            view! {
                <a href=v.href() class="toolbar__nav-link" class:toolbar__nav-link--active=active>
                    {v.label()}
                </a>
            }
        })
        .collect_view();

    view! {
        <header class="toolbar">
            <div class="toolbar__title">
                <div class="toolbar__app-name">"MiniBoard"</div>
                <div class="toolbar__tagline">{variant.tagline()}</div>
            </div>

            <nav class="toolbar__nav">{nav}</nav>

            <span class="toolbar__spacer"></span>

            <input
                class="input toolbar__search"
                type="search"
                placeholder=placeholder
                prop:value=move || query.get()
                on:input=move |ev| on_query.run(event_target_value(&ev))
            />

            <button
                class="btn toolbar__dark-toggle"
                on:click=move |_| {
                    let current = ui.get().dark_mode;
                    let next = crate::util::dark_mode::toggle(current);
                    ui.update(|u| u.dark_mode = next);
                }
                title="Toggle dark mode"
            >
                {move || if ui.get().dark_mode { "☀" } else { "☾" }}
            </button>
        </header>
    }
}
