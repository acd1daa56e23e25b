//! Add form and completion filter for the tracker list.

use leptos::prelude::*;
use tasks::consts::{MAX_ESTIMATE_MINUTES, MIN_ESTIMATE_MINUTES};
use tasks::tracker::{Category, StatusFilter};

use crate::state::tracker::TrackerState;

/// Title, estimate and category inputs plus an Add button.
#[component]
pub fn TrackerForm() -> impl IntoView {
    let tracker = expect_context::<RwSignal<TrackerState>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        tracker.update(|t| {
            t.submit();
        });
    };

    let category_options = Category::ALL
        .into_iter()
        .map(|c| view! { <option value=c.as_str()>{c.label()}</option> })
        .collect_view();

    view! {
        <section class="card quick-add">
            <form class="quick-add__row" on:submit=on_submit>
                <input
                    class="input quick-add__title"
                    type="text"
                    placeholder="What needs doing?"
                    prop:value=move || tracker.with(|t| t.draft.title.clone())
                    on:input=move |ev| {
                        let title = event_target_value(&ev);
                        tracker.update(|t| t.draft.title = title);
                    }
                />
                <input
                    class="input quick-add__minutes"
                    type="number"
                    min=MIN_ESTIMATE_MINUTES.to_string()
                    max=MAX_ESTIMATE_MINUTES.to_string()
                    placeholder=move || tracker.with(|t| t.draft.minutes.to_string())
                    title="Estimate in minutes"
                    prop:value=move || tracker.with(|t| t.minutes_input.clone())
                    on:input=move |ev| {
                        let raw = event_target_value(&ev);
                        tracker.update(|t| t.minutes_input = raw);
                    }
                />
                <select
                    class="select"
                    prop:value=move || tracker.with(|t| t.draft.category.as_str())
                    on:change=move |ev| {
                        if let Some(category) = Category::parse(&event_target_value(&ev)) {
                            tracker.update(|t| t.draft.category = category);
                        }
                    }
                >
                    {category_options}
                </select>
                <button type="submit" class="btn">
                    "Add"
                </button>
            </form>
        </section>
    }
}

/// All / Open / Done segmented filter.
#[component]
pub fn StatusFilterBar() -> impl IntoView {
    let tracker = expect_context::<RwSignal<TrackerState>>();

    StatusFilter::ALL
        .into_iter()
        .map(|filter| {
            let active = move || tracker.with(|t| t.filter == filter);
            view! {
                <button
                    class="btn btn--segment"
                    class:btn--segment-active=active
                    on:click=move |_| tracker.update(|t| t.filter = filter)
                >
                    {filter.label()}
                </button>
            }
        })
        .collect_view()
}
