//! One editable row of the tracker list.

use leptos::prelude::*;
use tasks::tracker::{Category, TrackerPatch, TrackerTask, format_minutes};

use crate::state::tracker::TrackerState;

fn field<T: Default>(tracker: RwSignal<TrackerState>, id: &str, read: impl Fn(&TrackerTask) -> T) -> T {
    tracker.with(|t| t.task(id).map(read).unwrap_or_default())
}

/// Checkbox, inline title, estimate, category and delete button.
#[component]
pub fn TrackerRow(id: String) -> impl IntoView {
    let tracker = expect_context::<RwSignal<TrackerState>>();
    // Cheap copyable handle so each closure can borrow the id.
    let id = StoredValue::new(id);

    let done = move || id.with_value(|id| field(tracker, id, |t| t.done));
    let title = move || id.with_value(|id| field(tracker, id, |t| t.title.clone()));
    let minutes = move || id.with_value(|id| field(tracker, id, |t| t.minutes));
    let category = move || id.with_value(|id| field(tracker, id, |t| t.category));

    let patch = move |patch: TrackerPatch| {
        let id = id.get_value();
        tracker.update(|t| {
            t.update(&id, &patch);
        });
    };

    let category_options = Category::ALL
        .into_iter()
        .map(|c| view! { <option value=c.as_str()>{c.label()}</option> })
        .collect_view();

    view! {
        <li class="tracker-row" class:tracker-row--done=done>
            <input
                type="checkbox"
                class="tracker-row__check"
                prop:checked=done
                on:change=move |_| {
                    let id = id.get_value();
                    tracker.update(|t| {
                        t.toggle(&id);
                    });
                }
            />
            <input
                class="input tracker-row__title"
                type="text"
                prop:value=title
                on:input=move |ev| patch(TrackerPatch::title(event_target_value(&ev)))
            />
            <input
                class="input tracker-row__minutes"
                type="number"
                prop:value=move || minutes().to_string()
                on:change=move |ev| patch(TrackerPatch::minutes_from_input(&event_target_value(&ev)))
            />
            <span class="tracker-row__estimate">{move || format_minutes(minutes())}</span>
            <select
                class="select"
                prop:value=move || category().as_str()
                on:change=move |ev| {
                    if let Some(category) = Category::parse(&event_target_value(&ev)) {
                        patch(TrackerPatch::category(category));
                    }
                }
            >
                {category_options}
            </select>
            <button
                class="icon-btn"
                aria-label="delete"
                title="Delete task"
                on:click=move |_| {
                    let id = id.get_value();
                    tracker.update(|t| {
                        t.remove(&id);
                    });
                }
            >
                "✕"
            </button>
        </li>
    }
}
