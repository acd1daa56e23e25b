//! Quick-add form above the Kanban columns.

use leptos::prelude::*;
use tasks::kanban::{Priority, Status};

use crate::state::board::BoardState;

/// Title, status and priority inputs plus an Add button.
///
/// Submitting with a blank title does nothing; a successful add resets the
/// form to `todo` / `mid`.
#[component]
pub fn QuickAddForm() -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        board.update(|b| {
            b.submit_quick_add();
        });
    };

    let status_options = Status::ALL
        .into_iter()
        .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
        .collect_view();
    let priority_options = Priority::ALL
        .into_iter()
        .map(|p| view! { <option value=p.as_str()>{p.label()}</option> })
        .collect_view();

    view! {
        <section class="card quick-add">
            <form class="quick-add__row" on:submit=on_submit>
                <input
                    class="input quick-add__title"
                    type="text"
                    placeholder="New task..."
                    prop:value=move || board.with(|b| b.draft.title.clone())
                    on:input=move |ev| {
                        let title = event_target_value(&ev);
                        board.update(|b| b.draft.title = title);
                    }
                />
                <select
                    class="select"
                    prop:value=move || board.with(|b| b.draft.status.as_str())
                    on:change=move |ev| {
                        if let Some(status) = Status::parse(&event_target_value(&ev)) {
                            board.update(|b| b.draft.status = status);
                        }
                    }
                >
                    {status_options}
                </select>
                <select
                    class="select"
                    prop:value=move || board.with(|b| b.draft.priority.as_str())
                    on:change=move |ev| {
                        if let Some(priority) = Priority::parse(&event_target_value(&ev)) {
                            board.update(|b| b.draft.priority = priority);
                        }
                    }
                >
                    {priority_options}
                </select>
                <button type="submit" class="btn">
                    "Add"
                </button>
            </form>
        </section>
    }
}
