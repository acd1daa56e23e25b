//! One status column of the Kanban board.
//!
//! DESIGN
//! ======
//! The column is the drop target; cards only record which id is being
//! dragged. Dropping anywhere on the column moves that card into it.

use leptos::prelude::*;
use tasks::kanban::Status;

use crate::components::task_card::TaskCard;
use crate::state::board::BoardState;

/// Column header with count pill and the visible cards in that status.
#[component]
pub fn KanbanColumn(status: Status) -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();

    let count = move || board.with(|b| b.counts().get(status));
    let card_ids = move || board.with(|b| b.column_ids(status));

    view! {
        <div
            class="column"
            on:dragover=move |ev: leptos::ev::DragEvent| ev.prevent_default()
            on:drop=move |ev: leptos::ev::DragEvent| {
                ev.prevent_default();
                board.update(|b| {
                    b.drop_on(status);
                });
            }
        >
            <div class="column__header">
                <div>{status.label()}</div>
                <div class="pill">{count}</div>
            </div>

            <div class="column__stack">
                <For each=card_ids key=|id| id.clone() children=move |id| view! { <TaskCard id=id/> }/>
            </div>
        </div>
    }
}
