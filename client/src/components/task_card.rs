//! Draggable Kanban card.

use leptos::prelude::*;
use tasks::kanban::Priority;

use crate::state::board::BoardState;

/// Card for one task. Click opens it in the detail panel; the ✕ deletes it.
///
/// Fields are read from board state by id so inline edits show up without
/// re-keying the column list.
#[component]
pub fn TaskCard(id: String) -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();

    let id_title = id.clone();
    let title = move || board.with(|b| b.task(&id_title).map(|t| t.title.clone()).unwrap_or_default());
    let id_priority = id.clone();
    let priority = Signal::derive(move || board.with(|b| b.task(&id_priority).map(|t| t.priority).unwrap_or_default()));
    let id_tags = id.clone();
    let tag_line = move || {
        board.with(|b| {
            b.task(&id_tags)
                .and_then(tasks::kanban::KanbanTask::tag_line)
                .unwrap_or_else(|| "no tags".to_owned())
        })
    };
    let id_active = id.clone();
    let is_active = move || board.with(|b| b.active_id.as_deref() == Some(id_active.as_str()));

    let id_drag = id.clone();
    let on_dragstart = move |ev: leptos::ev::DragEvent| {
        #[cfg(feature = "hydrate")]
        if let Some(dt) = ev.data_transfer() {
            // Firefox will not start a drag without payload data.
            if let Err(err) = dt.set_data("text/plain", &id_drag) {
                log::warn!("drag payload not set: {err:?}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
        board.update(|b| b.start_drag(&id_drag));
    };
    let id_select = id.clone();
    let on_click = move |_| board.update(|b| b.select(&id_select));
    let id_delete = id;
    let on_delete = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        board.update(|b| {
            b.remove(&id_delete);
        });
    };

    view! {
        <div
            class="task-card"
            class:task-card--high=move || priority.get() == Priority::High
            class:task-card--active=is_active
            draggable="true"
            on:dragstart=on_dragstart
            on:click=on_click
        >
            <div class="task-card__top">
                <div class="task-card__title">{title}</div>
                <div class="badge">{move || priority.get().label()}</div>
            </div>

            <div class="task-card__bottom">
                <div class="task-card__tags">{tag_line}</div>
                <button class="icon-btn" on:click=on_delete aria-label="delete" title="Delete task">
                    "✕"
                </button>
            </div>
        </div>
    }
}
