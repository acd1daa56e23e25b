//! Detail panel for inline editing of the selected Kanban card.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every field writes straight through to board state on input, which in turn
//! triggers a save of the whole collection. There is no separate "save"
//! button and no undo.

use leptos::prelude::*;
use tasks::kanban::{KanbanPatch, KanbanTask, Priority, Status};

use crate::state::board::BoardState;

#[component]
pub fn DetailPanel() -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();

    let has_selection = move || board.with(|b| b.selected().is_some());

    view! {
        <section class="card detail">
            <div class="detail__title">"Details"</div>
            <Show
                when=has_selection
                fallback=|| view! { <div class="muted">"Click a task to edit it."</div> }
            >
                <DetailFields board=board/>
            </Show>
        </section>
    }
}

/// Apply `patch` to whichever task is selected right now.
fn patch_selected(board: RwSignal<BoardState>, patch: KanbanPatch) {
    board.update(|b| {
        if let Some(id) = b.active_id.clone() {
            b.update(&id, &patch);
        }
    });
}

fn selected_field<T: Default>(board: RwSignal<BoardState>, read: impl Fn(&KanbanTask) -> T) -> T {
    board.with(|b| b.selected().map(read).unwrap_or_default())
}

#[component]
fn DetailFields(board: RwSignal<BoardState>) -> impl IntoView {
    let status_options = Status::ALL
        .into_iter()
        .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
        .collect_view();
    let priority_options = Priority::ALL
        .into_iter()
        .map(|p| view! { <option value=p.as_str()>{p.label()}</option> })
        .collect_view();

    view! {
        <div class="detail__grid">
            <label class="field">
                <span class="field__label">"Title"</span>
                <input
                    class="input"
                    type="text"
                    prop:value=move || selected_field(board, |t| t.title.clone())
                    on:input=move |ev| patch_selected(board, KanbanPatch::title(event_target_value(&ev)))
                />
            </label>

            <label class="field">
                <span class="field__label">"Status"</span>
                <select
                    class="select"
                    prop:value=move || selected_field(board, |t| t.status).as_str()
                    on:change=move |ev| {
                        if let Some(status) = Status::parse(&event_target_value(&ev)) {
                            patch_selected(board, KanbanPatch::status(status));
                        }
                    }
                >
                    {status_options}
                </select>
            </label>

            <label class="field">
                <span class="field__label">"Priority"</span>
                <select
                    class="select"
                    prop:value=move || selected_field(board, |t| t.priority).as_str()
                    on:change=move |ev| {
                        if let Some(priority) = Priority::parse(&event_target_value(&ev)) {
                            patch_selected(board, KanbanPatch::priority(priority));
                        }
                    }
                >
                    {priority_options}
                </select>
            </label>

            <label class="field field--wide">
                <span class="field__label">"Notes"</span>
                <textarea
                    class="textarea"
                    rows="4"
                    prop:value=move || selected_field(board, |t| t.notes.clone())
                    on:input=move |ev| patch_selected(board, KanbanPatch::notes(event_target_value(&ev)))
                ></textarea>
            </label>

            <label class="field field--wide">
                <span class="field__label">"Tags (comma separated)"</span>
                <input
                    class="input"
                    type="text"
                    prop:value=move || selected_field(board, |t| t.tags.join(","))
                    on:input=move |ev| patch_selected(board, KanbanPatch::tags_from_input(&event_target_value(&ev)))
                />
            </label>
        </div>
    }
}
