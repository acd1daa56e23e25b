//! Kanban page: quick add, three status columns and the detail panel.

use leptos::prelude::*;
use tasks::kanban::Status;

use crate::components::detail_panel::DetailPanel;
use crate::components::kanban_column::KanbanColumn;
use crate::components::quick_add::QuickAddForm;
use crate::components::toolbar::Toolbar;
use crate::state::board::BoardState;
use crate::state::ui::Variant;
use crate::util::persistence::install_board_persistence;

/// Variant A of the widget.
#[component]
pub fn BoardPage() -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();
    install_board_persistence(board);

    let query = Signal::derive(move || board.with(|b| b.query.clone()));
    let on_query = Callback::new(move |q: String| board.update(|b| b.query = q));

    let columns = Status::ALL
        .into_iter()
        .map(|status| view! { <KanbanColumn status=status/> })
        .collect_view();

    view! {
        <div class="page">
            <Toolbar
                variant=Variant::Board
                query=query
                on_query=on_query
                placeholder="Search: title, tag, notes..."
            />
            <main class="page__main">
                <QuickAddForm/>
                <section class="board">{columns}</section>
                <DetailPanel/>
            </main>
        </div>
    }
}
