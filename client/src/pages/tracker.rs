//! Tracker page: focus timer, stats, add form and the filtered checklist.

use leptos::prelude::*;

use crate::components::focus_timer::FocusTimer;
use crate::components::toolbar::Toolbar;
use crate::components::tracker_form::{StatusFilterBar, TrackerForm};
use crate::components::tracker_row::TrackerRow;
use crate::components::tracker_stats::TrackerStatsBar;
use crate::state::tracker::TrackerState;
use crate::state::ui::Variant;
use crate::util::persistence::install_tracker_persistence;

/// Variant B of the widget.
#[component]
pub fn TrackerPage() -> impl IntoView {
    let tracker = expect_context::<RwSignal<TrackerState>>();
    install_tracker_persistence(tracker);

    let query = Signal::derive(move || tracker.with(|t| t.query.clone()));
    let on_query = Callback::new(move |q: String| tracker.update(|t| t.query = q));
    let row_ids = move || tracker.with(TrackerState::visible_ids);
    let is_empty = move || tracker.with(|t| t.visible().is_empty());

    view! {
        <div class="page">
            <Toolbar
                variant=Variant::Tracker
                query=query
                on_query=on_query
                placeholder="Search: title, category..."
            />
            <main class="page__main tracker">
                <div class="tracker__side">
                    <FocusTimer/>
                </div>
                <div class="tracker__main">
                    <TrackerStatsBar/>
                    <TrackerForm/>
                    <section class="card">
                        <div class="tracker__filters">
                            <StatusFilterBar/>
                        </div>
                        <Show when=is_empty>
                            <div class="muted">"Nothing here."</div>
                        </Show>
                        <ul class="tracker__list">
                            <For each=row_ids key=|id| id.clone() children=move |id| view! { <TrackerRow id=id/> }/>
                        </ul>
                    </section>
                </div>
            </main>
        </div>
    }
}
