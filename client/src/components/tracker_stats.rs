//! Summary line above the tracker list.

use leptos::prelude::*;
use tasks::tracker::format_minutes;

use crate::state::tracker::TrackerState;

/// Done/open counts, minutes left and a completion bar over the whole list.
#[component]
pub fn TrackerStatsBar() -> impl IntoView {
    let tracker = expect_context::<RwSignal<TrackerState>>();
    let stats = move || tracker.with(TrackerState::stats);

    view! {
        <section class="card stats">
            <span class="stats__item">{move || format!("{}/{} done", stats().done, stats().total)}</span>
            <span class="stats__divider"></span>
            <span class="stats__item">{move || format!("{} open", stats().open)}</span>
            <span class="stats__divider"></span>
            <span class="stats__item">
                {move || format!("{} left of {}", format_minutes(stats().remaining_minutes), format_minutes(stats().total_minutes))}
            </span>
            <span class="stats__spacer"></span>
            <span class="stats__bar" title=move || format!("{}% done", stats().percent_done)>
                <span class="stats__bar-fill" style:width=move || format!("{}%", stats().percent_done)></span>
            </span>
        </section>
    }
}
