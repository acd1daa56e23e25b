//! Focus/break countdown panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! The countdown state lives in `TrackerState`; this component owns the only
//! timer in the app. A one-second `Interval` exists exactly while the timer
//! is running and is dropped on pause, reset or unmount.

use leptos::prelude::*;
use tasks::timer::TimerMode;

use crate::state::tracker::TrackerState;

#[component]
pub fn FocusTimer() -> impl IntoView {
    let tracker = expect_context::<RwSignal<TrackerState>>();

    #[cfg(feature = "hydrate")]
    install_tick(tracker);

    let mode = move || tracker.with(|t| t.timer.mode());
    let running = move || tracker.with(|t| t.timer.is_running());
    let clock = move || tracker.with(|t| t.timer.clock());
    let progress_pct = move || tracker.with(|t| t.timer.progress() * 100.0);
    let sessions = move || tracker.with(|t| t.timer.completed_focus_sessions());

    view! {
        <section class="card timer" class:timer--break=move || mode() == TimerMode::Break>
            <div class="timer__mode">{move || mode().label()}</div>
            <div class="timer__clock">{clock}</div>
            <div class="timer__progress">
                <span class="timer__progress-fill" style:width=move || format!("{:.1}%", progress_pct())></span>
            </div>
            <div class="timer__actions">
                <button class="btn btn--primary" on:click=move |_| tracker.update(|t| t.timer.toggle_running())>
                    {move || if running() { "Pause" } else { "Start" }}
                </button>
                <button class="btn" on:click=move |_| tracker.update(|t| t.timer.reset())>
                    "Reset"
                </button>
                <button class="btn" on:click=move |_| tracker.update(|t| t.timer.skip()) title="Switch phase now">
                    "Skip"
                </button>
            </div>
            <div class="muted timer__sessions">{move || format!("{} focus sessions completed", sessions())}</div>
        </section>
    }
}

/// Keep a one-second interval alive while the timer runs.
#[cfg(feature = "hydrate")]
fn install_tick(tracker: RwSignal<TrackerState>) {
    use gloo_timers::callback::Interval;
    use tasks::consts::TICK_INTERVAL_MS;
    use tasks::timer::TickOutcome;

    let tick = StoredValue::new_local(None::<Interval>);

    Effect::new(move || {
        let running = tracker.with(|t| t.timer.is_running());
        if !running {
            tick.update_value(|slot| {
                slot.take();
            });
            return;
        }
        if tick.with_value(Option::is_some) {
            return;
        }
        let interval = Interval::new(TICK_INTERVAL_MS, move || {
            tracker.update(|t| {
                if let TickOutcome::Switched(mode) = t.timer.tick() {
                    log::info!("timer switched to {} phase", mode.label());
                }
            });
        });
        tick.set_value(Some(interval));
    });

    on_cleanup(move || {
        tick.update_value(|slot| {
            slot.take();
        });
    });
}
