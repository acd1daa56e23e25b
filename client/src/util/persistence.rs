//! Load-once / save-on-change wiring between page state and `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Effects only run in the browser, so the server renders each page from an
//! empty, not-yet-loaded state and the client fills it from storage right
//! after hydration. From then on every change to the task collection rewrites
//! the whole stored array. Query, drafts and the timer are not persisted.

use leptos::prelude::*;
use serde::Serialize;
use tasks::consts::{KANBAN_STORAGE_KEY, TRACKER_STORAGE_KEY};
use tasks::store::{self, StoreError};

use crate::state::board::BoardState;
use crate::state::tracker::TrackerState;
use crate::util::storage::BrowserStorage;

/// Load the Kanban board on mount and save it after every mutation.
pub fn install_board_persistence(board: RwSignal<BoardState>) {
    Effect::new(move || {
        if board.with_untracked(|b| b.loaded) {
            return;
        }
        let err = board.try_update(|b| b.load_from(&BrowserStorage)).flatten();
        report_load("board", err);
    });

    let tasks = Memo::new(move |_| board.with(|b| b.loaded.then(|| b.board.tasks().to_vec())));
    Effect::new(move || {
        if let Some(tasks) = tasks.get() {
            save_logged(KANBAN_STORAGE_KEY, &tasks);
        }
    });
}

/// Load the tracker list on mount and save it after every mutation.
pub fn install_tracker_persistence(tracker: RwSignal<TrackerState>) {
    Effect::new(move || {
        if tracker.with_untracked(|t| t.loaded) {
            return;
        }
        let err = tracker.try_update(|t| t.load_from(&BrowserStorage)).flatten();
        report_load("tracker", err);
    });

    let tasks = Memo::new(move |_| tracker.with(|t| t.loaded.then(|| t.list.tasks().to_vec())));
    Effect::new(move || {
        if let Some(tasks) = tasks.get() {
            save_logged(TRACKER_STORAGE_KEY, &tasks);
        }
    });
}

fn report_load(what: &str, err: Option<StoreError>) {
    #[cfg(feature = "hydrate")]
    if let Some(err) = err {
        log::warn!("stored {what} unusable, starting from seed tasks: {err}");
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (what, err);
}

fn save_logged<T: Serialize>(key: &str, tasks: &[T]) {
    if let Err(err) = store::save(&BrowserStorage, key, tasks) {
        #[cfg(feature = "hydrate")]
        log::warn!("failed to save {key}: {err}");
        #[cfg(not(feature = "hydrate"))]
        let _ = err;
    }
}
