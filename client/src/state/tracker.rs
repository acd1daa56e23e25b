//! Tracker page state: the checklist plus the focus/break countdown.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only `list` is persisted. The countdown lives here so the tick interval and
//! the timer panel share one source of truth, but it starts fresh on every
//! page load.

#[cfg(test)]
#[path = "tracker_test.rs"]
mod tracker_test;

use tasks::consts::TRACKER_STORAGE_KEY;
use tasks::ids::TaskId;
use tasks::store::{self, KeyValueStore};
use tasks::timer::PomodoroTimer;
use tasks::tracker::{StatusFilter, TrackerDraft, TrackerList, TrackerPatch, TrackerStats, TrackerTask, parse_minutes};

#[derive(Clone, Debug, Default)]
pub struct TrackerState {
    pub list: TrackerList,
    /// True once tasks were read from storage.
    pub loaded: bool,
    pub query: String,
    pub filter: StatusFilter,
    pub draft: TrackerDraft,
    /// Raw text of the draft's minutes field; parsed on submit.
    pub minutes_input: String,
    pub timer: PomodoroTimer,
}

impl TrackerState {
    /// Replace the list with what `backend` holds, or the seed list.
    pub fn load_from<S: KeyValueStore + ?Sized>(&mut self, backend: &S) -> Option<store::StoreError> {
        let (tasks, err) = store::load::<TrackerTask, _>(backend, TRACKER_STORAGE_KEY).or_seed(TrackerList::seed);
        self.list = TrackerList::from_tasks(tasks);
        self.loaded = true;
        err
    }

    /// Rows passing the completion filter and the search query.
    #[must_use]
    pub fn visible(&self) -> Vec<&TrackerTask> {
        self.list.filter(&self.query, self.filter)
    }

    #[must_use]
    pub fn visible_ids(&self) -> Vec<TaskId> {
        self.visible().into_iter().map(|t| t.id.clone()).collect()
    }

    /// Stats over the whole list, independent of filters.
    #[must_use]
    pub fn stats(&self) -> TrackerStats {
        self.list.stats()
    }

    #[must_use]
    pub fn task(&self, id: &str) -> Option<&TrackerTask> {
        self.list.get(id)
    }

    /// Add a row from the draft and reset the form.
    ///
    /// An empty minutes field keeps the draft's default estimate. A rejected
    /// submit leaves the draft and the raw input untouched.
    pub fn submit(&mut self) -> Option<TaskId> {
        let minutes = if self.minutes_input.trim().is_empty() {
            self.draft.minutes
        } else {
            parse_minutes(&self.minutes_input)
        };
        let draft = TrackerDraft { minutes, ..self.draft.clone() };
        let id = self.list.add(&draft)?;
        self.draft.clear();
        self.minutes_input.clear();
        Some(id)
    }

    pub fn toggle(&mut self, id: &str) -> bool {
        self.list.toggle(id)
    }

    pub fn update(&mut self, id: &str, patch: &TrackerPatch) -> bool {
        self.list.update(id, patch)
    }

    pub fn remove(&mut self, id: &str) -> bool {
        self.list.remove(id)
    }
}
