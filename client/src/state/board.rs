//! Kanban page state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps the persisted [`KanbanBoard`] with everything the page needs between
//! renders: the search query, the quick-add draft, the card open in the detail
//! panel and the in-flight drag. Only `board` is written to storage.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use tasks::consts::KANBAN_STORAGE_KEY;
use tasks::ids::TaskId;
use tasks::kanban::{DragState, KanbanBoard, KanbanPatch, KanbanTask, QuickAdd, Status, StatusCounts, column};
use tasks::store::{self, KeyValueStore};

/// Board-level state for the Kanban page.
#[derive(Clone, Debug, Default)]
pub struct BoardState {
    /// Persisted task collection.
    pub board: KanbanBoard,
    /// True once tasks were read from storage. Nothing is saved before that,
    /// so the server-rendered empty board never overwrites stored tasks.
    pub loaded: bool,
    /// Free-text search across title, status, priority, tags and notes.
    pub query: String,
    /// Quick-add form contents.
    pub draft: QuickAdd,
    /// Card shown in the detail panel.
    pub active_id: Option<TaskId>,
    /// Card currently being dragged.
    pub drag: DragState,
}

impl BoardState {
    /// Replace the board with what `backend` holds, or the seed list.
    ///
    /// Returns the load error, if any, so the caller can log it.
    pub fn load_from<S: KeyValueStore + ?Sized>(&mut self, backend: &S) -> Option<store::StoreError> {
        let (tasks, err) = store::load::<KanbanTask, _>(backend, KANBAN_STORAGE_KEY).or_seed(KanbanBoard::seed);
        self.board = KanbanBoard::from_tasks(tasks);
        self.loaded = true;
        err
    }

    /// Tasks matching the current query, in board order.
    #[must_use]
    pub fn visible(&self) -> Vec<&KanbanTask> {
        self.board.filter(&self.query)
    }

    /// Ids of the visible tasks in one column.
    #[must_use]
    pub fn column_ids(&self, status: Status) -> Vec<TaskId> {
        column(&self.visible(), status).into_iter().map(|t| t.id.clone()).collect()
    }

    /// Per-column counts over the visible tasks.
    #[must_use]
    pub fn counts(&self) -> StatusCounts {
        StatusCounts::tally(self.visible())
    }

    #[must_use]
    pub fn task(&self, id: &str) -> Option<&KanbanTask> {
        self.board.get(id)
    }

    /// Task open in the detail panel, if it still exists.
    #[must_use]
    pub fn selected(&self) -> Option<&KanbanTask> {
        self.active_id.as_deref().and_then(|id| self.board.get(id))
    }

    /// Add a task from the quick-add draft and reset the form.
    ///
    /// A blank title leaves both the board and the draft untouched.
    pub fn submit_quick_add(&mut self) -> Option<TaskId> {
        let id = self.board.add(&self.draft)?;
        self.draft.clear();
        Some(id)
    }

    pub fn update(&mut self, id: &str, patch: &KanbanPatch) -> bool {
        self.board.update(id, patch)
    }

    /// Delete a task, closing the detail panel if it showed that task.
    pub fn remove(&mut self, id: &str) -> bool {
        if self.active_id.as_deref() == Some(id) {
            self.active_id = None;
        }
        self.board.remove(id)
    }

    pub fn select(&mut self, id: &str) {
        self.active_id = Some(id.to_owned());
    }

    pub fn start_drag(&mut self, id: &str) {
        self.drag.start(id);
    }

    /// Finish a drag over a column. Returns false if nothing was dragged.
    pub fn drop_on(&mut self, status: Status) -> bool {
        match self.drag.drop_on(status) {
            Some((id, status)) => self.board.move_to(&id, status),
            None => false,
        }
    }
}
