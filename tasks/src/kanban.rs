//! Kanban board model: tasks grouped into `todo`, `doing` and `done` columns.
//!
//! The board keeps tasks in a single ordered `Vec`; columns are views over a
//! filtered slice rather than separate containers, so moving a card between
//! columns only rewrites its `status`. New tasks are prepended so the most
//! recent quick-add shows at the top of its column.

#[cfg(test)]
#[path = "kanban_test.rs"]
mod kanban_test;

use serde::{Deserialize, Serialize};

use crate::ids::{Identified, TaskId, new_task_id};

/// Workflow column a task sits in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Todo,
    Doing,
    Done,
}

impl Status {
    /// Columns in board order.
    pub const ALL: [Status; 3] = [Status::Todo, Status::Doing, Status::Done];

    /// Lowercase key used on the wire and in search blobs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::Doing => "doing",
            Self::Done => "done",
        }
    }

    /// Column heading.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Todo => "Todo",
            Self::Doing => "Doing",
            Self::Done => "Done",
        }
    }

    /// Parse a lowercase key as produced by [`Status::as_str`].
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw)
    }
}

/// Task urgency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Mid,
    Low,
}

impl Priority {
    /// Options in the order the selects list them.
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Mid, Priority::Low];

    /// Lowercase key used on the wire and in search blobs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Mid => "mid",
            Self::Low => "low",
        }
    }

    /// Badge text shown on cards.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Mid => "Mid",
            Self::Low => "Low",
        }
    }

    /// Parse a lowercase key as produced by [`Priority::as_str`].
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == raw)
    }
}

/// A card on the board, as stored in `localStorage`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KanbanTask {
    pub id: TaskId,
    pub title: String,
    pub status: Status,
    pub priority: Priority,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub notes: String,
}

impl KanbanTask {
    fn seeded(title: &str, status: Status, priority: Priority, tag: &str, notes: &str) -> Self {
        Self {
            id: new_task_id(),
            title: title.to_owned(),
            status,
            priority,
            tags: vec![tag.to_owned()],
            notes: notes.to_owned(),
        }
    }

    /// Lowercased text that free-text search runs against.
    #[must_use]
    pub fn search_blob(&self) -> String {
        format!(
            "{} {} {} {} {}",
            self.title,
            self.status.as_str(),
            self.priority.as_str(),
            self.tags.join(" "),
            self.notes
        )
        .to_lowercase()
    }

    /// Tag line for the card footer, e.g. `"#ui #auth"`.
    #[must_use]
    pub fn tag_line(&self) -> Option<String> {
        if self.tags.is_empty() {
            return None;
        }
        Some(self.tags.iter().map(|t| format!("#{t}")).collect::<Vec<_>>().join(" "))
    }
}

impl Identified for KanbanTask {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Sparse edit for a card. Only present fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KanbanPatch {
    pub title: Option<String>,
    pub status: Option<Status>,
    pub priority: Option<Priority>,
    pub tags: Option<Vec<String>>,
    pub notes: Option<String>,
}

impl KanbanPatch {
    #[must_use]
    pub fn title(title: impl Into<String>) -> Self {
        Self { title: Some(title.into()), ..Self::default() }
    }

    #[must_use]
    pub fn status(status: Status) -> Self {
        Self { status: Some(status), ..Self::default() }
    }

    #[must_use]
    pub fn priority(priority: Priority) -> Self {
        Self { priority: Some(priority), ..Self::default() }
    }

    /// Tags parsed from the comma-separated edit field.
    #[must_use]
    pub fn tags_from_input(raw: &str) -> Self {
        Self { tags: Some(parse_tags(raw)), ..Self::default() }
    }

    #[must_use]
    pub fn notes(notes: impl Into<String>) -> Self {
        Self { notes: Some(notes.into()), ..Self::default() }
    }

    fn apply_to(&self, task: &mut KanbanTask) {
        if let Some(title) = &self.title {
            task.title.clone_from(title);
        }
        if let Some(status) = self.status {
            task.status = status;
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(tags) = &self.tags {
            task.tags.clone_from(tags);
        }
        if let Some(notes) = &self.notes {
            task.notes.clone_from(notes);
        }
    }
}

/// Draft held by the quick-add form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuickAdd {
    pub title: String,
    pub status: Status,
    pub priority: Priority,
}

impl QuickAdd {
    /// Restore the form defaults after a successful add.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Per-column task counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub todo: usize,
    pub doing: usize,
    pub done: usize,
}

impl StatusCounts {
    /// Count tasks per status.
    #[must_use]
    pub fn tally<'a>(tasks: impl IntoIterator<Item = &'a KanbanTask>) -> Self {
        let mut counts = Self::default();
        for task in tasks {
            match task.status {
                Status::Todo => counts.todo += 1,
                Status::Doing => counts.doing += 1,
                Status::Done => counts.done += 1,
            }
        }
        counts
    }

    #[must_use]
    pub fn get(&self, status: Status) -> usize {
        match status {
            Status::Todo => self.todo,
            Status::Doing => self.doing,
            Status::Done => self.done,
        }
    }
}

/// The ordered task collection behind the board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KanbanBoard {
    tasks: Vec<KanbanTask>,
}

impl KanbanBoard {
    /// Wrap an already-validated task list.
    #[must_use]
    pub fn from_tasks(tasks: Vec<KanbanTask>) -> Self {
        Self { tasks }
    }

    /// Starter tasks shown when nothing usable is stored.
    #[must_use]
    pub fn seed() -> Vec<KanbanTask> {
        vec![
            KanbanTask::seeded("Landing Page fixen", Status::Todo, Priority::Mid, "ui", ""),
            KanbanTask::seeded("Login Bug", Status::Doing, Priority::High, "auth", "Repro: Safari iOS"),
            KanbanTask::seeded("Readme updaten", Status::Done, Priority::Low, "docs", ""),
        ]
    }

    #[must_use]
    pub fn tasks(&self) -> &[KanbanTask] {
        &self.tasks
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&KanbanTask> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Create a task from the quick-add draft and put it first.
    ///
    /// Returns `None` without touching the board when the trimmed title is
    /// empty.
    pub fn add(&mut self, draft: &QuickAdd) -> Option<TaskId> {
        let title = draft.title.trim();
        if title.is_empty() {
            return None;
        }
        let task = KanbanTask {
            id: new_task_id(),
            title: title.to_owned(),
            status: draft.status,
            priority: draft.priority,
            tags: Vec::new(),
            notes: String::new(),
        };
        let id = task.id.clone();
        self.tasks.insert(0, task);
        Some(id)
    }

    /// Delete a task. Returns false if no task has this id.
    pub fn remove(&mut self, id: &str) -> bool {
        let Some(index) = self.tasks.iter().position(|t| t.id == id) else {
            return false;
        };
        self.tasks.remove(index);
        true
    }

    /// Apply a patch to one task. Returns false if no task has this id.
    pub fn update(&mut self, id: &str, patch: &KanbanPatch) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        patch.apply_to(task);
        true
    }

    /// Move a task to another column.
    pub fn move_to(&mut self, id: &str, status: Status) -> bool {
        self.update(id, &KanbanPatch::status(status))
    }

    /// Tasks matching a free-text query, in board order.
    ///
    /// The query is trimmed and lowercased; an empty query matches everything.
    #[must_use]
    pub fn filter(&self, query: &str) -> Vec<&KanbanTask> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.tasks.iter().collect();
        }
        self.tasks.iter().filter(|t| t.search_blob().contains(&needle)).collect()
    }
}

/// Tasks of one column, taken from an already-filtered view.
#[must_use]
pub fn column<'a>(visible: &[&'a KanbanTask], status: Status) -> Vec<&'a KanbanTask> {
    visible.iter().copied().filter(|t| t.status == status).collect()
}

/// Split the comma-separated tag field into trimmed, non-empty tags.
#[must_use]
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Remembers which card is being dragged between `dragstart` and `drop`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragState {
    from: Option<TaskId>,
}

impl DragState {
    pub fn start(&mut self, id: impl Into<TaskId>) {
        self.from = Some(id.into());
    }

    #[must_use]
    pub fn dragging(&self) -> Option<&str> {
        self.from.as_deref()
    }

    /// Finish the drag over a column, yielding the move to perform.
    ///
    /// The drag state is cleared either way.
    pub fn drop_on(&mut self, status: Status) -> Option<(TaskId, Status)> {
        self.from.take().map(|id| (id, status))
    }
}
