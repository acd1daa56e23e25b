//! Checklist tracker: tasks with a completion flag, a minute estimate and a
//! category, plus the aggregate numbers shown above the list.

#[cfg(test)]
#[path = "tracker_test.rs"]
mod tracker_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_ESTIMATE_MINUTES, MAX_ESTIMATE_MINUTES, MIN_ESTIMATE_MINUTES};
use crate::ids::{Identified, TaskId, new_task_id};

/// Fixed set of task categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Work,
    Study,
    Personal,
    Health,
}

impl Category {
    pub const ALL: [Category; 4] = [Category::Work, Category::Study, Category::Personal, Category::Health];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Study => "study",
            Self::Personal => "personal",
            Self::Health => "health",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::Study => "Study",
            Self::Personal => "Personal",
            Self::Health => "Health",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == raw)
    }
}

/// A tracker row, as stored in `localStorage`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerTask {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub done: bool,
    #[serde(deserialize_with = "deserialize_minutes")]
    pub minutes: u32,
    pub category: Category,
}

impl TrackerTask {
    fn seeded(title: &str, category: Category, minutes: u32, done: bool) -> Self {
        Self {
            id: new_task_id(),
            title: title.to_owned(),
            done,
            minutes,
            category,
        }
    }

    fn matches(&self, needle: &str) -> bool {
        format!("{} {}", self.title, self.category.as_str())
            .to_lowercase()
            .contains(needle)
    }
}

impl Identified for TrackerTask {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Stored estimates outside the allowed range are pulled back into it.
fn deserialize_minutes<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = i64::deserialize(deserializer)?;
    Ok(clamp_minutes(raw))
}

/// Sparse edit for a tracker row. Only present fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackerPatch {
    pub title: Option<String>,
    pub done: Option<bool>,
    pub minutes: Option<u32>,
    pub category: Option<Category>,
}

impl TrackerPatch {
    #[must_use]
    pub fn title(title: impl Into<String>) -> Self {
        Self { title: Some(title.into()), ..Self::default() }
    }

    /// Estimate parsed from the minutes input field.
    #[must_use]
    pub fn minutes_from_input(raw: &str) -> Self {
        Self { minutes: Some(parse_minutes(raw)), ..Self::default() }
    }

    #[must_use]
    pub fn category(category: Category) -> Self {
        Self { category: Some(category), ..Self::default() }
    }

    fn apply_to(&self, task: &mut TrackerTask) {
        if let Some(title) = &self.title {
            task.title.clone_from(title);
        }
        if let Some(done) = self.done {
            task.done = done;
        }
        if let Some(minutes) = self.minutes {
            task.minutes = clamp_minutes(i64::from(minutes));
        }
        if let Some(category) = self.category {
            task.category = category;
        }
    }
}

/// Draft held by the add form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerDraft {
    pub title: String,
    pub minutes: u32,
    pub category: Category,
}

impl Default for TrackerDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            minutes: DEFAULT_ESTIMATE_MINUTES,
            category: Category::default(),
        }
    }
}

impl TrackerDraft {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Which rows the list shows by completion state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Open,
    Done,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 3] = [StatusFilter::All, StatusFilter::Open, StatusFilter::Done];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Open => "Open",
            Self::Done => "Done",
        }
    }

    #[must_use]
    pub fn admits(self, task: &TrackerTask) -> bool {
        match self {
            Self::All => true,
            Self::Open => !task.done,
            Self::Done => task.done,
        }
    }
}

/// Aggregates over a task slice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrackerStats {
    pub total: usize,
    pub done: usize,
    pub open: usize,
    pub total_minutes: u32,
    /// Estimated minutes still ahead (open tasks only).
    pub remaining_minutes: u32,
    /// Share of finished tasks, rounded down; 0 for an empty list.
    pub percent_done: u32,
}

impl TrackerStats {
    #[must_use]
    pub fn of<'a>(tasks: impl IntoIterator<Item = &'a TrackerTask>) -> Self {
        let mut stats = Self::default();
        for task in tasks {
            stats.total += 1;
            stats.total_minutes = stats.total_minutes.saturating_add(task.minutes);
            if task.done {
                stats.done += 1;
            } else {
                stats.open += 1;
                stats.remaining_minutes = stats.remaining_minutes.saturating_add(task.minutes);
            }
        }
        if stats.total > 0 {
            let percent = stats.done * 100 / stats.total;
            stats.percent_done = u32::try_from(percent).unwrap_or(100);
        }
        stats
    }
}

/// The ordered tracker collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackerList {
    tasks: Vec<TrackerTask>,
}

impl TrackerList {
    #[must_use]
    pub fn from_tasks(tasks: Vec<TrackerTask>) -> Self {
        Self { tasks }
    }

    /// Starter rows shown when nothing usable is stored.
    #[must_use]
    pub fn seed() -> Vec<TrackerTask> {
        vec![
            TrackerTask::seeded("Write weekly plan", Category::Work, 25, false),
            TrackerTask::seeded("Read chapter 3", Category::Study, 50, false),
            TrackerTask::seeded("Evening walk", Category::Health, 30, true),
        ]
    }

    #[must_use]
    pub fn tasks(&self) -> &[TrackerTask] {
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
    pub fn get(&self, id: &str) -> Option<&TrackerTask> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Create an open task from the draft and put it first.
    pub fn add(&mut self, draft: &TrackerDraft) -> Option<TaskId> {
        let title = draft.title.trim();
        if title.is_empty() {
            return None;
        }
        let task = TrackerTask {
            id: new_task_id(),
            title: title.to_owned(),
            done: false,
            minutes: clamp_minutes(i64::from(draft.minutes)),
            category: draft.category,
        };
        let id = task.id.clone();
        self.tasks.insert(0, task);
        Some(id)
    }

    /// Flip the completion flag of one task.
    pub fn toggle(&mut self, id: &str) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        task.done = !task.done;
        true
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let Some(index) = self.tasks.iter().position(|t| t.id == id) else {
            return false;
        };
        self.tasks.remove(index);
        true
    }

    pub fn update(&mut self, id: &str, patch: &TrackerPatch) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        patch.apply_to(task);
        true
    }

    /// Rows matching both the completion filter and a free-text query.
    #[must_use]
    pub fn filter(&self, query: &str, status: StatusFilter) -> Vec<&TrackerTask> {
        let needle = query.trim().to_lowercase();
        self.tasks
            .iter()
            .filter(|t| status.admits(t))
            .filter(|t| needle.is_empty() || t.matches(&needle))
            .collect()
    }

    #[must_use]
    pub fn stats(&self) -> TrackerStats {
        TrackerStats::of(&self.tasks)
    }
}

/// Clamp an estimate into `[MIN_ESTIMATE_MINUTES, MAX_ESTIMATE_MINUTES]`.
#[must_use]
pub fn clamp_minutes(minutes: i64) -> u32 {
    let clamped = minutes.clamp(i64::from(MIN_ESTIMATE_MINUTES), i64::from(MAX_ESTIMATE_MINUTES));
    u32::try_from(clamped).unwrap_or(MIN_ESTIMATE_MINUTES)
}

/// Read the minutes input field.
///
/// Non-numeric input falls back to [`DEFAULT_ESTIMATE_MINUTES`]; numbers are
/// clamped, infinities included. Fractions are truncated.
#[must_use]
pub fn parse_minutes(raw: &str) -> u32 {
    let trimmed = raw.trim();
    if let Ok(n) = trimmed.parse::<i64>() {
        return clamp_minutes(n);
    }
    match trimmed.parse::<f64>() {
        Ok(n) if !n.is_nan() => {
            // Saturating cast: +/-inf land on i64::MAX / i64::MIN.
            #[allow(clippy::cast_possible_truncation)]
            let whole = n.trunc() as i64;
            clamp_minutes(whole)
        }
        _ => DEFAULT_ESTIMATE_MINUTES,
    }
}

/// Human form of a minute total, e.g. `"1h 35m"`.
#[must_use]
pub fn format_minutes(minutes: u32) -> String {
    let hours = minutes / 60;
    let rest = minutes % 60;
    match (hours, rest) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}m"),
    }
}
