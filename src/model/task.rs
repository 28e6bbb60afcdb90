use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

/// Stable identity of a task within one store.
///
/// Ids come from a per-store counter and are never handed out twice, even
/// after the task they named has been deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hands out fresh `TaskId`s, starting at 1.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    next: u64,
}

impl Default for IdAllocator {
    fn default() -> Self {
        IdAllocator { next: 1 }
    }
}

impl IdAllocator {
    pub fn allocate(&mut self) -> TaskId {
        let id = TaskId(self.next);
        self.next += 1;
        id
    }
}

/// A single to-do entry.
///
/// Everything except the completion flag is fixed at creation. The flag is
/// only flipped by the owning store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    is_done: bool,
    /// Calendar day the task was created, serialized as `YYYY-MM-DD`
    created_at: NaiveDate,
}

impl Task {
    pub(crate) fn new(
        id: TaskId,
        title: String,
        description: String,
        is_done: bool,
        created_at: NaiveDate,
    ) -> Self {
        Task {
            id,
            title,
            description,
            is_done,
            created_at,
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_done(&self) -> bool {
        self.is_done
    }

    pub fn created_at(&self) -> NaiveDate {
        self.created_at
    }

    /// The glyph shown in front of the title
    pub fn status_glyph(&self) -> &'static str {
        if self.is_done { "✅" } else { "❌" }
    }

    pub(crate) fn toggle(&mut self) {
        self.is_done = !self.is_done;
    }
}

/// Row text for a task: status glyph, title, then description.
/// An absent task renders as the empty string.
pub fn display_text(task: Option<&Task>) -> String {
    match task {
        Some(task) => format!(
            "{} {} - {}",
            task.status_glyph(),
            task.title,
            task.description
        ),
        None => String::new(),
    }
}
