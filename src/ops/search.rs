use indexmap::IndexMap;

use crate::model::task::{Task, TaskId};

/// Whether a query should clear search mode instead of filtering
pub fn is_blank(query: &str) -> bool {
    query.trim().is_empty()
}

/// Case-insensitive substring match against title or description.
/// `needle` must already be lower-cased.
pub fn matches(task: &Task, needle: &str) -> bool {
    task.title().to_lowercase().contains(needle)
        || task.description().to_lowercase().contains(needle)
}

/// Ids of every task matching `query`, in main-sequence order.
pub fn filter_ids(tasks: &IndexMap<TaskId, Task>, query: &str) -> Vec<TaskId> {
    let needle = query.to_lowercase();
    tasks
        .values()
        .filter(|task| matches(task, &needle))
        .map(Task::id)
        .collect()
}
