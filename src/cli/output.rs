use serde::Serialize;

use crate::model::task::{self, Task};
use crate::ops::store::TaskStore;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct RowJson<'a> {
    pub index: usize,
    #[serde(flatten)]
    pub task: &'a Task,
    pub text: String,
}

#[derive(Serialize)]
pub struct CountJson {
    pub label: String,
    pub shown: usize,
    pub total: usize,
    pub capacity: usize,
    pub searching: bool,
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

/// Plain-text row: `"{index}. {display text}"`
pub fn format_row(index: usize, task: &Task) -> String {
    format!("{}. {}", index, task::display_text(Some(task)))
}

pub fn row_json(index: usize, task: &Task) -> serde_json::Result<String> {
    serde_json::to_string(&RowJson {
        index,
        task,
        text: task::display_text(Some(task)),
    })
}

pub fn count_json(store: &TaskStore) -> serde_json::Result<String> {
    serde_json::to_string(&CountJson {
        label: store.count_display_text(),
        shown: store.task_count(),
        total: store.tasks().len(),
        capacity: store.max_tasks(),
        searching: store.is_searching(),
    })
}

/// Every row of the active sequence, one line each
pub fn render_rows(store: &TaskStore, json: bool) -> serde_json::Result<Vec<String>> {
    let view = store.active_view();
    if view.is_empty() && !json {
        return Ok(vec!["(no tasks)".to_string()]);
    }
    view.into_iter()
        .enumerate()
        .map(|(index, task)| {
            if json {
                row_json(index, task)
            } else {
                Ok(format_row(index, task))
            }
        })
        .collect()
}

pub fn render_count(store: &TaskStore, json: bool) -> serde_json::Result<String> {
    if json {
        count_json(store)
    } else {
        Ok(store.count_display_text())
    }
}
