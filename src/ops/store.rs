use std::fmt;
use std::sync::{Arc, Weak};

use chrono::{Local, NaiveDate};
use indexmap::IndexMap;
use tracing::{debug, trace, warn};

use crate::model::config::Config;
use crate::model::task::{self, IdAllocator, Task, TaskId};
use crate::ops::debounce::SearchDebouncer;
use crate::ops::port::PresentationPort;
use crate::ops::search;

/// Error type for store mutations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("{field} must not be empty")]
    InvalidInput { field: Field },
    #[error("task list is full ({max} tasks)")]
    CapacityReached { max: usize },
}

/// Which input of `add_task` was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Description,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Title => f.write_str("title"),
            Field::Description => f.write_str("description"),
        }
    }
}

/// Example tasks a fresh session starts with: (title, description, done)
const SEED_TASKS: [(&str, &str, bool); 3] = [
    ("Buy groceries", "Get milk and bread", false),
    ("Walk the dog", "Take Rex for a walk", true),
    ("Finish project", "Complete the app", false),
];

/// Owns the ordered task list and the transient search state.
///
/// Insertion order is display order. While a search is active the store
/// also keeps the ids of the matching tasks; that list is a view into the
/// main sequence, so a toggle made through either one is seen by both.
///
/// Indexed operations (`toggle_task`, `delete_task`, `task_at`) address
/// the *active* sequence: the filtered one while searching, the main one
/// otherwise. Out-of-range indices are ignored.
pub struct TaskStore {
    tasks: IndexMap<TaskId, Task>,
    ids: IdAllocator,
    /// `Some` while a search is active
    filtered: Option<Vec<TaskId>>,
    max_tasks: usize,
    enforce_capacity: bool,
    debouncer: SearchDebouncer,
    port: Option<Weak<dyn PresentationPort>>,
}

impl Default for TaskStore {
    fn default() -> Self {
        TaskStore::new(&Config::default())
    }
}

impl TaskStore {
    /// Create a store, seeded with the example tasks unless the config
    /// turns that off.
    pub fn new(config: &Config) -> Self {
        let mut store = TaskStore::empty(config);
        if config.store.seed_examples {
            let today = today();
            for (title, description, is_done) in SEED_TASKS {
                store.push_task(title.to_string(), description.to_string(), is_done, today);
            }
        }
        store
    }

    /// Create a store with no tasks.
    pub fn empty(config: &Config) -> Self {
        TaskStore {
            tasks: IndexMap::new(),
            ids: IdAllocator::default(),
            filtered: None,
            max_tasks: config.store.max_tasks,
            enforce_capacity: config.store.enforce_capacity,
            debouncer: SearchDebouncer::new(config.search.debounce()),
            port: None,
        }
    }

    /// Register the surface to notify. The store never keeps it alive.
    pub fn attach(&mut self, port: Weak<dyn PresentationPort>) {
        self.port = Some(port);
    }

    pub fn detach(&mut self) {
        self.port = None;
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Append a new open task dated today.
    ///
    /// An active search is left as it is: the new task shows up in the
    /// filtered list only after the next search runs.
    pub fn add_task(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Task, StoreError> {
        let title = title.into();
        let description = description.into();
        if search::is_blank(&title) {
            return Err(StoreError::InvalidInput { field: Field::Title });
        }
        if search::is_blank(&description) {
            return Err(StoreError::InvalidInput {
                field: Field::Description,
            });
        }
        if self.enforce_capacity && self.tasks.len() >= self.max_tasks {
            return Err(StoreError::CapacityReached {
                max: self.max_tasks,
            });
        }

        let task = self.push_task(title, description, false, today());
        debug!(id = %task.id(), count = self.tasks.len(), "task added");
        self.notify_list_and_count();
        Ok(task)
    }

    /// Flip the completion flag of the task at `index` in the active sequence.
    pub fn toggle_task(&mut self, index: usize) {
        let Some(id) = self.active_id(index) else {
            trace!(index, "toggle ignored: index out of range");
            return;
        };
        let Some(task) = self.tasks.get_mut(&id) else {
            return;
        };
        task.toggle();
        debug!(id = %id, done = task.is_done(), "task toggled");

        if let Some(port) = self.port() {
            port.row_changed(self, index);
        }
    }

    /// Remove the task at `index` in the active sequence from both sequences.
    pub fn delete_task(&mut self, index: usize) {
        let Some(id) = self.active_id(index) else {
            trace!(index, "delete ignored: index out of range");
            return;
        };
        self.tasks.shift_remove(&id);
        if let Some(filtered) = &mut self.filtered {
            filtered.retain(|other| *other != id);
        }
        debug!(id = %id, count = self.tasks.len(), "task deleted");
        self.notify_list_and_count();
    }

    // -----------------------------------------------------------------------
    // Search
    // -----------------------------------------------------------------------

    /// Schedule `query` to be applied once the debounce delay passes.
    ///
    /// A query still waiting from an earlier call is dropped without
    /// effect. The scheduled query runs when the host awaits
    /// `run_pending_search`.
    ///
    /// The delay needs a tokio runtime. Outside one there is no timer to
    /// wait on, so the query is applied immediately instead.
    pub fn search(&mut self, query: impl Into<String>) {
        let query = query.into();
        if tokio::runtime::Handle::try_current().is_err() {
            warn!("no tokio runtime, applying search without debounce");
            self.cancel_search();
            self.apply_search(&query);
            return;
        }
        self.debouncer.schedule(query);
    }

    /// Wait for the pending query to come due and apply it.
    ///
    /// Returns `false` immediately when nothing is pending. Cancel-safe:
    /// dropping the future keeps the query pending.
    pub async fn run_pending_search(&mut self) -> bool {
        match self.debouncer.next_expired().await {
            Some(query) => {
                self.apply_search(&query);
                true
            }
            None => false,
        }
    }

    /// Drop the pending query, if any. Returns whether one was dropped.
    pub fn cancel_search(&mut self) -> bool {
        match self.debouncer.cancel() {
            Some(query) => {
                trace!(query = %query, "search canceled");
                true
            }
            None => false,
        }
    }

    pub fn has_pending_search(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Apply `query` right away, bypassing the debounce.
    ///
    /// A blank query leaves search mode; anything else rebuilds the
    /// filtered list from the current main sequence.
    pub fn apply_search(&mut self, query: &str) {
        if search::is_blank(query) {
            self.filtered = None;
            debug!("search cleared");
        } else {
            let ids = search::filter_ids(&self.tasks, query);
            debug!(query, matches = ids.len(), "search applied");
            self.filtered = Some(ids);
        }
        self.notify_list_and_count();
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn is_searching(&self) -> bool {
        self.filtered.is_some()
    }

    /// The main sequence, in insertion order
    pub fn tasks(&self) -> impl ExactSizeIterator<Item = &Task> + '_ {
        self.tasks.values()
    }

    /// Whichever sequence indexed operations currently address
    pub fn active_view(&self) -> Vec<&Task> {
        match &self.filtered {
            Some(ids) => ids.iter().filter_map(|id| self.tasks.get(id)).collect(),
            None => self.tasks.values().collect(),
        }
    }

    /// Number of rows in the active sequence
    pub fn task_count(&self) -> usize {
        self.filtered.as_ref().map_or(self.tasks.len(), Vec::len)
    }

    pub fn max_tasks(&self) -> usize {
        self.max_tasks
    }

    /// Label text: `"2 of 5 tasks"` while searching, `"5/100 tasks"` otherwise.
    pub fn count_display_text(&self) -> String {
        match &self.filtered {
            Some(ids) => format!("{} of {} tasks", ids.len(), self.tasks.len()),
            None => format!("{}/{} tasks", self.tasks.len(), self.max_tasks),
        }
    }

    pub fn task_at(&self, index: usize) -> Option<&Task> {
        self.active_id(index).and_then(|id| self.tasks.get(&id))
    }

    pub fn display_text(&self, task: Option<&Task>) -> String {
        task::display_text(task)
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    fn push_task(
        &mut self,
        title: String,
        description: String,
        is_done: bool,
        created_at: NaiveDate,
    ) -> Task {
        let id = self.ids.allocate();
        let task = Task::new(id, title, description, is_done, created_at);
        self.tasks.insert(id, task.clone());
        task
    }

    fn active_id(&self, index: usize) -> Option<TaskId> {
        match &self.filtered {
            Some(ids) => ids.get(index).copied(),
            None => self.tasks.get_index(index).map(|(id, _)| *id),
        }
    }

    fn port(&self) -> Option<Arc<dyn PresentationPort>> {
        self.port.as_ref()?.upgrade()
    }

    fn notify_list_and_count(&self) {
        if let Some(port) = self.port() {
            port.list_changed(self);
            port.count_changed(self);
        }
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
