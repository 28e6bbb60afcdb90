use std::io::Write;
use std::sync::Mutex;

use crate::cli::output::{format_row, render_count, render_rows, row_json};
use crate::ops::port::PresentationPort;
use crate::ops::store::TaskStore;

/// Line-oriented presentation surface.
///
/// Prints the count label, the rows of the active sequence, or a single
/// row as the store reports changes. Write failures are dropped: a closed
/// stdout must not take the store down with it.
pub struct ConsoleSurface<W> {
    out: Mutex<W>,
    json: bool,
}

impl<W: Write + Send> ConsoleSurface<W> {
    pub fn new(out: W, json: bool) -> Self {
        ConsoleSurface {
            out: Mutex::new(out),
            json,
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|e| e.into_inner())
    }

    pub fn print_line(&self, line: &str) {
        let mut out = self.out.lock().unwrap_or_else(|e| e.into_inner());
        let _ = writeln!(out, "{}", line);
        let _ = out.flush();
    }

    pub fn print_rows(&self, store: &TaskStore) {
        match render_rows(store, self.json) {
            Ok(rows) => {
                for row in rows {
                    self.print_line(&row);
                }
            }
            Err(e) => tracing::warn!(error = %e, "could not render rows"),
        }
    }

    pub fn print_count(&self, store: &TaskStore) {
        match render_count(store, self.json) {
            Ok(label) => self.print_line(&label),
            Err(e) => tracing::warn!(error = %e, "could not render count"),
        }
    }

    fn print_row(&self, store: &TaskStore, index: usize) {
        let Some(task) = store.task_at(index) else {
            return;
        };
        if self.json {
            match row_json(index, task) {
                Ok(line) => self.print_line(&line),
                Err(e) => tracing::warn!(error = %e, "could not render row"),
            }
        } else {
            self.print_line(&format_row(index, task));
        }
    }
}

impl<W: Write + Send> PresentationPort for ConsoleSurface<W> {
    fn list_changed(&self, store: &TaskStore) {
        self.print_rows(store);
    }

    fn row_changed(&self, store: &TaskStore, index: usize) {
        self.print_row(store, index);
    }

    fn count_changed(&self, store: &TaskStore) {
        self.print_count(store);
    }
}
