//! Client State
//!
//! The cached task list plus the draft form, and the `StateCell` seam through
//! which the sync logic reaches them.

use std::sync::{Arc, Mutex, PoisonError};

use chrono::NaiveDate;

use crate::draft::DraftForm;
use crate::models::{Task, TaskId};

/// Everything the client holds in memory
#[derive(Debug, Clone, PartialEq)]
pub struct TodoState {
    /// Tasks in server order
    pub tasks: Vec<Task>,
    pub draft: DraftForm,
}

impl TodoState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            tasks: Vec::new(),
            draft: DraftForm::new(today),
        }
    }

    pub fn find(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| &task.id == id)
    }

    /// Replace the whole list with a fresh server snapshot
    pub fn replace_all(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    /// Replace the entry with the same id. Returns false if there was none.
    pub fn replace_task(&mut self, updated: Task) -> bool {
        match self.tasks.iter_mut().find(|task| task.id == updated.id) {
            Some(task) => {
                *task = updated;
                true
            }
            None => false,
        }
    }

    /// Remove the entry with this id. Returns false if there was none.
    pub fn remove_task(&mut self, id: &TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| &task.id != id);
        self.tasks.len() != before
    }

    pub fn reset_draft(&mut self, today: NaiveDate) {
        self.draft = DraftForm::new(today);
    }
}

/// Shared handle to a `TodoState`.
///
/// Both methods return `None` when the underlying storage is gone (e.g. the
/// UI that owned it was torn down); callers treat that as a no-op.
pub trait StateCell: Clone + 'static {
    fn update<R>(&self, f: impl FnOnce(&mut TodoState) -> R) -> Option<R>;

    fn read<R>(&self, f: impl FnOnce(&TodoState) -> R) -> Option<R>;
}

/// Mutex-backed state for native use and tests
#[derive(Debug, Clone)]
pub struct SharedState(Arc<Mutex<TodoState>>);

impl SharedState {
    pub fn new(state: TodoState) -> Self {
        Self(Arc::new(Mutex::new(state)))
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> TodoState {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl StateCell for SharedState {
    fn update<R>(&self, f: impl FnOnce(&mut TodoState) -> R) -> Option<R> {
        let mut guard = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        Some(f(&mut guard))
    }

    fn read<R>(&self, f: impl FnOnce(&TodoState) -> R) -> Option<R> {
        let guard = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        Some(f(&guard))
    }
}
