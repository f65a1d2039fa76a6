//! In-Memory API
//!
//! A process-local stand-in for the todo server. It assigns ids, stamps
//! timestamps, records every request it receives, and can be told to fail
//! specific operations.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use serde_json::Map;

use super::TodoApi;
use crate::error::{ApiError, ApiResult};
use crate::models::{NewTask, Task, TaskId, Timestamp};

/// The request kinds the API serves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    List,
    Create,
    Update,
    Delete,
}

impl Operation {
    fn method(self) -> &'static str {
        match self {
            Operation::List => "GET",
            Operation::Create => "POST",
            Operation::Update => "PUT",
            Operation::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Default)]
struct Inner {
    tasks: Vec<Task>,
    next_id: i64,
    failing: HashSet<Operation>,
    requests: Vec<Operation>,
}

/// In-process todo server
#[derive(Debug, Default)]
pub struct MemoryApi {
    inner: Mutex<Inner>,
}

fn now() -> Timestamp {
    Timestamp::new(Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true))
}

impl MemoryApi {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Store a task directly, as if another client had created it
    pub fn seed(&self, title: &str, completed: bool) -> Task {
        let mut inner = self.lock();
        inner.next_id += 1;
        let task = Task {
            id: TaskId::Int(inner.next_id),
            title: title.to_string(),
            completed,
            due_date: now(),
            created_at: now(),
            updated_at: None,
            extra: Map::new(),
        };
        inner.tasks.push(task.clone());
        task
    }

    /// Make every following `op` request fail with a 503
    pub fn fail(&self, op: Operation) {
        self.lock().failing.insert(op);
    }

    /// Undo `fail`
    pub fn recover(&self, op: Operation) {
        self.lock().failing.remove(&op);
    }

    /// Server-side copy of the collection
    pub fn tasks(&self) -> Vec<Task> {
        self.lock().tasks.clone()
    }

    /// Every request received so far, in order
    pub fn requests(&self) -> Vec<Operation> {
        self.lock().requests.clone()
    }

    /// Record the request and decide whether it is allowed through
    fn begin(&self, op: Operation, path: &str) -> ApiResult<MutexGuard<'_, Inner>> {
        let mut inner = self.lock();
        inner.requests.push(op);
        if inner.failing.contains(&op) {
            return Err(ApiError::Status {
                method: op.method(),
                path: path.to_string(),
                status: 503,
            });
        }
        Ok(inner)
    }
}

fn not_found(op: Operation, path: String) -> ApiError {
    ApiError::Status {
        method: op.method(),
        path,
        status: 404,
    }
}

#[async_trait(?Send)]
impl TodoApi for MemoryApi {
    async fn list(&self) -> ApiResult<Vec<Task>> {
        let inner = self.begin(Operation::List, "/todos")?;
        Ok(inner.tasks.clone())
    }

    async fn create(&self, task: &NewTask) -> ApiResult<Task> {
        let mut inner = self.begin(Operation::Create, "/todos")?;
        inner.next_id += 1;
        let created = Task {
            id: TaskId::Int(inner.next_id),
            title: task.title.clone(),
            completed: task.completed,
            due_date: task.due_date.clone(),
            created_at: now(),
            updated_at: None,
            extra: Map::new(),
        };
        inner.tasks.push(created.clone());
        Ok(created)
    }

    async fn update(&self, task: &Task) -> ApiResult<Task> {
        let path = format!("/todos/{}", task.id);
        let mut inner = self.begin(Operation::Update, &path)?;
        let stored = inner
            .tasks
            .iter_mut()
            .find(|stored| stored.id == task.id)
            .ok_or_else(|| not_found(Operation::Update, path.clone()))?;
        stored.title = task.title.clone();
        stored.completed = task.completed;
        stored.due_date = task.due_date.clone();
        stored.updated_at = Some(now());
        Ok(stored.clone())
    }

    async fn delete(&self, id: &TaskId) -> ApiResult<()> {
        let path = format!("/todos/{}", id);
        let mut inner = self.begin(Operation::Delete, &path)?;
        let before = inner.tasks.len();
        inner.tasks.retain(|task| &task.id != id);
        if inner.tasks.len() == before {
            return Err(not_found(Operation::Delete, path));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_assigns_ids_and_timestamps() {
        let api = MemoryApi::new();
        let first = api
            .create(&NewTask::new("a", Timestamp::new("2026-10-24T00:00:00.000Z")))
            .await
            .unwrap();
        let second = api
            .create(&NewTask::new("b", Timestamp::new("2026-10-24T00:00:00.000Z")))
            .await
            .unwrap();

        assert_ne!(first.id, second.id);
        assert!(first.created_at.parse().is_some());
        assert_eq!(first.updated_at, None);
        assert_eq!(api.tasks().len(), 2);
    }

    #[tokio::test]
    async fn test_update_stamps_updated_at() {
        let api = MemoryApi::new();
        let task = api.seed("a", false);

        let updated = api.update(&task.toggled()).await.unwrap();

        assert!(updated.completed);
        assert!(updated.updated_at.is_some());
        assert_eq!(updated.created_at, task.created_at);
    }

    #[tokio::test]
    async fn test_missing_ids_are_not_found() {
        let api = MemoryApi::new();
        let task = api.seed("a", false);
        api.delete(&task.id).await.unwrap();

        let err = api.delete(&task.id).await.unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 404, .. }));
        let err = api.update(&task).await.unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_failures_are_recorded_and_recoverable() {
        let api = MemoryApi::new();
        api.fail(Operation::List);

        assert!(api.list().await.is_err());
        api.recover(Operation::List);
        assert!(api.list().await.is_ok());
        assert_eq!(api.requests(), [Operation::List, Operation::List]);
    }
}
