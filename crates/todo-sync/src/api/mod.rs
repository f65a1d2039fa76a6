//! API Layer
//!
//! Abstract access to the todo REST API, with an HTTP implementation and an
//! in-memory stand-in.

mod http;
mod memory;

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{NewTask, Task, TaskId};

pub use http::{ApiConfig, HttpApi, API_PREFIX, DEFAULT_BACKEND};
pub use memory::{MemoryApi, Operation};

/// The four calls the client makes against the task collection.
///
/// Futures are not required to be `Send` so browser fetches qualify.
#[async_trait(?Send)]
pub trait TodoApi: 'static {
    /// `GET /todos`
    async fn list(&self) -> ApiResult<Vec<Task>>;

    /// `POST /todos`
    async fn create(&self, task: &NewTask) -> ApiResult<Task>;

    /// `PUT /todos/{id}` with the full task
    async fn update(&self, task: &Task) -> ApiResult<Task>;

    /// `DELETE /todos/{id}`
    async fn delete(&self, id: &TaskId) -> ApiResult<()>;
}
