//! Todo Sync
//!
//! Client-side core of the todo app:
//! - models: task records as the REST API sends them
//! - draft: the "new task" form and its default due date
//! - api: the `TodoApi` seam, its HTTP implementation and an in-memory server
//! - state: the cached list plus draft, behind `StateCell`
//! - client: optimistic mutations with reload-on-failure

pub mod api;
pub mod client;
pub mod draft;
pub mod error;
pub mod models;
pub mod state;


pub use api::{ApiConfig, HttpApi, MemoryApi, Operation, TodoApi};
pub use client::TodoClient;
pub use draft::{Clock, DraftForm, FixedClock, SystemClock, DEFAULT_DUE_IN_DAYS};
pub use error::{ApiError, ApiResult, ValidationError};
pub use models::{NewTask, Task, TaskId, Timestamp};
pub use state::{SharedState, StateCell, TodoState};
