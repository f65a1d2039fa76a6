//! Application Context
//!
//! Shared state provided via Leptos Context API.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_sync::{ApiResult, TodoState};

use crate::store::AppClient;

/// App-wide handles provided via context
#[derive(Clone)]
pub struct AppContext {
    /// Sync client; every mutation goes through it
    pub client: AppClient,
    /// The same state the client writes, for rendering
    pub state: RwSignal<TodoState>,
}

impl AppContext {
    pub fn new(client: AppClient, state: RwSignal<TodoState>) -> Self {
        Self { client, state }
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

/// Run the network half of a client operation in the background.
/// Failures are logged by the client, so the result is dropped here.
pub fn spawn_op(op: impl Future<Output = ApiResult<()>> + 'static) {
    spawn_local(async move {
        let _ = op.await;
    });
}
