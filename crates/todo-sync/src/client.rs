//! Todo Client
//!
//! Keeps the cached task list in step with the server. Mutations are applied
//! to the cache as soon as they are requested; if the server then rejects
//! them the cache is thrown away and re-fetched.
//!
//! Every operation does its local work when called and hands back a future
//! for the network part, so the optimistic edit is visible before the caller
//! spawns or awaits anything.

use std::future::Future;
use std::sync::Arc;

use tracing::{debug, error, info};

use crate::api::TodoApi;
use crate::draft::{Clock, SystemClock};
use crate::error::{ApiResult, ValidationError};
use crate::models::{Task, TaskId};
use crate::state::StateCell;

/// Synchronizes a `TodoState` with a `TodoApi`
pub struct TodoClient<A, S, C = SystemClock> {
    api: Arc<A>,
    state: S,
    clock: C,
}

impl<A, S: Clone, C: Clone> Clone for TodoClient<A, S, C> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            state: self.state.clone(),
            clock: self.clock.clone(),
        }
    }
}

impl<A: TodoApi, S: StateCell> TodoClient<A, S, SystemClock> {
    pub fn new(api: A, state: S) -> Self {
        Self::with_clock(api, state, SystemClock)
    }
}

impl<A: TodoApi, S: StateCell, C: Clock> TodoClient<A, S, C> {
    pub fn with_clock(api: A, state: S, clock: C) -> Self {
        Self {
            api: Arc::new(api),
            state,
            clock,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// Fetch the full list and replace the cache with it.
    ///
    /// On failure the cache is left as it was.
    pub fn load(&self) -> impl Future<Output = ApiResult<()>> + 'static {
        let this = self.clone();
        async move {
            match this.api.list().await {
                Ok(tasks) => {
                    debug!(count = tasks.len(), "loaded todos");
                    this.state.update(|s| s.replace_all(tasks));
                    Ok(())
                }
                Err(e) => {
                    error!(error = %e, "failed to load todos");
                    Err(e)
                }
            }
        }
    }

    /// Submit the draft form.
    ///
    /// A blank title is rejected right away. Otherwise the returned future
    /// posts the task, then resets the form and reloads the list. A failed
    /// post leaves the form as it was so the user can retry.
    pub fn create(
        &self,
    ) -> Result<impl Future<Output = ApiResult<()>> + 'static, ValidationError> {
        let new_task = self
            .state
            .read(|s| s.draft.to_new_task())
            .unwrap_or(Err(ValidationError::EmptyTitle))?;

        let this = self.clone();
        Ok(async move {
            match this.api.create(&new_task).await {
                Ok(created) => {
                    info!(id = %created.id, title = %created.title, "todo created");
                    let today = this.clock.today();
                    this.state.update(|s| s.reset_draft(today));
                    // The reload is best-effort; the create itself succeeded.
                    let _ = this.load().await;
                    Ok(())
                }
                Err(e) => {
                    error!(error = %e, "failed to create todo");
                    Err(e)
                }
            }
        })
    }

    /// Flip `task.completed`, show it immediately, then save it.
    ///
    /// The server's reply is not merged back. If the save fails the list is
    /// reloaded to undo the optimistic change.
    pub fn toggle(&self, task: &Task) -> impl Future<Output = ApiResult<()>> + 'static {
        let updated = task.toggled();
        self.state.update(|s| s.replace_task(updated.clone()));
        debug!(id = %updated.id, completed = updated.completed, "optimistic toggle");

        let this = self.clone();
        async move {
            match this.api.update(&updated).await {
                Ok(_) => {
                    info!(id = %updated.id, completed = updated.completed, "todo updated");
                    Ok(())
                }
                Err(e) => {
                    error!(id = %updated.id, error = %e, "failed to update todo, reloading");
                    let _ = this.load().await;
                    Err(e)
                }
            }
        }
    }

    /// Drop the task from the list immediately, then delete it on the server.
    ///
    /// If the delete fails the list is reloaded, which brings the task back.
    pub fn delete(&self, id: &TaskId) -> impl Future<Output = ApiResult<()>> + 'static {
        let id = id.clone();
        self.state.update(|s| s.remove_task(&id));
        debug!(id = %id, "optimistic delete");

        let this = self.clone();
        async move {
            match this.api.delete(&id).await {
                Ok(()) => {
                    info!(id = %id, "todo deleted");
                    Ok(())
                }
                Err(e) => {
                    error!(id = %id, error = %e, "failed to delete todo, reloading");
                    let _ = this.load().await;
                    Err(e)
                }
            }
        }
    }
}
