//! Todo Frontend App
//!
//! Root component: wires the sync client to the page and starts the first load.

use leptos::prelude::*;
use tracing::info;
use todo_sync::{ApiConfig, Clock, HttpApi, SystemClock, TodoClient, TodoState};

use crate::components::{NewTodoForm, TodoList};
use crate::context::{spawn_op, AppContext};
use crate::store::SignalState;

#[component]
pub fn App() -> impl IntoView {
    let state = RwSignal::new(TodoState::new(SystemClock.today()));

    // The dev server proxies /api/v1 on our own origin to the backend.
    let origin = window().location().origin().unwrap_or_default();
    let api = HttpApi::new(ApiConfig::for_origin(&origin));
    info!(base_url = %api.config().base_url, "starting todo client");
    let client = TodoClient::new(api, SignalState(state));

    provide_context(AppContext::new(client.clone(), state));

    spawn_op(client.load());

    view! {
        <div class="container">
            <h1>"Todo List"</h1>

            <NewTodoForm />

            <TodoList />

            <p class="item-count">{move || format!("{} tasks", state.with(|s| s.tasks.len()))}</p>
        </div>
    }
}
