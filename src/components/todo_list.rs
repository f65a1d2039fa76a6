//! Todo List Component

use leptos::prelude::*;

use crate::components::TodoCard;
use crate::context::use_app_context;

/// All cached tasks, in server order
#[component]
pub fn TodoList() -> impl IntoView {
    let state = use_app_context().state;

    view! {
        <ul class="todo-list">
            <For
                each=move || state.with(|s| s.tasks.clone())
                // Fields a card shows that can change in place
                key=|task| (task.id.clone(), task.completed, task.updated_at.clone())
                children=move |task| view! { <TodoCard task=task /> }
            />
        </ul>
    }
}
