//! Todo Card Component
//!
//! One task: title, status, dates, and its toggle/delete controls.

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use todo_sync::Task;

use crate::context::{spawn_op, use_app_context};

#[component]
pub fn TodoCard(task: Task) -> impl IntoView {
    let ctx = use_app_context();

    let completed = task.completed;
    let title = task.title.clone();
    let due = task.due_date.date_label();
    let created = task.created_at.datetime_label();
    let updated = task.updated_at.as_ref().map(|ts| ts.datetime_label());

    let (toggle_class, toggle_label) = if completed {
        ("toggle-btn reopen", "Mark as not done")
    } else {
        ("toggle-btn finish", "Mark as done")
    };
    let (status_class, status_label) = if completed {
        ("status done", "Done")
    } else {
        ("status pending", "Not done")
    };

    let delete_client = ctx.client.clone();
    let id = task.id.clone();
    let on_delete = move |_: MouseEvent| spawn_op(delete_client.delete(&id));

    // Toggles from the task as rendered, not from whatever the list holds now.
    let toggle_client = ctx.client;
    let on_toggle = move |_: MouseEvent| spawn_op(toggle_client.toggle(&task));

    view! {
        <li class="todo-card">
            <div class="todo-card-header">
                <h3 class="todo-title">{title}</h3>
                <div class="todo-actions">
                    <button class=toggle_class on:click=on_toggle>{toggle_label}</button>
                    <button class="delete-btn" on:click=on_delete>"Delete"</button>
                </div>
            </div>

            <div class="todo-meta">
                <p>
                    <span class="meta-label">"Status: "</span>
                    <span class=status_class>{status_label}</span>
                </p>
                <p>
                    <span class="meta-label">"Due: "</span>
                    {due}
                </p>
                <p class="timestamp">"Created: " {created}</p>
                {updated.map(|ts| view! { <p class="timestamp">"Updated: " {ts}</p> })}
            </div>
        </li>
    }
}
