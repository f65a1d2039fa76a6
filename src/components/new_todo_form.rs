//! New Todo Form Component
//!
//! Title and due date for the next task, bound to the draft in app state.

use chrono::NaiveDate;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::context::{spawn_op, use_app_context};

const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Form for creating new tasks
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_app_context();
    let state = ctx.state;
    let client = ctx.client;

    let (error, set_error) = signal::<Option<String>>(None);

    let create_todo = move |ev: SubmitEvent| {
        ev.prevent_default();
        match client.create() {
            Ok(pending) => {
                set_error.set(None);
                spawn_op(pending);
            }
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    view! {
        <form class="new-todo-form" on:submit=create_todo>
            <h2>"Add a task"</h2>
            <div class="form-row">
                <label for="title">"Title"</label>
                <input
                    type="text"
                    id="title"
                    name="title"
                    placeholder="What needs doing?"
                    prop:value=move || state.with(|s| s.draft.title.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.draft.title = value);
                    }
                />
            </div>
            <div class="form-row">
                <label for="due_date">"Due date"</label>
                <input
                    type="date"
                    id="due_date"
                    name="due_date"
                    prop:value=move || state.with(|s| s.draft.due_date.format(DATE_INPUT_FORMAT).to_string())
                    on:input=move |ev| {
                        // A cleared or half-typed date keeps the last valid one.
                        if let Ok(date) = NaiveDate::parse_from_str(&event_target_value(&ev), DATE_INPUT_FORMAT) {
                            state.update(|s| s.draft.due_date = date);
                        }
                    }
                />
            </div>
            {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
            <button type="submit">"Add task"</button>
        </form>
    }
}
