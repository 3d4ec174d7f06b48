//! New Task Form Component
//!
//! Input plus "Add Task" button. Enter submits as well.

use chrono::Utc;
use leptos::prelude::*;

use crate::store::{store_add_task, store_set_pending, use_task_store, TaskListStateStoreFields};

#[component]
pub fn NewTaskForm() -> impl IntoView {
    let store = use_task_store();

    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = store.pending_input().get_untracked();
        store_add_task(&store, &title, Utc::now().timestamp_millis());
    };

    view! {
        <form class="todo-input" on:submit=add_task>
            <input
                type="text"
                placeholder="Add a new task"
                prop:value=move || store.pending_input().get()
                on:input=move |ev| store_set_pending(&store, event_target_value(&ev))
            />
            <button type="submit">"Add Task"</button>
        </form>
    }
}
