//! Task Row Component
//!
//! One list entry: clickable title, inert edit button, delete button.

use leptos::prelude::*;

use crate::models::Task;
use crate::store::{store_delete_task, store_toggle_task, use_task_store};

/// CSS class for a row
pub fn row_class(completed: bool) -> &'static str {
    if completed {
        "completed"
    } else {
        ""
    }
}

#[component]
pub fn TaskRow(task: Task) -> impl IntoView {
    let store = use_task_store();

    let toggle_id = task.id.clone();
    let delete_id = task.id.clone();

    view! {
        <li class=row_class(task.completed)>
            <span on:click=move |_| store_toggle_task(&store, &toggle_id)>{task.title}</span>
            <div>
                // no edit handler yet
                <button class="edit-btn">"Edit"</button>
                <button class="delete-btn" on:click=move |_| store_delete_task(&store, &delete_id)>
                    "Delete"
                </button>
            </div>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_class() {
        assert_eq!(row_class(true), "completed");
        assert_eq!(row_class(false), "");
    }
}
