//! UI Components
//!
//! Leptos components that make up the task list.

mod task_list_view;
mod loading_spinner;
mod new_task_form;
mod task_row;

pub use task_list_view::TaskListView;
pub use loading_spinner::LoadingSpinner;
pub use new_task_form::NewTaskForm;
pub use task_row::TaskRow;
