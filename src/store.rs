//! Task List State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Every mutation
//! goes through the helpers below so the view re-renders on each change.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Task, TaskId};
use crate::tasks::{self, IdAllocator};

/// State behind one task list view
#[derive(Clone, Debug, Store)]
pub struct TaskListState {
    /// True until the initial load settles
    pub loading: bool,
    /// Tasks in render order
    pub tasks: Vec<Task>,
    /// Text currently in the new-task input
    pub pending_input: String,
    /// Id source for locally created tasks
    pub ids: IdAllocator,
}

impl Default for TaskListState {
    fn default() -> Self {
        Self {
            loading: true,
            tasks: Vec::new(),
            pending_input: String::new(),
            ids: IdAllocator::default(),
        }
    }
}

/// Type alias for the store
pub type TaskListStore = Store<TaskListState>;

/// Get the task list store from context
pub fn use_task_store() -> TaskListStore {
    expect_context::<TaskListStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the list with the loaded tasks and leave the loading state
pub fn store_finish_loading(store: &TaskListStore, loaded: Vec<Task>) {
    store.tasks().set(loaded);
    store.loading().set(false);
}

/// Mirror the input field
pub fn store_set_pending(store: &TaskListStore, text: String) {
    store.pending_input().set(text);
}

/// Append a new task titled `title` and clear the input.
///
/// Blank titles are ignored and leave the input as it was. Returns whether
/// a task was added.
pub fn store_add_task(store: &TaskListStore, title: &str, now_ms: i64) -> bool {
    let Some(title) = tasks::normalize_title(title) else {
        return false;
    };
    let id = store.ids().write().allocate(now_ms);
    let next = tasks::add_task(&store.tasks().read_untracked(), Task::new(id, title));
    store.tasks().set(next);
    store.pending_input().set(String::new());
    tracing::debug!(title, "added task");
    true
}

/// Flip completion on a task by ID
pub fn store_toggle_task(store: &TaskListStore, id: &TaskId) {
    let next = tasks::toggle_task(&store.tasks().read_untracked(), id);
    store.tasks().set(next);
}

/// Remove a task by ID
pub fn store_delete_task(store: &TaskListStore, id: &TaskId) {
    let next = tasks::delete_task(&store.tasks().read_untracked(), id);
    store.tasks().set(next);
    tracing::debug!(%id, "deleted task");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded_store(tasks: Vec<Task>) -> TaskListStore {
        let store = Store::new(TaskListState::default());
        store_finish_loading(&store, tasks);
        store
    }

    fn snapshot(store: &TaskListStore) -> Vec<(String, bool)> {
        store
            .tasks()
            .get_untracked()
            .into_iter()
            .map(|t| (t.title, t.completed))
            .collect()
    }

    #[test]
    fn test_starts_loading_and_empty() {
        let store = Store::new(TaskListState::default());
        assert!(store.loading().get_untracked());
        assert!(store.tasks().get_untracked().is_empty());
        assert_eq!(store.pending_input().get_untracked(), "");
    }

    #[test]
    fn test_finish_loading_with_nothing() {
        let store = loaded_store(Vec::new());
        assert!(!store.loading().get_untracked());
        assert!(store.tasks().get_untracked().is_empty());
    }

    #[test]
    fn test_add_trims_and_clears_input() {
        let store = loaded_store(Vec::new());
        store_set_pending(&store, "  Water plants  ".to_string());

        let title = store.pending_input().get_untracked();
        assert!(store_add_task(&store, &title, 1_000));

        let tasks = store.tasks().get_untracked();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "Water plants");
        assert_eq!(tasks[0].id, TaskId::Number(1_000));
        assert!(!tasks[0].completed);
        assert_eq!(store.pending_input().get_untracked(), "");
    }

    #[test]
    fn test_blank_add_keeps_list_and_input() {
        let store = loaded_store(vec![Task::new(1, "A")]);
        store_set_pending(&store, "   ".to_string());

        assert!(!store_add_task(&store, "   ", 1_000));
        assert_eq!(snapshot(&store), vec![("A".to_string(), false)]);
        assert_eq!(store.pending_input().get_untracked(), "   ");
    }

    #[test]
    fn test_rapid_adds_get_distinct_ids() {
        let store = loaded_store(Vec::new());
        assert!(store_add_task(&store, "first", 5_000));
        assert!(store_add_task(&store, "second", 5_000));

        let tasks = store.tasks().get_untracked();
        assert_ne!(tasks[0].id, tasks[1].id);
    }

    #[test]
    fn test_load_toggle_delete_add_scenario() {
        let store = loaded_store(vec![
            Task::new(1, "A"),
            Task::new(2, "B").with_completed(true),
        ]);
        assert_eq!(
            snapshot(&store),
            vec![("A".to_string(), false), ("B".to_string(), true)]
        );

        store_toggle_task(&store, &TaskId::Number(1));
        assert_eq!(
            snapshot(&store),
            vec![("A".to_string(), true), ("B".to_string(), true)]
        );

        store_delete_task(&store, &TaskId::Number(2));
        assert_eq!(snapshot(&store), vec![("A".to_string(), true)]);

        assert!(store_add_task(&store, "C", 1_700_000_000_000));
        assert_eq!(
            snapshot(&store),
            vec![("A".to_string(), true), ("C".to_string(), false)]
        );
    }

    #[test]
    fn test_unknown_ids_leave_store_unchanged() {
        let store = loaded_store(vec![Task::new(1, "A")]);
        store_toggle_task(&store, &TaskId::Number(9));
        store_delete_task(&store, &TaskId::from("nope"));
        assert_eq!(snapshot(&store), vec![("A".to_string(), false)]);
    }
}
