//! Task List Operations
//!
//! Copy-on-write helpers over the task list. Each returns a fresh list and
//! leaves its input untouched.

use crate::models::{Task, TaskId};

/// Trimmed title, or None when the input is blank
pub fn normalize_title(input: &str) -> Option<&str> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Keep at most `limit` tasks, in the order given
pub fn initial_slice(mut tasks: Vec<Task>, limit: usize) -> Vec<Task> {
    tasks.truncate(limit);
    tasks
}

/// Append a task to the end of the list
pub fn add_task(tasks: &[Task], task: Task) -> Vec<Task> {
    let mut next = Vec::with_capacity(tasks.len() + 1);
    next.extend_from_slice(tasks);
    next.push(task);
    next
}

/// Flip `completed` on the task with the given id
pub fn toggle_task(tasks: &[Task], id: &TaskId) -> Vec<Task> {
    tasks
        .iter()
        .map(|task| {
            if &task.id == id {
                Task {
                    completed: !task.completed,
                    ..task.clone()
                }
            } else {
                task.clone()
            }
        })
        .collect()
}

/// Remove the task with the given id
pub fn delete_task(tasks: &[Task], id: &TaskId) -> Vec<Task> {
    tasks.iter().filter(|task| &task.id != id).cloned().collect()
}

/// Allocates ids for locally created tasks.
///
/// Ids follow the wall clock in milliseconds but never repeat: two tasks
/// created within the same millisecond still get distinct ids.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IdAllocator {
    last: i64,
}

impl IdAllocator {
    pub fn allocate(&mut self, now_ms: i64) -> TaskId {
        let id = now_ms.max(self.last.saturating_add(1));
        self.last = id;
        TaskId::Number(id)
    }
}
