//! Initial Load
//!
//! One read at mount. Failures are logged and turn into an empty list.

use std::future::Future;

use futures::future::{abortable, AbortHandle, Aborted};

use crate::api::TaskSource;
use crate::models::Task;
use crate::store::{store_finish_loading, TaskListStore};
use crate::tasks::initial_slice;

/// Fetch the tasks to show initially.
///
/// Never fails: on any fetch error the list starts out empty.
pub async fn load_initial<S>(source: &S, limit: usize) -> Vec<Task>
where
    S: TaskSource + ?Sized,
{
    match source.fetch_tasks().await {
        Ok(fetched) => {
            let total = fetched.len();
            let tasks = initial_slice(fetched, limit);
            tracing::info!(fetched = total, shown = tasks.len(), "loaded tasks");
            tasks
        }
        Err(err) => {
            tracing::error!(error = %err, "error loading tasks");
            Vec::new()
        }
    }
}

/// Build the mount-time load for `store`.
///
/// The returned future writes the result into the store once it settles.
/// After `abort()` it resolves without touching the store.
pub fn start_initial_load<S>(
    store: TaskListStore,
    source: S,
    limit: usize,
) -> (impl Future<Output = ()>, AbortHandle)
where
    S: TaskSource + 'static,
{
    let (load, abort_handle) = abortable(async move { load_initial(&source, limit).await });
    let settle = async move {
        match load.await {
            Ok(tasks) => store_finish_loading(&store, tasks),
            Err(Aborted) => tracing::debug!("task list unmounted before load settled"),
        }
    };
    (settle, abort_handle)
}
