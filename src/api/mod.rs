//! Task API Bindings
//!
//! Frontend access to the remote task endpoint.

mod todos;

use async_trait::async_trait;

use crate::error::FetchError;
use crate::models::Task;

pub use todos::HttpTaskSource;

/// Anything the initial task list can be read from
#[async_trait(?Send)]
pub trait TaskSource {
    /// Read the full task collection, in the order the source returns it
    async fn fetch_tasks(&self) -> Result<Vec<Task>, FetchError>;
}
