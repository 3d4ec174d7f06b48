//! Todos Endpoint
//!
//! Plain GET against the configured URL; no query, headers or auth.

use async_trait::async_trait;
use gloo_net::http::Request;

use super::TaskSource;
use crate::error::FetchError;
use crate::models::Task;

#[derive(Debug, Clone, PartialEq)]
pub struct HttpTaskSource {
    endpoint: String,
}

impl HttpTaskSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait(?Send)]
impl TaskSource for HttpTaskSource {
    async fn fetch_tasks(&self) -> Result<Vec<Task>, FetchError> {
        let response = Request::get(&self.endpoint)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(FetchError::Status {
                status: response.status(),
                status_text: response.status_text(),
            });
        }

        response
            .json::<Vec<Task>>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}
