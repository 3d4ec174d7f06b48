//! Loader Configuration
//!
//! Where the initial tasks come from and how many of them are shown.

/// Default task API endpoint
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/api/todos";

/// Number of fetched tasks shown initially
pub const DEFAULT_INITIAL_LIMIT: usize = 5;

/// Meta tag that may override the endpoint in the host page
pub const ENDPOINT_META_NAME: &str = "task-api-endpoint";

#[derive(Debug, Clone, PartialEq)]
pub struct LoaderConfig {
    pub endpoint: String,
    pub initial_limit: usize,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            initial_limit: DEFAULT_INITIAL_LIMIT,
        }
    }
}

impl LoaderConfig {
    /// Defaults, with the endpoint taken from
    /// `<meta name="task-api-endpoint" content="...">` when the page has one.
    pub fn from_document() -> Self {
        let config = Self::default();
        match endpoint_from_document() {
            Some(endpoint) => config.with_endpoint(endpoint),
            None => config,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        let endpoint = endpoint.trim();
        if !endpoint.is_empty() {
            self.endpoint = endpoint.to_string();
        }
        self
    }
}

fn endpoint_from_document() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", ENDPOINT_META_NAME);
    let meta = document.query_selector(&selector).ok()??;
    meta.get_attribute("content")
}
