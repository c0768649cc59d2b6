use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;

use super::{parse_body, FetchError, JsonFetcher};

#[derive(Debug, Clone)]
enum Canned {
    Body(String),
    Status(u16),
}

/// In-memory site: path -> body or failing status. Unknown paths answer 404.
#[derive(Debug, Clone, Default)]
pub struct MemoryFetcher {
    entries: HashMap<String, Canned>,
}

impl MemoryFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_json(mut self, path: impl Into<String>, value: Value) -> Self {
        self.entries
            .insert(path.into(), Canned::Body(value.to_string()));
        self
    }

    /// Raw body, served as-is; useful for malformed documents.
    pub fn with_body(mut self, path: impl Into<String>, body: impl Into<String>) -> Self {
        self.entries.insert(path.into(), Canned::Body(body.into()));
        self
    }

    pub fn with_status(mut self, path: impl Into<String>, status: u16) -> Self {
        self.entries.insert(path.into(), Canned::Status(status));
        self
    }
}

#[async_trait]
impl JsonFetcher for MemoryFetcher {
    async fn fetch_json(&self, path: &str) -> Result<Value, FetchError> {
        match self.entries.get(path) {
            Some(Canned::Body(body)) => parse_body(path, body.as_bytes()),
            Some(Canned::Status(status)) => Err(FetchError::RequestFailed {
                path: path.to_string(),
                status: *status,
            }),
            None => Err(FetchError::RequestFailed {
                path: path.to_string(),
                status: 404,
            }),
        }
    }
}
