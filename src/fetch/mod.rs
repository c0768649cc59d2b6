//! JSON fetching behind a single trait so the loader does not care whether records come from
//! a remote site, a local directory, or memory.

use std::path::PathBuf;

use async_trait::async_trait;
use serde_json::Value;

pub mod dir;
pub mod http;
pub mod memory;

pub use dir::DirFetcher;
pub use http::HttpFetcher;
pub use memory::MemoryFetcher;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request for '{path}' failed with status {status}")]
    RequestFailed { path: String, status: u16 },

    #[error("request for '{path}' could not be sent: {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unable to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to parse json from '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// HTTP-style status for the failure, when one applies.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Single-attempt GET-and-parse. No retries, no caching.
#[async_trait]
pub trait JsonFetcher: Send + Sync {
    async fn fetch_json(&self, path: &str) -> Result<Value, FetchError>;
}

pub(crate) fn parse_body(path: &str, body: &[u8]) -> Result<Value, FetchError> {
    serde_json::from_slice(body).map_err(|source| FetchError::Parse {
        path: path.to_string(),
        source,
    })
}
