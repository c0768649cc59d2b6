use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;

use super::{parse_body, FetchError, JsonFetcher};

/// Serves fetches from a local site directory, mirroring what a static file host would return.
#[derive(Debug, Clone)]
pub struct DirFetcher {
    root: PathBuf,
}

impl DirFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Map a site-relative path to a file under the root. Anything that could escape it is refused.
    fn resolve(&self, path: &str) -> Option<PathBuf> {
        let relative = Path::new(path.split('?').next().unwrap_or(path).trim_start_matches('/'));
        if relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
        {
            return None;
        }
        Some(self.root.join(relative))
    }
}

#[async_trait]
impl JsonFetcher for DirFetcher {
    async fn fetch_json(&self, path: &str) -> Result<Value, FetchError> {
        let Some(file) = self.resolve(path) else {
            return Err(FetchError::RequestFailed {
                path: path.to_string(),
                status: 403,
            });
        };

        let body = match tokio::fs::read(&file).await {
            Ok(body) => body,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(FetchError::RequestFailed {
                    path: path.to_string(),
                    status: 404,
                });
            }
            Err(source) => return Err(FetchError::Io { path: file, source }),
        };
        parse_body(path, &body)
    }
}
