use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::Value;

use super::{parse_body, FetchError, JsonFetcher};

/// Fetches JSON over HTTP relative to a base URL (e.g. the published site root).
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    base: Url,
}

impl HttpFetcher {
    pub fn new(mut base: Url) -> Self {
        // Url::join replaces the last path segment unless the base ends with '/'.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Self {
            client: Client::new(),
            base,
        }
    }

    pub fn base(&self) -> &Url {
        &self.base
    }
}

#[async_trait]
impl JsonFetcher for HttpFetcher {
    async fn fetch_json(&self, path: &str) -> Result<Value, FetchError> {
        let url = self.base.join(path).map_err(|_| FetchError::RequestFailed {
            path: path.to_string(),
            status: 400,
        })?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                path: path.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::RequestFailed {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| FetchError::Transport {
                path: path.to_string(),
                source,
            })?;
        parse_body(path, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_gains_trailing_slash() {
        let base = Url::parse("https://example.org/roster").expect("valid url");
        let fetcher = HttpFetcher::new(base);
        assert_eq!(fetcher.base().as_str(), "https://example.org/roster/");
        let joined = fetcher
            .base()
            .join("data/students/index.json")
            .expect("join should succeed");
        assert_eq!(
            joined.as_str(),
            "https://example.org/roster/data/students/index.json"
        );
    }
}
