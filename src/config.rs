use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use reqwest::Url;

use crate::data::RosterPaths;
use crate::fetch::{DirFetcher, HttpFetcher, JsonFetcher};

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_SITE_ROOT: &str = "site";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid remote base url '{value}': {reason}")]
    InvalidRemoteBase { value: String, reason: String },
}

#[derive(Debug, Clone)]
pub struct RosterConfig {
    pub bind_addr: String,
    /// Directory holding `data/` and `assets/`.
    pub site_root: PathBuf,
    /// When set, roster data is fetched over HTTP from here instead of `site_root`.
    pub remote_base: Option<String>,
    pub log_json: bool,
    pub paths: RosterPaths,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            site_root: PathBuf::from(DEFAULT_SITE_ROOT),
            remote_base: None,
            log_json: false,
            paths: RosterPaths::default(),
        }
    }
}

impl RosterConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            bind_addr: env::var("ROSTER_BIND").unwrap_or(defaults.bind_addr),
            site_root: env::var("ROSTER_SITE_ROOT")
                .map(PathBuf::from)
                .unwrap_or(defaults.site_root),
            remote_base: env::var("ROSTER_REMOTE_BASE")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            log_json: env_bool("ROSTER_LOG_JSON", defaults.log_json),
            paths: defaults.paths,
        }
    }

    /// HTTP fetcher when a remote base is configured, otherwise the local site directory.
    pub fn fetcher(&self) -> Result<Arc<dyn JsonFetcher>, ConfigError> {
        match &self.remote_base {
            Some(base) => {
                let url = Url::parse(base).map_err(|err| ConfigError::InvalidRemoteBase {
                    value: base.clone(),
                    reason: err.to_string(),
                })?;
                Ok(Arc::new(HttpFetcher::new(url)))
            }
            None => Ok(Arc::new(DirFetcher::new(self.site_root.clone()))),
        }
    }
}

pub fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| parse_bool(&v))
        .unwrap_or(default)
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim() {
        "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
        "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_parsing() {
        assert_eq!(parse_bool("yes"), Some(true));
        assert_eq!(parse_bool(" 0 "), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn defaults_point_at_bundled_site() {
        let config = RosterConfig::default();
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(config.site_root, PathBuf::from("site"));
        assert_eq!(config.paths.manifest_path, "data/students/index.json");
        assert!(config.remote_base.is_none());
    }

    #[test]
    fn bad_remote_base_is_rejected() {
        let config = RosterConfig {
            remote_base: Some("not a url".to_string()),
            ..RosterConfig::default()
        };
        assert!(matches!(
            config.fetcher(),
            Err(ConfigError::InvalidRemoteBase { .. })
        ));

        let config = RosterConfig {
            remote_base: Some("https://example.org/roster".to_string()),
            ..RosterConfig::default()
        };
        assert!(config.fetcher().is_ok());
    }
}
