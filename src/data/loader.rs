//! Load the roster: manifest -> per-student files -> validate -> normalize -> sort.
//! A broken manifest fails the whole load; a broken entry only drops that entry.

use std::fmt;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, info, warn};

use super::collate::compare_names;
use super::student::{normalize_student, StudentRecord};
use super::text::trim_text;
use super::validate::ValidationReport;
use crate::fetch::{FetchError, JsonFetcher};
use crate::rng::RandomSource;

pub const DEFAULT_MANIFEST_PATH: &str = "data/students/index.json";
pub const DEFAULT_DATA_ROOT: &str = "data/students";

/// Where the roster lives, relative to whatever the fetcher is rooted at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterPaths {
    pub manifest_path: String,
    pub data_root: String,
}

impl Default for RosterPaths {
    fn default() -> Self {
        Self {
            manifest_path: DEFAULT_MANIFEST_PATH.to_string(),
            data_root: DEFAULT_DATA_ROOT.to_string(),
        }
    }
}

impl RosterPaths {
    pub fn entry_path(&self, file_name: &str) -> String {
        format!("{}/{}", self.data_root.trim_end_matches('/'), file_name)
    }
}

/// Whole-roster failures. Anything here means nothing can be shown.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("unable to load manifest: {0}")]
    Manifest(#[source] FetchError),

    #[error("manifest '{path}' must be an array of filenames")]
    ManifestNotArray { path: String },
}

#[derive(Debug)]
pub enum SkipReason {
    NotAString(Value),
    Fetch(FetchError),
    Invalid(ValidationReport),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAString(value) => write!(f, "manifest entry is not a string: {value}"),
            Self::Fetch(err) => write!(f, "{err}"),
            Self::Invalid(report) => {
                let errors: Vec<String> = report
                    .errors()
                    .map(|diag| format!("{}: {}", diag.context, diag.message))
                    .collect();
                write!(f, "invalid student data ({})", errors.join("; "))
            }
        }
    }
}

#[derive(Debug)]
pub struct SkippedEntry {
    /// Trimmed filename, or the JSON text of a non-string entry.
    pub entry: String,
    pub reason: SkipReason,
}

#[derive(Debug, Default)]
pub struct LoadOutcome {
    /// Sorted by name.
    pub students: Vec<StudentRecord>,
    pub skipped: Vec<SkippedEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LoadState {
    Idle,
    Loading,
    Loaded { accepted: usize, skipped: usize },
    Failed { reason: String },
}

pub struct RosterLoader<'a> {
    fetcher: &'a dyn JsonFetcher,
    paths: RosterPaths,
    state: LoadState,
}

impl<'a> RosterLoader<'a> {
    pub fn new(fetcher: &'a dyn JsonFetcher, paths: RosterPaths) -> Self {
        Self {
            fetcher,
            paths,
            state: LoadState::Idle,
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Run one full load. Entries are fetched one at a time in manifest order.
    pub async fn load<R: RandomSource + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<LoadOutcome, RosterError> {
        self.state = LoadState::Loading;
        match self.run(rng).await {
            Ok(outcome) => {
                self.state = LoadState::Loaded {
                    accepted: outcome.students.len(),
                    skipped: outcome.skipped.len(),
                };
                info!(
                    accepted = outcome.students.len(),
                    skipped = outcome.skipped.len(),
                    "roster loaded"
                );
                Ok(outcome)
            }
            Err(err) => {
                self.state = LoadState::Failed {
                    reason: err.to_string(),
                };
                Err(err)
            }
        }
    }

    async fn run<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<LoadOutcome, RosterError> {
        let manifest_path = &self.paths.manifest_path;
        let manifest = self
            .fetcher
            .fetch_json(manifest_path)
            .await
            .map_err(RosterError::Manifest)?;
        let entries = match manifest {
            Value::Array(entries) => entries,
            _ => {
                return Err(RosterError::ManifestNotArray {
                    path: manifest_path.clone(),
                })
            }
        };

        let mut outcome = LoadOutcome::default();

        for entry in entries {
            let file_name = match entry {
                Value::String(file_name) => file_name,
                other => {
                    warn!(entry = %other, "skipping non-string manifest entry");
                    outcome.skipped.push(SkippedEntry {
                        entry: other.to_string(),
                        reason: SkipReason::NotAString(other),
                    });
                    continue;
                }
            };

            let file_name = trim_text(&file_name);
            if file_name.is_empty() {
                continue;
            }

            let raw = match self.fetcher.fetch_json(&self.paths.entry_path(file_name)).await {
                Ok(raw) => raw,
                Err(err) => {
                    error!(entry = %file_name, error = %err, "failed to load student file");
                    outcome.skipped.push(SkippedEntry {
                        entry: file_name.to_string(),
                        reason: SkipReason::Fetch(err),
                    });
                    continue;
                }
            };

            match normalize_student(file_name, &raw, rng) {
                Ok(student) => {
                    debug!(entry = %file_name, name = %student.name, "accepted student");
                    outcome.students.push(student);
                }
                Err(report) => {
                    warn!(
                        entry = %file_name,
                        errors = report.errors().count(),
                        "invalid student data"
                    );
                    outcome.skipped.push(SkippedEntry {
                        entry: file_name.to_string(),
                        reason: SkipReason::Invalid(report),
                    });
                }
            }
        }

        outcome
            .students
            .sort_by(|a, b| compare_names(&a.name, &b.name));
        Ok(outcome)
    }
}

/// One-shot load returning just the sorted students.
pub async fn load_students<R: RandomSource + ?Sized>(
    fetcher: &dyn JsonFetcher,
    paths: RosterPaths,
    rng: &mut R,
) -> Result<Vec<StudentRecord>, RosterError> {
    let mut loader = RosterLoader::new(fetcher, paths);
    loader.load(rng).await.map(|outcome| outcome.students)
}
