use serde::Serialize;

use crate::data::{LoadOutcome, LoadState, StudentRecord};

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

pub fn health_payload() -> HealthResponse {
    HealthResponse {
        status: "ok",
        service: "roster",
        version: env!("CARGO_PKG_VERSION"),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RosterResponse {
    pub students: Vec<StudentRecord>,
    pub load: LoadState,
}

/// The API mirrors the page: skipped entries are counted, never itemized.
pub fn roster_payload(outcome: LoadOutcome) -> RosterResponse {
    let load = LoadState::Loaded {
        accepted: outcome.students.len(),
        skipped: outcome.skipped.len(),
    };
    RosterResponse {
        students: outcome.students,
        load,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub message: String,
}

pub fn error_payload(message: impl Into<String>) -> ErrorResponse {
    ErrorResponse {
        status: "error",
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{SkipReason, SkippedEntry};
    use crate::fetch::FetchError;

    #[test]
    fn roster_payload_counts_skips() {
        let outcome = LoadOutcome {
            students: Vec::new(),
            skipped: vec![SkippedEntry {
                entry: "b.json".to_string(),
                reason: SkipReason::Fetch(FetchError::RequestFailed {
                    path: "data/students/b.json".to_string(),
                    status: 404,
                }),
            }],
        };
        let payload = serde_json::to_value(roster_payload(outcome)).expect("serialize");
        assert_eq!(payload["load"]["state"], "loaded");
        assert_eq!(payload["load"]["skipped"], 1);
        assert_eq!(payload["students"], serde_json::json!([]));
    }
}
