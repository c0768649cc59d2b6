use std::fmt;

use serde_json::{Map, Value};

use super::link::has_http_scheme;
use super::photo::{is_supported_photo_filename, SENTINEL_PHOTO};
use super::student::{grad_year_text, LINK_FIELDS};
use super::text::trim_text;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ValidationSeverity {
    Error,
    Warning,
    Info,
}

impl ValidationSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for ValidationSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationDiagnostic {
    pub severity: ValidationSeverity,
    pub context: String,
    pub message: String,
}

impl fmt::Display for ValidationDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.context, self.message)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    pub fn push(
        &mut self,
        severity: ValidationSeverity,
        context: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.diagnostics.push(ValidationDiagnostic {
            severity,
            context: context.into(),
            message: message.into(),
        });
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|diag| diag.severity == ValidationSeverity::Error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &ValidationDiagnostic> {
        self.diagnostics
            .iter()
            .filter(|diag| diag.severity == ValidationSeverity::Error)
    }
}

/// Shape check for a raw student record. Pure; `context` only labels the diagnostics.
pub fn validate_student_record(context: &str, raw: &Value) -> ValidationReport {
    let mut report = ValidationReport::default();

    let Some(object) = raw.as_object() else {
        report.push(
            ValidationSeverity::Error,
            context,
            "record is not an object",
        );
        return report;
    };

    require_text(&mut report, context, object, "name");
    require_text(&mut report, context, object, "major");

    match object.get("grad_year") {
        None => report.push(
            ValidationSeverity::Error,
            format!("{context}.grad_year"),
            "missing 'grad_year'",
        ),
        Some(value) => match grad_year_text(value) {
            Some(_) => {}
            None if value.is_string() || value.is_number() => report.push(
                ValidationSeverity::Error,
                format!("{context}.grad_year"),
                "'grad_year' is empty",
            ),
            None => report.push(
                ValidationSeverity::Error,
                format!("{context}.grad_year"),
                "expected string or number",
            ),
        },
    }

    for field in LINK_FIELDS {
        let Some(value) = object.get(field) else {
            continue;
        };
        match value.as_str() {
            Some(link) => {
                let trimmed = trim_text(link);
                if !trimmed.is_empty() && !has_http_scheme(trimmed) {
                    report.push(
                        ValidationSeverity::Info,
                        format!("{context}.{field}"),
                        format!("no scheme on '{trimmed}', https:// will be assumed"),
                    );
                }
            }
            None => report.push(
                ValidationSeverity::Error,
                format!("{context}.{field}"),
                "expected string",
            ),
        }
    }

    if let Some(photo) = object.get("photo") {
        match photo.as_str() {
            Some(name) if is_supported_photo_filename(name) => {
                if trim_text(name).eq_ignore_ascii_case(SENTINEL_PHOTO) {
                    report.push(
                        ValidationSeverity::Info,
                        format!("{context}.photo"),
                        "placeholder photo, a default will be picked",
                    );
                }
            }
            Some(name) => report.push(
                ValidationSeverity::Error,
                format!("{context}.photo"),
                format!("unsupported photo filename '{name}'"),
            ),
            None => report.push(
                ValidationSeverity::Error,
                format!("{context}.photo"),
                "expected string",
            ),
        }
    }

    let non_blank = |field: &str| {
        object
            .get(field)
            .and_then(Value::as_str)
            .is_some_and(|link| !trim_text(link).is_empty())
    };
    if non_blank("link_url") && non_blank("repo") {
        report.push(
            ValidationSeverity::Warning,
            context,
            "both 'link_url' and 'repo' set, 'repo' is ignored",
        );
    }

    report
}

pub fn is_valid_student(raw: &Value) -> bool {
    !validate_student_record("record", raw).has_errors()
}

fn require_text(
    report: &mut ValidationReport,
    context: &str,
    object: &Map<String, Value>,
    field: &str,
) {
    match object.get(field).and_then(Value::as_str) {
        Some(text) if !trim_text(text).is_empty() => {}
        _ => report.push(
            ValidationSeverity::Error,
            format!("{context}.{field}"),
            format!("missing non-empty '{field}'"),
        ),
    }
}
