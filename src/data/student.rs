//! Student records: raw JSON in, display-ready `StudentRecord` out.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use super::link::normalize_link_url;
use super::photo::resolve_photo_filename;
use super::text::trim_text;
use super::validate::{validate_student_record, ValidationReport};
use crate::rng::RandomSource;

/// Link fields in priority order; older records use `repo`.
pub const LINK_FIELDS: [&str; 2] = ["link_url", "repo"];

/// Validated, normalized student. Every field is safe to display as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub name: String,
    pub major: String,
    pub grad_year: String,
    /// Trimmed link as the author wrote it; empty when there is none.
    pub link_text: String,
    /// `link_text` with a scheme guaranteed; empty when there is none.
    pub link_url: String,
    /// Filename relative to the asset root.
    pub photo: String,
}

impl StudentRecord {
    pub fn has_link(&self) -> bool {
        !self.link_url.is_empty()
    }
}

/// Validate then normalize. Invalid records come back as their report and are never partially used.
pub fn normalize_student<R: RandomSource + ?Sized>(
    context: &str,
    raw: &Value,
    rng: &mut R,
) -> Result<StudentRecord, ValidationReport> {
    let report = validate_student_record(context, raw);
    if report.has_errors() {
        return Err(report);
    }

    let text = |field: &str| {
        raw.get(field)
            .and_then(Value::as_str)
            .map(trim_text)
            .unwrap_or_default()
            .to_string()
    };

    // A blank link counts as absent, so an empty `link_url` falls through to `repo`.
    let link_text = LINK_FIELDS
        .iter()
        .filter_map(|field| raw.get(*field).and_then(Value::as_str))
        .map(trim_text)
        .find(|link| !link.is_empty())
        .unwrap_or_default()
        .to_string();
    let link_url = normalize_link_url(Some(&link_text));
    let photo = resolve_photo_filename(raw.get("photo").and_then(Value::as_str), rng);

    Ok(StudentRecord {
        name: text("name"),
        major: text("major"),
        grad_year: raw.get("grad_year").and_then(grad_year_text).unwrap_or_default(),
        link_text,
        link_url,
        photo,
    })
}

/// Display form of `grad_year`, or None when it is not a non-empty string or number.
pub fn grad_year_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => trim_text(s).to_string(),
        Value::Number(n) => number_text(n),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}

/// Integral floats print without a fraction (`2025.0` shows as `2025`).
fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if !n.is_i64() && !n.is_u64() && f.fract() == 0.0 && f.abs() < 1e15 => {
            format!("{}", f as i64)
        }
        _ => n.to_string(),
    }
}
