//! Regenerate `data/students/index.json` from the student files on disk.

use std::fs;
use std::path::{Path, PathBuf};

pub const MANIFEST_FILE_NAME: &str = "index.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestReport {
    pub manifest_path: PathBuf,
    pub entries: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("student directory not found: {}", .0.display())]
    MissingDirectory(PathBuf),

    #[error("failed to list '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize manifest: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Sorted `*.json` filenames in `students_dir`, excluding the manifest itself.
pub fn collect_student_files(students_dir: &Path) -> Result<Vec<String>, ManifestError> {
    if !students_dir.is_dir() {
        return Err(ManifestError::MissingDirectory(students_dir.to_path_buf()));
    }

    let read_err = |source| ManifestError::Read {
        path: students_dir.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(students_dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        let path = entry.path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name != MANIFEST_FILE_NAME {
            names.push(name.to_string());
        }
    }
    names.sort();
    Ok(names)
}

/// Rewrite the manifest as a pretty JSON array with a trailing newline.
pub fn rebuild_manifest(students_dir: &Path) -> Result<ManifestReport, ManifestError> {
    let entries = collect_student_files(students_dir)?;
    let manifest_path = students_dir.join(MANIFEST_FILE_NAME);

    let mut payload = serde_json::to_string_pretty(&entries)?;
    payload.push('\n');
    fs::write(&manifest_path, payload).map_err(|source| ManifestError::Write {
        path: manifest_path.clone(),
        source,
    })?;

    Ok(ManifestReport {
        manifest_path,
        entries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rebuild_lists_json_files_sorted_without_index() {
        let dir = tempfile::tempdir().expect("tempdir");
        for name in ["zed.json", "amy.json", "notes.txt", "index.json"] {
            fs::write(dir.path().join(name), "{}").expect("write fixture");
        }
        fs::create_dir(dir.path().join("nested.json")).expect("mkdir");

        let report = rebuild_manifest(dir.path()).expect("rebuild");
        assert_eq!(report.entries, ["amy.json", "zed.json"]);

        let written = fs::read_to_string(&report.manifest_path).expect("read manifest");
        assert_eq!(written, "[\n  \"amy.json\",\n  \"zed.json\"\n]\n");
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = rebuild_manifest(&dir.path().join("nope")).expect_err("missing dir");
        assert!(matches!(err, ManifestError::MissingDirectory(_)));
    }
}
