pub mod collate;
pub mod link;
pub mod loader;
pub mod manifest;
pub mod photo;
pub mod student;
pub mod text;
pub mod validate;

pub use link::normalize_link_url;
pub use loader::{
    load_students, LoadOutcome, LoadState, RosterError, RosterLoader, RosterPaths, SkipReason,
    SkippedEntry,
};
pub use photo::{is_supported_photo_filename, resolve_photo_filename};
pub use student::{normalize_student, StudentRecord};
pub use validate::{is_valid_student, validate_student_record, ValidationReport};
