//! Field rules for submitted bug payloads.
//!
//! Every rule is checked independently so a single response can report all
//! problems at once. Lengths are measured in characters, not bytes.

use serde::Serialize;

use crate::BugStatus;

pub const TITLE_MIN_LEN: usize = 3;
pub const DESCRIPTION_MAX_LEN: usize = 1000;

pub const TITLE_TOO_SHORT: &str = "Title must be at least 3 characters long";
pub const DESCRIPTION_TOO_LONG: &str = "Description is too long";
pub const STATUS_UNKNOWN: &str = "Status must be one of: open, in-progress, resolved";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Validation {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl Validation {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}

/// Validate a creation payload. A `None` title means the field was missing or
/// was not a string.
pub fn validate_bug_payload(title: Option<&str>, description: Option<&str>) -> Validation {
    let mut errors = Vec::new();

    if !title.is_some_and(title_is_long_enough) {
        errors.push(TITLE_TOO_SHORT.to_string());
    }
    if description.is_some_and(description_is_too_long) {
        errors.push(DESCRIPTION_TOO_LONG.to_string());
    }

    Validation::from_errors(errors)
}

/// Validate the fields supplied in a partial update. Absent fields are not
/// checked.
pub fn validate_bug_patch(
    title: Option<&str>,
    description: Option<&str>,
    status: Option<&str>,
) -> Validation {
    let mut errors = Vec::new();

    if title.is_some_and(|t| !title_is_long_enough(t)) {
        errors.push(TITLE_TOO_SHORT.to_string());
    }
    if description.is_some_and(description_is_too_long) {
        errors.push(DESCRIPTION_TOO_LONG.to_string());
    }
    if status.is_some_and(|s| s.parse::<BugStatus>().is_err()) {
        errors.push(STATUS_UNKNOWN.to_string());
    }

    Validation::from_errors(errors)
}

fn title_is_long_enough(title: &str) -> bool {
    title.trim().chars().count() >= TITLE_MIN_LEN
}

fn description_is_too_long(description: &str) -> bool {
    description.chars().count() > DESCRIPTION_MAX_LEN
}
