// src/exec/classify.rs

//! Mapping from aerender output lines to [`RenderError`]s.
//!
//! aerender has no machine-readable error channel, only log text. All the
//! markers live here so a change in the tool's wording is a one-line update.

use crate::errors::RenderError;

/// Prefix of errors reported by After Effects itself.
pub const AFTER_EFFECTS_ERROR: &str = "After Effects error";

/// Narrows an After Effects error down to a bad path.
pub const PATH_NOT_VALID: &str = "Path is not valid";

/// Prefix of errors reported by the aerender front end.
pub const AERENDER_ERROR: &str = "aerender ERROR";

/// Narrows an aerender error down to a missing composition.
pub const COMP_NOT_FOUND: &str = "No comp was found with the given name";

/// aerender failing to load one of its libraries on startup.
pub const LOAD_LIBRARY_FAILED: &str = "LoadLibrary \"n\" failed";

/// Classify one (already stripped) output line.
///
/// Markers are checked in a fixed order and the first hit wins:
/// After Effects errors, then aerender errors, then library load failures.
/// Returns `None` for ordinary log and progress lines.
pub fn classify_line(line: &str) -> Option<RenderError> {
    if line.contains(AFTER_EFFECTS_ERROR) {
        if line.contains(PATH_NOT_VALID) {
            return Some(RenderError::PathNotFound(line.to_string()));
        }
        return Some(RenderError::AfterEffects(line.to_string()));
    }

    if line.contains(AERENDER_ERROR) {
        if line.contains(COMP_NOT_FOUND) {
            return Some(RenderError::CompositionNotFound(line.to_string()));
        }
        return Some(RenderError::Aerender(line.to_string()));
    }

    if line.contains(LOAD_LIBRARY_FAILED) {
        return Some(RenderError::Aerender(line.to_string()));
    }

    None
}
