//! Per-request template loading.
//!
//! Templates are read fresh on every request, so edits take effect without
//! a restart. The files are small local reads, kept synchronous.

use std::path::Path;

use crate::error::AppResult;

/// Filename of the static landing page template.
pub const HOME_TEMPLATE: &str = "index.html";

/// Filename of the profile page template.
pub const PROFILE_TEMPLATE: &str = "profile.html";

/// Read a template file from the configured templates directory.
pub fn load_template(dir: &Path, name: &str) -> AppResult<String> {
    Ok(std::fs::read_to_string(dir.join(name))?)
}
