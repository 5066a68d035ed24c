//! Content directory path resolution.

use std::path::{Path, PathBuf};

use khatwa_model::CourseId;

/// Environment variable for overriding the content directory.
pub const CONTENT_ENV_VAR: &str = "KHATWA_CONTENT_DIR";

/// File name of the entitlements file inside the content directory.
pub const ENTITLEMENTS_FILE: &str = "entitlements.toml";

/// Get the content root directory.
///
/// Resolution order:
/// 1. `KHATWA_CONTENT_DIR` environment variable
/// 2. `content/` relative to the current directory
pub fn content_root() -> PathBuf {
    if let Ok(root) = std::env::var(CONTENT_ENV_VAR) {
        return PathBuf::from(root);
    }
    PathBuf::from("content")
}

/// Candidate course files, in lookup order.
pub fn course_file_candidates(root: &Path, course_id: &CourseId) -> [PathBuf; 2] {
    [
        root.join(format!("{course_id}.json")),
        root.join(format!("{course_id}.toml")),
    ]
}

pub fn entitlements_path(root: &Path) -> PathBuf {
    root.join(ENTITLEMENTS_FILE)
}
