//! Course tree sources.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use khatwa_model::{CourseId, CourseTree};

use crate::error::{ContentError, Result};
use crate::paths::course_file_candidates;
use crate::validate::validate_course_tree;

/// Supplies read-only course trees, typically once per page view.
pub trait ContentSource {
    fn load_course_tree(&self, course_id: &CourseId) -> Result<CourseTree>;
}

/// Reads `<root>/<course_id>.json`, falling back to `<root>/<course_id>.toml`.
#[derive(Debug, Clone)]
pub struct DirectoryContentSource {
    root: PathBuf,
}

impl DirectoryContentSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ContentSource for DirectoryContentSource {
    fn load_course_tree(&self, course_id: &CourseId) -> Result<CourseTree> {
        let Some(path) = course_file_candidates(&self.root, course_id)
            .into_iter()
            .find(|candidate| candidate.is_file())
        else {
            debug!(course_id = %course_id, root = %self.root.display(), "no course file");
            return Err(ContentError::NotFound {
                course_id: course_id.clone(),
            });
        };
        let tree = read_course_file(&path)?;
        if &tree.id != course_id {
            return Err(ContentError::IdMismatch {
                path,
                expected: course_id.clone(),
                found: tree.id,
            });
        }
        validate_course_tree(&tree)?;
        info!(
            course_id = %course_id,
            path = %path.display(),
            module_count = tree.modules.len(),
            lesson_count = tree.lesson_count(),
            resource_count = tree.resource_count(),
            "course loaded"
        );
        Ok(tree)
    }
}

/// Parse a course file, choosing the format from its extension.
pub fn read_course_file(path: &Path) -> Result<CourseTree> {
    let text = std::fs::read_to_string(path).map_err(|source| ContentError::io(path, source))?;
    let is_toml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
    if is_toml {
        toml::from_str(&text).map_err(|source| ContentError::Toml {
            path: path.to_path_buf(),
            source,
        })
    } else {
        serde_json::from_str(&text).map_err(|source| ContentError::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Course trees held in memory, for tests and embedded demo data.
#[derive(Debug, Clone, Default)]
pub struct InMemoryContentSource {
    courses: BTreeMap<CourseId, CourseTree>,
}

impl InMemoryContentSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a course after validating it.
    pub fn insert(&mut self, tree: CourseTree) -> Result<()> {
        validate_course_tree(&tree)?;
        self.courses.insert(tree.id.clone(), tree);
        Ok(())
    }

    pub fn with_course(mut self, tree: CourseTree) -> Result<Self> {
        self.insert(tree)?;
        Ok(self)
    }
}

impl ContentSource for InMemoryContentSource {
    fn load_course_tree(&self, course_id: &CourseId) -> Result<CourseTree> {
        self.courses
            .get(course_id)
            .cloned()
            .ok_or_else(|| ContentError::NotFound {
                course_id: course_id.clone(),
            })
    }
}
