//! Structural checks applied to every loaded course tree.

use std::collections::BTreeSet;

use tracing::debug;

use khatwa_model::{CourseTree, Lesson, ResourceKind};

use crate::error::{ContentError, Result};

/// Reject ids repeated within their scope and inconsistent supplied progress.
///
/// Blank ids never get this far: id parsing already rejects them.
///
/// Scopes: module ids within the course; lesson and sub-axis ids within their
/// module (direct lessons and sub-axis lessons share one scope); resource ids
/// within their lesson.
pub fn validate_course_tree(tree: &CourseTree) -> Result<()> {
    let course_scope = format!("course {}", tree.id);
    let mut module_ids = BTreeSet::new();
    let mut unknown_kinds = 0usize;

    for module in &tree.modules {
        check_id("module", module.id.as_str(), &course_scope, &mut module_ids)?;
        let module_scope = format!("module {}", module.id);

        if let Some(progress) = &module.progress {
            progress
                .validate()
                .map_err(|source| ContentError::InvalidProgress {
                    module: module.id.to_string(),
                    source,
                })?;
        }

        let mut axis_ids = BTreeSet::new();
        for axis in &module.sub_axes {
            check_id("sub-axis", axis.id.as_str(), &module_scope, &mut axis_ids)?;
        }

        let mut lesson_ids = BTreeSet::new();
        for lesson in module.lesson_sequence() {
            check_id("lesson", lesson.id.as_str(), &module_scope, &mut lesson_ids)?;
            unknown_kinds += check_resources(lesson)?;
        }
    }

    if unknown_kinds > 0 {
        debug!(
            course_id = %tree.id,
            count = unknown_kinds,
            "resources with unrecognized kind rendered as other"
        );
    }
    Ok(())
}

fn check_resources(lesson: &Lesson) -> Result<usize> {
    let scope = format!("lesson {}", lesson.id);
    let mut ids = BTreeSet::new();
    let mut other = 0;
    for resource in &lesson.resources {
        check_id("resource", resource.id.as_str(), &scope, &mut ids)?;
        if resource.kind == ResourceKind::Other {
            other += 1;
        }
    }
    Ok(other)
}

fn check_id<'a>(
    kind: &'static str,
    id: &'a str,
    scope: &str,
    seen: &mut BTreeSet<&'a str>,
) -> Result<()> {
    if !seen.insert(id) {
        return Err(ContentError::DuplicateId {
            kind,
            id: id.to_string(),
            scope: scope.to_string(),
        });
    }
    Ok(())
}
