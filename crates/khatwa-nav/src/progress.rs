//! Progress aggregation over lesson completion flags.

use khatwa_model::{CourseTree, Module, Progress};

/// Derive module progress from its lessons. An empty module is 0%.
pub fn compute_progress(module: &Module) -> Progress {
    let total = module.lesson_count();
    let completed = module.lesson_sequence().filter(|lesson| lesson.is_done()).count();
    Progress::from_counts(saturating_u32(completed), saturating_u32(total))
}

/// Overall progress across every lesson of the course.
pub fn compute_course_progress(tree: &CourseTree) -> Progress {
    let total = tree.lesson_count();
    let completed = tree.lessons().filter(|(_, lesson)| lesson.is_done()).count();
    Progress::from_counts(saturating_u32(completed), saturating_u32(total))
}

/// Supplied progress when present, derived progress otherwise.
pub fn effective_progress(module: &Module) -> Progress {
    module.progress.unwrap_or_else(|| compute_progress(module))
}

fn saturating_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
