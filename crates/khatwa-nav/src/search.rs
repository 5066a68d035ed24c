//! Lesson title search for the sidebar filter box.

use khatwa_model::{CourseTree, Lesson, LessonId, Module, SubAxis};

/// Keep only lessons whose title contains `query` (case-insensitive).
///
/// An empty query returns the tree unchanged. Otherwise modules and sub-axes
/// without a matching lesson are dropped. Order is preserved.
///
/// Lock status is unchanged by filtering: the module's first-lesson preview
/// is pinned to the original first lesson, so it never moves to the first
/// match.
pub fn filter_lessons(tree: &CourseTree, query: &str) -> CourseTree {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return tree.clone();
    }
    let matches = |lesson: &Lesson| lesson.title.to_lowercase().contains(&needle);
    let modules = tree
        .modules
        .iter()
        .filter_map(|module| {
            let preview = module
                .preview_first_lesson
                .then(|| module.first_lesson().map(|first| &first.id))
                .flatten();
            let filtered = Module {
                lessons: keep_matching(&module.lessons, &matches, preview),
                sub_axes: module
                    .sub_axes
                    .iter()
                    .filter_map(|axis| {
                        let lessons = keep_matching(&axis.lessons, &matches, preview);
                        (!lessons.is_empty()).then(|| SubAxis {
                            lessons,
                            ..axis.clone()
                        })
                    })
                    .collect(),
                preview_first_lesson: false,
                ..module.clone()
            };
            (filtered.lesson_count() > 0).then_some(filtered)
        })
        .collect();
    CourseTree {
        modules,
        ..tree.clone()
    }
}

fn keep_matching(
    lessons: &[Lesson],
    matches: &impl Fn(&Lesson) -> bool,
    preview: Option<&LessonId>,
) -> Vec<Lesson> {
    lessons
        .iter()
        .filter(|lesson| matches(*lesson))
        .map(|lesson| {
            let mut kept = lesson.clone();
            if preview == Some(&lesson.id) {
                kept.is_preview = true;
            }
            kept
        })
        .collect()
}
