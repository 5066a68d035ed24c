//! Accordion view model.
//!
//! [`build_view`] is a pure projection of the course tree, the navigation
//! state and the access grant into rows. Rows keep the input order of the
//! tree; nothing is sorted or filled in.

use khatwa_model::{
    AccessGrant, CourseTree, Lesson, LessonId, Module, ModuleId, Progress, Resource, ResourceId,
    ResourceKind, SubAxis, SubAxisId,
};
use khatwa_nav::{
    AccessPolicy, FocusTarget, NavigationState, compute_course_progress, effective_progress,
};

/// Shown when the course has no modules.
pub const NO_MODULES: &str = "لا توجد محاور متاحة";
/// Shown inside an expanded module without lessons.
pub const NO_LESSONS: &str = "لا توجد وحدات متاحة";
/// Shown in a file panel without resources.
pub const NO_FILES: &str = "لا توجد ملفات";

#[derive(Debug, Clone, PartialEq)]
pub struct AccordionView {
    pub course_title: String,
    pub progress: Progress,
    pub modules: Vec<ModuleRow>,
}

impl AccordionView {
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn expanded_module(&self) -> Option<&ModuleRow> {
        self.modules.iter().find(|module| module.expanded)
    }

    /// Files of the selected lesson or resource group.
    pub fn file_panel(&self) -> Option<&FilePanel> {
        let body = self.expanded_module()?.body.as_ref()?;
        body.lessons
            .iter()
            .chain(body.groups.iter().flat_map(|group| group.lessons.iter()))
            .find_map(|lesson| lesson.files.as_ref())
            .or_else(|| body.groups.iter().find_map(|group| group.files.as_ref()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModuleRow {
    pub id: ModuleId,
    /// 1-based position in the course.
    pub number: usize,
    pub title: String,
    pub description: Option<String>,
    pub expanded: bool,
    pub focused: bool,
    pub progress: Progress,
    /// Present only while expanded.
    pub body: Option<ModuleBody>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModuleBody {
    pub lessons: Vec<LessonRow>,
    pub groups: Vec<GroupRow>,
}

impl ModuleBody {
    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty() && self.groups.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LessonRow {
    pub id: LessonId,
    pub title: String,
    pub selected: bool,
    pub focused: bool,
    pub completed: bool,
    pub locked: bool,
    pub duration_minutes: Option<u32>,
    pub resource_count: usize,
    /// Present only while the lesson is selected.
    pub files: Option<FilePanel>,
}

/// A sub-axis shown as a resource group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupRow {
    pub id: SubAxisId,
    pub title: String,
    pub file_count: usize,
    pub selected: bool,
    pub lessons: Vec<LessonRow>,
    /// Present only while the group is selected.
    pub files: Option<FilePanel>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilePanel {
    pub files: Vec<FileRow>,
}

impl FilePanel {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FileRow {
    pub id: ResourceId,
    pub title: String,
    pub lesson_title: String,
    pub kind: ResourceKind,
    pub size_label: Option<String>,
    pub duration_label: Option<String>,
    pub locked: bool,
}

pub fn build_view(tree: &CourseTree, state: &NavigationState, grant: &AccessGrant) -> AccordionView {
    let policy = AccessPolicy::new(grant);
    let modules = tree
        .modules
        .iter()
        .enumerate()
        .map(|(index, module)| module_row(index, module, state, &policy))
        .collect();
    AccordionView {
        course_title: tree.title.clone(),
        progress: compute_course_progress(tree),
        modules,
    }
}

fn module_row(
    index: usize,
    module: &Module,
    state: &NavigationState,
    policy: &AccessPolicy<'_>,
) -> ModuleRow {
    let expanded = state.is_expanded(&module.id);
    let focused = matches!(
        &state.focus,
        Some(FocusTarget::Module { module: focused }) if focused == &module.id
    );
    ModuleRow {
        id: module.id.clone(),
        number: index + 1,
        title: module.title.clone(),
        description: module.description.clone(),
        expanded,
        focused,
        progress: effective_progress(module),
        body: expanded.then(|| module_body(module, state, policy)),
    }
}

fn module_body(module: &Module, state: &NavigationState, policy: &AccessPolicy<'_>) -> ModuleBody {
    ModuleBody {
        lessons: module
            .lessons
            .iter()
            .map(|lesson| lesson_row(module, lesson, state, policy))
            .collect(),
        groups: module
            .sub_axes
            .iter()
            .map(|axis| group_row(module, axis, state, policy))
            .collect(),
    }
}

fn lesson_row(
    module: &Module,
    lesson: &Lesson,
    state: &NavigationState,
    policy: &AccessPolicy<'_>,
) -> LessonRow {
    let focused = matches!(
        &state.focus,
        Some(FocusTarget::Lesson { module: m, lesson: l }) if m == &module.id && l == &lesson.id
    );
    let selected = state.is_lesson_selected(&module.id, &lesson.id);
    LessonRow {
        id: lesson.id.clone(),
        title: lesson.title.clone(),
        selected,
        focused,
        completed: lesson.is_done(),
        locked: policy.is_lesson_locked(module, lesson),
        duration_minutes: lesson.estimated_duration_minutes,
        resource_count: lesson.resources.len(),
        files: selected.then(|| FilePanel {
            files: lesson
                .resources
                .iter()
                .map(|resource| file_row(module, lesson, resource, policy))
                .collect(),
        }),
    }
}

fn group_row(
    module: &Module,
    axis: &SubAxis,
    state: &NavigationState,
    policy: &AccessPolicy<'_>,
) -> GroupRow {
    let selected = state.is_group_selected(&module.id, &axis.id);
    GroupRow {
        id: axis.id.clone(),
        title: axis.title.clone(),
        file_count: axis.resource_count(),
        selected,
        lessons: axis
            .lessons
            .iter()
            .map(|lesson| lesson_row(module, lesson, state, policy))
            .collect(),
        files: selected.then(|| FilePanel {
            files: axis
                .resources()
                .map(|(lesson, resource)| file_row(module, lesson, resource, policy))
                .collect(),
        }),
    }
}

fn file_row(
    module: &Module,
    lesson: &Lesson,
    resource: &Resource,
    policy: &AccessPolicy<'_>,
) -> FileRow {
    FileRow {
        id: resource.id.clone(),
        title: resource.title.clone(),
        lesson_title: lesson.title.clone(),
        kind: resource.kind,
        size_label: resource.size_label.clone(),
        duration_label: resource.duration_label(),
        locked: policy.is_resource_locked(module, lesson, resource),
    }
}
