//! Course outline: modules, optional sub-axes, lessons.
//!
//! Every collection keeps its input order; nothing here sorts.

use serde::{Deserialize, Serialize};

use crate::ids::{CourseId, LessonId, ModuleId, SubAxisId};
use crate::progress::Progress;
use crate::resource::Resource;

/// A single teachable unit bundling resources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: LessonId,
    pub title: String,
    #[serde(default)]
    pub resources: Vec<Resource>,
    #[serde(
        default,
        alias = "estimatedDuration",
        skip_serializing_if = "Option::is_none"
    )]
    pub estimated_duration_minutes: Option<u32>,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default, alias = "completedBy", skip_serializing_if = "Option::is_none")]
    pub completed_by_count: Option<u32>,
    #[serde(default)]
    pub is_protected: bool,
    #[serde(default)]
    pub is_preview: bool,
}

impl Lesson {
    pub fn new(id: LessonId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            resources: Vec::new(),
            estimated_duration_minutes: None,
            is_completed: false,
            completed_by_count: None,
            is_protected: false,
            is_preview: false,
        }
    }

    pub fn with_resources(mut self, resources: Vec<Resource>) -> Self {
        self.resources = resources;
        self
    }

    pub fn completed(mut self, is_completed: bool) -> Self {
        self.is_completed = is_completed;
        self
    }

    pub fn protected(mut self, is_protected: bool) -> Self {
        self.is_protected = is_protected;
        self
    }

    /// A lesson counts as done when flagged, or when the progress tracker
    /// reports at least one completion.
    pub fn is_done(&self) -> bool {
        self.is_completed || self.completed_by_count.is_some_and(|count| count > 0)
    }

    pub fn resource(&self, id: &str) -> Option<&Resource> {
        self.resources.iter().find(|resource| resource.id == id)
    }
}

/// Optional grouping layer between a module and its lessons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubAxis {
    pub id: SubAxisId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub lessons: Vec<Lesson>,
}

impl SubAxis {
    pub fn resource_count(&self) -> usize {
        self.lessons.iter().map(|lesson| lesson.resources.len()).sum()
    }

    pub fn resources(&self) -> impl Iterator<Item = (&Lesson, &Resource)> {
        self.lessons
            .iter()
            .flat_map(|lesson| lesson.resources.iter().map(move |resource| (lesson, resource)))
    }
}

/// Top-level grouping of lessons (an "axis" in the course outline).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    pub id: ModuleId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub lessons: Vec<Lesson>,
    #[serde(default)]
    pub sub_axes: Vec<SubAxis>,
    /// Externally supplied aggregate; see `khatwa_nav::compute_progress` for the derived value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<Progress>,
    /// Exempt the first lesson of the module from locking.
    #[serde(default)]
    pub preview_first_lesson: bool,
}

impl Module {
    pub fn new(id: ModuleId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: None,
            lessons: Vec::new(),
            sub_axes: Vec::new(),
            progress: None,
            preview_first_lesson: false,
        }
    }

    pub fn with_lessons(mut self, lessons: Vec<Lesson>) -> Self {
        self.lessons = lessons;
        self
    }

    pub fn with_sub_axes(mut self, sub_axes: Vec<SubAxis>) -> Self {
        self.sub_axes = sub_axes;
        self
    }

    /// Direct lessons followed by each sub-axis's lessons, in order.
    pub fn lesson_sequence(&self) -> impl Iterator<Item = &Lesson> {
        self.lessons
            .iter()
            .chain(self.sub_axes.iter().flat_map(|axis| axis.lessons.iter()))
    }

    pub fn lesson_count(&self) -> usize {
        self.lessons.len()
            + self
                .sub_axes
                .iter()
                .map(|axis| axis.lessons.len())
                .sum::<usize>()
    }

    pub fn lesson(&self, id: &LessonId) -> Option<&Lesson> {
        self.lesson_sequence().find(|lesson| &lesson.id == id)
    }

    pub fn lesson_position(&self, id: &LessonId) -> Option<usize> {
        self.lesson_sequence().position(|lesson| &lesson.id == id)
    }

    pub fn first_lesson(&self) -> Option<&Lesson> {
        self.lesson_sequence().next()
    }

    pub fn sub_axis(&self, id: &SubAxisId) -> Option<&SubAxis> {
        self.sub_axes.iter().find(|axis| &axis.id == id)
    }

    /// The sub-axis holding `lesson`, if it is not a direct lesson.
    pub fn sub_axis_of(&self, lesson: &LessonId) -> Option<&SubAxis> {
        self.sub_axes
            .iter()
            .find(|axis| axis.lessons.iter().any(|candidate| &candidate.id == lesson))
    }
}

/// Root of the hierarchy; owns every module exclusively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseTree {
    pub id: CourseId,
    pub title: String,
    #[serde(default)]
    pub modules: Vec<Module>,
}

impl CourseTree {
    pub fn new(id: CourseId, title: impl Into<String>, modules: Vec<Module>) -> Self {
        Self {
            id,
            title: title.into(),
            modules,
        }
    }

    pub fn module(&self, id: &ModuleId) -> Option<&Module> {
        self.modules.iter().find(|module| &module.id == id)
    }

    pub fn module_position(&self, id: &ModuleId) -> Option<usize> {
        self.modules.iter().position(|module| &module.id == id)
    }

    /// Resolve a lesson id, looking in `preferred` first and then in course order.
    ///
    /// Lesson ids are only unique within a module, so the same id may appear in
    /// several modules.
    pub fn find_lesson(
        &self,
        id: &LessonId,
        preferred: Option<&ModuleId>,
    ) -> Option<(&Module, &Lesson)> {
        if let Some(module) = preferred.and_then(|module_id| self.module(module_id))
            && let Some(lesson) = module.lesson(id)
        {
            return Some((module, lesson));
        }
        self.modules
            .iter()
            .find_map(|module| module.lesson(id).map(|lesson| (module, lesson)))
    }

    /// Resolve a sub-axis id, looking in `preferred` first and then in course order.
    pub fn find_sub_axis(
        &self,
        id: &SubAxisId,
        preferred: Option<&ModuleId>,
    ) -> Option<(&Module, &SubAxis)> {
        if let Some(module) = preferred.and_then(|module_id| self.module(module_id))
            && let Some(axis) = module.sub_axis(id)
        {
            return Some((module, axis));
        }
        self.modules
            .iter()
            .find_map(|module| module.sub_axis(id).map(|axis| (module, axis)))
    }

    pub fn lessons(&self) -> impl Iterator<Item = (&Module, &Lesson)> {
        self.modules
            .iter()
            .flat_map(|module| module.lesson_sequence().map(move |lesson| (module, lesson)))
    }

    pub fn lesson_count(&self) -> usize {
        self.modules.iter().map(Module::lesson_count).sum()
    }

    pub fn resource_count(&self) -> usize {
        self.lessons()
            .map(|(_, lesson)| lesson.resources.len())
            .sum()
    }
}
