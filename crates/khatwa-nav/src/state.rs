//! Navigation state for one course outline.
//!
//! This is the single source of truth for what is open, selected and focused.
//! It is a plain serializable value; only [`crate::NavigationController`]
//! mutates it.

use serde::{Deserialize, Serialize};

use khatwa_model::{LessonId, ModuleId, SubAxisId};

/// The active selection. At most one lesson or one resource group is
/// selected at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Selection {
    #[default]
    None,
    Lesson {
        module: ModuleId,
        lesson: LessonId,
    },
    #[serde(rename_all = "camelCase")]
    Group {
        module: ModuleId,
        sub_axis: SubAxisId,
    },
}

impl Selection {
    pub fn module(&self) -> Option<&ModuleId> {
        match self {
            Selection::None => None,
            Selection::Lesson { module, .. } | Selection::Group { module, .. } => Some(module),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Selection::None)
    }
}

/// Row holding keyboard focus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FocusTarget {
    Module { module: ModuleId },
    Lesson { module: ModuleId, lesson: LessonId },
}

impl FocusTarget {
    pub fn module(&self) -> &ModuleId {
        match self {
            FocusTarget::Module { module } | FocusTarget::Lesson { module, .. } => module,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationState {
    /// At most one expanded module (single-expansion accordion).
    pub expanded_module: Option<ModuleId>,
    pub selection: Selection,
    pub focus: Option<FocusTarget>,
}

impl NavigationState {
    pub fn is_expanded(&self, module: &ModuleId) -> bool {
        self.expanded_module.as_ref() == Some(module)
    }

    pub fn selected_lesson(&self) -> Option<&LessonId> {
        match &self.selection {
            Selection::Lesson { lesson, .. } => Some(lesson),
            _ => None,
        }
    }

    pub fn selected_group(&self) -> Option<&SubAxisId> {
        match &self.selection {
            Selection::Group { sub_axis, .. } => Some(sub_axis),
            _ => None,
        }
    }

    pub fn is_lesson_selected(&self, module: &ModuleId, lesson: &LessonId) -> bool {
        matches!(
            &self.selection,
            Selection::Lesson { module: m, lesson: l } if m == module && l == lesson
        )
    }

    pub fn is_group_selected(&self, module: &ModuleId, sub_axis: &SubAxisId) -> bool {
        matches!(
            &self.selection,
            Selection::Group { module: m, sub_axis: s } if m == module && s == sub_axis
        )
    }
}
