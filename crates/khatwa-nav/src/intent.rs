//! User intents dispatched by the presentation layer and the effects the
//! host application should carry out in response.

use serde::{Deserialize, Serialize};

use khatwa_model::{LessonId, ModuleId, ResourceId, SubAxisId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Key {
    Enter,
    Space,
    ArrowUp,
    ArrowDown,
}

impl Key {
    pub fn activates(&self) -> bool {
        matches!(self, Key::Enter | Key::Space)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "camelCase")]
pub enum Intent {
    ToggleModule { module: ModuleId },
    SelectLesson { lesson: LessonId },
    SelectResourceGroup { sub_axis: SubAxisId },
    OpenResource { lesson: LessonId, resource: ResourceId },
    DownloadResource { lesson: LessonId, resource: ResourceId },
    Key { key: Key },
}

/// What the host should do after an intent. The controller never performs I/O.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "camelCase")]
pub enum Effect {
    #[default]
    None,
    Navigate { route: String },
    Download { url: String },
}

impl Effect {
    pub fn is_none(&self) -> bool {
        matches!(self, Effect::None)
    }
}
