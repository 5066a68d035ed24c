#![deny(unsafe_code)]

//! Identifier newtypes for course tree nodes.
//!
//! Identifiers are opaque strings. Uniqueness is scoped to the owning node:
//! module ids within a course, lesson and sub-axis ids within a module,
//! resource ids within a lesson.

use std::fmt;

use crate::ModelError;

macro_rules! node_id {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
        )]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl TryFrom<String> for $name {
            type Error = ModelError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl $name {
            pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
                let value = value.into();
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    return Err(ModelError::InvalidId {
                        kind: $kind,
                        value,
                    });
                }
                Ok(Self(trimmed.to_string()))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

node_id!(
    /// Identifier of a course (the root of a course tree).
    CourseId,
    "course"
);
node_id!(
    /// Identifier of a module (axis), unique within its course.
    ModuleId,
    "module"
);
node_id!(
    /// Identifier of a sub-axis (resource group), unique within its module.
    SubAxisId,
    "sub-axis"
);
node_id!(
    /// Identifier of a lesson (unit), unique within its module.
    LessonId,
    "lesson"
);
node_id!(ResourceId, "resource");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_rejects_blank_ids() {
        assert_eq!(ModuleId::new("  m1 ").unwrap().as_str(), "m1");
        let err = LessonId::new("   ").unwrap_err();
        assert!(err.to_string().contains("lesson"));
    }

    #[test]
    fn ids_serialize_as_plain_strings() {
        let id = ResourceId::new("r-1").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"r-1\"");
        let back: ResourceId = serde_json::from_str("\"r-1\"").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn deserialization_trims_and_rejects_blank() {
        let id: LessonId = serde_json::from_str("\" l1 \"").unwrap();
        assert_eq!(id, LessonId::new("l1").unwrap());
        assert!(serde_json::from_str::<LessonId>("\"  \"").is_err());
    }
}
