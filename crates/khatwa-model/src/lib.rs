//! Data model for the Khatwa course navigation subsystem.

pub mod access;
pub mod course;
pub mod error;
pub mod ids;
pub mod progress;
pub mod resource;

pub use access::{AccessGrant, AccessPlan};
pub use course::{CourseTree, Lesson, Module, SubAxis};
pub use error::{ModelError, Result};
pub use ids::{CourseId, LessonId, ModuleId, ResourceId, SubAxisId};
pub use progress::Progress;
pub use resource::{Resource, ResourceKind};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lesson_sequence_includes_sub_axes() {
        let module = Module::new(ModuleId::new("m1").unwrap(), "Auditing")
            .with_lessons(vec![Lesson::new(LessonId::new("l1").unwrap(), "Intro")])
            .with_sub_axes(vec![SubAxis {
                id: SubAxisId::new("s1").unwrap(),
                title: "Controls".to_string(),
                description: None,
                lessons: vec![Lesson::new(LessonId::new("l2").unwrap(), "COSO")],
            }]);
        let ids: Vec<&str> = module.lesson_sequence().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["l1", "l2"]);
        assert_eq!(module.lesson_count(), 2);
        assert_eq!(
            module.sub_axis_of(&LessonId::new("l2").unwrap()).map(|a| a.id.as_str()),
            Some("s1")
        );
    }

    #[test]
    fn access_grant_serializes() {
        let grant = AccessGrant::granted(AccessPlan::Subscription {
            name: "annual".to_string(),
        });
        let json = serde_json::to_string(&grant).expect("serialize grant");
        let round: AccessGrant = serde_json::from_str(&json).expect("deserialize grant");
        assert_eq!(round, grant);
        assert!(json.contains("\"hasAccess\":true"));
    }
}
