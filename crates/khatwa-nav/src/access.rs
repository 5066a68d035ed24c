//! Access gating with data-driven preview exemptions.

use khatwa_model::{AccessGrant, Lesson, Module, Resource};

/// Lock predicates evaluated against the latest access grant.
///
/// A node is locked when it is protected, the viewer has no access, and the
/// node is not a preview. Preview status comes from course data only:
/// an explicit `isPreview` flag, or the first lesson of a module flagged with
/// `previewFirstLesson`. Resources inherit preview status from their lesson.
#[derive(Debug, Clone, Copy)]
pub struct AccessPolicy<'a> {
    grant: &'a AccessGrant,
}

impl<'a> AccessPolicy<'a> {
    pub fn new(grant: &'a AccessGrant) -> Self {
        Self { grant }
    }

    pub fn has_access(&self) -> bool {
        self.grant.has_access
    }

    pub fn is_lesson_preview(&self, module: &Module, lesson: &Lesson) -> bool {
        if lesson.is_preview {
            return true;
        }
        module.preview_first_lesson
            && module
                .first_lesson()
                .is_some_and(|first| first.id == lesson.id)
    }

    pub fn is_resource_preview(&self, module: &Module, lesson: &Lesson, resource: &Resource) -> bool {
        resource.is_preview || self.is_lesson_preview(module, lesson)
    }

    pub fn is_lesson_locked(&self, module: &Module, lesson: &Lesson) -> bool {
        lesson.is_protected && !self.has_access() && !self.is_lesson_preview(module, lesson)
    }

    pub fn is_resource_locked(&self, module: &Module, lesson: &Lesson, resource: &Resource) -> bool {
        resource.is_protected
            && !self.has_access()
            && !self.is_resource_preview(module, lesson, resource)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use khatwa_model::{AccessPlan, LessonId, ModuleId, ResourceId, ResourceKind};

    fn module() -> Module {
        let protected = |id: &str| {
            Lesson::new(LessonId::new(id).unwrap(), id)
                .protected(true)
                .with_resources(vec![
                    Resource::new(ResourceId::new("r").unwrap(), "file", ResourceKind::Pdf)
                        .protected(true),
                ])
        };
        let mut module = Module::new(ModuleId::new("m").unwrap(), "Module")
            .with_lessons(vec![protected("l1"), protected("l2")]);
        module.preview_first_lesson = true;
        module
    }

    #[test]
    fn first_lesson_preview_is_data_driven() {
        let grant = AccessGrant::denied();
        let policy = AccessPolicy::new(&grant);
        let mut module = module();
        let first = module.lessons[0].clone();
        let second = module.lessons[1].clone();
        assert!(!policy.is_lesson_locked(&module, &first));
        assert!(!policy.is_resource_locked(&module, &first, &first.resources[0]));
        assert!(policy.is_lesson_locked(&module, &second));
        assert!(policy.is_resource_locked(&module, &second, &second.resources[0]));

        module.preview_first_lesson = false;
        assert!(policy.is_lesson_locked(&module, &first));
    }

    #[test]
    fn access_unlocks_everything() {
        let grant = AccessGrant::granted(AccessPlan::Enrollment);
        let policy = AccessPolicy::new(&grant);
        let module = module();
        for lesson in &module.lessons {
            assert!(!policy.is_lesson_locked(&module, lesson));
            assert!(!policy.is_resource_locked(&module, lesson, &lesson.resources[0]));
        }
    }

    #[test]
    fn explicit_resource_preview() {
        let grant = AccessGrant::denied();
        let policy = AccessPolicy::new(&grant);
        let module = module();
        let lesson = &module.lessons[1];
        let sample = lesson.resources[0].clone().preview(true);
        assert!(!policy.is_resource_locked(&module, lesson, &sample));
    }
}
