//! Flat listing of every resource in a course, for the materials panel.

use khatwa_model::{CourseTree, Lesson, Module, Resource, ResourceKind};

use crate::access::AccessPolicy;

#[derive(Debug, Clone, Copy)]
pub struct MaterialEntry<'a> {
    pub module: &'a Module,
    pub lesson: &'a Lesson,
    pub resource: &'a Resource,
    pub locked: bool,
}

/// Collect resources in course order, optionally restricted to one kind.
///
/// Lessons without resources contribute nothing; an empty result is a valid
/// empty state.
pub fn collect_materials<'a>(
    tree: &'a CourseTree,
    policy: &AccessPolicy<'_>,
    kind: Option<ResourceKind>,
) -> Vec<MaterialEntry<'a>> {
    tree.lessons()
        .flat_map(|(module, lesson)| {
            lesson
                .resources
                .iter()
                .map(move |resource| (module, lesson, resource))
        })
        .filter(|(_, _, resource)| kind.is_none_or(|wanted| resource.kind == wanted))
        .map(|(module, lesson, resource)| MaterialEntry {
            module,
            lesson,
            resource,
            locked: policy.is_resource_locked(module, lesson, resource),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use khatwa_model::{AccessGrant, CourseId, LessonId, ModuleId, ResourceId};

    fn tree() -> CourseTree {
        let resource = |id: &str, kind| Resource::new(ResourceId::new(id).unwrap(), id, kind);
        CourseTree::new(
            CourseId::new("c").unwrap(),
            "Course",
            vec![Module::new(ModuleId::new("m1").unwrap(), "M1").with_lessons(vec![
                Lesson::new(LessonId::new("l1").unwrap(), "L1").with_resources(vec![
                    resource("doc", ResourceKind::Word),
                    resource("sheet", ResourceKind::Excel).protected(true),
                ]),
                Lesson::new(LessonId::new("l2").unwrap(), "L2"),
                Lesson::new(LessonId::new("l3").unwrap(), "L3")
                    .with_resources(vec![resource("notes", ResourceKind::Pdf)]),
            ])],
        )
    }

    #[test]
    fn lists_in_course_order_without_fabrication() {
        let tree = tree();
        let grant = AccessGrant::denied();
        let entries = collect_materials(&tree, &AccessPolicy::new(&grant), None);
        let ids: Vec<&str> = entries.iter().map(|e| e.resource.id.as_str()).collect();
        assert_eq!(ids, vec!["doc", "sheet", "notes"]);
        assert!(entries[1].locked);
        assert!(!entries[0].locked);
    }

    #[test]
    fn filters_by_kind() {
        let tree = tree();
        let grant = AccessGrant::denied();
        let entries = collect_materials(&tree, &AccessPolicy::new(&grant), Some(ResourceKind::Pdf));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].lesson.id, "l3");
    }
}
