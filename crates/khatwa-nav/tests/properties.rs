//! Property tests for navigation invariants.

use proptest::prelude::*;

use khatwa_model::{
    AccessGrant, AccessPlan, CourseId, CourseTree, Lesson, LessonId, Module, ModuleId, Resource,
    ResourceId, ResourceKind,
};
use khatwa_nav::{AccessPolicy, NavigationController, compute_progress};

const MODULE_IDS: [&str; 4] = ["m0", "m1", "m2", "m3"];
const LESSON_IDS: [&str; 4] = ["l0", "l1", "l2", "l3"];

fn tree() -> CourseTree {
    let modules = MODULE_IDS[..3]
        .iter()
        .enumerate()
        .map(|(index, id)| {
            let lessons = LESSON_IDS[..=index]
                .iter()
                .map(|lesson| Lesson::new(LessonId::new(*lesson).unwrap(), *lesson))
                .collect();
            Module::new(ModuleId::new(*id).unwrap(), *id).with_lessons(lessons)
        })
        .collect();
    CourseTree::new(CourseId::new("c").unwrap(), "Course", modules)
}

#[derive(Debug, Clone)]
enum Op {
    Toggle(usize),
    Select(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..MODULE_IDS.len()).prop_map(Op::Toggle),
        (0..LESSON_IDS.len()).prop_map(Op::Select),
    ]
}

fn apply(nav: &mut NavigationController, op: &Op) {
    match op {
        Op::Toggle(index) => nav.toggle_module(&ModuleId::new(MODULE_IDS[*index]).unwrap()),
        Op::Select(index) => nav.select_lesson(&LessonId::new(LESSON_IDS[*index]).unwrap()),
    }
}

proptest! {
    #[test]
    fn expanded_module_is_unique_and_known(ops in prop::collection::vec(op(), 0..40)) {
        let mut nav = NavigationController::new(tree(), AccessGrant::denied());
        for op in &ops {
            apply(&mut nav, op);
            if let Some(expanded) = &nav.state().expanded_module {
                prop_assert!(nav.tree().module(expanded).is_some());
            }
            if let Some(module) = nav.state().selection.module() {
                prop_assert_eq!(nav.state().expanded_module.as_ref(), Some(module));
            }
        }
    }

    #[test]
    fn double_toggle_collapses(ops in prop::collection::vec(op(), 0..20), index in 0..3usize) {
        let mut nav = NavigationController::new(tree(), AccessGrant::denied());
        for op in &ops {
            apply(&mut nav, op);
        }
        let id = ModuleId::new(MODULE_IDS[index]).unwrap();
        nav.toggle_module(&id);
        nav.toggle_module(&id);
        prop_assert_eq!(&nav.state().expanded_module, &None);
        prop_assert!(nav.state().selection.is_none());
    }

    #[test]
    fn unknown_ids_leave_state_unchanged(ops in prop::collection::vec(op(), 0..20)) {
        let mut nav = NavigationController::new(tree(), AccessGrant::denied());
        for op in &ops {
            apply(&mut nav, op);
        }
        let before = nav.state().clone();
        // Neither id exists in the tree.
        nav.toggle_module(&ModuleId::new("m3").unwrap());
        nav.select_lesson(&LessonId::new("zz").unwrap());
        prop_assert_eq!(nav.state(), &before);
    }

    #[test]
    fn access_always_unlocks(is_protected in any::<bool>(), is_preview in any::<bool>()) {
        let resource = Resource::new(ResourceId::new("r").unwrap(), "r", ResourceKind::Pdf)
            .protected(is_protected)
            .preview(is_preview);
        let lesson = Lesson::new(LessonId::new("l").unwrap(), "l")
            .with_resources(vec![resource.clone()]);
        let module = Module::new(ModuleId::new("m").unwrap(), "m").with_lessons(vec![lesson.clone()]);

        let granted = AccessGrant::granted(AccessPlan::Enrollment);
        prop_assert!(!AccessPolicy::new(&granted).is_resource_locked(&module, &lesson, &resource));

        let denied = AccessGrant::denied();
        let locked = AccessPolicy::new(&denied).is_resource_locked(&module, &lesson, &resource);
        prop_assert_eq!(locked, is_protected && !is_preview);
    }

    #[test]
    fn progress_stays_in_bounds(flags in prop::collection::vec(any::<bool>(), 0..30)) {
        let lessons = flags
            .iter()
            .enumerate()
            .map(|(index, done)| {
                Lesson::new(LessonId::new(format!("l{index}")).unwrap(), "lesson").completed(*done)
            })
            .collect();
        let module = Module::new(ModuleId::new("m").unwrap(), "m").with_lessons(lessons);
        let progress = compute_progress(&module);
        prop_assert!(progress.percentage >= 0.0 && progress.percentage <= 100.0);
        prop_assert!(progress.completed <= progress.total);
        if flags.is_empty() {
            prop_assert_eq!(progress.percentage, 0.0);
        }
    }
}
