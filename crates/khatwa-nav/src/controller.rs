//! Navigation State Controller.
//!
//! Owns the course tree, the latest access grant and the [`NavigationState`].
//! Every operation is synchronous. Ids that are not present in the tree are
//! ignored, so stale ids after a content reload never fail.
//!
//! # Selection policy
//!
//! Selecting a lesson or a resource group also expands its owning module.
//! Because the accordion only ever shows one module, the selection therefore
//! always lives inside the expanded module.

use tracing::{debug, warn};

use khatwa_model::{
    AccessGrant, CourseTree, Lesson, LessonId, Module, ModuleId, Progress, Resource, ResourceId,
    SubAxisId,
};

use crate::access::AccessPolicy;
use crate::intent::{Effect, Intent, Key};
use crate::progress::{compute_course_progress, compute_progress};
use crate::route::lesson_route;
use crate::state::{FocusTarget, NavigationState, Selection};

#[derive(Debug, Clone)]
pub struct NavigationController {
    tree: CourseTree,
    access: AccessGrant,
    state: NavigationState,
}

impl NavigationController {
    pub fn new(tree: CourseTree, access: AccessGrant) -> Self {
        Self {
            tree,
            access,
            state: NavigationState::default(),
        }
    }

    /// Restore a previously captured state, dropping anything the tree no longer holds.
    pub fn with_state(mut self, state: NavigationState) -> Self {
        self.state = state;
        self.prune_state();
        self
    }

    pub fn tree(&self) -> &CourseTree {
        &self.tree
    }

    pub fn access(&self) -> &AccessGrant {
        &self.access
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn policy(&self) -> AccessPolicy<'_> {
        AccessPolicy::new(&self.access)
    }

    /// Replace the access grant. Lock status follows on the next evaluation.
    pub fn set_access(&mut self, access: AccessGrant) {
        debug!(
            course_id = %self.tree.id,
            has_access = access.has_access,
            "access updated"
        );
        self.access = access;
    }

    /// Swap in a freshly loaded tree, clearing state that points at removed nodes.
    pub fn reload(&mut self, tree: CourseTree) {
        self.tree = tree;
        self.prune_state();
    }

    /// Expand `module`, or collapse it when it is already expanded.
    ///
    /// Either way the selection is cleared; at most one module is expanded.
    pub fn toggle_module(&mut self, module: &ModuleId) {
        if self.tree.module(module).is_none() {
            debug!(module_id = %module, "toggle ignored: unknown module");
            return;
        }
        let previous = self.state.expanded_module.take();
        if previous.as_ref() != Some(module) {
            self.state.expanded_module = Some(module.clone());
        }
        if let Some(collapsed) = previous {
            self.lift_focus_out_of(&collapsed);
        }
        self.state.selection = Selection::None;
        debug!(
            module_id = %module,
            expanded = self.state.expanded_module.is_some(),
            "module toggled"
        );
    }

    /// Point the selection at `lesson`, expanding its module.
    pub fn select_lesson(&mut self, lesson: &LessonId) {
        let Some((module, found)) = self
            .tree
            .find_lesson(lesson, self.state.expanded_module.as_ref())
        else {
            debug!(lesson_id = %lesson, "select ignored: unknown lesson");
            return;
        };
        let module_id = module.id.clone();
        let lesson_id = found.id.clone();
        self.select_in(module_id, lesson_id);
    }

    /// Toggle the selection of a resource group (sub-axis), expanding its module.
    pub fn select_resource_group(&mut self, sub_axis: &SubAxisId) {
        let Some((module, axis)) = self
            .tree
            .find_sub_axis(sub_axis, self.state.expanded_module.as_ref())
        else {
            debug!(sub_axis_id = %sub_axis, "select ignored: unknown sub-axis");
            return;
        };
        let module_id = module.id.clone();
        let axis_id = axis.id.clone();
        if self.state.is_group_selected(&module_id, &axis_id) {
            self.state.selection = Selection::None;
            debug!(sub_axis_id = %axis_id, "resource group deselected");
            return;
        }
        self.expand_only(&module_id);
        debug!(module_id = %module_id, sub_axis_id = %axis_id, "resource group selected");
        self.state.selection = Selection::Group {
            module: module_id,
            sub_axis: axis_id,
        };
    }

    /// Move keyboard focus to a visible row. Lesson rows are only visible in
    /// the expanded module.
    pub fn focus(&mut self, target: FocusTarget) {
        let visible = match &target {
            FocusTarget::Module { module } => self.tree.module(module).is_some(),
            FocusTarget::Lesson { module, lesson } => {
                self.state.is_expanded(module)
                    && self
                        .tree
                        .module(module)
                        .is_some_and(|found| found.lesson(lesson).is_some())
            }
        };
        if visible {
            self.state.focus = Some(target);
        } else {
            debug!(?target, "focus ignored: row not visible");
        }
    }

    pub fn is_lesson_locked(&self, module: &Module, lesson: &Lesson) -> bool {
        self.policy().is_lesson_locked(module, lesson)
    }

    pub fn is_resource_locked(&self, module: &Module, lesson: &Lesson, resource: &Resource) -> bool {
        self.policy().is_resource_locked(module, lesson, resource)
    }

    pub fn compute_progress(&self, module: &Module) -> Progress {
        compute_progress(module)
    }

    pub fn course_progress(&self) -> Progress {
        compute_course_progress(&self.tree)
    }

    pub fn dispatch(&mut self, intent: Intent) -> Effect {
        match intent {
            Intent::ToggleModule { module } => {
                self.toggle_module(&module);
                Effect::None
            }
            Intent::SelectLesson { lesson } => {
                let Some((module, found)) = self
                    .tree
                    .find_lesson(&lesson, self.state.expanded_module.as_ref())
                else {
                    debug!(lesson_id = %lesson, "select ignored: unknown lesson");
                    return Effect::None;
                };
                let module_id = module.id.clone();
                let lesson_id = found.id.clone();
                self.activate_lesson(module_id, lesson_id)
            }
            Intent::SelectResourceGroup { sub_axis } => {
                self.select_resource_group(&sub_axis);
                Effect::None
            }
            Intent::OpenResource { lesson, resource } => self.open_resource(&lesson, &resource),
            Intent::DownloadResource { lesson, resource } => {
                self.download_resource(&lesson, &resource)
            }
            Intent::Key { key } => self.handle_key(key),
        }
    }

    /// Enter/Space activate the focused row; ArrowUp/ArrowDown move between
    /// siblings and stop at either end of the list. ArrowDown on an expanded
    /// module enters its lessons, ArrowUp on the first lesson leaves them.
    pub fn handle_key(&mut self, key: Key) -> Effect {
        match self.state.focus.clone() {
            None => {
                if !key.activates()
                    && let Some(first) = self.tree.modules.first()
                {
                    self.state.focus = Some(FocusTarget::Module {
                        module: first.id.clone(),
                    });
                }
                Effect::None
            }
            Some(FocusTarget::Module { module }) => {
                if key.activates() {
                    self.toggle_module(&module);
                    return Effect::None;
                }
                if key == Key::ArrowDown
                    && self.state.is_expanded(&module)
                    && let Some(first) = self
                        .tree
                        .module(&module)
                        .and_then(|found| found.lesson_sequence().next())
                {
                    self.state.focus = Some(FocusTarget::Lesson {
                        lesson: first.id.clone(),
                        module,
                    });
                    return Effect::None;
                }
                let Some(index) = self.tree.module_position(&module) else {
                    self.state.focus = None;
                    return Effect::None;
                };
                if let Some(next) = step(index, key).and_then(|i| self.tree.modules.get(i)) {
                    self.state.focus = Some(FocusTarget::Module {
                        module: next.id.clone(),
                    });
                }
                Effect::None
            }
            Some(FocusTarget::Lesson { module, lesson }) => {
                if key.activates() {
                    return self.activate_lesson(module, lesson);
                }
                let Some(found) = self.tree.module(&module) else {
                    self.state.focus = None;
                    return Effect::None;
                };
                let siblings: Vec<&LessonId> =
                    found.lesson_sequence().map(|candidate| &candidate.id).collect();
                let position = siblings.iter().position(|candidate| **candidate == lesson);
                // Up from the first lesson returns to the module row.
                if key == Key::ArrowUp && position == Some(0) {
                    self.state.focus = Some(FocusTarget::Module { module });
                    return Effect::None;
                }
                let next = position
                    .and_then(|index| step(index, key))
                    .and_then(|index| siblings.get(index))
                    .map(|id| (*id).clone());
                if let Some(next) = next {
                    self.state.focus = Some(FocusTarget::Lesson {
                        module,
                        lesson: next,
                    });
                }
                Effect::None
            }
        }
    }

    fn activate_lesson(&mut self, module: ModuleId, lesson: LessonId) -> Effect {
        let Some(found_module) = self.tree.module(&module) else {
            return Effect::None;
        };
        let Some(found) = found_module.lesson(&lesson) else {
            return Effect::None;
        };
        if self.is_lesson_locked(found_module, found) {
            debug!(module_id = %module, lesson_id = %lesson, "lesson locked");
            return Effect::None;
        }
        let route = lesson_route(&self.tree.id, &lesson);
        self.select_in(module, lesson);
        Effect::Navigate { route }
    }

    fn open_resource(&self, lesson: &LessonId, resource: &ResourceId) -> Effect {
        match self.resolve_unlocked_resource(lesson, resource) {
            Some((_, found_lesson, _)) => Effect::Navigate {
                route: lesson_route(&self.tree.id, &found_lesson.id),
            },
            None => Effect::None,
        }
    }

    fn download_resource(&self, lesson: &LessonId, resource: &ResourceId) -> Effect {
        let Some((_, _, found)) = self.resolve_unlocked_resource(lesson, resource) else {
            return Effect::None;
        };
        match found.download_url() {
            Some(url) => Effect::Download {
                url: url.to_string(),
            },
            None => {
                warn!(resource_id = %found.id, "download skipped: resource has no url");
                Effect::None
            }
        }
    }

    fn resolve_unlocked_resource(
        &self,
        lesson: &LessonId,
        resource: &ResourceId,
    ) -> Option<(&Module, &Lesson, &Resource)> {
        let Some((module, found_lesson)) = self
            .tree
            .find_lesson(lesson, self.state.expanded_module.as_ref())
        else {
            debug!(lesson_id = %lesson, "resource action ignored: unknown lesson");
            return None;
        };
        let Some(found) = found_lesson.resource(resource.as_str()) else {
            debug!(resource_id = %resource, "resource action ignored: unknown resource");
            return None;
        };
        if self.is_resource_locked(module, found_lesson, found) {
            debug!(resource_id = %resource, "resource locked");
            return None;
        }
        Some((module, found_lesson, found))
    }

    fn select_in(&mut self, module: ModuleId, lesson: LessonId) {
        self.expand_only(&module);
        debug!(module_id = %module, lesson_id = %lesson, "lesson selected");
        self.state.selection = Selection::Lesson { module, lesson };
    }

    fn expand_only(&mut self, module: &ModuleId) {
        if self.state.is_expanded(module) {
            return;
        }
        if let Some(previous) = self.state.expanded_module.replace(module.clone()) {
            self.lift_focus_out_of(&previous);
        }
    }

    /// A lesson row inside a collapsed module is hidden; focus its module row instead.
    fn lift_focus_out_of(&mut self, collapsed: &ModuleId) {
        if let Some(FocusTarget::Lesson { module, .. }) = &self.state.focus
            && module == collapsed
        {
            self.state.focus = Some(FocusTarget::Module {
                module: collapsed.clone(),
            });
        }
    }

    fn prune_state(&mut self) {
        let tree = &self.tree;
        let state = &mut self.state;

        if let Some(module) = &state.expanded_module
            && tree.module(module).is_none()
        {
            debug!(module_id = %module, "expanded module dropped after reload");
            state.expanded_module = None;
        }

        let selection_valid = match &state.selection {
            Selection::None => true,
            Selection::Lesson { module, lesson } => {
                state.is_expanded(module)
                    && tree
                        .module(module)
                        .is_some_and(|found| found.lesson(lesson).is_some())
            }
            Selection::Group { module, sub_axis } => {
                state.is_expanded(module)
                    && tree
                        .module(module)
                        .is_some_and(|found| found.sub_axis(sub_axis).is_some())
            }
        };
        if !selection_valid {
            debug!(selection = ?state.selection, "selection dropped after reload");
            state.selection = Selection::None;
        }

        let focus_valid = match &state.focus {
            None => true,
            Some(FocusTarget::Module { module }) => tree.module(module).is_some(),
            Some(FocusTarget::Lesson { module, lesson }) => {
                state.is_expanded(module)
                    && tree
                        .module(module)
                        .is_some_and(|found| found.lesson(lesson).is_some())
            }
        };
        if !focus_valid {
            state.focus = None;
        }
    }
}

fn step(index: usize, key: Key) -> Option<usize> {
    match key {
        Key::ArrowDown => index.checked_add(1),
        Key::ArrowUp => index.checked_sub(1),
        Key::Enter | Key::Space => None,
    }
}
