use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use khatwa_content::{
    AccessService, ContentSource, DirectoryContentSource, Entitlements, FixedAccess,
    entitlements_path,
};
use khatwa_model::{AccessGrant, AccessPlan, CourseId, CourseTree, LessonId, ModuleId, SubAxisId};
use khatwa_nav::{AccessPolicy, NavigationController, collect_materials, filter_lessons};
use khatwa_render::{NO_FILES, build_view, materials_table, progress_table, render_outline};

use crate::cli::{AccessArg, CourseArgs, MaterialsArgs, NavigateArgs, OutlineArgs};
use crate::script::parse_script;

/// Settings shared by every subcommand.
#[derive(Debug, Clone)]
pub struct Workspace {
    pub content_dir: PathBuf,
    pub access: AccessArg,
}

impl Workspace {
    pub fn new(content_dir: impl Into<PathBuf>, access: AccessArg) -> Self {
        Self {
            content_dir: content_dir.into(),
            access,
        }
    }

    pub fn content_dir(&self) -> &Path {
        &self.content_dir
    }

    /// Load a course and the viewer's grant for it.
    pub fn open_course(&self, course_id: &str) -> Result<(CourseTree, AccessGrant)> {
        let course_id = CourseId::new(course_id).context("invalid course id")?;
        let source = DirectoryContentSource::new(&self.content_dir);
        let tree = source
            .load_course_tree(&course_id)
            .with_context(|| format!("load course {course_id}"))?;
        let grant = self.access_service()?.check_access(&course_id);
        info!(
            course_id = %course_id,
            has_access = grant.has_access,
            "access checked"
        );
        Ok((tree, grant))
    }

    fn access_service(&self) -> Result<Box<dyn AccessService>> {
        let service: Box<dyn AccessService> = match self.access {
            AccessArg::Granted => Box::new(FixedAccess(AccessGrant::granted(
                AccessPlan::Enrollment,
            ))),
            AccessArg::Denied => Box::new(FixedAccess(AccessGrant::denied())),
            AccessArg::Auto => {
                let path = entitlements_path(&self.content_dir);
                debug!(path = %path.display(), "reading entitlements");
                Box::new(Entitlements::load_or_default(&path).context("load entitlements")?)
            }
        };
        Ok(service)
    }
}

pub fn run_outline(workspace: &Workspace, args: &OutlineArgs) -> Result<String> {
    let span = info_span!("outline", course_id = %args.course_id);
    let _guard = span.enter();
    let (tree, grant) = workspace.open_course(&args.course_id)?;
    let tree = match &args.search {
        Some(query) => filter_lessons(&tree, query),
        None => tree,
    };
    let mut nav = NavigationController::new(tree, grant);
    if let Some(module) = &args.expand {
        nav.toggle_module(&ModuleId::new(module.as_str()).context("invalid module id")?);
    }
    if let Some(lesson) = &args.select {
        nav.select_lesson(&LessonId::new(lesson.as_str()).context("invalid lesson id")?);
    }
    if let Some(group) = &args.group {
        nav.select_resource_group(&SubAxisId::new(group.as_str()).context("invalid group id")?);
    }
    let view = build_view(nav.tree(), nav.state(), nav.access());
    Ok(render_outline(&view))
}

pub fn run_materials(workspace: &Workspace, args: &MaterialsArgs) -> Result<String> {
    let (tree, grant) = workspace.open_course(&args.course_id)?;
    let entries = collect_materials(
        &tree,
        &AccessPolicy::new(&grant),
        args.kind.map(Into::into),
    );
    if entries.is_empty() {
        return Ok(NO_FILES.to_string());
    }
    Ok(materials_table(&entries).to_string())
}

pub fn run_progress(workspace: &Workspace, args: &CourseArgs) -> Result<String> {
    let (tree, _grant) = workspace.open_course(&args.course_id)?;
    Ok(progress_table(&tree).to_string())
}

/// Replay a script. Prints one JSON effect per intent, then the final state.
pub fn run_navigate(workspace: &Workspace, args: &NavigateArgs) -> Result<String> {
    let span = info_span!("navigate", course_id = %args.course_id);
    let _guard = span.enter();
    let (tree, grant) = workspace.open_course(&args.course_id)?;
    let text = std::fs::read_to_string(&args.script)
        .with_context(|| format!("read script {}", args.script.display()))?;
    let intents = parse_script(&text)?;
    let mut nav = NavigationController::new(tree, grant);
    let mut lines = Vec::with_capacity(intents.len() + 1);
    for intent in intents {
        let effect = nav.dispatch(intent);
        lines.push(serde_json::to_string(&effect).context("serialize effect")?);
    }
    lines.push(serde_json::to_string_pretty(nav.state()).context("serialize state")?);
    Ok(lines.join("\n"))
}
