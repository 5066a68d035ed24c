//! Plain-text outline rendering.
//!
//! Output is deterministic and carries no ANSI codes, so it can be diffed
//! and snapshotted.

use khatwa_model::Progress;

use crate::kind_style::{LOCK_GLYPH, kind_style};
use crate::view::{
    AccordionView, FilePanel, FileRow, GroupRow, LessonRow, ModuleRow, NO_FILES, NO_LESSONS,
    NO_MODULES,
};

const BAR_WIDTH: usize = 10;
const LESSON_INDENT: &str = "   ";
const GROUP_LESSON_INDENT: &str = "       ";
const FILE_INDENT: &str = "  ";

pub fn render_outline(view: &AccordionView) -> String {
    let mut lines = vec![format!(
        "{}  {}",
        view.course_title,
        progress_label(&view.progress)
    )];
    if view.is_empty() {
        lines.push(NO_MODULES.to_string());
    }
    for module in &view.modules {
        push_module(&mut lines, module);
    }
    lines.join("\n")
}

/// `[███░░░░░░░] 33% (1/3)`
pub fn progress_label(progress: &Progress) -> String {
    let percent = progress.rounded_percentage();
    let filled = usize::from(percent) * BAR_WIDTH / 100;
    format!(
        "[{}{}] {}% ({}/{})",
        "█".repeat(filled),
        "░".repeat(BAR_WIDTH - filled),
        percent,
        progress.completed,
        progress.total
    )
}

fn push_module(lines: &mut Vec<String>, module: &ModuleRow) {
    let marker = if module.expanded { "▾" } else { "▸" };
    lines.push(format!(
        "{}{} {}. {}  {}",
        cursor(module.focused),
        marker,
        module.number,
        module.title,
        progress_label(&module.progress)
    ));
    let Some(body) = &module.body else {
        return;
    };
    if body.is_empty() {
        lines.push(format!(" {LESSON_INDENT}{NO_LESSONS}"));
        return;
    }
    for lesson in &body.lessons {
        push_lesson(lines, lesson, LESSON_INDENT);
    }
    for group in &body.groups {
        push_group(lines, group);
    }
}

fn push_group(lines: &mut Vec<String>, group: &GroupRow) {
    let marker = if group.selected { "▾" } else { "▸" };
    lines.push(format!(
        " {LESSON_INDENT}{marker} {} ({} ملفات)",
        group.title, group.file_count
    ));
    for lesson in &group.lessons {
        push_lesson(lines, lesson, GROUP_LESSON_INDENT);
    }
    if let Some(panel) = &group.files {
        push_files(lines, panel, GROUP_LESSON_INDENT);
    }
}

fn push_lesson(lines: &mut Vec<String>, lesson: &LessonRow, indent: &str) {
    lines.push(lesson_line(lesson, indent));
    if let Some(panel) = &lesson.files {
        push_files(lines, panel, indent);
    }
}

/// Files sit one step deeper than the row at `indent`.
fn push_files(lines: &mut Vec<String>, panel: &FilePanel, indent: &str) {
    let prefix = format!(" {indent}{FILE_INDENT}");
    if panel.is_empty() {
        lines.push(format!("{prefix}{NO_FILES}"));
    }
    for file in &panel.files {
        lines.push(format!("{prefix}{}", file_line(file)));
    }
}

fn lesson_line(lesson: &LessonRow, indent: &str) -> String {
    let mark = if lesson.selected { "●" } else { "○" };
    let mut parts = vec![format!("{mark} {}", lesson.title)];
    if lesson.completed {
        parts.push("✓".to_string());
    }
    if let Some(minutes) = lesson.duration_minutes {
        parts.push(format!("· {minutes} د"));
    }
    if lesson.locked {
        parts.push(LOCK_GLYPH.to_string());
    }
    format!("{}{indent}{}", cursor(lesson.focused), parts.join(" "))
}

fn file_line(file: &FileRow) -> String {
    let style = kind_style(file.kind);
    let mut parts = vec![
        style.glyph.to_string(),
        file.title.clone(),
        format!("· {}", style.label),
    ];
    if let Some(size) = &file.size_label {
        parts.push(format!("· {size}"));
    }
    if let Some(duration) = &file.duration_label {
        parts.push(format!("· {duration}"));
    }
    if file.locked {
        parts.push(LOCK_GLYPH.to_string());
    }
    parts.join(" ")
}

fn cursor(focused: bool) -> &'static str {
    if focused { "›" } else { " " }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_scales_with_percentage() {
        assert_eq!(
            progress_label(&Progress::from_counts(0, 0)),
            "[░░░░░░░░░░] 0% (0/0)"
        );
        assert_eq!(
            progress_label(&Progress::from_counts(1, 2)),
            "[█████░░░░░] 50% (1/2)"
        );
        assert_eq!(
            progress_label(&Progress::from_counts(4, 4)),
            "[██████████] 100% (4/4)"
        );
    }
}
