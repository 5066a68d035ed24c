//! Navigation scripts: one intent per line.

use anyhow::{Context, Result, anyhow, bail};

use khatwa_model::{LessonId, ModuleId, ResourceId, SubAxisId};
use khatwa_nav::{Intent, Key};

/// Parse a whole script, skipping blank lines and `#` comments.
///
/// Errors name the 1-based line they occurred on.
pub fn parse_script(text: &str) -> Result<Vec<Intent>> {
    let mut intents = Vec::new();
    for (index, line) in text.lines().enumerate() {
        if let Some(intent) =
            parse_line(line).with_context(|| format!("script line {}", index + 1))?
        {
            intents.push(intent);
        }
    }
    Ok(intents)
}

pub fn parse_line(line: &str) -> Result<Option<Intent>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let words: Vec<&str> = line.split_whitespace().collect();
    let intent = match words.as_slice() {
        ["toggle", module] => Intent::ToggleModule {
            module: ModuleId::new(*module)?,
        },
        ["select", lesson] => Intent::SelectLesson {
            lesson: LessonId::new(*lesson)?,
        },
        ["group", sub_axis] => Intent::SelectResourceGroup {
            sub_axis: SubAxisId::new(*sub_axis)?,
        },
        ["open", lesson, resource] => Intent::OpenResource {
            lesson: LessonId::new(*lesson)?,
            resource: ResourceId::new(*resource)?,
        },
        ["download", lesson, resource] => Intent::DownloadResource {
            lesson: LessonId::new(*lesson)?,
            resource: ResourceId::new(*resource)?,
        },
        ["key", key] => Intent::Key {
            key: parse_key(key)?,
        },
        [command, ..] => bail!("unrecognized command `{command}` or wrong argument count"),
        [] => return Ok(None),
    };
    Ok(Some(intent))
}

fn parse_key(raw: &str) -> Result<Key> {
    match raw.to_ascii_lowercase().as_str() {
        "enter" => Ok(Key::Enter),
        "space" => Ok(Key::Space),
        "up" | "arrowup" => Ok(Key::ArrowUp),
        "down" | "arrowdown" => Ok(Key::ArrowDown),
        other => Err(anyhow!("unknown key `{other}` (expected enter, space, up or down)")),
    }
}
