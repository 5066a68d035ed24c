//! Downloadable or playable assets attached to a lesson.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ids::ResourceId;

/// Kind of a resource file.
///
/// The set is closed: anything that is not recognized becomes [`ResourceKind::Other`]
/// so that course data with unexpected kinds still renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Video,
    Audio,
    Pdf,
    Word,
    Excel,
    #[default]
    Other,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 6] = [
        ResourceKind::Video,
        ResourceKind::Audio,
        ResourceKind::Pdf,
        ResourceKind::Word,
        ResourceKind::Excel,
        ResourceKind::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Video => "video",
            ResourceKind::Audio => "audio",
            ResourceKind::Pdf => "pdf",
            ResourceKind::Word => "word",
            ResourceKind::Excel => "excel",
            ResourceKind::Other => "other",
        }
    }

    /// Returns true for kinds that carry a playback duration.
    pub fn is_media(&self) -> bool {
        matches!(self, ResourceKind::Video | ResourceKind::Audio)
    }

    /// Classify a free-form kind or file type string.
    ///
    /// Matching is case-insensitive and substring based, so MIME types and
    /// extensions (`application/pdf`, `docx`, `mp3`) land on the right kind.
    pub fn classify(raw: &str) -> Self {
        let lower = raw.trim().to_lowercase();
        if lower.is_empty() {
            return ResourceKind::Other;
        }
        if lower.contains("pdf") {
            ResourceKind::Pdf
        } else if lower.contains("word") || lower.contains("doc") {
            ResourceKind::Word
        } else if lower.contains("excel")
            || lower.contains("xls")
            || lower.contains("spreadsheet")
            || lower.contains("csv")
        {
            ResourceKind::Excel
        } else if lower.contains("video") || lower.contains("mp4") {
            ResourceKind::Video
        } else if lower.contains("audio") || lower.contains("mp3") || lower.contains("podcast") {
            ResourceKind::Audio
        } else {
            ResourceKind::Other
        }
    }
}

impl From<String> for ResourceKind {
    fn from(value: String) -> Self {
        ResourceKind::classify(&value)
    }
}

impl From<&str> for ResourceKind {
    fn from(value: &str) -> Self {
        ResourceKind::classify(value)
    }
}

/// Kind as it appears in course data: free-form text, or anything else.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawKind {
    Text(String),
    Unreadable(serde::de::IgnoredAny),
}

/// Classifies text leniently; `null`, numbers and other non-text values
/// become [`ResourceKind::Other`] instead of failing the whole course.
impl<'de> Deserialize<'de> for ResourceKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawKind::deserialize(deserializer)? {
            RawKind::Text(text) => ResourceKind::classify(&text),
            RawKind::Unreadable(_) => ResourceKind::Other,
        })
    }
}

impl FromStr for ResourceKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ResourceKind::classify(s))
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single file or media asset attached to a lesson.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: ResourceId,
    #[serde(alias = "name")]
    pub title: String,
    #[serde(default, alias = "type")]
    pub kind: ResourceKind,
    #[serde(default, alias = "size", skip_serializing_if = "Option::is_none")]
    pub size_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<u32>,
    /// Requires an access grant to open.
    #[serde(default)]
    pub is_protected: bool,
    /// Exempt from the access check ("try before you buy").
    #[serde(default)]
    pub is_preview: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Resource {
    pub fn new(id: ResourceId, title: impl Into<String>, kind: ResourceKind) -> Self {
        Self {
            id,
            title: title.into(),
            kind,
            size_label: None,
            duration_seconds: None,
            is_protected: false,
            is_preview: false,
            url: None,
        }
    }

    pub fn protected(mut self, is_protected: bool) -> Self {
        self.is_protected = is_protected;
        self
    }

    pub fn preview(mut self, is_preview: bool) -> Self {
        self.is_preview = is_preview;
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// The url, unless it is missing or a placeholder (`""`, `"#"`).
    pub fn download_url(&self) -> Option<&str> {
        self.url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty() && *url != "#")
    }

    /// Playback duration as `m:ss` or `h:mm:ss`, only for video and audio.
    pub fn duration_label(&self) -> Option<String> {
        if !self.kind.is_media() {
            return None;
        }
        self.duration_seconds.map(format_clock)
    }
}

fn format_clock(seconds: u32) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}
