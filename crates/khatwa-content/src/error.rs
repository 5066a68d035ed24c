#![deny(unsafe_code)]

use std::path::PathBuf;

use khatwa_model::{CourseId, ModelError};

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("course not found: {course_id}")]
    NotFound { course_id: CourseId },

    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse JSON {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse TOML {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("course file {path} declares id {found}, expected {expected}")]
    IdMismatch {
        path: PathBuf,
        expected: CourseId,
        found: CourseId,
    },

    #[error("duplicate {kind} id {id:?} in {scope}")]
    DuplicateId {
        kind: &'static str,
        id: String,
        scope: String,
    },

    #[error("invalid progress for module {module}: {source}")]
    InvalidProgress {
        module: String,
        #[source]
        source: ModelError,
    },
}

impl ContentError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ContentError>;
