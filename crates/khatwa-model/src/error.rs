use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid {kind} id: {value:?}")]
    InvalidId { kind: &'static str, value: String },
    #[error("invalid progress {completed}/{total} ({percentage}%)")]
    InvalidProgress {
        completed: u32,
        total: u32,
        percentage: f64,
    },
}

pub type Result<T> = std::result::Result<T, ModelError>;
