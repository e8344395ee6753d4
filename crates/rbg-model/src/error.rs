use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("missing image label: {0}")]
    MissingLabel(&'static str),

    #[error("invalid build date '{value}': {reason}")]
    InvalidDate { value: String, reason: String },

    #[error("report tail has no '{0}' line")]
    MissingReportField(&'static str),

    #[error("invalid regtest runtime '{0}'")]
    InvalidRuntime(String),

    #[error("unknown mode: {0} (expected: toolchain)")]
    UnknownMode(String),
}

pub type ModelResult<T> = Result<T, ModelError>;
