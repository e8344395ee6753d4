use thiserror::Error;

use rbg_model::ModelError;

/// Failure of a rebuild check.
///
/// Any of these aborts the run; the caller reports it and exits non-zero.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("registry error: {0}")]
    Registry(String),

    #[error("source history error: {0}")]
    History(String),

    #[error("report error: {0}")]
    Report(String),

    #[error(transparent)]
    Model(#[from] ModelError),
}
