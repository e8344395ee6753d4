use thiserror::Error;

/// Errors raised while validating logger config or installing the subscriber.
#[derive(Debug, Error)]
pub enum LoggerError {
    /// Format is neither `text` nor `json`.
    #[error("Invalid log format: {0} (expected: text|json)")]
    InvalidFormat(String),

    /// Directive rejected by `EnvFilter`.
    #[error("Invalid log level: {0}")]
    InvalidLevel(String),

    /// A global subscriber is already installed in this process.
    #[error("Logger already initialized")]
    AlreadyInitialized,
}

pub type LoggerResult<T> = Result<T, LoggerError>;
