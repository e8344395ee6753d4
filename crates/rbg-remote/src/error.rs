use thiserror::Error;

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("missing field '{field}' in {context}")]
    MissingField {
        context: &'static str,
        field: &'static str,
    },

    #[error("missing header {header} in response from {url}")]
    MissingHeader { header: &'static str, url: String },

    #[error("invalid header {header}: {value}")]
    InvalidHeader { header: &'static str, value: String },

    #[error("credentials unavailable: {0}")]
    Credentials(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RemoteResult<T> = Result<T, RemoteError>;
