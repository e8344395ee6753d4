//! Short-lived registry credentials.
//!
//! A [`CredentialProvider`] yields a bearer token together with the project the
//! registry paths are rooted at. Providers are queried on every registry call.
use std::fmt;

use async_trait::async_trait;

use crate::error::RemoteResult;

mod chain;
pub use chain::CredentialChain;

mod env;
pub use env::{ENV_GOOGLE_PROJECT, ENV_PROJECT, ENV_TOKEN, StaticCredentials};

mod gcloud;
pub use gcloud::GcloudCredentials;

mod metadata;
pub use metadata::MetadataCredentials;

/// OAuth scope requested from the metadata server.
pub const READ_ONLY_SCOPE: &str = "https://www.googleapis.com/auth/devstorage.read_only";

/// Bearer token plus the project it is valid for.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub token: String,
    pub project: String,
}

impl Credentials {
    pub fn new(token: impl Into<String>, project: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            project: project.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &"<redacted>")
            .field("project", &self.project)
            .finish()
    }
}

#[async_trait]
pub trait CredentialProvider: Send + Sync {
    /// Provider name used in logs and diagnostics.
    fn name(&self) -> &'static str;

    /// Fetch fresh credentials.
    async fn credentials(&self) -> RemoteResult<Credentials>;
}
