use async_trait::async_trait;

use super::{CredentialProvider, Credentials};
use crate::error::RemoteResult;

/// Environment variable holding a ready-made registry token.
pub const ENV_TOKEN: &str = "RBG_REGISTRY_TOKEN";
/// Environment variable naming the registry project.
pub const ENV_PROJECT: &str = "RBG_PROJECT";
/// Fallback project variable set by Google Cloud tooling.
pub const ENV_GOOGLE_PROJECT: &str = "GOOGLE_CLOUD_PROJECT";

/// Credentials handed in explicitly, e.g. by a CI secret.
#[derive(Debug, Clone)]
pub struct StaticCredentials(Credentials);

impl StaticCredentials {
    pub fn new(token: impl Into<String>, project: impl Into<String>) -> Self {
        Self(Credentials::new(token, project))
    }

    /// Reads token and project through `lookup`.
    ///
    /// Returns `None` unless both a non-empty token and a project are present.
    pub fn from_lookup<F>(lookup: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let token = non_empty(ENV_TOKEN)?;
        let project = non_empty(ENV_PROJECT).or_else(|| non_empty(ENV_GOOGLE_PROJECT))?;
        Some(Self::new(token.trim(), project.trim()))
    }

    /// Reads token and project from the process environment.
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

#[async_trait]
impl CredentialProvider for StaticCredentials {
    fn name(&self) -> &'static str {
        "env"
    }

    async fn credentials(&self) -> RemoteResult<Credentials> {
        Ok(self.0.clone())
    }
}
