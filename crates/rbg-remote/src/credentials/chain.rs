use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::{
    CredentialProvider, Credentials, GcloudCredentials, MetadataCredentials, StaticCredentials,
};
use crate::{
    config::RemoteConfig,
    error::{RemoteError, RemoteResult},
};

/// Tries providers in order and returns the first credentials obtained.
#[derive(Default, Clone)]
pub struct CredentialChain {
    providers: Vec<Arc<dyn CredentialProvider>>,
}

impl CredentialChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a provider and return updated chain.
    pub fn with(mut self, provider: Arc<dyn CredentialProvider>) -> Self {
        self.providers.push(provider);
        self
    }

    /// Default discovery order: environment, `gcloud`, metadata server.
    ///
    /// The environment provider is only included when its variables are set.
    pub fn discover(client: reqwest::Client, cfg: &RemoteConfig) -> Self {
        let mut chain = Self::new();
        if let Some(env) = StaticCredentials::from_env() {
            chain = chain.with(Arc::new(env));
        }
        chain
            .with(Arc::new(GcloudCredentials::new()))
            .with(Arc::new(MetadataCredentials::new(
                client,
                cfg.metadata_url.clone(),
            )))
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

#[async_trait]
impl CredentialProvider for CredentialChain {
    fn name(&self) -> &'static str {
        "chain"
    }

    async fn credentials(&self) -> RemoteResult<Credentials> {
        let mut failures = Vec::with_capacity(self.providers.len());

        for provider in &self.providers {
            match provider.credentials().await {
                Ok(creds) => {
                    debug!(provider = provider.name(), project = %creds.project, "credentials resolved");
                    return Ok(creds);
                }
                Err(e) => {
                    debug!(provider = provider.name(), error = %e, "credential provider failed");
                    failures.push(format!("{}: {}", provider.name(), e));
                }
            }
        }

        if failures.is_empty() {
            return Err(RemoteError::Credentials(
                "no credential providers configured".to_string(),
            ));
        }
        Err(RemoteError::Credentials(failures.join("; ")))
    }
}
