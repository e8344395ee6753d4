use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::{CredentialProvider, Credentials, READ_ONLY_SCOPE};
use crate::error::RemoteResult;

const FLAVOR_HEADER: &str = "Metadata-Flavor";
const FLAVOR: &str = "Google";

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Service-account credentials of the VM the tool runs on.
pub struct MetadataCredentials {
    client: reqwest::Client,
    base_url: String,
}

impl MetadataCredentials {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    async fn token(&self) -> RemoteResult<String> {
        let url = format!(
            "{}/computeMetadata/v1/instance/service-accounts/default/token",
            self.base_url
        );
        let resp = self
            .client
            .get(&url)
            .query(&[("scopes", READ_ONLY_SCOPE)])
            .header(FLAVOR_HEADER, FLAVOR)
            .send()
            .await?
            .error_for_status()?;
        Ok(resp.json::<TokenResponse>().await?.access_token)
    }

    async fn project(&self) -> RemoteResult<String> {
        let url = format!("{}/computeMetadata/v1/project/project-id", self.base_url);
        let resp = self
            .client
            .get(&url)
            .header(FLAVOR_HEADER, FLAVOR)
            .send()
            .await?
            .error_for_status()?;
        Ok(resp.text().await?.trim().to_string())
    }
}

#[async_trait]
impl CredentialProvider for MetadataCredentials {
    fn name(&self) -> &'static str {
        "metadata"
    }

    async fn credentials(&self) -> RemoteResult<Credentials> {
        let token = self.token().await?;
        let project = self.project().await?;
        debug!(%project, "metadata server credentials refreshed");
        Ok(Credentials { token, project })
    }
}
