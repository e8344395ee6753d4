//! Label lookup through the Docker registry v2 API.
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde::{Deserialize, de::DeserializeOwned};
use tracing::{debug, instrument};

use rbg_core::{CheckError, ImageInspector};
use rbg_model::ImageLabels;

use crate::{
    credentials::{CredentialProvider, Credentials},
    error::{RemoteError, RemoteResult},
};

/// Media type of schema 2 image manifests.
pub const MANIFEST_V2: &str = "application/vnd.docker.distribution.manifest.v2+json";

#[derive(Deserialize)]
struct Manifest {
    config: Descriptor,
}

#[derive(Deserialize)]
struct Descriptor {
    digest: String,
}

#[derive(Deserialize)]
struct ConfigBlob {
    config: ContainerConfig,
}

#[derive(Deserialize)]
struct ContainerConfig {
    #[serde(rename = "Labels", default)]
    labels: Option<ImageLabels>,
}

/// Reads image labels without pulling the image.
///
/// Resolves the `latest` manifest, then fetches the config blob it points at.
pub struct RegistryClient {
    client: reqwest::Client,
    base_url: String,
    credentials: Arc<dyn CredentialProvider>,
}

impl RegistryClient {
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        credentials: Arc<dyn CredentialProvider>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            credentials,
        }
    }

    /// Labels of `image:latest`.
    ///
    /// Credentials are refreshed on every call.
    #[instrument(level = "debug", skip(self))]
    pub async fn labels(&self, image: &str) -> RemoteResult<ImageLabels> {
        let creds = self.credentials.credentials().await?;
        let repo = format!("{}/v2/{}/{}", self.base_url, creds.project, image);

        let manifest: Manifest = self
            .get_json(&format!("{repo}/manifests/latest"), &creds)
            .await?;
        debug!(digest = %manifest.config.digest, "resolved config digest");

        let blob: ConfigBlob = self
            .get_json(&format!("{repo}/blobs/{}", manifest.config.digest), &creds)
            .await?;

        blob.config.labels.ok_or(RemoteError::MissingField {
            context: "image config blob",
            field: "config.Labels",
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        creds: &Credentials,
    ) -> RemoteResult<T> {
        let resp = self
            .client
            .get(url)
            .header(ACCEPT, MANIFEST_V2)
            .basic_auth("_token", Some(&creds.token))
            .send()
            .await?
            .error_for_status()?;
        Ok(resp.json::<T>().await?)
    }
}

#[async_trait]
impl ImageInspector for RegistryClient {
    async fn image_labels(&self, image: &str) -> Result<ImageLabels, CheckError> {
        self.labels(image)
            .await
            .map_err(|e| CheckError::Registry(format!("{image}: {e}")))
    }
}
