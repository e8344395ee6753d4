use async_trait::async_trait;
use reqwest::header::ACCEPT;
use tracing::{debug, instrument};

use rbg_core::{CheckError, SourceHistory};
use rbg_model::Comparison;

use crate::error::RemoteResult;

/// Client for the "compare two commits" endpoint of the source hosting API.
pub struct GithubCompare {
    client: reqwest::Client,
    api_url: String,
    repository: String,
    token: Option<String>,
}

impl GithubCompare {
    pub fn new(
        client: reqwest::Client,
        api_url: impl Into<String>,
        repository: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            repository: repository.into(),
            token: None,
        }
    }

    /// Authenticate requests with a bearer token (raises the rate limit).
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    /// Files changed between `base` and `head`.
    #[instrument(level = "debug", skip(self), fields(repo = %self.repository))]
    pub async fn compare(&self, base: &str, head: &str) -> RemoteResult<Comparison> {
        let url = format!(
            "{}/repos/{}/compare/{}...{}",
            self.api_url, self.repository, base, head
        );

        let mut req = self
            .client
            .get(&url)
            .header(ACCEPT, "application/vnd.github+json");
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }

        let cmp = req
            .send()
            .await?
            .error_for_status()?
            .json::<Comparison>()
            .await?;
        debug!(files = cmp.files.len(), "comparison fetched");
        Ok(cmp)
    }
}

#[async_trait]
impl SourceHistory for GithubCompare {
    async fn compare_to_head(&self, base: &str) -> Result<Comparison, CheckError> {
        self.compare(base, "HEAD")
            .await
            .map_err(|e| CheckError::History(format!("{base}...HEAD: {e}")))
    }
}
