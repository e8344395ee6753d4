use serde::{Deserialize, Serialize};

/// Endpoints and client settings for all remote sources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// Container registry base URL (Docker registry v2 API).
    pub registry_url: String,
    /// Source hosting API base URL.
    pub github_api: String,
    /// `owner/name` of the upstream repository.
    pub repository: String,
    /// Plain-text regression report of the sdbg image.
    pub report_url: String,
    /// Compute metadata server, used for ambient credentials.
    pub metadata_url: String,
    /// How many trailing bytes of the report to fetch.
    pub tail_bytes: u64,
    /// Overall per-request timeout; client default when unset.
    pub timeout_secs: Option<u64>,
    /// `User-Agent` sent with every request.
    pub user_agent: String,
    /// Optional token for the source hosting API. Never serialized.
    #[serde(skip_serializing)]
    pub github_token: Option<String>,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            registry_url: "https://gcr.io".to_string(),
            github_api: "https://api.github.com".to_string(),
            repository: "cp2k/cp2k".to_string(),
            report_url: "https://storage.googleapis.com/cp2k-ci/dashboard_sdbg_report.txt"
                .to_string(),
            metadata_url: "http://metadata.google.internal".to_string(),
            tail_bytes: 500,
            timeout_secs: None,
            user_agent: concat!("rbg/", env!("CARGO_PKG_VERSION")).to_string(),
            github_token: None,
        }
    }
}
