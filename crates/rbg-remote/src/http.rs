use std::time::Duration;

use crate::{config::RemoteConfig, error::RemoteResult};

/// Builds the shared HTTP client.
///
/// No retries are layered on top; a failed request fails the check.
pub fn build_client(cfg: &RemoteConfig) -> RemoteResult<reqwest::Client> {
    let mut builder = reqwest::Client::builder().user_agent(cfg.user_agent.clone());
    if let Some(secs) = cfg.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    Ok(builder.build()?)
}
