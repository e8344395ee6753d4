use async_trait::async_trait;
use reqwest::header::{CONTENT_LENGTH, RANGE};
use tracing::{debug, instrument};

use rbg_core::{CheckError, ReportSource};

use crate::error::{RemoteError, RemoteResult};

/// Fetches the tail of an append-only text report over HTTP.
///
/// Uses a `HEAD` request for the size, then a ranged `GET` for the last
/// `tail_bytes` bytes.
pub struct ReportFetcher {
    client: reqwest::Client,
    url: String,
    tail_bytes: u64,
}

impl ReportFetcher {
    pub fn new(client: reqwest::Client, url: impl Into<String>, tail_bytes: u64) -> Self {
        Self {
            client,
            url: url.into(),
            tail_bytes,
        }
    }

    /// Total size of the report in bytes.
    pub async fn content_length(&self) -> RemoteResult<u64> {
        let resp = self
            .client
            .head(&self.url)
            .send()
            .await?
            .error_for_status()?;

        let raw = resp
            .headers()
            .get(CONTENT_LENGTH)
            .ok_or_else(|| RemoteError::MissingHeader {
                header: "Content-Length",
                url: self.url.clone(),
            })?;

        raw.to_str()
            .ok()
            .and_then(|s| s.trim().parse::<u64>().ok())
            .ok_or_else(|| RemoteError::InvalidHeader {
                header: "Content-Length",
                value: String::from_utf8_lossy(raw.as_bytes()).into_owned(),
            })
    }

    /// Last `tail_bytes` bytes of the report, or all of it when shorter.
    #[instrument(level = "debug", skip(self), fields(url = %self.url))]
    pub async fn tail(&self) -> RemoteResult<String> {
        let length = self.content_length().await?;
        let start = length.saturating_sub(self.tail_bytes);
        debug!(length, start, "fetching report tail");

        let resp = self
            .client
            .get(&self.url)
            .header(RANGE, format!("bytes={start}-"))
            .send()
            .await?
            .error_for_status()?;
        Ok(resp.text().await?)
    }
}

#[async_trait]
impl ReportSource for ReportFetcher {
    async fn report_tail(&self) -> Result<String, CheckError> {
        self.tail()
            .await
            .map_err(|e| CheckError::Report(e.to_string()))
    }
}
