use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::trace;

use super::{CredentialProvider, Credentials};
use crate::error::{RemoteError, RemoteResult};

/// Credentials of the active `gcloud` account.
///
/// Runs `gcloud auth print-access-token` and `gcloud config get-value project`.
#[derive(Debug, Clone)]
pub struct GcloudCredentials {
    program: String,
}

impl GcloudCredentials {
    pub fn new() -> Self {
        Self::with_program("gcloud")
    }

    /// Use a different executable, e.g. an absolute path to the SDK.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Runs the tool and returns its trimmed stdout.
    async fn run(&self, args: &[&str]) -> RemoteResult<String> {
        trace!(program = %self.program, ?args, "running credential helper");

        let out = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .await?;

        if !out.status.success() {
            return Err(RemoteError::Credentials(format!(
                "{} {} exited with {}: {}",
                self.program,
                args.join(" "),
                out.status,
                String::from_utf8_lossy(&out.stderr).trim()
            )));
        }

        let value = String::from_utf8_lossy(&out.stdout).trim().to_string();
        if value.is_empty() {
            return Err(RemoteError::Credentials(format!(
                "{} {} printed nothing",
                self.program,
                args.join(" ")
            )));
        }
        Ok(value)
    }
}

impl Default for GcloudCredentials {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialProvider for GcloudCredentials {
    fn name(&self) -> &'static str {
        "gcloud"
    }

    async fn credentials(&self) -> RemoteResult<Credentials> {
        let token = self.run(&["auth", "print-access-token"]).await?;
        let project = self.run(&["config", "get-value", "project"]).await?;
        Ok(Credentials { token, project })
    }
}
