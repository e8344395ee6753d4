//! `should-rebuild [toolchain]`
//!
//! Prints one line explaining the decision and exits with
//! 0 = rebuild needed, 1 = no rebuild needed, 255 = bad usage.
//! A failed check also exits 1, with the error on stderr.
mod settings;

use std::{process::ExitCode, sync::Arc};

use tracing::debug;

use rbg_core::RebuildCheck;
use rbg_model::{EXIT_USAGE, Mode};
use rbg_observe::init_logger;
use rbg_remote::{CredentialChain, GithubCompare, RegistryClient, ReportFetcher, build_client};

use settings::Settings;

const USAGE: &str = "should-rebuild [toolchain]";

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    // 1) mode
    let Ok(mode) = Mode::from_args(std::env::args_os().skip(1)) else {
        println!("{USAGE}");
        return Ok(ExitCode::from(EXIT_USAGE));
    };

    // 2) settings + logger
    let settings = Settings::load()?;
    init_logger(&settings.logger)?;
    debug!(%mode, repo = %settings.remote.repository, "starting rebuild check");

    // 3) sources
    let check = build_check(&settings)?;

    // 4) decide
    let verdict = check.run(mode).await?;
    println!("{verdict}");
    Ok(ExitCode::from(verdict.exit_code()))
}

fn build_check(settings: &Settings) -> anyhow::Result<RebuildCheck> {
    let remote = &settings.remote;
    let client = build_client(remote)?;

    let credentials = Arc::new(CredentialChain::discover(client.clone(), remote));
    let registry = RegistryClient::new(client.clone(), &remote.registry_url, credentials);
    let history = GithubCompare::new(client.clone(), &remote.github_api, &remote.repository)
        .with_token(remote.github_token.clone());
    let report = ReportFetcher::new(client, &remote.report_url, remote.tail_bytes);

    Ok(
        RebuildCheck::new(Arc::new(registry), Arc::new(history), Arc::new(report))
            .with_policy(settings.policy.clone()),
    )
}
