//! HTTP and subprocess backed implementations of the `rbg-core` sources.
mod error;
pub use error::{RemoteError, RemoteResult};

mod config;
pub use config::RemoteConfig;

mod http;
pub use http::build_client;

pub mod credentials;
pub use credentials::{CredentialChain, CredentialProvider, Credentials};

mod registry;
pub use registry::{MANIFEST_V2, RegistryClient};

mod github;
pub use github::GithubCompare;

mod report;
pub use report::ReportFetcher;

#[cfg(test)]
mod testing;
