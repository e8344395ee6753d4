//! Seams between the decision logic and the outside world.
//!
//! Each trait covers one remote dependency of a check. Production
//! implementations live in `rbg-remote`; tests plug in fakes.
use async_trait::async_trait;

use rbg_model::{Comparison, ImageLabels};

use crate::error::CheckError;

/// Reads build labels of the latest image in a registry repository.
#[async_trait]
pub trait ImageInspector: Send + Sync {
    /// Labels of the image tagged `latest` under `image`.
    async fn image_labels(&self, image: &str) -> Result<ImageLabels, CheckError>;
}

/// Lists files changed upstream since a given revision.
#[async_trait]
pub trait SourceHistory: Send + Sync {
    /// Files changed between `base` and the current head.
    async fn compare_to_head(&self, base: &str) -> Result<Comparison, CheckError>;
}

/// Supplies the trailing text of the regression test report.
#[async_trait]
pub trait ReportSource: Send + Sync {
    async fn report_tail(&self) -> Result<String, CheckError>;
}
