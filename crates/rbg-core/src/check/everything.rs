use tracing::debug;

use rbg_model::{Reason, ReportTail, Subject, Verdict};

use super::RebuildCheck;
use crate::error::CheckError;

impl RebuildCheck {
    /// Decide whether all images need a rebuild.
    ///
    /// Steps, first match wins:
    /// 1. the toolchain image was built after the sdbg image;
    /// 2. docker build sources changed since the sdbg image's revision;
    /// 3. the last regression run used the current sdbg image and was too slow;
    /// 4. otherwise up to date.
    pub async fn check_everything(&self) -> Result<Verdict, CheckError> {
        let policy = &self.policy;

        let sdbg = self.images.image_labels(&policy.sdbg_image).await?;
        let sdbg_built = sdbg.build_date()?;

        let toolchain = self.images.image_labels(&policy.toolchain_image).await?;
        let toolchain_built = toolchain.build_date()?;

        if sdbg_built < toolchain_built {
            debug!(%sdbg_built, %toolchain_built, "toolchain image is newer than sdbg image");
            return Ok(Verdict::Rebuild(Reason::ToolchainImageChanged));
        }

        let sha = sdbg.vcs_ref()?;
        let diff = self.history.compare_to_head(sha).await?;
        if let Some(file) = diff.first_under(&policy.docker_prefix) {
            debug!(%sha, file = %file.filename, "image build sources changed");
            return Ok(Verdict::Rebuild(Reason::SourcesChanged));
        }

        let tail = self.report.report_tail().await?;
        let report = ReportTail::parse(&tail)?;
        let used_latest_image = report.report_date - sdbg_built > policy.fresh_image_grace();
        debug!(
            runtime_sec = report.runtime_sec,
            report_date = %report.report_date,
            used_latest_image,
            "last sdbg regression run"
        );

        if used_latest_image && report.runtime_sec > policy.max_regtest_runtime_sec {
            return Ok(Verdict::Rebuild(Reason::RegtestTooSlow));
        }

        Ok(Verdict::UpToDate(Subject::Images))
    }
}
