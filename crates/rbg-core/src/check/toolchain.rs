use tracing::debug;

use rbg_model::{Reason, Subject, Verdict};

use super::RebuildCheck;
use crate::error::CheckError;

impl RebuildCheck {
    /// Decide whether the toolchain image needs a rebuild.
    ///
    /// Steps, first match wins:
    /// 1. toolchain sources changed since the image's revision;
    /// 2. image age in whole days exceeds `max_toolchain_age_days`;
    /// 3. otherwise up to date.
    pub async fn check_toolchain(&self) -> Result<Verdict, CheckError> {
        let policy = &self.policy;

        let labels = self.images.image_labels(&policy.toolchain_image).await?;
        let sha = labels.vcs_ref()?;

        let diff = self.history.compare_to_head(sha).await?;
        if let Some(file) = diff.first_under(&policy.toolchain_prefix) {
            debug!(%sha, file = %file.filename, "toolchain sources changed");
            return Ok(Verdict::Rebuild(Reason::ToolchainSourcesChanged));
        }

        let built = labels.build_date()?;
        let age = self.clock.now() - built;
        debug!(%built, age_days = age.whole_days(), "toolchain image age");

        if age.whole_days() > policy.max_toolchain_age_days {
            return Ok(Verdict::Rebuild(Reason::ToolchainTooOld {
                max_age_days: policy.max_toolchain_age_days,
            }));
        }

        Ok(Verdict::UpToDate(Subject::Toolchain))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rbg_model::{LABEL_BUILD_DATE, Reason, Subject, Verdict};

    use crate::{
        check::RebuildCheck,
        error::CheckError,
        testing::{FakeHistory, FakeRegistry, FakeReport, at, labels},
    };

    fn toolchain_check(built: &str, changed: &[&str], now: &str) -> (RebuildCheck, Arc<FakeHistory>) {
        let registry = FakeRegistry::new().with("img_cp2k-toolchain", labels("abc123", built));
        let history = Arc::new(FakeHistory::new(changed));
        let check = RebuildCheck::new(
            Arc::new(registry),
            history.clone(),
            Arc::new(FakeReport::failing()),
        )
        .with_clock(at(now));
        (check, history)
    }

    #[tokio::test]
    async fn changed_toolchain_sources_trigger_rebuild() {
        let (check, history) = toolchain_check(
            "2020-01-01 00:00:00+00:00",
            &["tools/toolchain/install.sh"],
            "2020-01-05 00:00:00+00:00",
        );

        let verdict = check.check_toolchain().await.unwrap();

        assert_eq!(verdict, Verdict::Rebuild(Reason::ToolchainSourcesChanged));
        assert_eq!(verdict.to_string(), "Toolchain source files changed.");
        assert_eq!(verdict.exit_code(), 0);
        assert_eq!(history.bases(), vec!["abc123".to_string()]);
    }

    #[tokio::test]
    async fn changed_sources_win_regardless_of_age() {
        let (check, _) = toolchain_check(
            "2020-01-01 00:00:00+00:00",
            &["src/motion.F", "tools/toolchain/scripts/stage0/install_gcc.sh"],
            "2021-01-01 00:00:00+00:00",
        );

        assert_eq!(
            check.check_toolchain().await.unwrap(),
            Verdict::Rebuild(Reason::ToolchainSourcesChanged)
        );
    }

    #[tokio::test]
    async fn young_unchanged_image_is_ok() {
        let (check, _) = toolchain_check("2020-01-01 00:00:00+00:00", &[], "2020-01-05 00:00:00+00:00");

        let verdict = check.check_toolchain().await.unwrap();

        assert_eq!(verdict, Verdict::UpToDate(Subject::Toolchain));
        assert_eq!(verdict.to_string(), "Toolchain image is ok.");
        assert_eq!(verdict.exit_code(), 1);
    }

    #[tokio::test]
    async fn unrelated_changes_do_not_count() {
        let (check, _) = toolchain_check(
            "2020-01-01 00:00:00+00:00",
            &["src/motion.F", "tools/docker/Dockerfile.test_sdbg"],
            "2020-01-05 00:00:00+00:00",
        );

        assert_eq!(
            check.check_toolchain().await.unwrap(),
            Verdict::UpToDate(Subject::Toolchain)
        );
    }

    #[tokio::test]
    async fn image_older_than_twenty_days_is_rebuilt() {
        let (check, _) = toolchain_check("2020-01-01 00:00:00+00:00", &[], "2020-01-22 00:00:00+00:00");

        let verdict = check.check_toolchain().await.unwrap();

        assert_eq!(
            verdict,
            Verdict::Rebuild(Reason::ToolchainTooOld { max_age_days: 20 })
        );
        assert_eq!(verdict.to_string(), "Toolchain image is older than 20 days.");
    }

    #[tokio::test]
    async fn age_counts_whole_days_only() {
        // 20 days and 23 hours is still 20 whole days.
        let (check, _) = toolchain_check("2020-01-01 00:00:00+00:00", &[], "2020-01-21 23:00:00+00:00");
        assert_eq!(
            check.check_toolchain().await.unwrap(),
            Verdict::UpToDate(Subject::Toolchain)
        );

        let (check, _) = toolchain_check("2020-01-01 00:00:00+00:00", &[], "2020-01-21 00:00:00+00:00");
        assert_eq!(
            check.check_toolchain().await.unwrap(),
            Verdict::UpToDate(Subject::Toolchain)
        );
    }

    #[tokio::test]
    async fn missing_revision_label_fails() {
        let mut l = labels("abc123", "2020-01-01 00:00:00+00:00");
        l.0.remove("org.label-schema.vcs-ref");
        let check = RebuildCheck::new(
            Arc::new(FakeRegistry::new().with("img_cp2k-toolchain", l)),
            Arc::new(FakeHistory::new(&[])),
            Arc::new(FakeReport::failing()),
        );

        assert!(matches!(
            check.check_toolchain().await,
            Err(CheckError::Model(_))
        ));
    }

    #[tokio::test]
    async fn malformed_date_only_matters_when_sources_are_unchanged() {
        let mut l = labels("abc123", "2020-01-01 00:00:00+00:00");
        l.insert(LABEL_BUILD_DATE, "yesterday");
        let registry = Arc::new(FakeRegistry::new().with("img_cp2k-toolchain", l));

        let changed = RebuildCheck::new(
            registry.clone(),
            Arc::new(FakeHistory::new(&["tools/toolchain/x"])),
            Arc::new(FakeReport::failing()),
        );
        assert!(changed.check_toolchain().await.unwrap().is_rebuild());

        let unchanged = RebuildCheck::new(
            registry,
            Arc::new(FakeHistory::new(&[])),
            Arc::new(FakeReport::failing()),
        );
        assert!(unchanged.check_toolchain().await.is_err());
    }

    #[tokio::test]
    async fn registry_failure_propagates() {
        let check = RebuildCheck::new(
            Arc::new(FakeRegistry::new()),
            Arc::new(FakeHistory::new(&[])),
            Arc::new(FakeReport::failing()),
        );

        assert!(matches!(
            check.check_toolchain().await,
            Err(CheckError::Registry(_))
        ));
    }
}
