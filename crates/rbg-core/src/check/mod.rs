//! Rebuild decisions.
//!
//! Both checks run their steps in order and stop at the first step that asks
//! for a rebuild. Remote calls are made lazily, so a short-circuit skips the
//! remaining requests.
mod everything;
mod toolchain;

use std::{fmt, sync::Arc};

use tracing::{info, instrument};

use rbg_model::{Mode, Verdict};

use crate::{
    clock::{Clock, SystemClock},
    error::CheckError,
    policy::CheckPolicy,
    source::{ImageInspector, ReportSource, SourceHistory},
};

/// Decision logic wired to its remote sources.
#[derive(Clone)]
pub struct RebuildCheck {
    images: Arc<dyn ImageInspector>,
    history: Arc<dyn SourceHistory>,
    report: Arc<dyn ReportSource>,
    clock: Arc<dyn Clock>,
    policy: CheckPolicy,
}

impl RebuildCheck {
    /// Create a check using the system clock and the default policy.
    pub fn new(
        images: Arc<dyn ImageInspector>,
        history: Arc<dyn SourceHistory>,
        report: Arc<dyn ReportSource>,
    ) -> Self {
        Self {
            images,
            history,
            report,
            clock: Arc::new(SystemClock),
            policy: CheckPolicy::default(),
        }
    }

    /// Replace the clock and return updated check.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Replace the policy and return updated check.
    pub fn with_policy(mut self, policy: CheckPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Run the check selected by `mode`.
    #[instrument(level = "debug", skip(self), fields(mode = %mode))]
    pub async fn run(&self, mode: Mode) -> Result<Verdict, CheckError> {
        let verdict = match mode {
            Mode::Toolchain => self.check_toolchain().await?,
            Mode::Everything => self.check_everything().await?,
        };

        match verdict {
            Verdict::Rebuild(reason) => info!(reason = reason.as_str(), "rebuild needed"),
            Verdict::UpToDate(_) => info!("no rebuild needed"),
        }
        Ok(verdict)
    }
}

impl fmt::Debug for RebuildCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RebuildCheck")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
