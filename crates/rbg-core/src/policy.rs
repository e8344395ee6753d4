use serde::{Deserialize, Serialize};
use time::Duration;

/// Image names, source prefixes and thresholds used by the checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckPolicy {
    /// Registry repository of the toolchain image.
    pub toolchain_image: String,
    /// Registry repository of the serial-debug image.
    pub sdbg_image: String,
    /// Path prefix of toolchain sources; no trailing slash, so sibling paths match too.
    pub toolchain_prefix: String,
    /// Path prefix of image build sources.
    pub docker_prefix: String,
    /// Toolchain image is rebuilt once its age in whole days exceeds this.
    pub max_toolchain_age_days: i64,
    /// A report finishing later than this after the sdbg build ran on that build.
    pub fresh_image_grace_hours: i64,
    /// Regression runs slower than this trigger a rebuild.
    pub max_regtest_runtime_sec: f64,
}

impl Default for CheckPolicy {
    fn default() -> Self {
        Self {
            toolchain_image: "img_cp2k-toolchain".to_string(),
            sdbg_image: "img_cp2k-sdbg".to_string(),
            toolchain_prefix: "tools/toolchain".to_string(),
            docker_prefix: "tools/docker/".to_string(),
            max_toolchain_age_days: 20,
            fresh_image_grace_hours: 4,
            max_regtest_runtime_sec: 15.0 * 60.0,
        }
    }
}

impl CheckPolicy {
    pub fn fresh_image_grace(&self) -> Duration {
        Duration::hours(self.fresh_image_grace_hours)
    }
}
