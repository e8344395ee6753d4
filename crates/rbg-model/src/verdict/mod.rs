//! Outcome of a rebuild check and its process exit code.
//!
//! The exit codes are consumed by CI shell steps and are inverted relative to
//! the usual convention: `0` means "rebuild", `1` means "nothing to do".
use std::fmt;

/// Exit code: a rebuild is needed.
pub const EXIT_REBUILD: u8 = 0;
/// Exit code: images are current, no rebuild needed.
pub const EXIT_UP_TO_DATE: u8 = 1;
/// Exit code: bad command-line usage.
pub const EXIT_USAGE: u8 = 255;

/// Why a rebuild was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    /// Files under the toolchain sources changed since the toolchain image was built.
    ToolchainSourcesChanged,
    /// The toolchain image is older than the allowed number of whole days.
    ToolchainTooOld { max_age_days: i64 },
    /// The toolchain image is newer than the sdbg image built on top of it.
    ToolchainImageChanged,
    /// Files under the docker build sources changed since the sdbg image was built.
    SourcesChanged,
    /// The last regression run on a current image exceeded the runtime limit.
    RegtestTooSlow,
}

impl Reason {
    /// Short machine-friendly tag used in structured logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Reason::ToolchainSourcesChanged => "toolchain-sources-changed",
            Reason::ToolchainTooOld { .. } => "toolchain-too-old",
            Reason::ToolchainImageChanged => "toolchain-image-changed",
            Reason::SourcesChanged => "sources-changed",
            Reason::RegtestTooSlow => "regtest-too-slow",
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::ToolchainSourcesChanged => f.write_str("Toolchain source files changed."),
            Reason::ToolchainTooOld { max_age_days } => {
                write!(f, "Toolchain image is older than {} days.", max_age_days)
            }
            Reason::ToolchainImageChanged => {
                f.write_str("Toolchain image has changed - rebuild everything.")
            }
            Reason::SourcesChanged => {
                f.write_str("Source files have changed - rebuild everything.")
            }
            Reason::RegtestTooSlow => {
                f.write_str("Latest sdbg test run took too long - rebuild everything.")
            }
        }
    }
}

/// What a check that found nothing to do was looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    Toolchain,
    Images,
}

/// Final decision of a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Rebuild(Reason),
    UpToDate(Subject),
}

impl Verdict {
    pub fn is_rebuild(&self) -> bool {
        matches!(self, Verdict::Rebuild(_))
    }

    /// Process exit code CI branches on.
    pub fn exit_code(&self) -> u8 {
        match self {
            Verdict::Rebuild(_) => EXIT_REBUILD,
            Verdict::UpToDate(_) => EXIT_UP_TO_DATE,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Rebuild(reason) => fmt::Display::fmt(reason, f),
            Verdict::UpToDate(Subject::Toolchain) => f.write_str("Toolchain image is ok."),
            Verdict::UpToDate(Subject::Images) => f.write_str("Images are ok."),
        }
    }
}
