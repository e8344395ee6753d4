//! Label keys written by the image build.
//!
//! Both keys follow the label-schema convention and must match the producer side exactly.

/// Label key holding the source revision the image was built from.
pub const LABEL_VCS_REF: &str = "org.label-schema.vcs-ref";

/// Label key holding the build timestamp, formatted `YYYY-MM-DD HH:MM:SS+00:00`.
pub const LABEL_BUILD_DATE: &str = "org.label-schema.build-date";
