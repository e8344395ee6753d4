mod domain;
pub use domain::{BuildDate, ImageLabels};
pub use domain::{LABEL_BUILD_DATE, LABEL_VCS_REF};

mod error;
pub use error::{ModelError, ModelResult};

mod diff;
pub use diff::{ChangedFile, Comparison};

mod report;
pub use report::ReportTail;

mod verdict;
pub use verdict::{EXIT_REBUILD, EXIT_UP_TO_DATE, EXIT_USAGE};
pub use verdict::{Reason, Subject, Verdict};

mod mode;
pub use mode::Mode;
