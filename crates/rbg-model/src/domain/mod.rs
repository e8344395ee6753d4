mod labels;
pub use labels::ImageLabels;

mod build_date;
pub use build_date::BuildDate;

mod constants;
pub use constants::{LABEL_BUILD_DATE, LABEL_VCS_REF};
