pub mod check;
pub mod clock;
pub mod error;
pub mod policy;
pub mod source;

#[cfg(test)]
mod testing;

pub use check::RebuildCheck;
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::CheckError;
pub use policy::CheckPolicy;
pub use source::{ImageInspector, ReportSource, SourceHistory};

pub mod prelude {
    pub use crate::check::RebuildCheck;
    pub use crate::error::CheckError;
    pub use crate::policy::CheckPolicy;
    pub use crate::source::{ImageInspector, ReportSource, SourceHistory};
}
