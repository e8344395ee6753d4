use std::{fmt, ops::Sub, str::FromStr};

use time::{Duration, OffsetDateTime, PrimitiveDateTime, macros::format_description};

use crate::error::{ModelError, ModelResult};

/// Build timestamp as recorded in image labels and report footers.
///
/// The wire form is always `YYYY-MM-DD HH:MM:SS+00:00`; the offset is a literal,
/// so every value is a UTC instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BuildDate(OffsetDateTime);

impl BuildDate {
    /// Parses the fixed label format.
    ///
    /// # Examples
    /// ```
    /// use rbg_model::BuildDate;
    ///
    /// let date = BuildDate::parse("2020-01-01 00:00:00+00:00").unwrap();
    /// assert_eq!(date.to_string(), "2020-01-01 00:00:00+00:00");
    /// ```
    pub fn parse(s: &str) -> ModelResult<Self> {
        PrimitiveDateTime::parse(
            s,
            format_description!("[year]-[month]-[day] [hour]:[minute]:[second]+00:00"),
        )
        .map(|dt| Self(dt.assume_utc()))
        .map_err(|e| ModelError::InvalidDate {
            value: s.to_string(),
            reason: e.to_string(),
        })
    }

    /// Current wall-clock time in UTC.
    pub fn now() -> Self {
        Self(OffsetDateTime::now_utc())
    }
}

impl fmt::Display for BuildDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self
            .0
            .format(format_description!(
                "[year]-[month]-[day] [hour]:[minute]:[second]+00:00"
            ))
            .map_err(|_| fmt::Error)?;
        f.write_str(&s)
    }
}

impl FromStr for BuildDate {
    type Err = ModelError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Sub for BuildDate {
    type Output = Duration;

    fn sub(self, rhs: Self) -> Duration {
        self.0 - rhs.0
    }
}
