use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::logger::LoggerError;

/// Validated `tracing_subscriber::EnvFilter` directive string.
///
/// Holds the raw text as given in config or `RBG_LOG`
/// (e.g. `"info"` or `"rbg_remote=debug,warn"`). The text is checked with
/// `EnvFilter::try_new` on construction and turned into a filter on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LoggerLevel(String);

impl LoggerLevel {
    /// Creates a level from a string-like value.
    ///
    /// Shorthand for [`TryFrom<String>`].
    ///
    /// # Examples
    /// ```
    /// use rbg_observe::LoggerLevel;
    ///
    /// let lvl = LoggerLevel::new("info").unwrap();
    /// assert_eq!(lvl.as_str(), "info");
    ///
    /// assert!(LoggerLevel::new("rbg_core=loud").is_err());
    /// ```
    pub fn new(s: impl Into<String>) -> Result<Self, LoggerError> {
        Self::try_from(s.into())
    }

    /// Returns the directive exactly as it was provided.
    ///
    /// # Examples
    /// ```
    /// use rbg_observe::LoggerLevel;
    ///
    /// let lvl = "rbg_remote=debug,warn".parse::<LoggerLevel>().unwrap();
    /// assert_eq!(lvl.as_str(), "rbg_remote=debug,warn");
    /// ```
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Builds the filter. The directive was checked on construction.
    ///
    /// # Examples
    /// ```
    /// use rbg_observe::LoggerLevel;
    ///
    /// let lvl = "rbg_core=debug,info".parse::<LoggerLevel>().unwrap();
    /// let _ = lvl.to_env_filter();
    /// ```
    pub fn to_env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.0).unwrap_or_else(|_| EnvFilter::new("warn"))
    }
}

impl Default for LoggerLevel {
    /// Quiet by default: CI reads the verdict, not the trace.
    fn default() -> Self {
        Self("warn".to_string())
    }
}

impl FromStr for LoggerLevel {
    type Err = LoggerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_owned())
    }
}

impl TryFrom<String> for LoggerLevel {
    type Error = LoggerError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        match EnvFilter::try_new(&s) {
            Ok(_) => Ok(Self(s)),
            Err(e) => Err(LoggerError::InvalidLevel(format!("{s}: {e}"))),
        }
    }
}

impl From<LoggerLevel> for String {
    fn from(l: LoggerLevel) -> Self {
        l.0
    }
}
