use std::io::IsTerminal;

use serde::{Deserialize, Serialize};

use crate::logger::object::{LoggerFormat, LoggerLevel};

/// Logger configuration.
///
/// Lives under the `logger` key of the settings file. Missing fields take
/// their defaults, so `{}` is a valid config.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Output format.
    pub format: LoggerFormat,
    /// Filter directive (e.g. `"warn"` or `"rbg_remote=debug,warn"`).
    pub level: LoggerLevel,
    /// Include module targets in log lines.
    pub with_targets: bool,
    /// Allow ANSI colors; only honored when stderr is a terminal.
    pub use_color: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            format: LoggerFormat::default(),
            level: LoggerLevel::default(),
            with_targets: false,
            use_color: true,
        }
    }
}

impl LoggerConfig {
    /// Determines whether colored output should be used.
    ///
    /// Color is enabled only if `use_color` is `true` and stderr is a
    /// terminal. Call it when installing the logger, not while parsing
    /// config, so redirection is detected for the running process.
    ///
    /// # Examples
    /// ```rust
    /// use rbg_observe::LoggerConfig;
    ///
    /// let config = LoggerConfig {
    ///     use_color: false,
    ///     ..Default::default()
    /// };
    /// assert!(!config.should_use_color());
    /// ```
    pub fn should_use_color(&self) -> bool {
        self.use_color && std::io::stderr().is_terminal()
    }
}
