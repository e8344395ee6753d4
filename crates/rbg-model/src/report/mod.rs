//! Parser for the footer of the regression test report.
//!
//! Only the trailing bytes of the report are fetched, so the input may start
//! mid-line; the parser looks for the two footer lines anywhere in it.
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::BuildDate;
use crate::error::{ModelError, ModelResult};

static RUNTIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Regtest took (.*) seconds.").expect("static regex"));

static END_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"EndDate: (.*)").expect("static regex"));

/// Fields extracted from the report tail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportTail {
    /// Wall time of the last regression run, in seconds.
    pub runtime_sec: f64,
    /// When the last regression run finished.
    pub report_date: BuildDate,
}

impl ReportTail {
    /// Extracts runtime and end date from raw tail text.
    ///
    /// If a footer line occurs more than once, the first occurrence is used.
    ///
    /// # Examples
    /// ```
    /// use rbg_model::ReportTail;
    ///
    /// let tail = "...\nRegtest took 1234.5 seconds.\nEndDate: 2020-01-02 03:04:05+00:00\n";
    /// let parsed = ReportTail::parse(tail).unwrap();
    /// assert_eq!(parsed.runtime_sec, 1234.5);
    /// ```
    pub fn parse(tail: &str) -> ModelResult<Self> {
        let runtime = RUNTIME
            .captures(tail)
            .and_then(|c| c.get(1))
            .ok_or(ModelError::MissingReportField("Regtest took"))?
            .as_str();
        let runtime_sec = runtime
            .trim()
            .parse::<f64>()
            .map_err(|_| ModelError::InvalidRuntime(runtime.to_string()))?;

        let end = END_DATE
            .captures(tail)
            .and_then(|c| c.get(1))
            .ok_or(ModelError::MissingReportField("EndDate"))?
            .as_str();
        // CRLF reports leave a trailing '\r' in the capture.
        let report_date = BuildDate::parse(end.trim_end())?;

        Ok(Self {
            runtime_sec,
            report_date,
        })
    }
}
