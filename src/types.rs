use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Modes of operation for standard process argument rendering.
///
/// - `Auto`: render as-is unless the argument is empty or contains a space or
///   a quote, in which case it is quoted and escaped (default behaviour).
/// - `Always`: always quote and escape.
/// - `NeverAndThrow`: never quote; fail with
///   [`ProcArgsError::InvalidUnquotedArgument`](crate::errors::ProcArgsError)
///   when the argument cannot be passed through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessArgumentQuoting {
    #[default]
    Auto,
    Always,
    #[serde(rename = "never", alias = "never_and_throw")]
    NeverAndThrow,
}

impl FromStr for ProcessArgumentQuoting {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(ProcessArgumentQuoting::Auto),
            "always" => Ok(ProcessArgumentQuoting::Always),
            "never" | "never_and_throw" | "neverandthrow" => {
                Ok(ProcessArgumentQuoting::NeverAndThrow)
            }
            other => Err(format!(
                "invalid quoting mode: {other} (expected \"auto\", \"always\" or \"never\")"
            )),
        }
    }
}

impl fmt::Display for ProcessArgumentQuoting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProcessArgumentQuoting::Auto => "auto",
            ProcessArgumentQuoting::Always => "always",
            ProcessArgumentQuoting::NeverAndThrow => "never",
        };
        f.write_str(s)
    }
}
