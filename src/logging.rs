// src/logging.rs

//! Logging setup for `procargs` using `tracing` + `tracing-subscriber`.
//!
//! The filter is chosen in this order:
//! 1. `--log-level` on the command line, applied to every target
//! 2. `PROCARGS_LOG`, parsed as `EnvFilter` directives, so
//!    `PROCARGS_LOG=warn,procargs::exec=debug` narrows logging per module
//! 3. `info`
//!
//! An unparsable `PROCARGS_LOG` is ignored in favour of the default.
//!
//! Logs go to STDERR. Command lines only ever reach the log through
//! `render_safe`, so secrets stay out of it.

use anyhow::Result;
use tracing_subscriber::{EnvFilter, fmt};

use crate::cli::LogLevel;

/// Environment variable holding filter directives.
pub const LOG_ENV_VAR: &str = "PROCARGS_LOG";

const DEFAULT_DIRECTIVE: &str = "info";

/// Initialise the global logging subscriber. Call once at startup.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let env_value = std::env::var(LOG_ENV_VAR).ok();
    let filter = select_filter(cli_level, env_value.as_deref());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("initialising logging: {e}"))?;

    Ok(())
}

/// Pick the filter from the CLI level and the value of [`LOG_ENV_VAR`].
pub fn select_filter(cli_level: Option<LogLevel>, env_value: Option<&str>) -> EnvFilter {
    if let Some(level) = cli_level {
        return EnvFilter::new(level.directive());
    }

    env_value
        .map(str::trim)
        .filter(|directives| !directives.is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}

impl LogLevel {
    fn directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}
