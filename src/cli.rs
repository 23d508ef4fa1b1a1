// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::default_config_path;
use crate::types::ProcessArgumentQuoting;

/// Command-line arguments for `procargs`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "procargs",
    version,
    about = "Run command-line tools from declarative argument lists with secret-safe logging.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    #[arg(long, value_name = "PATH", default_value_os_t = default_config_path())]
    pub config: PathBuf,

    /// Run only this tool. May be given several times; tools run in the
    /// order given. Default: every tool, in name order.
    #[arg(long = "tool", value_name = "NAME")]
    pub tools: Vec<String>,

    /// Override `[render].quoting` (auto, always, never).
    #[arg(long, value_name = "MODE")]
    pub quoting: Option<ProcessArgumentQuoting>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `PROCARGS_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Render and print the redacted command lines, but don't run anything.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

pub fn parse() -> CliArgs {
    CliArgs::parse()
}
