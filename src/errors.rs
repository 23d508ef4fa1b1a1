// src/errors.rs

//! Crate-wide error aliases and helpers.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcArgsError {
    /// A `NeverAndThrow` renderer was asked to produce quoted output.
    #[error("Invalid unquoted argument: {0}")]
    InvalidUnquotedArgument(String),

    /// `copy_to` was handed a missing source or target builder.
    #[error("Missing argument builder: {0}")]
    MissingBuilder(&'static str),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    #[error("Tool '{tool}' exited with code {code}")]
    ToolFailed { tool: String, code: i32 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ProcArgsError>;
