// src/config/mod.rs

//! Tool invocation config for procargs.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Validate argument entries (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path, load_from_str};
pub use model::{ArgumentSpec, ConfigFile, RawConfigFile, RenderSection, ToolConfig};
