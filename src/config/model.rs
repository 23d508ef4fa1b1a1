// src/config/model.rs

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::args::{Argument, ArgumentBuilder, SecretArgument, SwitchArgument, TextArgument, renderer_for};
use crate::types::ProcessArgumentQuoting;

/// Top-level configuration as read from a TOML file, before validation.
///
/// ```toml
/// [render]
/// quoting = "auto"
///
/// [tool.push]
/// program = "nuget"
/// args = [
///   { value = "push" },
///   { switch = "-ApiKey", value = "s3cr3t", secret = true },
/// ]
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct RawConfigFile {
    /// Rendering defaults from `[render]`.
    #[serde(default)]
    pub render: RenderSection,

    /// All tools from `[tool.<name>]`, keyed by tool name.
    #[serde(default)]
    pub tool: BTreeMap<String, ToolConfig>,
}

/// A validated configuration. Construct it through
/// `ConfigFile::try_from(raw)` (see `validate.rs`).
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub render: RenderSection,
    pub tool: BTreeMap<String, ToolConfig>,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(render: RenderSection, tool: BTreeMap<String, ToolConfig>) -> Self {
        Self { render, tool }
    }

    /// Build the argument list of every tool, in tool-name order.
    pub fn builders(&self) -> impl Iterator<Item = (&str, &ToolConfig, ArgumentBuilder)> {
        self.tool
            .iter()
            .map(|(name, tool)| (name.as_str(), tool, tool.to_builder(&self.render)))
    }
}

/// `[render]` section.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct RenderSection {
    /// Quoting policy for text arguments that do not set their own.
    #[serde(default)]
    pub quoting: ProcessArgumentQuoting,
}

/// `[tool.<name>]` section: one program and the arguments passed to it.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolConfig {
    /// Executable to spawn.
    pub program: String,

    /// Arguments in command-line order.
    #[serde(default)]
    pub args: Vec<ArgumentSpec>,
}

impl ToolConfig {
    pub fn to_builder(&self, render: &RenderSection) -> ArgumentBuilder {
        self.args
            .iter()
            .map(|spec| spec.to_argument(render.quoting))
            .collect()
    }
}

/// One entry of `args = [...]`.
///
/// - `value` alone is a plain argument; a missing value is an empty argument.
/// - `switch` prefixes the value, joined by `separator` (default `" "`).
/// - `secret = true` hides the value (but not the switch) in logs.
/// - `raw = true` emits the value without quoting; `quoting` overrides
///   `[render].quoting` for this value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArgumentSpec {
    #[serde(default)]
    pub value: Option<String>,

    #[serde(default)]
    pub switch: Option<String>,

    #[serde(default)]
    pub separator: Option<String>,

    #[serde(default)]
    pub secret: bool,

    #[serde(default)]
    pub raw: bool,

    #[serde(default)]
    pub quoting: Option<ProcessArgumentQuoting>,
}

impl ArgumentSpec {
    pub fn to_argument(&self, default_quoting: ProcessArgumentQuoting) -> Argument {
        let text = self.value.clone().unwrap_or_default();

        let mut argument: Argument = if self.raw {
            TextArgument::raw(text).into()
        } else {
            let quoting = self.quoting.unwrap_or(default_quoting);
            TextArgument::with_renderer(text, renderer_for(quoting)).into()
        };

        if self.secret {
            argument = SecretArgument::new(argument).into();
        }

        if let Some(switch) = &self.switch {
            let separator = self.separator.as_deref().unwrap_or(" ");
            argument = SwitchArgument::with_separator(switch.as_str(), separator, argument).into();
        }

        argument
    }
}
