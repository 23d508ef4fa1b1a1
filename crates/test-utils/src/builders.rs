#![allow(dead_code)]

use std::collections::BTreeMap;

use procargs::config::{ArgumentSpec, ConfigFile, RawConfigFile, RenderSection, ToolConfig};
use procargs::types::ProcessArgumentQuoting;

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile {
                render: RenderSection::default(),
                tool: BTreeMap::new(),
            },
        }
    }

    pub fn with_tool(mut self, name: &str, tool: ToolConfig) -> Self {
        self.config.tool.insert(name.to_string(), tool);
        self
    }

    pub fn with_quoting(mut self, quoting: ProcessArgumentQuoting) -> Self {
        self.config.render.quoting = quoting;
        self
    }

    pub fn build_raw(self) -> RawConfigFile {
        self.config
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `ToolConfig`.
pub struct ToolConfigBuilder {
    tool: ToolConfig,
}

impl ToolConfigBuilder {
    pub fn new(program: &str) -> Self {
        Self {
            tool: ToolConfig {
                program: program.to_string(),
                args: vec![],
            },
        }
    }

    pub fn arg(mut self, spec: ArgumentSpec) -> Self {
        self.tool.args.push(spec);
        self
    }

    pub fn value(self, value: &str) -> Self {
        self.arg(ArgumentSpecBuilder::value(value).build())
    }

    pub fn switch(self, switch: &str, value: &str) -> Self {
        self.arg(ArgumentSpecBuilder::value(value).switch(switch).build())
    }

    pub fn secret_switch(self, switch: &str, value: &str) -> Self {
        self.arg(ArgumentSpecBuilder::value(value).switch(switch).secret().build())
    }

    pub fn build(self) -> ToolConfig {
        self.tool
    }
}

/// Builder for a single `args = [...]` entry.
pub struct ArgumentSpecBuilder {
    spec: ArgumentSpec,
}

impl ArgumentSpecBuilder {
    pub fn value(value: &str) -> Self {
        Self {
            spec: ArgumentSpec {
                value: Some(value.to_string()),
                ..ArgumentSpec::default()
            },
        }
    }

    pub fn empty() -> Self {
        Self {
            spec: ArgumentSpec::default(),
        }
    }

    pub fn switch(mut self, switch: &str) -> Self {
        self.spec.switch = Some(switch.to_string());
        self
    }

    pub fn separator(mut self, separator: &str) -> Self {
        self.spec.separator = Some(separator.to_string());
        self
    }

    pub fn secret(mut self) -> Self {
        self.spec.secret = true;
        self
    }

    pub fn raw(mut self) -> Self {
        self.spec.raw = true;
        self
    }

    pub fn quoting(mut self, quoting: ProcessArgumentQuoting) -> Self {
        self.spec.quoting = Some(quoting);
        self
    }

    pub fn build(self) -> ArgumentSpec {
        self.spec
    }
}
