// src/config/validate.rs

use crate::config::model::{ArgumentSpec, ConfigFile, RawConfigFile};
use crate::errors::{ProcArgsError, Result};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = ProcArgsError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.render, raw.tool))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    ensure_has_tools(cfg)?;
    validate_programs(cfg)?;
    validate_argument_specs(cfg)?;
    Ok(())
}

fn ensure_has_tools(cfg: &RawConfigFile) -> Result<()> {
    if cfg.tool.is_empty() {
        return Err(ProcArgsError::ConfigError(
            "config must contain at least one [tool.<name>] section".to_string(),
        ));
    }
    Ok(())
}

fn validate_programs(cfg: &RawConfigFile) -> Result<()> {
    for (name, tool) in cfg.tool.iter() {
        if tool.program.trim().is_empty() {
            return Err(ProcArgsError::ConfigError(format!(
                "tool '{}' has an empty `program`",
                name
            )));
        }
    }
    Ok(())
}

fn validate_argument_specs(cfg: &RawConfigFile) -> Result<()> {
    for (name, tool) in cfg.tool.iter() {
        for (index, spec) in tool.args.iter().enumerate() {
            validate_argument_spec(spec).map_err(|reason| {
                ProcArgsError::ConfigError(format!(
                    "tool '{}' argument #{}: {}",
                    name, index, reason
                ))
            })?;
        }
    }
    Ok(())
}

fn validate_argument_spec(spec: &ArgumentSpec) -> std::result::Result<(), &'static str> {
    if spec.separator.is_some() && spec.switch.is_none() {
        return Err("`separator` requires `switch`");
    }
    if spec.raw && spec.quoting.is_some() {
        return Err("`raw = true` cannot be combined with `quoting`");
    }
    if spec.value.is_none() && spec.switch.is_none() {
        return Err("expected `value`, `switch`, or both");
    }
    Ok(())
}
