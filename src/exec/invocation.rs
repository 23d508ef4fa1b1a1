// src/exec/invocation.rs

use tracing::{info, warn};

use crate::args::ArgumentBuilder;
use crate::config::ConfigFile;
use crate::errors::{ProcArgsError, Result};
use crate::exec::runner::ProcessRunner;

/// Outcome of a tool process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessOutcome {
    Success,
    Failed(i32),
}

/// One program plus the arguments to start it with.
///
/// Each invocation owns its builder; builders are never shared between
/// invocations.
#[derive(Debug, Clone)]
pub struct ToolInvocation {
    pub name: String,
    pub program: String,
    pub args: ArgumentBuilder,
}

impl ToolInvocation {
    pub fn new(name: impl Into<String>, program: impl Into<String>, args: ArgumentBuilder) -> Self {
        Self {
            name: name.into(),
            program: program.into(),
            args,
        }
    }

    /// Program followed by the safe rendering of the arguments.
    pub fn display_line(&self) -> Result<String> {
        let safe = self.args.render_safe()?;
        if safe.is_empty() {
            Ok(self.program.clone())
        } else {
            Ok(format!("{} {}", self.program, safe))
        }
    }
}

/// Build invocations for the requested tools, or for every tool in name
/// order when `names` is empty.
pub fn select_invocations(cfg: &ConfigFile, names: &[String]) -> Result<Vec<ToolInvocation>> {
    if names.is_empty() {
        return Ok(cfg
            .builders()
            .map(|(name, tool, args)| ToolInvocation::new(name, tool.program.as_str(), args))
            .collect());
    }

    names
        .iter()
        .map(|name| {
            let tool = cfg
                .tool
                .get(name)
                .ok_or_else(|| ProcArgsError::ToolNotFound(name.clone()))?;
            Ok(ToolInvocation::new(
                name.as_str(),
                tool.program.as_str(),
                tool.to_builder(&cfg.render),
            ))
        })
        .collect()
}

/// Run invocations one after another, stopping at the first failure.
pub async fn run_invocations<R>(runner: &mut R, invocations: Vec<ToolInvocation>) -> Result<()>
where
    R: ProcessRunner + ?Sized,
{
    for invocation in invocations {
        let name = invocation.name.clone();
        match runner.run(invocation).await? {
            ProcessOutcome::Success => {
                info!(tool = %name, "tool finished successfully");
            }
            ProcessOutcome::Failed(code) => {
                warn!(tool = %name, exit_code = code, "tool failed; aborting remaining tools");
                return Err(ProcArgsError::ToolFailed { tool: name, code });
            }
        }
    }
    Ok(())
}
