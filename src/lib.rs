// src/lib.rs

pub mod args;
pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod types;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::ConfigFile;
use crate::config::loader::load_and_validate;
use crate::exec::{RealProcessRunner, ToolInvocation, run_invocations, select_invocations};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading and the `--quoting` override
/// - tool selection
/// - dry-run printing or sequential execution
pub async fn run(args: CliArgs) -> Result<()> {
    let mut cfg = load_and_validate(&args.config)
        .with_context(|| format!("loading config from {:?}", args.config))?;

    if let Some(quoting) = args.quoting {
        debug!(%quoting, "overriding [render].quoting from the command line");
        cfg.render.quoting = quoting;
    }

    let invocations = select_invocations(&cfg, &args.tools)?;

    if args.dry_run {
        print_dry_run(&cfg, &invocations)?;
        return Ok(());
    }

    info!(count = invocations.len(), "running tools");
    let mut runner = RealProcessRunner::new();
    run_invocations(&mut runner, invocations).await?;
    Ok(())
}

/// Print every selected tool with its redacted command line.
///
/// Both renderings are produced so that quoting policy violations surface
/// here exactly as they would at execution time.
fn print_dry_run(cfg: &ConfigFile, invocations: &[ToolInvocation]) -> Result<()> {
    println!("procargs dry-run");
    println!("  render.quoting = {}", cfg.render.quoting);
    println!();

    println!("tools ({}):", invocations.len());
    for invocation in invocations {
        invocation
            .args
            .render()
            .with_context(|| format!("rendering arguments of tool '{}'", invocation.name))?;
        println!("  - {}", invocation.name);
        println!("      tokens: {}", invocation.args.len());
        println!("      cmd: {}", invocation.display_line()?);
    }

    debug!("dry-run complete (no execution)");
    Ok(())
}
