// src/exec/process.rs

//! Individual tool process runner.

use std::process::Stdio;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::errors::Result;
use crate::exec::invocation::{ProcessOutcome, ToolInvocation};

/// Spawn the tool and wait for it to exit.
///
/// The full command line is rendered up front, so a quoting policy violation
/// is reported before any process exists. Only the safe rendering is logged.
pub async fn run_process(invocation: ToolInvocation) -> Result<ProcessOutcome> {
    let line = invocation.args.render()?;
    let safe_line = invocation.args.render_safe()?;

    info!(
        tool = %invocation.name,
        program = %invocation.program,
        args = %safe_line,
        "starting tool process"
    );

    let mut std_cmd = std::process::Command::new(&invocation.program);
    apply_command_line(&mut std_cmd, &line);

    let mut cmd = Command::from(std_cmd);
    cmd.stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let mut child = cmd
        .spawn()
        .with_context(|| format!("spawning process for tool '{}'", invocation.name))?;

    let mut drains = Vec::new();
    if let Some(stdout) = child.stdout.take() {
        drains.push(drain_lines(invocation.name.clone(), "stdout", stdout));
    }
    if let Some(stderr) = child.stderr.take() {
        drains.push(drain_lines(invocation.name.clone(), "stderr", stderr));
    }

    let status = child
        .wait()
        .await
        .with_context(|| format!("waiting for process of tool '{}'", invocation.name))?;

    for drain in drains {
        if let Err(err) = drain.await {
            warn!(tool = %invocation.name, error = %err, "output drain task failed");
        }
    }

    let code = status.code().unwrap_or(-1);
    info!(
        tool = %invocation.name,
        exit_code = code,
        success = status.success(),
        "tool process exited"
    );

    Ok(if status.success() {
        ProcessOutcome::Success
    } else {
        ProcessOutcome::Failed(code)
    })
}

/// Windows processes receive the command line as one string and split it
/// themselves; hand it over untouched.
#[cfg(windows)]
fn apply_command_line(cmd: &mut std::process::Command, line: &str) {
    use std::os::windows::process::CommandExt;

    if !line.is_empty() {
        cmd.raw_arg(line);
    }
}

/// Elsewhere the OS takes an argv array: split the line the way a Windows
/// process would, so both platforms see the same arguments.
#[cfg(not(windows))]
fn apply_command_line(cmd: &mut std::process::Command, line: &str) {
    cmd.args(crate::args::split_command_line(line));
}

fn drain_lines<R>(tool: String, stream: &'static str, reader: R) -> JoinHandle<()>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut lines = BufReader::new(reader).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            debug!(tool = %tool, stream, "{}", line);
        }
    })
}
