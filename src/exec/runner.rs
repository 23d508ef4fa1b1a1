// src/exec/runner.rs

//! Pluggable process runner abstraction.
//!
//! The CLI hands every [`ToolInvocation`] to a `ProcessRunner` instead of
//! spawning processes directly, so tests can swap in a runner that records
//! the rendered command lines without starting anything.

use std::future::Future;
use std::pin::Pin;

use crate::errors::Result;
use crate::exec::invocation::{ProcessOutcome, ToolInvocation};
use crate::exec::process::run_process;

/// Trait abstracting how a tool invocation is executed.
pub trait ProcessRunner: Send {
    /// Execute `invocation` to completion.
    ///
    /// Implementations must render the arguments before starting anything:
    /// a rendering error means no process is spawned.
    fn run(
        &mut self,
        invocation: ToolInvocation,
    ) -> Pin<Box<dyn Future<Output = Result<ProcessOutcome>> + Send + '_>>;
}

/// Runner that spawns real OS processes via `tokio::process`.
#[derive(Debug, Default)]
pub struct RealProcessRunner;

impl RealProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for RealProcessRunner {
    fn run(
        &mut self,
        invocation: ToolInvocation,
    ) -> Pin<Box<dyn Future<Output = Result<ProcessOutcome>> + Send + '_>> {
        Box::pin(run_process(invocation))
    }
}
