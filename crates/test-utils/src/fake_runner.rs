use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use procargs::errors::Result;
use procargs::exec::{ProcessOutcome, ProcessRunner, ToolInvocation};

/// What a [`RecordingRunner`] saw for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRun {
    pub tool: String,
    pub program: String,
    /// `render()` output, as it would reach the process.
    pub line: String,
    /// `render_safe()` output, as it would reach the log.
    pub safe_line: String,
}

/// A fake runner that:
/// - renders each invocation exactly like the real runner does
/// - records the renderings instead of spawning a process
/// - reports `Success` unless an exit code was scripted for the tool.
#[derive(Default)]
pub struct RecordingRunner {
    runs: Arc<Mutex<Vec<RecordedRun>>>,
    exit_codes: HashMap<String, i32>,
}

impl RecordingRunner {
    pub fn new(runs: Arc<Mutex<Vec<RecordedRun>>>) -> Self {
        Self {
            runs,
            exit_codes: HashMap::new(),
        }
    }

    /// Make `tool` report `Failed(code)`.
    pub fn fail_with(mut self, tool: &str, code: i32) -> Self {
        self.exit_codes.insert(tool.to_string(), code);
        self
    }
}

impl ProcessRunner for RecordingRunner {
    fn run(
        &mut self,
        invocation: ToolInvocation,
    ) -> Pin<Box<dyn Future<Output = Result<ProcessOutcome>> + Send + '_>> {
        let runs = Arc::clone(&self.runs);
        let exit_code = self.exit_codes.get(&invocation.name).copied();

        Box::pin(async move {
            let line = invocation.args.render()?;
            let safe_line = invocation.args.render_safe()?;
            {
                let mut guard = runs.lock().unwrap();
                guard.push(RecordedRun {
                    tool: invocation.name.clone(),
                    program: invocation.program.clone(),
                    line,
                    safe_line,
                });
            }
            Ok(match exit_code {
                Some(code) => ProcessOutcome::Failed(code),
                None => ProcessOutcome::Success,
            })
        })
    }
}
