// src/exec/mod.rs

//! Process execution boundary.
//!
//! - [`invocation`] pairs a program with its [`ArgumentBuilder`](crate::args::ArgumentBuilder)
//!   and runs a list of invocations in order.
//! - [`runner`] provides the `ProcessRunner` trait and the production
//!   `RealProcessRunner`, which tests can replace with a fake.
//! - [`process`] spawns a single tool process with `tokio::process`.

pub mod invocation;
pub mod process;
pub mod runner;

pub use invocation::{ProcessOutcome, ToolInvocation, run_invocations, select_invocations};
pub use runner::{ProcessRunner, RealProcessRunner};
