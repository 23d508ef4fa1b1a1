// src/args/mod.rs

//! Process argument model.
//!
//! - [`renderer`] quotes and escapes free text for the native argv grammar.
//! - [`argument`] holds the argument tree (text, switches, secrets).
//! - [`builder`] is the ordered token list tool wrappers accumulate.
//! - [`ext`] adds null-tolerant chaining over optional builders.
//! - [`tokenizer`] splits a rendered command line back into argv.

pub mod argument;
pub mod builder;
pub mod ext;
pub mod renderer;
pub mod tokenizer;

pub use argument::{Argument, REDACTED_MARKER, SecretArgument, SwitchArgument, TextArgument};
pub use builder::ArgumentBuilder;
pub use ext::{OptionalBuilderExt, copy_to, is_none_or_empty};
pub use renderer::{ArgumentRenderer, StandardRenderer, default_renderer, renderer_for};
pub use tokenizer::split_command_line;
