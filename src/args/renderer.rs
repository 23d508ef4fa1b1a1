// src/args/renderer.rs

//! Renderers turn the raw text of a single argument into the text placed on
//! the command line.
//!
//! [`StandardRenderer`] implements the quoting rules understood by the MSVC
//! runtime's argv tokenizer (see [`crate::args::tokenizer`]): wrapping an
//! argument in quotes and escaping it such that the spawned process reads
//! back exactly the original text.
//!
//! Only a space or a quote makes `Auto` add quotes. The tokenizer also
//! splits on tabs, so under `Auto` an argument such as `"a\tb"` is emitted
//! bare and read back as two arguments. Text that may contain tabs should go
//! through an `Always` renderer (`append_quoted`).

use std::fmt::Debug;
use std::sync::{Arc, LazyLock};

use crate::errors::{ProcArgsError, Result};
use crate::types::ProcessArgumentQuoting;

/// Transforms a process argument before it is joined with the others.
pub trait ArgumentRenderer: Send + Sync + Debug {
    /// `raw` is arbitrary text to be seen by the process as one argument.
    fn render(&self, raw: &str) -> Result<String>;
}

const CHARS_THAT_REQUIRE_QUOTING: [char; 2] = [' ', '"'];
const CHARS_THAT_REQUIRE_ESCAPING: [char; 2] = ['\\', '"'];

const BLANK_ARGUMENT: &str = "A blank argument cannot be rendered without quotes because the \
     absence could interfere with the interpretation of following arguments.";
const SPACE_OR_QUOTE_ARGUMENT: &str = "An argument containing a space or a quote must be quoted \
     because it could interfere with the interpretation of following arguments.";
const TRAILING_BACKSLASH_ARGUMENT: &str = "An argument ending in a backslash must be quoted \
     because the backslash would escape the quote of the argument that follows.";

static DEFAULT_RENDERER: LazyLock<Arc<dyn ArgumentRenderer>> =
    LazyLock::new(|| StandardRenderer::default().shared());

/// Shared `Auto` renderer used by every text argument that does not name its
/// own renderer.
pub fn default_renderer() -> Arc<dyn ArgumentRenderer> {
    Arc::clone(&DEFAULT_RENDERER)
}

/// Standard renderer for `quoting`, sharing the default instance for `Auto`.
pub fn renderer_for(quoting: ProcessArgumentQuoting) -> Arc<dyn ArgumentRenderer> {
    match quoting {
        ProcessArgumentQuoting::Auto => default_renderer(),
        other => StandardRenderer::new(other).shared(),
    }
}

/// The standard renderer, parameterised by a [`ProcessArgumentQuoting`] mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardRenderer {
    quoting: ProcessArgumentQuoting,
}

impl StandardRenderer {
    pub fn new(quoting: ProcessArgumentQuoting) -> Self {
        Self { quoting }
    }

    pub fn quoting(&self) -> ProcessArgumentQuoting {
        self.quoting
    }

    /// Wrap this renderer for use by text arguments.
    pub fn shared(self) -> Arc<dyn ArgumentRenderer> {
        Arc::new(self)
    }
}

impl ArgumentRenderer for StandardRenderer {
    fn render(&self, raw: &str) -> Result<String> {
        use ProcessArgumentQuoting::*;

        if raw.is_empty() {
            if self.quoting == NeverAndThrow {
                return Err(invalid(BLANK_ARGUMENT));
            }
            return Ok("\"\"".to_string());
        }

        if !raw.contains(CHARS_THAT_REQUIRE_QUOTING) {
            match self.quoting {
                Auto => return Ok(raw.to_string()),
                NeverAndThrow if raw.ends_with('\\') => {
                    return Err(invalid(TRAILING_BACKSLASH_ARGUMENT));
                }
                NeverAndThrow => return Ok(raw.to_string()),
                Always => {}
            }

            // Nothing to escape unless a trailing backslash would swallow
            // the closing quote.
            if !raw.ends_with('\\') {
                return Ok(format!("\"{raw}\""));
            }
        } else if self.quoting == NeverAndThrow {
            return Err(invalid(SPACE_OR_QUOTE_ARGUMENT));
        }

        Ok(quote_and_escape(raw))
    }
}

fn invalid(message: &str) -> ProcArgsError {
    ProcArgsError::InvalidUnquotedArgument(message.to_string())
}

/// Quote `raw`, escaping quotes and any backslash run that precedes a quote
/// or the end of the text.
fn quote_and_escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 8);
    out.push('"');

    let mut rest = raw;
    while let Some(pos) = rest.find(CHARS_THAT_REQUIRE_ESCAPING) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if let Some(after_quote) = tail.strip_prefix('"') {
            out.push_str("\\\"");
            rest = after_quote;
            continue;
        }

        let after_run = tail.trim_start_matches('\\');
        let run = tail.len() - after_run.len();
        let count = if after_run.is_empty() || after_run.starts_with('"') {
            run * 2
        } else {
            run
        };
        out.extend(std::iter::repeat_n('\\', count));
        rest = after_run;
    }

    out.push_str(rest);
    out.push('"');
    out
}
