// src/args/ext.rs

//! Null-tolerant helpers for optional builders.
//!
//! Tool wrappers often thread an `Option<&mut ArgumentBuilder>` through a
//! chain of calls. Appending to `None` is a no-op that hands `None` back, so
//! the chain never has to branch. Copying, on the other hand, requires both
//! sides and reports [`ProcArgsError::MissingBuilder`] otherwise.

use std::sync::Arc;

use crate::args::argument::Argument;
use crate::args::builder::ArgumentBuilder;
use crate::args::renderer::ArgumentRenderer;
use crate::errors::{ProcArgsError, Result};

/// Fluent append/prepend over an optional builder.
pub trait OptionalBuilderExt: Sized {
    /// Apply `f` to the builder if there is one.
    fn with_builder(self, f: impl FnOnce(&mut ArgumentBuilder)) -> Self;

    fn append(self, argument: impl Into<Argument>) -> Self {
        self.with_builder(|b| {
            b.append(argument);
        })
    }

    fn prepend(self, argument: impl Into<Argument>) -> Self {
        self.with_builder(|b| {
            b.prepend(argument);
        })
    }

    fn append_text(self, text: impl Into<String>) -> Self {
        self.with_builder(|b| {
            b.append_text(text);
        })
    }

    fn prepend_text(self, text: impl Into<String>) -> Self {
        self.with_builder(|b| {
            b.prepend_text(text);
        })
    }

    fn append_with(self, text: impl Into<String>, renderer: Arc<dyn ArgumentRenderer>) -> Self {
        self.with_builder(|b| {
            b.append_with(text, renderer);
        })
    }

    fn prepend_with(self, text: impl Into<String>, renderer: Arc<dyn ArgumentRenderer>) -> Self {
        self.with_builder(|b| {
            b.prepend_with(text, renderer);
        })
    }

    fn append_raw(self, text: impl Into<String>) -> Self {
        self.with_builder(|b| {
            b.append_raw(text);
        })
    }

    fn prepend_raw(self, text: impl Into<String>) -> Self {
        self.with_builder(|b| {
            b.prepend_raw(text);
        })
    }

    fn append_quoted(self, text: impl Into<String>) -> Self {
        self.with_builder(|b| {
            b.append_quoted(text);
        })
    }

    fn prepend_quoted(self, text: impl Into<String>) -> Self {
        self.with_builder(|b| {
            b.prepend_quoted(text);
        })
    }

    fn append_secret(self, text: impl Into<String>) -> Self {
        self.with_builder(|b| {
            b.append_secret(text);
        })
    }

    fn prepend_secret(self, text: impl Into<String>) -> Self {
        self.with_builder(|b| {
            b.prepend_secret(text);
        })
    }

    fn append_secret_argument(self, argument: impl Into<Argument>) -> Self {
        self.with_builder(|b| {
            b.append_secret_argument(argument);
        })
    }

    fn prepend_secret_argument(self, argument: impl Into<Argument>) -> Self {
        self.with_builder(|b| {
            b.prepend_secret_argument(argument);
        })
    }

    fn append_switch(self, switch: impl Into<String>, text: impl Into<String>) -> Self {
        self.with_builder(|b| {
            b.append_switch(switch, text);
        })
    }

    fn prepend_switch(self, switch: impl Into<String>, text: impl Into<String>) -> Self {
        self.with_builder(|b| {
            b.prepend_switch(switch, text);
        })
    }

    fn append_switch_secret(self, switch: impl Into<String>, text: impl Into<String>) -> Self {
        self.with_builder(|b| {
            b.append_switch_secret(switch, text);
        })
    }

    fn prepend_switch_secret(self, switch: impl Into<String>, text: impl Into<String>) -> Self {
        self.with_builder(|b| {
            b.prepend_switch_secret(switch, text);
        })
    }

    fn append_switch_with_separator(
        self,
        switch: impl Into<String>,
        separator: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        self.with_builder(|b| {
            b.append_switch_with_separator(switch, separator, text);
        })
    }

    fn prepend_switch_with_separator(
        self,
        switch: impl Into<String>,
        separator: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        self.with_builder(|b| {
            b.prepend_switch_with_separator(switch, separator, text);
        })
    }

    fn append_switch_secret_with_separator(
        self,
        switch: impl Into<String>,
        separator: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        self.with_builder(|b| {
            b.append_switch_secret_with_separator(switch, separator, text);
        })
    }

    fn prepend_switch_secret_with_separator(
        self,
        switch: impl Into<String>,
        separator: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        self.with_builder(|b| {
            b.prepend_switch_secret_with_separator(switch, separator, text);
        })
    }

    fn append_switch_secret_argument(
        self,
        switch: impl Into<String>,
        separator: impl Into<String>,
        argument: impl Into<Argument>,
    ) -> Self {
        self.with_builder(|b| {
            b.append_switch_secret_argument(switch, separator, argument);
        })
    }

    fn prepend_switch_secret_argument(
        self,
        switch: impl Into<String>,
        separator: impl Into<String>,
        argument: impl Into<Argument>,
    ) -> Self {
        self.with_builder(|b| {
            b.prepend_switch_secret_argument(switch, separator, argument);
        })
    }
}

impl OptionalBuilderExt for Option<&mut ArgumentBuilder> {
    fn with_builder(mut self, f: impl FnOnce(&mut ArgumentBuilder)) -> Self {
        if let Some(builder) = self.as_deref_mut() {
            f(builder);
        }
        self
    }
}

/// True for a missing builder, a builder without tokens, or one that renders
/// to the empty string.
pub fn is_none_or_empty(builder: Option<&ArgumentBuilder>) -> bool {
    builder.is_none_or(ArgumentBuilder::is_empty_or_blank)
}

/// Append every token of `source` to `target`, in order.
pub fn copy_to(
    source: Option<&ArgumentBuilder>,
    target: Option<&mut ArgumentBuilder>,
) -> Result<()> {
    let source = source.ok_or(ProcArgsError::MissingBuilder("source"))?;
    let target = target.ok_or(ProcArgsError::MissingBuilder("target"))?;
    source.copy_to(target);
    Ok(())
}
