// src/args/argument.rs

//! The argument tree: plain text, named switches, and secrets.
//!
//! Every argument renders twice:
//! - [`Argument::render`] produces the exact text handed to the process.
//! - [`Argument::render_safe`] produces the text written to logs, where any
//!   [`SecretArgument`] collapses to [`REDACTED_MARKER`].

use std::fmt;
use std::sync::Arc;

use crate::args::renderer::{default_renderer, ArgumentRenderer};
use crate::errors::Result;

/// Fixed replacement for secret values in safe renderings.
pub const REDACTED_MARKER: &str = "[REDACTED]";

/// Text shown by `Display` when an argument cannot be rendered.
const INVALID_MARKER: &str = "<invalid argument>";

/// A single node of a process command line.
#[derive(Debug, Clone)]
pub enum Argument {
    Text(TextArgument),
    Switch(SwitchArgument),
    Secret(SecretArgument),
}

impl Argument {
    /// Render for execution.
    pub fn render(&self) -> Result<String> {
        match self {
            Argument::Text(text) => text.render(),
            Argument::Switch(switch) => switch.render(),
            Argument::Secret(secret) => secret.render(),
        }
    }

    /// Render for logging and diagnostics.
    pub fn render_safe(&self) -> Result<String> {
        match self {
            Argument::Text(text) => text.render_safe(),
            Argument::Switch(switch) => switch.render_safe(),
            Argument::Secret(secret) => Ok(secret.render_safe()),
        }
    }

    /// Plain text using the default (`Auto`) renderer.
    pub fn text(text: impl Into<String>) -> Self {
        Argument::Text(TextArgument::new(text))
    }

    /// Plain text passed through without any quoting.
    pub fn raw(text: impl Into<String>) -> Self {
        Argument::Text(TextArgument::raw(text))
    }

    pub fn secret(inner: impl Into<Argument>) -> Self {
        Argument::Secret(SecretArgument::new(inner))
    }

    pub fn switch(switch: impl Into<String>, inner: impl Into<Argument>) -> Self {
        Argument::Switch(SwitchArgument::new(switch, inner))
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.render_safe() {
            Ok(s) => f.write_str(&s),
            Err(_) => f.write_str(INVALID_MARKER),
        }
    }
}

impl From<TextArgument> for Argument {
    fn from(value: TextArgument) -> Self {
        Argument::Text(value)
    }
}

impl From<SwitchArgument> for Argument {
    fn from(value: SwitchArgument) -> Self {
        Argument::Switch(value)
    }
}

impl From<SecretArgument> for Argument {
    fn from(value: SecretArgument) -> Self {
        Argument::Secret(value)
    }
}

/// Free text, optionally passed through a renderer.
#[derive(Debug, Clone)]
pub struct TextArgument {
    text: String,
    renderer: Option<Arc<dyn ArgumentRenderer>>,
}

impl TextArgument {
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_renderer(text, default_renderer())
    }

    pub fn with_renderer(text: impl Into<String>, renderer: Arc<dyn ArgumentRenderer>) -> Self {
        Self {
            text: text.into(),
            renderer: Some(renderer),
        }
    }

    /// Text that is emitted verbatim. The caller is responsible for any
    /// quoting the target process needs.
    pub fn raw(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            renderer: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn render(&self) -> Result<String> {
        match &self.renderer {
            Some(renderer) => renderer.render(&self.text),
            None => Ok(self.text.clone()),
        }
    }

    /// Plain text carries no secret, so this is the same as [`render`](Self::render).
    pub fn render_safe(&self) -> Result<String> {
        self.render()
    }
}

/// A missing value renders as an empty argument.
impl From<Option<String>> for TextArgument {
    fn from(value: Option<String>) -> Self {
        TextArgument::new(value.unwrap_or_default())
    }
}

/// A named flag followed by its value, e.g. `--source=<value>`.
#[derive(Debug, Clone)]
pub struct SwitchArgument {
    switch: String,
    inner: Box<Argument>,
    separator: String,
}

impl SwitchArgument {
    /// Switch and value separated by a single space.
    pub fn new(switch: impl Into<String>, inner: impl Into<Argument>) -> Self {
        Self::with_separator(switch, " ", inner)
    }

    pub fn with_separator(
        switch: impl Into<String>,
        separator: impl Into<String>,
        inner: impl Into<Argument>,
    ) -> Self {
        Self {
            switch: switch.into(),
            inner: Box::new(inner.into()),
            separator: separator.into(),
        }
    }

    pub fn switch(&self) -> &str {
        &self.switch
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn render(&self) -> Result<String> {
        let value = self.inner.render()?;
        Ok(format!("{}{}{}", self.switch, self.separator, value))
    }

    pub fn render_safe(&self) -> Result<String> {
        let value = self.inner.render_safe()?;
        Ok(format!("{}{}{}", self.switch, self.separator, value))
    }
}

/// A value that must never reach a log.
#[derive(Clone)]
pub struct SecretArgument {
    inner: Box<Argument>,
}

impl SecretArgument {
    pub fn new(inner: impl Into<Argument>) -> Self {
        Self {
            inner: Box::new(inner.into()),
        }
    }

    pub fn render(&self) -> Result<String> {
        self.inner.render()
    }

    /// The inner argument is not rendered at all, so this cannot fail.
    pub fn render_safe(&self) -> String {
        REDACTED_MARKER.to_string()
    }
}

impl fmt::Debug for SecretArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SecretArgument")
            .field(&format_args!("{REDACTED_MARKER}"))
            .finish()
    }
}
