// src/args/builder.rs

//! Ordered collection of arguments making up one command line.
//!
//! Tool wrappers create one [`ArgumentBuilder`] per invocation, append the
//! tokens their CLI grammar asks for, and hand it to a
//! [`ProcessRunner`](crate::exec::ProcessRunner). Tokens are rendered lazily,
//! only when the builder itself is rendered.

use std::fmt;
use std::slice;
use std::sync::Arc;

use crate::args::argument::{Argument, SecretArgument, SwitchArgument, TextArgument};
use crate::args::renderer::{ArgumentRenderer, renderer_for};
use crate::args::tokenizer::split_command_line;
use crate::errors::Result;
use crate::types::ProcessArgumentQuoting;

#[derive(Debug, Clone, Default)]
pub struct ArgumentBuilder {
    tokens: Vec<Argument>,
}

impl ArgumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tokens, regardless of what they render to.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// True when there are no tokens or the tokens render to nothing.
    ///
    /// A builder whose rendering fails holds at least one real token and is
    /// therefore not considered empty.
    pub fn is_empty_or_blank(&self) -> bool {
        self.is_empty() || matches!(self.render().as_deref(), Ok(""))
    }

    pub fn iter(&self) -> slice::Iter<'_, Argument> {
        self.tokens.iter()
    }

    pub fn append(&mut self, argument: impl Into<Argument>) -> &mut Self {
        self.tokens.push(argument.into());
        self
    }

    pub fn prepend(&mut self, argument: impl Into<Argument>) -> &mut Self {
        self.tokens.insert(0, argument.into());
        self
    }

    /// Render every token for execution, joined by a single space.
    pub fn render(&self) -> Result<String> {
        self.join(Argument::render)
    }

    /// Render every token for logging, joined by a single space.
    pub fn render_safe(&self) -> Result<String> {
        self.join(Argument::render_safe)
    }

    /// Split the rendered command line back into the argv array a process
    /// started from it would observe.
    pub fn to_argv(&self) -> Result<Vec<String>> {
        Ok(split_command_line(&self.render()?))
    }

    /// Append clones of all tokens to `target`, preserving order.
    pub fn copy_to(&self, target: &mut ArgumentBuilder) {
        target.tokens.extend(self.tokens.iter().cloned());
    }

    fn join(&self, render: fn(&Argument) -> Result<String>) -> Result<String> {
        let rendered = self.tokens.iter().map(render).collect::<Result<Vec<_>>>()?;
        Ok(rendered.join(" "))
    }

    // ---- text sugar ----------------------------------------------------

    pub fn append_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.append(TextArgument::new(text))
    }

    pub fn prepend_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.prepend(TextArgument::new(text))
    }

    pub fn append_with(
        &mut self,
        text: impl Into<String>,
        renderer: Arc<dyn ArgumentRenderer>,
    ) -> &mut Self {
        self.append(TextArgument::with_renderer(text, renderer))
    }

    pub fn prepend_with(
        &mut self,
        text: impl Into<String>,
        renderer: Arc<dyn ArgumentRenderer>,
    ) -> &mut Self {
        self.prepend(TextArgument::with_renderer(text, renderer))
    }

    /// Append text without quoting or escaping.
    pub fn append_raw(&mut self, text: impl Into<String>) -> &mut Self {
        self.append(TextArgument::raw(text))
    }

    /// Prepend text without quoting or escaping.
    pub fn prepend_raw(&mut self, text: impl Into<String>) -> &mut Self {
        self.prepend(TextArgument::raw(text))
    }

    /// Append text that is always wrapped in quotes.
    pub fn append_quoted(&mut self, text: impl Into<String>) -> &mut Self {
        self.append_with(text, always_renderer())
    }

    pub fn prepend_quoted(&mut self, text: impl Into<String>) -> &mut Self {
        self.prepend_with(text, always_renderer())
    }

    // ---- secret sugar --------------------------------------------------

    pub fn append_secret(&mut self, text: impl Into<String>) -> &mut Self {
        self.append(SecretArgument::new(TextArgument::new(text)))
    }

    pub fn prepend_secret(&mut self, text: impl Into<String>) -> &mut Self {
        self.prepend(SecretArgument::new(TextArgument::new(text)))
    }

    pub fn append_secret_argument(&mut self, argument: impl Into<Argument>) -> &mut Self {
        self.append(SecretArgument::new(argument))
    }

    pub fn prepend_secret_argument(&mut self, argument: impl Into<Argument>) -> &mut Self {
        self.prepend(SecretArgument::new(argument))
    }

    // ---- switch sugar --------------------------------------------------

    pub fn append_switch(&mut self, switch: impl Into<String>, text: impl Into<String>) -> &mut Self {
        self.append_switch_with_separator(switch, " ", text)
    }

    pub fn prepend_switch(
        &mut self,
        switch: impl Into<String>,
        text: impl Into<String>,
    ) -> &mut Self {
        self.prepend_switch_with_separator(switch, " ", text)
    }

    pub fn append_switch_with_separator(
        &mut self,
        switch: impl Into<String>,
        separator: impl Into<String>,
        text: impl Into<String>,
    ) -> &mut Self {
        self.append(SwitchArgument::with_separator(
            switch,
            separator,
            TextArgument::new(text),
        ))
    }

    pub fn prepend_switch_with_separator(
        &mut self,
        switch: impl Into<String>,
        separator: impl Into<String>,
        text: impl Into<String>,
    ) -> &mut Self {
        self.prepend(SwitchArgument::with_separator(
            switch,
            separator,
            TextArgument::new(text),
        ))
    }

    pub fn append_switch_secret(
        &mut self,
        switch: impl Into<String>,
        text: impl Into<String>,
    ) -> &mut Self {
        self.append_switch_secret_with_separator(switch, " ", text)
    }

    pub fn prepend_switch_secret(
        &mut self,
        switch: impl Into<String>,
        text: impl Into<String>,
    ) -> &mut Self {
        self.prepend_switch_secret_with_separator(switch, " ", text)
    }

    pub fn append_switch_secret_with_separator(
        &mut self,
        switch: impl Into<String>,
        separator: impl Into<String>,
        text: impl Into<String>,
    ) -> &mut Self {
        self.append_switch_secret_argument(switch, separator, TextArgument::new(text))
    }

    pub fn prepend_switch_secret_with_separator(
        &mut self,
        switch: impl Into<String>,
        separator: impl Into<String>,
        text: impl Into<String>,
    ) -> &mut Self {
        self.prepend_switch_secret_argument(switch, separator, TextArgument::new(text))
    }

    pub fn append_switch_secret_argument(
        &mut self,
        switch: impl Into<String>,
        separator: impl Into<String>,
        argument: impl Into<Argument>,
    ) -> &mut Self {
        self.append(SwitchArgument::with_separator(
            switch,
            separator,
            SecretArgument::new(argument),
        ))
    }

    pub fn prepend_switch_secret_argument(
        &mut self,
        switch: impl Into<String>,
        separator: impl Into<String>,
        argument: impl Into<Argument>,
    ) -> &mut Self {
        self.prepend(SwitchArgument::with_separator(
            switch,
            separator,
            SecretArgument::new(argument),
        ))
    }
}

fn always_renderer() -> Arc<dyn ArgumentRenderer> {
    renderer_for(ProcessArgumentQuoting::Always)
}

/// Writes the safe rendering, so a builder can be logged directly.
impl fmt::Display for ArgumentBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for token in &self.tokens {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            write!(f, "{token}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ArgumentBuilder {
    type Item = &'a Argument;
    type IntoIter = slice::Iter<'a, Argument>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl IntoIterator for ArgumentBuilder {
    type Item = Argument;
    type IntoIter = std::vec::IntoIter<Argument>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl FromIterator<Argument> for ArgumentBuilder {
    fn from_iter<I: IntoIterator<Item = Argument>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl Extend<Argument> for ArgumentBuilder {
    fn extend<I: IntoIterator<Item = Argument>>(&mut self, iter: I) {
        self.tokens.extend(iter);
    }
}
