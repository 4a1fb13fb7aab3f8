//! Start and end messages printed around a unit of work.

use std::io::Write;
use std::sync::Arc;

use crate::decorate::Decorate;
use crate::error::ConfigError;
use crate::terminal::Output;

/// Messages written before and after each call of the wrapped work.
///
/// To combine with [`animate`](crate::animate), animate first and annotate
/// the result; the start message is then printed before the animation
/// begins and the end message after it has been erased.
#[derive(Debug, Clone)]
pub struct Annotate {
    start: Option<String>,
    end: Option<String>,
    start_newline: bool,
    output: Output,
}

impl Annotate {
    pub fn new(start: Option<String>, end: Option<String>) -> Result<Self, ConfigError> {
        if start.is_none() && end.is_none() {
            return Err(ConfigError::MissingMessage);
        }
        Ok(Self {
            start,
            end,
            start_newline: true,
            output: Output::Stdout,
        })
    }

    pub fn start(message: impl Into<String>) -> Self {
        Self {
            start: Some(message.into()),
            end: None,
            start_newline: true,
            output: Output::Stdout,
        }
    }

    pub fn end(message: impl Into<String>) -> Self {
        Self {
            start: None,
            end: Some(message.into()),
            start_newline: true,
            output: Output::Stdout,
        }
    }

    /// Keep the cursor on the start message's line, so a single-line
    /// animation is drawn right after it.
    pub fn start_no_newline(mut self, no_newline: bool) -> Self {
        self.start_newline = !no_newline;
        self
    }

    pub fn with_output(mut self, output: Output) -> Self {
        self.output = output;
        self
    }

    pub fn wrap<W: Decorate>(&self, work: W) -> W {
        work.annotated(Arc::new(self.clone()))
    }

    /// Empty messages are skipped like missing ones.
    pub(crate) fn write_start(&self) {
        if let Some(start) = non_empty(&self.start) {
            let newline = if self.start_newline { "\n" } else { "" };
            self.emit(&format!("{}{}", start, newline));
        }
    }

    pub(crate) fn write_end(&self) {
        if let Some(end) = non_empty(&self.end) {
            self.emit(&format!("{}\n", end));
        }
    }

    fn emit(&self, text: &str) {
        let mut out = self.output.writer();
        if let Err(e) = out.write_all(text.as_bytes()).and_then(|_| out.flush()) {
            tracing::warn!(error = %e, "Failed to write annotation");
        }
    }
}

fn non_empty(message: &Option<String>) -> Option<&str> {
    message.as_deref().filter(|m| !m.is_empty())
}
