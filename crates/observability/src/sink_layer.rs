//! Tracing layer that hands each event to a [`LogSink`] as one line.
//!
//! Used to keep log output off the terminal while an animation owns it.

use std::fmt::Write;

use tracing::field::{Field, Visit};
use tracing_subscriber::layer::{Context, Layer};

use crate::config::LogSink;

/// Lines longer than this are cut and suffixed with their full length.
const MAX_LINE_CHARS: usize = 8_000;

/// Collects an event's fields as "message key=value ...".
#[derive(Default)]
struct LineBuilder {
    message: String,
    fields: String,
}

impl LineBuilder {
    fn push_field(&mut self, name: &str, value: std::fmt::Arguments<'_>) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        write!(self.fields, "{}={}", name, value).ok();
    }

    fn finish(self) -> String {
        match (self.message.is_empty(), self.fields.is_empty()) {
            (_, true) => self.message,
            (true, false) => self.fields,
            (false, false) => format!("{} {}", self.message, self.fields),
        }
    }
}

impl Visit for LineBuilder {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            self.push_field(field.name(), format_args!("{:?}", value));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            write!(self.message, "{:?}", value).ok();
        } else {
            self.push_field(field.name(), format_args!("{:?}", value));
        }
    }
}

pub(crate) fn sink_layer(sink: Option<LogSink>) -> Option<SinkLayer> {
    sink.map(|sink| SinkLayer { sink })
}

#[derive(Clone)]
pub(crate) struct SinkLayer {
    sink: LogSink,
}

impl SinkLayer {
    fn format(event: &tracing::Event<'_>) -> String {
        let meta = event.metadata();
        let mut builder = LineBuilder::default();
        event.record(&mut builder);
        let body = builder.finish();
        let line = if body.is_empty() {
            format!("[{}] {}", meta.level(), meta.target())
        } else {
            format!("[{}] {}: {}", meta.level(), meta.target(), body)
        };
        let len = line.chars().count();
        if len > MAX_LINE_CHARS {
            let cut: String = line.chars().take(MAX_LINE_CHARS).collect();
            format!("{}… ({} chars)", cut, len)
        } else {
            line
        }
    }
}

impl<S> Layer<S> for SinkLayer
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        (self.sink)(Self::format(event));
    }
}
