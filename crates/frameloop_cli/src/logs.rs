//! Holds log lines back while an animation owns the terminal.

use std::sync::{Arc, Mutex, PoisonError};

use frameloop_observability::{LogSink, ObservabilityConfig};

use crate::output;

#[derive(Clone, Default)]
pub struct LogBuffer {
    lines: Arc<Mutex<Vec<String>>>,
}

impl LogBuffer {
    /// Install the global subscriber with console output off and every line
    /// collected here. `verbose` raises the default filter to `debug`.
    pub fn install(verbose: bool) -> Self {
        let buffer = Self::default();
        let lines = Arc::clone(&buffer.lines);
        let sink: LogSink = Arc::new(move |line| {
            lines.lock().unwrap_or_else(PoisonError::into_inner).push(line);
        });

        let mut config = ObservabilityConfig::from_env()
            .with_console(false)
            .with_log_sink(sink);
        if verbose && config.log_level.is_none() {
            config = config.with_log_level("warn,frameloop=debug,frameloop_runtime=debug,frameloop_observability=debug");
        }

        if let Err(e) = frameloop_observability::init(config) {
            output::warning(&format!("Logging disabled: {}", e));
        }
        buffer
    }

    pub fn drain(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock().unwrap_or_else(PoisonError::into_inner))
    }

    /// Print everything when verbose, otherwise only errors.
    pub fn flush(&self, verbose: bool) {
        for line in self.drain() {
            if verbose {
                output::dim(&line);
            } else if line.starts_with("[ERROR]") {
                output::warning(&line);
            }
        }
    }
}
