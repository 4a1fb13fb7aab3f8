//! Configuration for logging

use std::sync::Arc;

/// Sink for formatted log lines. Called from the tracing layer; must not block.
pub type LogSink = Arc<dyn Fn(String) + Send + Sync>;

/// Default filter when neither the config nor the environment sets one.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Logging configuration
#[derive(Clone)]
pub struct ObservabilityConfig {
    /// Application name, attached to the startup event
    pub app_name: String,

    /// Write formatted events to stderr
    pub enable_console: bool,

    /// Filter directives (e.g., "info", "frameloop_runtime=debug")
    /// Falls back to the environment, then DEFAULT_LOG_LEVEL
    pub log_level: Option<String>,

    /// Optional sink for each formatted log line
    pub log_sink: Option<LogSink>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            app_name: "frameloop".to_string(),
            enable_console: true,
            log_level: None,
            log_sink: None,
        }
    }
}

impl std::fmt::Debug for ObservabilityConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObservabilityConfig")
            .field("app_name", &self.app_name)
            .field("enable_console", &self.enable_console)
            .field("log_level", &self.log_level)
            .field("log_sink", &self.log_sink.as_ref().map(|_| "Some(LogSink)"))
            .finish()
    }
}

impl ObservabilityConfig {
    /// Create a new configuration with application name
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            ..Default::default()
        }
    }

    /// Enable or disable console output
    pub fn with_console(mut self, enable: bool) -> Self {
        self.enable_console = enable;
        self
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    /// Route formatted lines to `sink` as well as (or instead of) the console.
    pub fn with_log_sink(mut self, sink: LogSink) -> Self {
        self.log_sink = Some(sink);
        self
    }

    /// Build from environment variables
    ///
    /// Reads:
    /// - `FRAMELOOP_LOG` or `RUST_LOG` → log_level
    /// - `FRAMELOOP_LOG_CONSOLE` (`0`/`false` disables) → enable_console
    pub fn from_env() -> Self {
        let log_level = std::env::var("FRAMELOOP_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .ok()
            .filter(|v| !v.trim().is_empty());

        let enable_console = std::env::var("FRAMELOOP_LOG_CONSOLE")
            .map(|v| !matches!(v.trim().to_lowercase().as_str(), "0" | "false" | "off"))
            .unwrap_or(true);

        Self {
            log_level,
            enable_console,
            ..Default::default()
        }
    }

    /// Filter directives actually used by `init`.
    pub fn effective_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }
}
