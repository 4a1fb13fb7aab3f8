//! Global subscriber setup.
//!
//! Console output always goes to stderr so it never lands on the stream an
//! animation is drawn on by default.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use crate::config::ObservabilityConfig;
use crate::error::ObservabilityError;
use crate::sink_layer;

/// Install the global tracing subscriber described by `config`.
///
/// Fails if the filter directives do not parse or a global subscriber is
/// already installed.
pub fn init(config: ObservabilityConfig) -> Result<(), ObservabilityError> {
    let env_filter = build_filter(&config)?;

    let fmt_layer = config.enable_console.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
    });

    let sink = sink_layer::sink_layer(config.log_sink.clone());

    Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .with(sink)
        .try_init()
        .map_err(|e| ObservabilityError::InitFailed(e.to_string()))?;

    tracing::debug!(
        app.name = %config.app_name,
        filter = %config.effective_level(),
        console = config.enable_console,
        "Logging initialized"
    );

    Ok(())
}

/// Initialize with configuration read from environment variables
pub fn init_from_env() -> Result<(), ObservabilityError> {
    init(ObservabilityConfig::from_env())
}

fn build_filter(config: &ObservabilityConfig) -> Result<EnvFilter, ObservabilityError> {
    EnvFilter::try_new(config.effective_level())
        .map_err(|e| ObservabilityError::Config(format!("invalid log filter: {}", e)))
}
