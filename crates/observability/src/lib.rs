//! frameloop observability - logging setup shared by the frameloop crates
//!
//! Libraries only emit `tracing` events; binaries call [`init`] once.
//!
//! # Quick Start
//!
//! ```no_run
//! use frameloop_observability::{init, ObservabilityConfig};
//!
//! let config = ObservabilityConfig::new("frameloop").with_log_level("info");
//! init(config)?;
//!
//! tracing::info!("started");
//! # Ok::<(), frameloop_observability::ObservabilityError>(())
//! ```
//!
//! # Environment Variables
//!
//! - `FRAMELOOP_LOG` or `RUST_LOG` - filter directives (default `warn`)
//! - `FRAMELOOP_LOG_CONSOLE` - `0`/`false` turns off stderr output

pub mod config;
pub mod error;
mod sink_layer;
pub mod subscriber;
pub mod tracing;

pub use config::{LogSink, ObservabilityConfig, DEFAULT_LOG_LEVEL};
pub use error::ObservabilityError;
pub use subscriber::{init, init_from_env};
pub use crate::tracing::{record_duration, record_error};
