//! Draws a terminal animation while a unit of work runs.
//!
//! A [`Supervisor`] owns an [`Animation`](frameloop_core::Animation) and runs
//! work under it, either on the calling thread ([`Supervisor::run`]) or inside
//! a tokio runtime ([`Supervisor::run_async`]). The animation is drawn by a
//! background render loop and erased before the work's result is returned.

pub mod annotate;
pub mod config;
pub mod decorate;
pub mod error;
pub mod render;
pub mod signal;
pub mod supervisor;
pub mod terminal;

#[cfg(test)]
mod tests;

pub use annotate::Annotate;
pub use config::{AnimateConfig, DEFAULT_STEP};
pub use decorate::{animate, animate_shared, AsyncWork, Decorate, Decoration, Work, WorkKind, WorkMeta};
pub use error::{ConfigError, RenderError, Result};
pub use render::{run_render_loop, LoopState, RenderReport};
pub use signal::StopSignal;
pub use supervisor::Supervisor;
pub use terminal::{Output, SharedBuffer, WriterFactory};
