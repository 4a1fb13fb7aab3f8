//! Command dispatch and the setup shared by `demo` and `exec`.

pub mod demo;
pub mod exec;
pub mod list;

use std::sync::Arc;

use anyhow::{Result, anyhow};
use frameloop_core::{Animation, FrameFunction, builtin, stack_shared};
use frameloop_runtime::{AnimateConfig, Annotate, Output, SharedBuffer, Supervisor};

use crate::cli::{AnimationArgs, Cli, Command};
use crate::output;

/// Runs the selected command and returns the process exit code.
pub async fn handle(cli: Cli) -> Result<i32> {
    match cli.command {
        Command::List => list::handle().map(|_| 0),
        Command::Demo {
            animation,
            duration_ms,
            use_async,
        } => demo::handle(animation, duration_ms, use_async).await.map(|_| 0),
        Command::Exec { animation, command } => exec::handle(animation, command).await,
    }
}

/// Supervisor for the requested animation. Environment settings apply first,
/// flags override them. JSON mode draws into a discarded buffer so stdout
/// only carries JSON.
pub(crate) fn build_supervisor(args: &AnimationArgs) -> Result<Supervisor> {
    let row = builtin(&args.animation, args.width).ok_or_else(|| {
        anyhow!(
            "Unknown animation: {} (see `frameloop list`)",
            args.animation
        )
    })?;
    let frames: Arc<dyn FrameFunction> = if args.rows > 1 {
        Arc::new(stack_shared(row, args.rows, args.offset)?)
    } else {
        row
    };
    let animation = Animation::from_shared(frames)?;

    let mut config = AnimateConfig::from_env()?;
    if let Some(step_ms) = args.step_ms {
        config = config.with_step_millis(step_ms);
    }
    if output::is_json() {
        config = config.with_output(Output::Buffer(SharedBuffer::new()));
    }

    Ok(Supervisor::new(animation, config)?)
}

/// Start/end messages, written where the animation is drawn.
pub(crate) fn build_annotation(args: &AnimationArgs, target: &Output) -> Result<Option<Annotate>> {
    if args.start_msg.is_none() && args.end_msg.is_none() {
        return Ok(None);
    }
    let annotate = Annotate::new(args.start_msg.clone(), args.end_msg.clone())?
        .start_no_newline(args.no_newline)
        .with_output(target.clone());
    Ok(Some(annotate))
}
