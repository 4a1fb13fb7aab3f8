//! The loop that draws frames until its stop signal is set.

use std::io::Write;
use std::thread;
use std::time::Duration;

use frameloop_core::Animation;

use crate::error::RenderError;
use crate::signal::StopSignal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopping,
    Stopped,
}

/// Summary of one finished loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderReport {
    pub frames_drawn: u64,
    pub state: LoopState,
}

/// Draws `animation` into `out` every `step` until `signal` is stopped.
///
/// Every tick sleeps, draws and flushes before the signal is checked, so at
/// least one frame is always drawn. On stop the last frame is erased. The
/// animation is reset for its next run whether or not the loop succeeded.
pub fn run_render_loop<W: Write + ?Sized>(
    animation: &mut Animation,
    step: Duration,
    signal: &StopSignal,
    out: &mut W,
) -> Result<RenderReport, RenderError> {
    let drawn = draw_until_stopped(animation, step, signal, out);
    let reset = animation.reset();
    let frames_drawn = drawn?;
    reset?;

    Ok(RenderReport {
        frames_drawn,
        state: LoopState::Stopped,
    })
}

fn draw_until_stopped<W: Write + ?Sized>(
    animation: &mut Animation,
    step: Duration,
    signal: &StopSignal,
    out: &mut W,
) -> Result<u64, RenderError> {
    let mut state = LoopState::Running;
    let mut frames_drawn = 0u64;

    while state == LoopState::Running {
        thread::sleep(step);
        let frame = animation.next_frame()?;
        out.write_all(frame.as_bytes())?;
        out.flush()?;
        frames_drawn += 1;
        tracing::trace!(frame = frames_drawn, "Drew frame");

        if signal.is_stopped() {
            state = LoopState::Stopping;
        }
    }

    tracing::debug!(frames = frames_drawn, state = ?state, "Render loop stopping");
    if let Some(erase) = animation.erase_frame() {
        out.write_all(erase.as_bytes())?;
        out.flush()?;
    }
    Ok(frames_drawn)
}
