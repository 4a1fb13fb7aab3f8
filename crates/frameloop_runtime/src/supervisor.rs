//! Runs a unit of work while its animation is drawn in the background.
//!
//! The work must not write to the stream the animation is drawn on.

use std::future::Future;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use frameloop_core::{default_frames, Animation};
use frameloop_observability::{record_duration, record_error, supervisor_span};
use futures::FutureExt;
use tracing::Instrument;

use crate::config::AnimateConfig;
use crate::error::{ConfigError, RenderError};
use crate::render::{run_render_loop, RenderReport};
use crate::signal::StopSignal;
use crate::terminal::Output;

const RENDER_THREAD_NAME: &str = "frameloop-render";

type RenderResult = Result<RenderReport, RenderError>;

/// Owns one animation and draws it around each supervised call.
///
/// Only one render loop runs per supervisor at a time. A run that starts
/// while another is drawing, whether nested inside it or on another thread,
/// runs its work without an animation of its own.
pub struct Supervisor {
    animation: Arc<Mutex<Animation>>,
    config: AnimateConfig,
    last_report: Mutex<Option<RenderReport>>,
    drawing: AtomicBool,
}

impl Supervisor {
    pub fn new(animation: Animation, config: AnimateConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            animation: Arc::new(Mutex::new(animation)),
            config,
            last_report: Mutex::new(None),
            drawing: AtomicBool::new(false),
        })
    }

    /// Supervisor drawing [`default_frames`].
    pub fn with_default_animation(config: AnimateConfig) -> Result<Self, ConfigError> {
        let animation = Animation::instantiate(default_frames())?;
        Self::new(animation, config)
    }

    pub fn config(&self) -> &AnimateConfig {
        &self.config
    }

    /// Report of the most recent render loop. `None` before the first run,
    /// while a run is in progress, after a disabled run, or when the last
    /// loop failed.
    pub fn last_report(&self) -> Option<RenderReport> {
        *self.report_slot()
    }

    /// Runs `work` on the calling thread with the animation drawn on a
    /// dedicated thread. The loop has stopped and erased its frame before
    /// this returns, and before a panic from `work` is resumed.
    pub fn run<T>(&self, work: impl FnOnce() -> T) -> T {
        if !self.config.enabled {
            return work();
        }
        let Some(_claim) = self.claim() else {
            tracing::debug!("Animation already drawing; running work without a second loop");
            return work();
        };

        let span = supervisor_span!("sync", step_millis(self.config.step));
        let _enter = span.enter();
        let started = Instant::now();
        self.report_slot().take();

        let signal = StopSignal::new();
        let handle = match self.spawn_render_thread(signal.clone()) {
            Ok(handle) => Some(handle),
            Err(e) => {
                tracing::warn!(error = %e, "Could not start render thread; running without animation");
                None
            }
        };
        let guard = RenderThreadGuard {
            supervisor: self,
            signal,
            handle,
        };

        let value = work();
        drop(guard);

        record_duration("run.duration_ms", started.elapsed());
        value
    }

    /// Async counterpart of [`run`](Self::run). The loop runs on a
    /// `spawn_blocking` worker, so this must be awaited inside a tokio
    /// runtime.
    pub async fn run_async<F, Fut>(&self, work: F) -> Fut::Output
    where
        F: FnOnce() -> Fut,
        Fut: Future,
    {
        if !self.config.enabled {
            return work().await;
        }
        let Some(_claim) = self.claim() else {
            tracing::debug!("Animation already drawing; running work without a second loop");
            return work().await;
        };

        let span = supervisor_span!("async", step_millis(self.config.step));
        async move {
            let started = Instant::now();
            self.report_slot().take();

            let signal = StopSignal::new();
            let _stop_on_drop = signal.stop_on_drop();
            let job = {
                let animation = Arc::clone(&self.animation);
                let output = self.config.output.clone();
                let step = self.config.step;
                let signal = signal.clone();
                tokio::task::spawn_blocking(move || render_job(&animation, &output, step, &signal))
            };

            // `work()` itself may panic before handing back a future.
            let outcome = AssertUnwindSafe(async move { work().await })
                .catch_unwind()
                .await;
            signal.stop();

            match job.await {
                Ok(result) => self.finish(result),
                Err(e) => tracing::error!(error = %e, "Render worker failed"),
            }
            record_duration("run.duration_ms", started.elapsed());

            match outcome {
                Ok(value) => value,
                Err(payload) => panic::resume_unwind(payload),
            }
        }
        .instrument(span)
        .await
    }

    fn spawn_render_thread(&self, signal: StopSignal) -> std::io::Result<JoinHandle<RenderResult>> {
        let animation = Arc::clone(&self.animation);
        let output = self.config.output.clone();
        let step = self.config.step;
        thread::Builder::new()
            .name(RENDER_THREAD_NAME.to_string())
            .spawn(move || render_job(&animation, &output, step, &signal))
    }

    fn finish(&self, result: RenderResult) {
        match result {
            Ok(report) => {
                tracing::debug!(frames = report.frames_drawn, "Render loop stopped");
                *self.report_slot() = Some(report);
            }
            Err(e) => record_error(&e),
        }
    }

    fn claim(&self) -> Option<DrawingClaim<'_>> {
        if self.drawing.swap(true, Ordering::AcqRel) {
            return None;
        }
        Some(DrawingClaim {
            drawing: &self.drawing,
        })
    }

    fn report_slot(&self) -> MutexGuard<'_, Option<RenderReport>> {
        self.last_report.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for Supervisor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Supervisor")
            .field("config", &self.config)
            .field("last_report", &self.last_report())
            .finish_non_exhaustive()
    }
}

fn render_job(
    animation: &Mutex<Animation>,
    output: &Output,
    step: Duration,
    signal: &StopSignal,
) -> RenderResult {
    let mut animation = animation.lock().unwrap_or_else(PoisonError::into_inner);
    let mut out = output.writer();
    run_render_loop(&mut animation, step, signal, &mut out)
}

fn step_millis(step: Duration) -> u64 {
    step.as_millis() as u64
}

/// Stops and joins the render thread when dropped, so the loop is finished
/// whether the work returned or panicked.
struct RenderThreadGuard<'a> {
    supervisor: &'a Supervisor,
    signal: StopSignal,
    handle: Option<JoinHandle<RenderResult>>,
}

impl Drop for RenderThreadGuard<'_> {
    fn drop(&mut self) {
        self.signal.stop();
        if let Some(handle) = self.handle.take() {
            match handle.join() {
                Ok(result) => self.supervisor.finish(result),
                Err(_) => tracing::error!("Render thread panicked"),
            }
        }
    }
}

/// Marks the supervisor as drawing until dropped.
struct DrawingClaim<'a> {
    drawing: &'a AtomicBool,
}

impl Drop for DrawingClaim<'_> {
    fn drop(&mut self) {
        self.drawing.store(false, Ordering::Release);
    }
}
