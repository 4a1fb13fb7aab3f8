//! `frameloop demo`

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use frameloop_runtime::{AsyncWork, Work, animate_shared};
use serde_json::json;

use crate::cli::AnimationArgs;
use crate::commands::{build_annotation, build_supervisor};
use crate::output;

pub async fn handle(args: AnimationArgs, duration_ms: u64, use_async: bool) -> Result<()> {
    let supervisor = Arc::new(build_supervisor(&args)?);
    let annotate = build_annotation(&args, &supervisor.config().output)?;
    let duration = Duration::from_millis(duration_ms);

    let elapsed = if use_async {
        let work = AsyncWork::new("demo", |duration: Duration| async move {
            let started = Instant::now();
            tokio::time::sleep(duration).await;
            started.elapsed()
        })
        .with_doc("Sleeps on the tokio timer.");
        let mut work = animate_shared(work, Arc::clone(&supervisor))?;
        if let Some(annotate) = &annotate {
            work = annotate.wrap(work);
        }
        work.call(duration).await
    } else {
        let work = Work::new("demo", |duration: Duration| {
            let started = Instant::now();
            thread::sleep(duration);
            started.elapsed()
        })
        .with_doc("Blocks the calling thread.");
        let mut work = animate_shared(work, Arc::clone(&supervisor))?;
        if let Some(annotate) = &annotate {
            work = annotate.wrap(work);
        }
        tokio::task::spawn_blocking(move || work.call(duration)).await?
    };

    tracing::debug!(elapsed_ms = elapsed.as_millis() as u64, "Demo finished");

    if output::is_json() {
        let report = supervisor.last_report();
        output::data(
            "demo",
            &json!({
                "animation": args.animation,
                "async": use_async,
                "duration_ms": duration_ms,
                "elapsed_ms": elapsed.as_millis() as u64,
                "frames_drawn": report.map(|r| r.frames_drawn),
            }),
        );
    }
    Ok(())
}
