//! `frameloop exec -- CMD ARGS...`

use std::io::Write;
use std::process::Stdio;
use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use frameloop_runtime::{AsyncWork, animate_shared};
use serde_json::json;
use tokio::process::Command;

use crate::cli::AnimationArgs;
use crate::commands::{build_annotation, build_supervisor};
use crate::output;

/// Runs the command with its output captured, then replays that output once
/// the animation has been erased. Returns the command's exit code.
pub async fn handle(args: AnimationArgs, command: Vec<String>) -> Result<i32> {
    let program = command
        .first()
        .cloned()
        .ok_or_else(|| anyhow!("No command given after `--`"))?;

    let supervisor = Arc::new(build_supervisor(&args)?);
    let annotate = build_annotation(&args, &supervisor.config().output)?;

    let work = AsyncWork::new(program.clone(), |argv: Vec<String>| async move {
        Command::new(&argv[0])
            .args(&argv[1..])
            .stdin(Stdio::null())
            .output()
            .await
    });
    let mut work = animate_shared(work, Arc::clone(&supervisor))?;
    if let Some(annotate) = &annotate {
        work = annotate.wrap(work);
    }

    tracing::debug!(program = %program, args = command.len() - 1, "Running command");
    let captured = work
        .call(command.clone())
        .await
        .with_context(|| format!("Failed to run `{}`", program))?;
    let exit_code = captured.status.code().unwrap_or(1);
    tracing::debug!(program = %program, exit_code, "Command finished");

    if output::is_json() {
        output::data(
            "exec",
            &json!({
                "command": command,
                "exit_code": exit_code,
                "stdout": String::from_utf8_lossy(&captured.stdout),
                "stderr": String::from_utf8_lossy(&captured.stderr),
                "frames_drawn": supervisor.last_report().map(|r| r.frames_drawn),
            }),
        );
    } else {
        std::io::stdout().write_all(&captured.stdout)?;
        std::io::stdout().flush()?;
        std::io::stderr().write_all(&captured.stderr)?;
    }

    Ok(exit_code)
}
