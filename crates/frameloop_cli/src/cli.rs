//! CLI argument definitions using clap derive macros.

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Terminal animations around long-running work
#[derive(Parser)]
#[command(name = "frameloop", about, version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Show buffered log lines once the animation has finished
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format: text (human-readable) or json (machine-readable)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal output for humans
    #[default]
    Text,
    /// Structured JSON; animation frames are not drawn on stdout
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the built-in animations
    List,
    /// Animate a sleep of the given duration
    Demo {
        #[command(flatten)]
        animation: AnimationArgs,
        /// How long the demo work runs
        #[arg(long, default_value_t = 2000)]
        duration_ms: u64,
        /// Run the work as a future under the async supervisor
        #[arg(long = "async")]
        use_async: bool,
    },
    /// Run a command under an animation, printing its output afterwards
    Exec {
        #[command(flatten)]
        animation: AnimationArgs,
        /// Command and arguments, after `--`
        #[arg(last = true, required = true)]
        command: Vec<String>,
    },
}

#[derive(Args, Clone, Debug)]
pub struct AnimationArgs {
    /// Built-in animation name (see `frameloop list`)
    #[arg(short, long, default_value = "bar")]
    pub animation: String,
    /// Width of sized animations
    #[arg(long, default_value_t = 5)]
    pub width: usize,
    /// Stack this many rows of the animation
    #[arg(long, default_value_t = 1)]
    pub rows: usize,
    /// Frames each row runs ahead of the one above it
    #[arg(long, default_value_t = 1)]
    pub offset: usize,
    /// Milliseconds between frames. Uses FRAMELOOP_STEP_MS if not set.
    #[arg(long)]
    pub step_ms: Option<u64>,
    /// Message printed before the work starts
    #[arg(long)]
    pub start_msg: Option<String>,
    /// Message printed after the work finishes
    #[arg(long)]
    pub end_msg: Option<String>,
    /// Do not end the start message with a newline
    #[arg(long)]
    pub no_newline: bool,
}
