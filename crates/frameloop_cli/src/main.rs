//! CLI entry point for frameloop.

mod cli;
mod commands;
mod logs;
mod output;

use clap::Parser;

use crate::cli::Cli;
use crate::logs::LogBuffer;

/// Load the nearest `.env` from the working directory or its parents, so
/// `FRAMELOOP_*` settings can live next to a project.
fn load_env_file() {
    let Ok(mut dir) = std::env::current_dir() else {
        return;
    };
    for _ in 0..32 {
        let env_file = dir.join(".env");
        if env_file.exists() {
            let _ = dotenvy::from_path(&env_file);
            break;
        }
        match dir.parent() {
            Some(parent) => dir = parent.to_path_buf(),
            None => break,
        }
    }
}

#[tokio::main]
async fn main() {
    load_env_file();
    let cli = Cli::parse();
    output::init(cli.output);
    let verbose = cli.verbose;
    let logs = LogBuffer::install(verbose);

    let result = commands::handle(cli).await;
    logs.flush(verbose);

    match result {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => {
            output::error(&format!("{:#}", e));
            std::process::exit(1);
        }
    }
}
