//! `frameloop list`

use anyhow::Result;
use frameloop_core::animations::DEFAULT_WIDTH;
use frameloop_core::{BUILTINS, FrameFunction, builtin};
use serde::Serialize;

use crate::output;

#[derive(Serialize)]
struct Entry {
    name: &'static str,
    description: &'static str,
    sized: bool,
    preview: String,
}

pub fn handle() -> Result<()> {
    let entries: Vec<Entry> = BUILTINS
        .iter()
        .map(|b| Entry {
            name: b.name,
            description: b.description,
            sized: b.sized,
            preview: preview(b.name),
        })
        .collect();

    output::header("Built-in Animations");

    let mut table = output::table();
    output::table_header(&mut table, &["Animation", "Description", "Preview"]);
    for entry in &entries {
        output::table_row(&mut table, &[entry.name, entry.description, &entry.preview]);
    }
    output::table_print(&table, &entries);

    Ok(())
}

/// A frame from early in the animation at the default width.
fn preview(name: &str) -> String {
    builtin(name, DEFAULT_WIDTH)
        .and_then(|frames| frames.frames().nth(2))
        .unwrap_or_default()
}
