//! Built-in frame functions.

use std::sync::Arc;

use crate::animation::FrameFunction;

/// Width used by [`default_frames`].
pub const DEFAULT_WIDTH: usize = 5;

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Candycane pattern, darkest to lightest.
const CANDYCANE: [char; 4] = ['█', '▓', '▒', '░'];

/// A growing row of `#`, padded to `width`.
pub fn bar(width: usize) -> impl FrameFunction {
    move || (0..width).map(move |i| format!("{:<width$}", "#".repeat(i)))
}

/// Braille dots spinner, one character wide.
pub fn spinner() -> impl FrameFunction {
    || SPINNER_FRAMES.iter().map(|s| s.to_string())
}

/// `█▓▒░` repeated across `width` cells, shifting one cell per frame.
pub fn candycane(width: usize) -> impl FrameFunction {
    move || {
        (0..CANDYCANE.len()).map(move |frame| {
            (0..width)
                .map(|i| CANDYCANE[(i + frame) % CANDYCANE.len()])
                .collect::<String>()
        })
    }
}

/// A single `o` travelling to the right edge and back.
pub fn bounce(width: usize) -> impl FrameFunction {
    move || {
        let forward = 0..width;
        let back = (1..width.saturating_sub(1)).rev();
        forward.chain(back).map(move |pos| {
            let mut row = " ".repeat(width);
            row.replace_range(pos..pos + 1, "o");
            row
        })
    }
}

/// The animation used when a caller does not pick one.
pub fn default_frames() -> impl FrameFunction {
    bar(DEFAULT_WIDTH)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Builtin {
    pub name: &'static str,
    pub description: &'static str,
    /// Whether the `width` argument changes the output.
    pub sized: bool,
}

pub const BUILTINS: &[Builtin] = &[
    Builtin {
        name: "bar",
        description: "growing row of #",
        sized: true,
    },
    Builtin {
        name: "spinner",
        description: "braille dots spinner",
        sized: false,
    },
    Builtin {
        name: "candycane",
        description: "shifting shaded stripes",
        sized: true,
    },
    Builtin {
        name: "bounce",
        description: "ball bouncing between the edges",
        sized: true,
    },
];

/// Looks up a built-in animation by name.
pub fn builtin(name: &str, width: usize) -> Option<Arc<dyn FrameFunction>> {
    let frames: Arc<dyn FrameFunction> = match name {
        "bar" => Arc::new(bar(width)),
        "spinner" => Arc::new(spinner()),
        "candycane" => Arc::new(candycane(width)),
        "bounce" => Arc::new(bounce(width)),
        _ => return None,
    };
    Some(frames)
}
