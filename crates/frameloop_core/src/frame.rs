//! Frames, their shape, and the control sequences that move the cursor back over them.

use std::iter::Repeat;

use crate::compose::repeat_filler;

/// Moves the cursor one column left.
pub const BACKSPACE: &str = "\x08";
/// Moves the cursor to the start of the previous line (`ESC [ F`).
pub const BACKLINE: &str = "\x1b[F";

/// One rendered snapshot of an animation tick. Lines are joined with `\n`.
pub type Frame = String;

/// A lazily produced, possibly unbounded sequence of frames.
pub type FrameStream = Box<dyn Iterator<Item = Frame> + Send>;

/// Width (chars of the first line) and height (line count) of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameShape {
    pub width: usize,
    pub height: usize,
}

impl FrameShape {
    pub fn measure(frame: &str) -> Self {
        let mut lines = frame.split('\n');
        let width = lines.next().map(|l| l.chars().count()).unwrap_or(0);
        Self {
            width,
            height: 1 + lines.count(),
        }
    }

    pub fn is_single_line(&self) -> bool {
        self.height == 1
    }

    /// Whitespace block of this shape.
    pub fn blank(&self) -> String {
        vec![" ".repeat(self.width); self.height].join("\n")
    }
}

/// Control string that returns the cursor to where it was before a frame of
/// a given shape was written.
///
/// Single-line frames back up with `width` backspaces. Multi-line frames
/// leave the cursor on their last line, so they back up `height - 1` lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorBackup {
    shape: FrameShape,
    token: String,
}

impl CursorBackup {
    pub fn for_shape(shape: FrameShape) -> Self {
        let token = if shape.is_single_line() {
            BACKSPACE.repeat(shape.width)
        } else {
            BACKLINE.repeat(shape.height - 1)
        };
        Self { shape, token }
    }

    pub fn shape(&self) -> FrameShape {
        self.shape
    }

    pub fn as_str(&self) -> &str {
        &self.token
    }

    /// Endless supply of this backup, one per frame.
    pub fn filler(&self) -> Repeat<String> {
        if self.shape.is_single_line() {
            repeat_filler(BACKSPACE, self.shape.width)
        } else {
            repeat_filler(BACKLINE, self.shape.height - 1)
        }
    }

    /// Erase block for this shape: whitespace, then the backup itself.
    pub fn erase(&self) -> String {
        let mut out = self.shape.blank();
        out.push_str(&self.token);
        out
    }
}
