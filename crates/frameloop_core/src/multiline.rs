//! Vertical stacking of single-line frame functions.

use std::sync::Arc;

use crate::animation::FrameFunction;
use crate::compose::zip_join;
use crate::error::{FrameError, Result};
use crate::frame::FrameStream;

/// `height` rows of the same single-line frame function, each started
/// `offset` frames further along than the row above it.
pub struct Stacked {
    row: Arc<dyn FrameFunction>,
    height: usize,
    offset: usize,
}

pub fn stack<F: FrameFunction + 'static>(row: F, height: usize, offset: usize) -> Result<Stacked> {
    stack_shared(Arc::new(row), height, offset)
}

pub fn stack_shared(row: Arc<dyn FrameFunction>, height: usize, offset: usize) -> Result<Stacked> {
    if height == 0 {
        return Err(FrameError::EmptySequence);
    }
    Ok(Stacked { row, height, offset })
}

impl Stacked {
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl FrameFunction for Stacked {
    fn frames(&self) -> FrameStream {
        let rows: Vec<FrameStream> = (0..self.height)
            .map(|i| {
                let mut row = self.row.frames();
                for _ in 0..i * self.offset {
                    if row.next().is_none() {
                        break;
                    }
                }
                row
            })
            .collect();
        Box::new(zip_join(rows, "\n"))
    }
}

impl std::fmt::Debug for Stacked {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stacked")
            .field("height", &self.height)
            .field("offset", &self.offset)
            .finish()
    }
}
