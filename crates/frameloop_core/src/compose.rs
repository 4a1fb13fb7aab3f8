//! Composition primitives for frame sequences.
//!
//! Everything here is lazy: nothing is pulled from a source until the
//! composed iterator is advanced.

use std::iter::{Cycle, Repeat};
use std::vec::IntoIter;

use crate::error::{FrameError, Result};
use crate::frame::{Frame, FrameStream};

/// Repeats a finite sequence forever: the i-th item is `items[i % len]`.
pub fn cycle<T: Clone>(items: impl IntoIterator<Item = T>) -> Result<Cycle<IntoIter<T>>> {
    let items: Vec<T> = items.into_iter().collect();
    if items.is_empty() {
        return Err(FrameError::EmptySequence);
    }
    Ok(items.into_iter().cycle())
}

/// Every element is `token` repeated `count` times.
pub fn repeat_filler(token: &str, count: usize) -> Repeat<String> {
    std::iter::repeat(token.repeat(count))
}

/// Pulls one element from every source per step and joins them with
/// `separator`. Ends as soon as any source is exhausted.
pub fn zip_join<I>(sources: I, separator: impl Into<String>) -> ZipJoin
where
    I: IntoIterator<Item = FrameStream>,
{
    ZipJoin {
        sources: sources.into_iter().collect(),
        separator: separator.into(),
        exhausted: false,
    }
}

pub struct ZipJoin {
    sources: Vec<FrameStream>,
    separator: String,
    exhausted: bool,
}

impl Iterator for ZipJoin {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        if self.exhausted || self.sources.is_empty() {
            return None;
        }
        let mut parts = Vec::with_capacity(self.sources.len());
        for source in &mut self.sources {
            match source.next() {
                Some(part) => parts.push(part),
                None => {
                    self.exhausted = true;
                    return None;
                }
            }
        }
        Some(parts.join(&self.separator))
    }
}

/// Cycles a restartable sequence: when the current run ends, `factory` is
/// called for a fresh one. A fresh run that yields nothing ends the cycle,
/// so an empty source cannot spin forever.
pub fn restart_cycle<F, I>(mut factory: F) -> RestartCycle<F, I>
where
    F: FnMut() -> I,
    I: Iterator,
{
    let current = factory();
    RestartCycle {
        factory,
        current,
        fresh: true,
    }
}

pub struct RestartCycle<F, I> {
    factory: F,
    current: I,
    /// True until the current run has produced an item.
    fresh: bool,
}

impl<F, I> Iterator for RestartCycle<F, I>
where
    F: FnMut() -> I,
    I: Iterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        loop {
            if let Some(item) = self.current.next() {
                self.fresh = false;
                return Some(item);
            }
            if self.fresh {
                return None;
            }
            self.current = (self.factory)();
            self.fresh = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream(items: &[&str]) -> FrameStream {
        let owned: Vec<String> = items.iter().map(|s| s.to_string()).collect();
        Box::new(owned.into_iter())
    }

    #[test]
    fn test_cycle_wraps_around() {
        let items = vec!["a", "b", "c"];
        let taken: Vec<_> = cycle(items.clone()).unwrap().take(10).collect();
        for (i, item) in taken.iter().enumerate() {
            assert_eq!(*item, items[i % items.len()]);
        }
    }

    #[test]
    fn test_cycle_single_item() {
        let taken: Vec<_> = cycle([7]).unwrap().take(3).collect();
        assert_eq!(taken, vec![7, 7, 7]);
    }

    #[test]
    fn test_cycle_empty_fails() {
        let result = cycle(Vec::<String>::new());
        assert_eq!(result.err(), Some(FrameError::EmptySequence));
    }

    #[test]
    fn test_repeat_filler() {
        let taken: Vec<_> = repeat_filler("\x08", 3).take(2).collect();
        assert_eq!(taken, vec!["\x08\x08\x08", "\x08\x08\x08"]);
    }

    #[test]
    fn test_repeat_filler_zero_count_is_empty_string() {
        assert_eq!(repeat_filler("x", 0).next().as_deref(), Some(""));
    }

    #[test]
    fn test_zip_join_joins_with_separator() {
        let joined: Vec<_> = zip_join(vec![stream(&["a", "b"]), stream(&["1", "2"])], "-").collect();
        assert_eq!(joined, vec!["a-1", "b-2"]);
    }

    #[test]
    fn test_zip_join_stops_at_shortest() {
        let endless: FrameStream = Box::new(repeat_filler("*", 2));
        let joined: Vec<_> = zip_join(vec![stream(&["x", "y", "z"]), endless], "").collect();
        assert_eq!(joined, vec!["x**", "y**", "z**"]);
    }

    #[test]
    fn test_zip_join_stays_exhausted() {
        let mut joined = zip_join(vec![stream(&["a"]), stream(&["b", "c"])], "");
        assert_eq!(joined.next().as_deref(), Some("ab"));
        assert_eq!(joined.next(), None);
        assert_eq!(joined.next(), None);
    }

    #[test]
    fn test_zip_join_no_sources() {
        assert_eq!(zip_join(Vec::new(), ",").next(), None);
    }

    #[test]
    fn test_restart_cycle_repeats_finite_source() {
        let taken: Vec<_> = restart_cycle(|| vec![1, 2].into_iter()).take(5).collect();
        assert_eq!(taken, vec![1, 2, 1, 2, 1]);
    }

    #[test]
    fn test_restart_cycle_empty_source_ends() {
        let mut calls = 0;
        let mut cyc = restart_cycle(|| {
            calls += 1;
            Vec::<u8>::new().into_iter()
        });
        assert_eq!(cyc.next(), None);
        drop(cyc);
        assert_eq!(calls, 1);
    }
}
