//! Cyclic replay of a finite upstream.

use crate::builder::Repeat;
use crate::core::Cursor;
use crate::error::CursorError;
use serde::{Deserialize, Serialize};

/// Phase of a [`CyclicCursor`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CyclePhase {
    /// Upstream not yet exhausted; produced elements are buffered.
    Draining,
    /// Upstream exhausted; elements are served from the buffer.
    Replaying,
}

/// Cursor replaying its upstream indefinitely or a bounded number of passes.
///
/// The first pass drains the upstream, buffering every element it produces.
/// Once the upstream is exhausted the buffer is frozen and served round-robin.
/// [`Repeat::Times`] counts total passes, the draining pass included, so
/// `Times(2)` over `[1, 2, 3]` yields `[1, 2, 3, 1, 2, 3]` and `Times(0)`
/// yields nothing without touching the upstream.
///
/// `remove` is unsupported: replayed elements have no position in the source.
///
/// # Example
///
/// ```rust
/// use lazyseq::{CyclicCursor, IntoCursor, Repeat};
///
/// let cursor = CyclicCursor::new(vec![1, 2, 3].into_cursor(), Repeat::Times(2));
/// let values: Vec<_> = lazyseq::Iter::new(cursor).collect();
/// assert_eq!(values, vec![1, 2, 3, 1, 2, 3]);
/// ```
pub struct CyclicCursor<C: Cursor> {
    upstream: C,
    buffer: Vec<C::Item>,
    replay_index: usize,
    repeat: Repeat,
    passes_done: usize,
    phase: CyclePhase,
}

impl<C> CyclicCursor<C>
where
    C: Cursor,
    C::Item: Clone,
{
    pub fn new(upstream: C, repeat: Repeat) -> Self {
        Self {
            upstream,
            buffer: Vec::new(),
            replay_index: 0,
            repeat,
            passes_done: 0,
            phase: CyclePhase::Draining,
        }
    }

    /// Cycle without bound.
    pub fn forever(upstream: C) -> Self {
        Self::new(upstream, Repeat::Forever)
    }

    /// Restore a cursor that is already replaying a frozen buffer.
    pub(crate) fn replaying(
        upstream: C,
        buffer: Vec<C::Item>,
        replay_index: usize,
        passes_done: usize,
        repeat: Repeat,
    ) -> Self {
        Self {
            upstream,
            buffer,
            replay_index,
            repeat,
            passes_done,
            phase: CyclePhase::Replaying,
        }
    }

    pub fn phase(&self) -> CyclePhase {
        self.phase
    }

    pub fn repeat(&self) -> Repeat {
        self.repeat
    }

    /// Completed passes over the source.
    pub fn passes_done(&self) -> usize {
        self.passes_done
    }

    pub fn replay_index(&self) -> usize {
        self.replay_index
    }

    /// Elements buffered so far.
    pub fn buffer(&self) -> &[C::Item] {
        &self.buffer
    }

    fn finish_draining(&mut self) {
        self.phase = CyclePhase::Replaying;
        self.passes_done = 1;
        log::debug!(
            "cyclic cursor drained {} elements, replaying ({:?})",
            self.buffer.len(),
            self.repeat
        );
    }
}

impl<C> Cursor for CyclicCursor<C>
where
    C: Cursor,
    C::Item: Clone,
{
    type Item = C::Item;

    fn has_next(&mut self) -> bool {
        if self.repeat == Repeat::Times(0) {
            return false;
        }
        if self.phase == CyclePhase::Draining {
            if self.upstream.has_next() {
                return true;
            }
            self.finish_draining();
        }
        !self.buffer.is_empty() && self.repeat.allows(self.passes_done)
    }

    fn next(&mut self) -> Result<C::Item, CursorError> {
        if !self.has_next() {
            return Err(CursorError::Exhausted);
        }
        match self.phase {
            CyclePhase::Draining => {
                let value = self.upstream.next()?;
                self.buffer.push(value.clone());
                Ok(value)
            }
            CyclePhase::Replaying => {
                let value = self
                    .buffer
                    .get(self.replay_index)
                    .cloned()
                    .ok_or(CursorError::Exhausted)?;
                self.replay_index += 1;
                if self.replay_index == self.buffer.len() {
                    self.replay_index = 0;
                    self.passes_done = self.passes_done.saturating_add(1);
                    if !self.repeat.allows(self.passes_done) {
                        log::trace!("cyclic cursor completed {} passes", self.passes_done);
                    }
                }
                Ok(value)
            }
        }
    }

    fn remove(&mut self) -> Result<(), CursorError> {
        Err(CursorError::unsupported("CyclicCursor"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Iter;
    use crate::source::{IterCursor, VecCursor};

    fn take<C: Cursor>(cursor: &mut C, n: usize) -> Vec<C::Item> {
        (0..n).filter_map(|_| cursor.pull().ok().flatten()).collect()
    }

    #[test]
    fn bounded_repeats_count_total_passes() {
        let cursor = CyclicCursor::new(IterCursor::new(1..4), Repeat::Times(2));
        assert_eq!(Iter::new(cursor).collect::<Vec<_>>(), vec![1, 2, 3, 1, 2, 3]);
    }

    #[test]
    fn single_pass_is_the_source() {
        let cursor = CyclicCursor::new(IterCursor::new(1..4), Repeat::Times(1));
        assert_eq!(Iter::new(cursor).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn zero_repeats_yield_nothing() {
        let mut upstream = IterCursor::new(1..4);
        let mut cursor = CyclicCursor::new(&mut upstream, Repeat::Times(0));
        assert!(!cursor.has_next());
        assert_eq!(cursor.next(), Err(CursorError::Exhausted));
        drop(cursor);
        assert_eq!(upstream.next(), Ok(1));
    }

    #[test]
    fn forever_keeps_cycling() {
        let mut cursor = CyclicCursor::forever(IterCursor::new(vec!['a', 'b'].into_iter()));
        assert_eq!(take(&mut cursor, 7), vec!['a', 'b', 'a', 'b', 'a', 'b', 'a']);
        assert!(cursor.has_next());
        assert_eq!(cursor.phase(), CyclePhase::Replaying);
    }

    #[test]
    fn empty_source_is_exhausted_even_forever() {
        let mut cursor = CyclicCursor::forever(IterCursor::new(std::iter::empty::<u8>()));
        assert!(!cursor.has_next());
        assert_eq!(cursor.next(), Err(CursorError::Exhausted));
    }

    #[test]
    fn buffer_only_grows_while_draining() {
        let mut cursor = CyclicCursor::new(IterCursor::new(1..3), Repeat::Times(3));
        assert_eq!(take(&mut cursor, 2), vec![1, 2]);
        assert_eq!(cursor.phase(), CyclePhase::Draining);
        assert_eq!(cursor.buffer(), &[1, 2]);

        assert!(cursor.has_next());
        assert_eq!(cursor.phase(), CyclePhase::Replaying);
        assert_eq!(take(&mut cursor, 10), vec![1, 2, 1, 2]);
        assert_eq!(cursor.buffer(), &[1, 2]);
        assert_eq!(cursor.passes_done(), 3);
    }

    #[test]
    fn next_without_has_next_switches_phase() {
        let mut cursor = CyclicCursor::new(IterCursor::new(0..1), Repeat::Times(3));
        assert_eq!(cursor.next(), Ok(0));
        assert_eq!(cursor.next(), Ok(0));
        assert_eq!(cursor.next(), Ok(0));
        assert_eq!(cursor.next(), Err(CursorError::Exhausted));
    }

    #[test]
    fn has_next_is_idempotent_across_phases() {
        let mut cursor = CyclicCursor::new(IterCursor::new(0..2), Repeat::Times(2));
        for expected in [0, 1, 0, 1] {
            assert!(cursor.has_next());
            assert!(cursor.has_next());
            assert_eq!(cursor.next(), Ok(expected));
        }
        assert!(!cursor.has_next());
        assert!(!cursor.has_next());
    }

    #[test]
    fn remove_is_unsupported() {
        let mut values = vec![1, 2];
        let mut cursor = CyclicCursor::forever(VecCursor::new(&mut values));
        cursor.next().unwrap();
        assert_eq!(
            cursor.remove(),
            Err(CursorError::Unsupported {
                cursor: "CyclicCursor"
            })
        );
        drop(cursor);
        assert_eq!(values, vec![1, 2]);
    }
}
