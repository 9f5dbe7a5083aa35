//! Start/stop/step sub-sequences.

use crate::builder::SliceBounds;
use crate::core::{Cursor, Lookahead, Scan};
use crate::error::CursorError;

struct SliceScan<C> {
    upstream: C,
    bounds: SliceBounds,
    // Upstream elements consumed so far, which is also the upstream index of
    // the element the next draw returns.
    position: usize,
    produced: bool,
}

impl<C: Cursor> SliceScan<C> {
    fn seek(&mut self) -> Result<(), CursorError> {
        while self.position < self.bounds.start {
            if self.upstream.pull()?.is_none() {
                break;
            }
            self.position += 1;
        }
        log::debug!(
            "sub-sequence seek skipped {} of {} leading elements",
            self.position,
            self.bounds.start
        );
        Ok(())
    }

    // Upstream index of the next element to produce.
    fn target(&self) -> usize {
        if self.produced {
            self.position.saturating_add(self.bounds.step - 1)
        } else {
            self.position
        }
    }
}

impl<C: Cursor> Scan for SliceScan<C> {
    type Item = C::Item;

    fn find_next(&mut self) -> Result<Option<C::Item>, CursorError> {
        let target = self.target();
        if self.bounds.stop.is_some_and(|stop| target >= stop) {
            return Ok(None);
        }
        // Upstream is not indexable, so the stride is drawn and dropped.
        while self.position < target {
            if self.upstream.pull()?.is_none() {
                return Ok(None);
            }
            self.position += 1;
        }
        let Some(value) = self.upstream.pull()? else {
            return Ok(None);
        };
        self.position += 1;
        self.produced = true;
        Ok(Some(value))
    }

    fn remove_last(&mut self) -> Result<(), CursorError> {
        self.upstream.remove()
    }
}

/// Cursor over the `start..stop` by `step` sub-sequence of its upstream.
///
/// Construction validates the bounds and then seeks: the first `start`
/// upstream elements are drawn and dropped before the constructor returns.
///
/// # Example
///
/// ```rust
/// use lazyseq::{Cursor, IntoCursor, SliceBounds, SubSequenceCursor};
///
/// let bounds = SliceBounds::new().start(2).stop(8).step(2);
/// let mut cursor = SubSequenceCursor::new((0..10).into_cursor(), bounds).unwrap();
/// assert_eq!(cursor.next(), Ok(2));
/// assert_eq!(cursor.next(), Ok(4));
/// assert_eq!(cursor.next(), Ok(6));
/// assert!(!cursor.has_next());
/// ```
pub struct SubSequenceCursor<C: Cursor> {
    scan: SliceScan<C>,
    lookahead: Lookahead<C::Item>,
}

impl<C: Cursor> SubSequenceCursor<C> {
    pub fn new(upstream: C, bounds: SliceBounds) -> Result<Self, CursorError> {
        bounds.check()?;

        let mut scan = SliceScan {
            upstream,
            bounds,
            position: 0,
            produced: false,
        };
        scan.seek()?;

        Ok(Self {
            scan,
            lookahead: Lookahead::new(),
        })
    }

    pub fn bounds(&self) -> &SliceBounds {
        &self.scan.bounds
    }
}

impl<C: Cursor> Cursor for SubSequenceCursor<C> {
    type Item = C::Item;

    fn has_next(&mut self) -> bool {
        self.lookahead.has_next(&mut self.scan)
    }

    fn next(&mut self) -> Result<C::Item, CursorError> {
        self.lookahead.next(&mut self.scan)
    }

    fn remove(&mut self) -> Result<(), CursorError> {
        self.lookahead.remove(&mut self.scan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Iter;
    use crate::error::ArgumentError;
    use crate::source::{IterCursor, VecCursor};
    use std::cell::Cell;

    fn collect(range: std::ops::Range<i32>, bounds: SliceBounds) -> Vec<i32> {
        let cursor = SubSequenceCursor::new(IterCursor::new(range), bounds).unwrap();
        Iter::new(cursor).collect()
    }

    #[test]
    fn slices_with_stride() {
        let bounds = SliceBounds::new().start(2).stop(8).step(2);
        assert_eq!(collect(0..10, bounds), vec![2, 4, 6]);
    }

    #[test]
    fn default_bounds_pass_everything() {
        assert_eq!(collect(0..4, SliceBounds::new()), vec![0, 1, 2, 3]);
    }

    #[test]
    fn unbounded_stop_runs_to_the_end() {
        let bounds = SliceBounds::new().start(1).step(3);
        assert_eq!(collect(0..10, bounds), vec![1, 4, 7]);
    }

    #[test]
    fn stop_is_exclusive() {
        let bounds = SliceBounds::new().start(1).stop(7).step(3);
        assert_eq!(collect(0..10, bounds), vec![1, 4]);
    }

    #[test]
    fn start_equal_to_stop_is_empty() {
        let bounds = SliceBounds::new().start(3).stop(3);
        assert!(collect(0..10, bounds).is_empty());
    }

    #[test]
    fn start_past_the_end_is_empty() {
        let bounds = SliceBounds::new().start(20);
        assert!(collect(0..10, bounds).is_empty());
    }

    #[test]
    fn zero_step_is_rejected() {
        let result = SubSequenceCursor::new(IterCursor::new(0..10), SliceBounds::new().step(0));
        match result {
            Err(CursorError::InvalidArgument { violations }) => {
                assert_eq!(violations, vec![ArgumentError::ZeroStep]);
            }
            _ => panic!("Expected invalid argument"),
        }
    }

    #[test]
    fn invalid_bounds_leave_upstream_untouched() {
        let mut upstream = IterCursor::new(0..10);
        let bounds = SliceBounds::new().start(5).stop(2);
        assert!(SubSequenceCursor::new(&mut upstream, bounds).is_err());
        assert_eq!(upstream.next(), Ok(0));
    }

    #[test]
    fn seek_happens_at_construction() {
        let mut upstream = IterCursor::new(0..10);
        let cursor = SubSequenceCursor::new(&mut upstream, SliceBounds::new().start(3)).unwrap();
        drop(cursor);
        assert_eq!(upstream.next(), Ok(3));
    }

    #[test]
    fn does_not_draw_past_stop() {
        let drawn = Cell::new(0);
        let upstream = IterCursor::new((0..100).inspect(|_| drawn.set(drawn.get() + 1)));
        let bounds = SliceBounds::new().start(2).stop(8).step(2);
        let cursor = SubSequenceCursor::new(upstream, bounds).unwrap();

        assert_eq!(Iter::new(cursor).count(), 3);
        assert_eq!(drawn.get(), 7);
    }

    #[test]
    fn has_next_is_idempotent() {
        let mut cursor =
            SubSequenceCursor::new(IterCursor::new(0..10), SliceBounds::new().step(5)).unwrap();
        assert!(cursor.has_next());
        assert!(cursor.has_next());
        assert_eq!(cursor.next(), Ok(0));
        assert!(cursor.has_next());
        assert!(cursor.has_next());
        assert_eq!(cursor.next(), Ok(5));
        assert!(!cursor.has_next());
        assert_eq!(cursor.next(), Err(CursorError::Exhausted));
    }

    #[test]
    fn remove_forwards_to_upstream() {
        let mut values = vec![0, 1, 2, 3, 4, 5];
        let bounds = SliceBounds::new().start(1).step(2);
        let mut cursor = SubSequenceCursor::new(VecCursor::new(&mut values), bounds).unwrap();

        assert!(cursor.remove().is_err());
        assert_eq!(cursor.next(), Ok(1));
        cursor.remove().unwrap();
        assert!(cursor.remove().is_err());
        drop(cursor);

        assert_eq!(values, vec![0, 2, 3, 4, 5]);
    }

    #[test]
    fn remove_after_stride_runs_out_is_illegal() {
        let mut values = vec![0, 1];
        let bounds = SliceBounds::new().step(2);
        let mut cursor = SubSequenceCursor::new(VecCursor::new(&mut values), bounds).unwrap();

        assert_eq!(cursor.next(), Ok(0));
        assert!(!cursor.has_next());
        assert!(matches!(
            cursor.remove(),
            Err(CursorError::IllegalState { .. })
        ));
        drop(cursor);
        assert_eq!(values, vec![0, 1]);
    }

    #[test]
    fn remove_after_exhausted_next_is_illegal() {
        let mut values = vec![0, 1];
        let bounds = SliceBounds::new().step(2);
        let mut cursor = SubSequenceCursor::new(VecCursor::new(&mut values), bounds).unwrap();

        assert_eq!(cursor.next(), Ok(0));
        assert_eq!(cursor.next(), Err(CursorError::Exhausted));
        assert!(matches!(
            cursor.remove(),
            Err(CursorError::IllegalState { .. })
        ));
        drop(cursor);
        assert_eq!(values, vec![0, 1]);
    }
}
