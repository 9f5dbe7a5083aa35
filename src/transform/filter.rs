//! Predicate filtering.

use crate::core::{Cursor, Lookahead, Scan};
use crate::error::CursorError;

struct FilterScan<C, P> {
    upstream: C,
    predicate: P,
}

impl<C, P> Scan for FilterScan<C, P>
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    type Item = C::Item;

    fn find_next(&mut self) -> Result<Option<C::Item>, CursorError> {
        while let Some(value) = self.upstream.pull()? {
            if (self.predicate)(&value) {
                return Ok(Some(value));
            }
        }
        Ok(None)
    }

    fn remove_last(&mut self) -> Result<(), CursorError> {
        self.upstream.remove()
    }
}

/// Cursor skipping upstream elements that fail a predicate.
///
/// Rejected elements are consumed from the upstream and cannot be recovered,
/// even if this cursor is abandoned. `remove` forwards to the upstream and is
/// legal right after `next`, as long as no `has_next` pulled further ahead.
///
/// # Example
///
/// ```rust
/// use lazyseq::{Cursor, FilterCursor, IntoCursor};
///
/// let mut evens = FilterCursor::new(vec![1, 2, 3, 4].into_cursor(), |n: &i32| n % 2 == 0);
/// assert_eq!(evens.next(), Ok(2));
/// assert_eq!(evens.next(), Ok(4));
/// assert!(!evens.has_next());
/// ```
pub struct FilterCursor<C: Cursor, P> {
    scan: FilterScan<C, P>,
    lookahead: Lookahead<C::Item>,
}

impl<C, P> FilterCursor<C, P>
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    pub fn new(upstream: C, predicate: P) -> Self {
        Self {
            scan: FilterScan {
                upstream,
                predicate,
            },
            lookahead: Lookahead::new(),
        }
    }
}

impl<C, P> Cursor for FilterCursor<C, P>
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
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
