//! Fixed-size batching.

use crate::core::Cursor;
use crate::error::{ArgumentError, CursorError};
use std::num::NonZeroUsize;

/// Cursor grouping upstream elements into batches of `size`.
///
/// The final batch may be shorter when the upstream runs out; nothing is
/// produced after it. Batches are never empty. `remove` is unsupported.
///
/// # Example
///
/// ```rust
/// use lazyseq::{BatchCursor, Iter, IntoCursor};
///
/// let cursor = BatchCursor::new((1..=7).into_cursor(), 3).unwrap();
/// let batches: Vec<Vec<i32>> = Iter::new(cursor).collect();
/// assert_eq!(batches, vec![vec![1, 2, 3], vec![4, 5, 6], vec![7]]);
/// ```
pub struct BatchCursor<C> {
    upstream: C,
    size: NonZeroUsize,
    finished: bool,
}

impl<C: Cursor> BatchCursor<C> {
    pub fn new(upstream: C, size: usize) -> Result<Self, CursorError> {
        let size = NonZeroUsize::new(size)
            .ok_or_else(|| CursorError::invalid(ArgumentError::ZeroBatchSize))?;
        Ok(Self {
            upstream,
            size,
            finished: false,
        })
    }

    pub fn size(&self) -> usize {
        self.size.get()
    }
}

impl<C: Cursor> Cursor for BatchCursor<C> {
    type Item = Vec<C::Item>;

    fn has_next(&mut self) -> bool {
        !self.finished && self.upstream.has_next()
    }

    fn next(&mut self) -> Result<Vec<C::Item>, CursorError> {
        if !self.has_next() {
            return Err(CursorError::Exhausted);
        }
        let size = self.size.get();
        let mut batch = Vec::with_capacity(size);
        while batch.len() < size {
            match self.upstream.pull()? {
                Some(value) => batch.push(value),
                None => {
                    log::trace!("final batch holds {} of {} elements", batch.len(), size);
                    self.finished = true;
                    break;
                }
            }
        }
        Ok(batch)
    }

    fn remove(&mut self) -> Result<(), CursorError> {
        Err(CursorError::unsupported("BatchCursor"))
    }
}
