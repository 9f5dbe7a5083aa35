//! Positional pairing of two cursors.

use crate::core::Cursor;
use crate::error::CursorError;

/// Cursor pairing elements of two upstreams by position.
///
/// The shorter upstream decides the length; there is no padding. Nothing is
/// drawn from either side unless both have an element. `remove` is
/// unsupported.
///
/// # Example
///
/// ```rust
/// use lazyseq::{Iter, IntoCursor, ZipCursor};
///
/// let cursor = ZipCursor::new(vec![1, 2, 3, 4].into_cursor(), vec!["a", "b"].into_cursor());
/// let pairs: Vec<_> = Iter::new(cursor).collect();
/// assert_eq!(pairs, vec![(1, "a"), (2, "b")]);
/// ```
pub struct ZipCursor<A, B> {
    left: A,
    right: B,
}

impl<A: Cursor, B: Cursor> ZipCursor<A, B> {
    pub fn new(left: A, right: B) -> Self {
        Self { left, right }
    }

    /// Recover both upstreams.
    pub fn into_parts(self) -> (A, B) {
        (self.left, self.right)
    }
}

impl<A: Cursor, B: Cursor> Cursor for ZipCursor<A, B> {
    type Item = (A::Item, B::Item);

    fn has_next(&mut self) -> bool {
        self.left.has_next() && self.right.has_next()
    }

    fn next(&mut self) -> Result<Self::Item, CursorError> {
        if !self.has_next() {
            return Err(CursorError::Exhausted);
        }
        Ok((self.left.next()?, self.right.next()?))
    }

    fn remove(&mut self) -> Result<(), CursorError> {
        Err(CursorError::unsupported("ZipCursor"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Iter;
    use crate::source::IterCursor;

    #[test]
    fn shorter_side_truncates() {
        let cursor = ZipCursor::new(
            IterCursor::new(vec![1, 2, 3, 4].into_iter()),
            IterCursor::new(vec!["a", "b"].into_iter()),
        );
        assert_eq!(
            Iter::new(cursor).collect::<Vec<_>>(),
            vec![(1, "a"), (2, "b")]
        );
    }

    #[test]
    fn longer_side_keeps_unpaired_elements() {
        let mut cursor = ZipCursor::new(IterCursor::new(0..5), IterCursor::new(10..12));
        assert_eq!(cursor.next(), Ok((0, 10)));
        assert_eq!(cursor.next(), Ok((1, 11)));
        assert_eq!(cursor.next(), Err(CursorError::Exhausted));

        let (mut left, _) = cursor.into_parts();
        assert_eq!(left.next(), Ok(2));
    }

    #[test]
    fn empty_side_means_empty_zip() {
        let mut cursor = ZipCursor::new(IterCursor::new(0..0), IterCursor::new(0..3));
        assert!(!cursor.has_next());
        assert!(cursor.next().is_err());
    }

    #[test]
    fn remove_is_unsupported() {
        let mut cursor = ZipCursor::new(IterCursor::new(0..2), IterCursor::new(0..2));
        cursor.next().unwrap();
        assert_eq!(
            cursor.remove(),
            Err(CursorError::Unsupported { cursor: "ZipCursor" })
        );
    }

    #[test]
    fn has_next_is_idempotent() {
        let mut cursor = ZipCursor::new(IterCursor::new(0..3), IterCursor::new(10..12));
        for _ in 0..3 {
            assert!(cursor.has_next());
        }
        assert_eq!(cursor.next(), Ok((0, 10)));
        assert!(cursor.has_next());
        assert!(cursor.has_next());
        assert_eq!(cursor.next(), Ok((1, 11)));
        assert!(!cursor.has_next());
        assert!(!cursor.has_next());
        assert_eq!(cursor.next(), Err(CursorError::Exhausted));
    }
}
