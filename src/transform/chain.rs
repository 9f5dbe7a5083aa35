//! Concatenation of cursors.

use crate::core::Cursor;
use crate::error::CursorError;

/// Cursor producing every element of each upstream cursor in turn.
///
/// Exhausted upstreams are skipped. `remove` is delegated to whichever
/// upstream produced the last element, so its legality follows that
/// upstream's own rules.
///
/// Use [`chain!`](crate::chain) to concatenate cursors of different types.
pub struct ChainCursor<C> {
    cursors: Vec<C>,
    current: usize,
    last: Option<usize>,
}

impl<C: Cursor> ChainCursor<C> {
    pub fn new<I>(cursors: I) -> Self
    where
        I: IntoIterator<Item = C>,
    {
        Self {
            cursors: cursors.into_iter().collect(),
            current: 0,
            last: None,
        }
    }

    /// Number of chained cursors.
    pub fn len(&self) -> usize {
        self.cursors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cursors.is_empty()
    }
}

impl<C: Cursor> Cursor for ChainCursor<C> {
    type Item = C::Item;

    fn has_next(&mut self) -> bool {
        while let Some(cursor) = self.cursors.get_mut(self.current) {
            if cursor.has_next() {
                return true;
            }
            self.current += 1;
        }
        false
    }

    fn next(&mut self) -> Result<C::Item, CursorError> {
        if !self.has_next() {
            return Err(CursorError::Exhausted);
        }
        let cursor = self
            .cursors
            .get_mut(self.current)
            .ok_or(CursorError::Exhausted)?;
        let value = cursor.next()?;
        self.last = Some(self.current);
        Ok(value)
    }

    fn remove(&mut self) -> Result<(), CursorError> {
        let cursor = self
            .last
            .and_then(|index| self.cursors.get_mut(index))
            .ok_or(CursorError::IllegalState {
                reason: "remove() called before any element was produced",
            })?;
        cursor.remove()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Iter;
    use crate::source::{IterCursor, VecCursor};

    #[test]
    fn concatenates_in_order() {
        let cursor = ChainCursor::new(vec![
            IterCursor::new(0..2),
            IterCursor::new(2..2),
            IterCursor::new(2..5),
        ]);
        assert_eq!(Iter::new(cursor).collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn empty_chain() {
        let mut cursor = ChainCursor::new(Vec::<IterCursor<std::ops::Range<u8>>>::new());
        assert!(cursor.is_empty());
        assert!(!cursor.has_next());
        assert_eq!(cursor.next(), Err(CursorError::Exhausted));
    }

    #[test]
    fn skips_leading_empty_cursors() {
        let mut cursor = ChainCursor::new(vec![
            IterCursor::new(0..0),
            IterCursor::new(0..0),
            IterCursor::new(7..8),
        ]);
        assert_eq!(cursor.len(), 3);
        assert!(cursor.has_next());
        assert!(cursor.has_next());
        assert_eq!(cursor.next(), Ok(7));
        assert!(!cursor.has_next());
    }

    #[test]
    fn remove_goes_to_the_producing_cursor() {
        let mut first = vec![1, 2];
        let mut second = vec![3, 4];
        let mut cursor = ChainCursor::new(vec![
            VecCursor::new(&mut first),
            VecCursor::new(&mut second),
        ]);

        assert!(matches!(
            cursor.remove(),
            Err(CursorError::IllegalState { .. })
        ));

        cursor.next().unwrap();
        cursor.next().unwrap();
        // Moves on to the second cursor.
        assert!(cursor.has_next());
        cursor.remove().unwrap();
        assert!(cursor.remove().is_err());

        assert_eq!(cursor.next(), Ok(3));
        cursor.remove().unwrap();
        drop(cursor);

        assert_eq!(first, vec![1]);
        assert_eq!(second, vec![4]);
    }
}
