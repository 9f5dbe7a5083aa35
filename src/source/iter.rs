use crate::core::{Cursor, LookaheadCache};
use crate::error::CursorError;
use std::iter::Fuse;

/// Cursor adapting any [`Iterator`].
///
/// `has_next` pulls one element ahead into a [`LookaheadCache`] so it can be
/// answered without losing that element. The iterator is fused, so once it
/// runs dry the cursor stays exhausted. Removal is unsupported.
pub struct IterCursor<I: Iterator> {
    iter: Fuse<I>,
    cache: LookaheadCache<I::Item>,
}

impl<I: Iterator> IterCursor<I> {
    pub fn new(iter: I) -> Self {
        IterCursor {
            iter: iter.fuse(),
            cache: LookaheadCache::new(),
        }
    }
}

impl<I: Iterator> Cursor for IterCursor<I> {
    type Item = I::Item;

    fn has_next(&mut self) -> bool {
        if self.cache.is_populated() {
            return true;
        }
        match self.iter.next() {
            Some(value) => {
                self.cache.store(value);
                true
            }
            None => false,
        }
    }

    fn next(&mut self) -> Result<I::Item, CursorError> {
        self.cache
            .fetch()
            .or_else(|| self.iter.next())
            .ok_or(CursorError::Exhausted)
    }

    fn remove(&mut self) -> Result<(), CursorError> {
        Err(CursorError::unsupported("IterCursor"))
    }
}

/// Conversion into a [`Cursor`].
pub trait IntoCursor {
    type Cursor: Cursor;

    fn into_cursor(self) -> Self::Cursor;
}

impl<I: IntoIterator> IntoCursor for I {
    type Cursor = IterCursor<I::IntoIter>;

    fn into_cursor(self) -> Self::Cursor {
        IterCursor::new(self.into_iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn has_next_pulls_only_once() {
        let pulled = Cell::new(0);
        let mut cursor = IterCursor::new((0..3).inspect(|_| pulled.set(pulled.get() + 1)));

        assert!(cursor.has_next());
        assert!(cursor.has_next());
        assert_eq!(pulled.get(), 1);
        assert_eq!(cursor.next(), Ok(0));
        assert_eq!(pulled.get(), 1);
    }

    #[test]
    fn next_without_has_next() {
        let mut cursor = vec!["only"].into_cursor();
        assert_eq!(cursor.next(), Ok("only"));
        assert_eq!(cursor.next(), Err(CursorError::Exhausted));
    }

    #[test]
    fn exhaustion_is_stable() {
        let mut cursor = IterCursor::new(std::iter::empty::<u8>());
        assert!(!cursor.has_next());
        assert!(!cursor.has_next());
        assert_eq!(cursor.next(), Err(CursorError::Exhausted));
    }
}
