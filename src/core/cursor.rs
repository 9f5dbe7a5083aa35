//! The `Cursor` capability contract.
//!
//! Every transformer in this crate both implements and consumes this trait,
//! so any cursor built only from conforming cursors is itself conforming.

use crate::error::CursorError;

/// Pull-based, stateful, single-pass sequence reader.
///
/// # Contract
///
/// - `has_next` is idempotent: calling it any number of times yields the same
///   answer and never changes what the following `next` returns. It may pull
///   from an upstream and cache the result internally.
/// - `next` works without a preceding `has_next` and fails with
///   [`CursorError::Exhausted`] once nothing remains.
/// - `remove` is optional. When supported, it removes the element produced by
///   the immediately preceding `next`, at most once. Otherwise it fails with
///   [`CursorError::IllegalState`] (misuse) or [`CursorError::Unsupported`].
///
/// Cursors are not reentrant. Exactly one caller drives a cursor at a time.
///
/// # Example
///
/// ```rust
/// use lazyseq::{Cursor, IntoCursor};
///
/// let mut cursor = vec![1, 2].into_cursor();
/// assert!(cursor.has_next());
/// assert_eq!(cursor.next(), Ok(1));
/// assert_eq!(cursor.next(), Ok(2));
/// assert!(!cursor.has_next());
/// assert!(cursor.next().is_err());
/// ```
pub trait Cursor {
    /// Type of the produced elements.
    type Item;

    /// Report whether another element is available.
    fn has_next(&mut self) -> bool;

    /// Produce the next element.
    fn next(&mut self) -> Result<Self::Item, CursorError>;

    /// Remove the most recently produced element from the underlying source.
    ///
    /// Default implementation reports the operation as unsupported.
    fn remove(&mut self) -> Result<(), CursorError> {
        Err(CursorError::unsupported(std::any::type_name::<Self>()))
    }

    /// Produce the next element if one exists.
    ///
    /// Convenience for transformers that must draw from an upstream in a loop.
    /// Returns `Ok(None)` once exhausted. A failing `next` after `has_next`
    /// answered `true` is a broken contract and its error is returned as is.
    fn pull(&mut self) -> Result<Option<Self::Item>, CursorError> {
        if self.has_next() {
            self.next().map(Some)
        } else {
            Ok(None)
        }
    }
}

impl<C: Cursor + ?Sized> Cursor for Box<C> {
    type Item = C::Item;

    fn has_next(&mut self) -> bool {
        (**self).has_next()
    }

    fn next(&mut self) -> Result<Self::Item, CursorError> {
        (**self).next()
    }

    fn remove(&mut self) -> Result<(), CursorError> {
        (**self).remove()
    }
}

impl<C: Cursor + ?Sized> Cursor for &mut C {
    type Item = C::Item;

    fn has_next(&mut self) -> bool {
        (**self).has_next()
    }

    fn next(&mut self) -> Result<Self::Item, CursorError> {
        (**self).next()
    }

    fn remove(&mut self) -> Result<(), CursorError> {
        (**self).remove()
    }
}

/// Adapter exposing a cursor as a std [`Iterator`].
///
/// Eager operations (`collect`, `sum`, `count`, ...) come from `Iterator`.
/// Iteration ends at the first error; [`Iter::into_inner`] gives the cursor
/// back for callers that need to see it.
#[derive(Debug)]
pub struct Iter<C> {
    cursor: C,
}

impl<C: Cursor> Iter<C> {
    pub fn new(cursor: C) -> Self {
        Self { cursor }
    }

    /// Recover the wrapped cursor.
    pub fn into_inner(self) -> C {
        self.cursor
    }
}

impl<C: Cursor> Iterator for Iter<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.pull().ok().flatten()
    }
}
