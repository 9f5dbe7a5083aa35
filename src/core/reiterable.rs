//! Sequences that can be traversed more than once.

use super::cursor::Cursor;
use crate::source::{IterCursor, SliceCursor};
use std::ops::Range;

/// A collaborator able to hand out a brand-new cursor over itself on demand.
///
/// Each call to [`Reiterable::cursor`] starts an independent traversal,
/// unaffected by any cursor obtained earlier. Cursors are single-pass, so a
/// transformer that needs to walk a sequence repeatedly (the inner side of a
/// cartesian product) takes a `Reiterable` instead.
///
/// # Example
///
/// ```rust
/// use lazyseq::{Cursor, Reiterable};
///
/// let letters = vec!["x", "y"];
/// let source = &letters;
///
/// let mut first = source.cursor();
/// first.next().unwrap();
///
/// let mut second = source.cursor();
/// assert_eq!(second.next(), Ok("x"));
/// ```
pub trait Reiterable {
    type Cursor: Cursor;

    /// Start a fresh traversal.
    fn cursor(&self) -> Self::Cursor;
}

impl<'a, T: Clone> Reiterable for &'a [T] {
    type Cursor = SliceCursor<'a, T>;

    fn cursor(&self) -> Self::Cursor {
        SliceCursor::new(*self)
    }
}

impl<'a, T: Clone> Reiterable for &'a Vec<T> {
    type Cursor = SliceCursor<'a, T>;

    fn cursor(&self) -> Self::Cursor {
        SliceCursor::new((*self).as_slice())
    }
}

impl<T> Reiterable for Range<T>
where
    Range<T>: Iterator<Item = T> + Clone,
{
    type Cursor = IterCursor<Range<T>>;

    fn cursor(&self) -> Self::Cursor {
        IterCursor::new(self.clone())
    }
}

/// Re-iterable backed by a cursor factory.
///
/// # Example
///
/// ```rust
/// use lazyseq::{Cursor, FromFn, IntoCursor, Reiterable};
///
/// let squares = FromFn::new(|| (1..4).map(|n| n * n).into_cursor());
/// assert_eq!(squares.cursor().next(), Ok(1));
/// assert_eq!(squares.cursor().next(), Ok(1));
/// ```
pub struct FromFn<F> {
    factory: F,
}

impl<F, C> FromFn<F>
where
    F: Fn() -> C,
    C: Cursor,
{
    pub fn new(factory: F) -> Self {
        Self { factory }
    }
}

impl<F, C> Reiterable for FromFn<F>
where
    F: Fn() -> C,
    C: Cursor,
{
    type Cursor = C;

    fn cursor(&self) -> C {
        (self.factory)()
    }
}
