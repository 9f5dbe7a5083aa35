//! Ordered cartesian product.

use crate::core::{Cursor, Reiterable};
use crate::error::CursorError;

/// Cursor over the ordered pairwise product of an outer cursor and an inner
/// re-iterable sequence.
///
/// For each outer element a fresh inner cursor is obtained and walked in
/// full, so pairs come out as `(o1, i1), (o1, i2), ..., (o2, i1), ...`.
/// Outer elements are cloned once per inner element. An empty inner sequence
/// yields nothing (the outer side is drained looking for a non-empty pass).
/// An outer error met by `has_next` is returned by the following `next`.
/// `remove` is unsupported.
///
/// # Example
///
/// ```rust
/// use lazyseq::{CartesianCursor, Iter, IntoCursor};
///
/// let inner = vec!["x", "y"];
/// let cursor = CartesianCursor::new(vec![1, 2].into_cursor(), &inner);
/// let pairs: Vec<_> = Iter::new(cursor).collect();
/// assert_eq!(pairs, vec![(1, "x"), (1, "y"), (2, "x"), (2, "y")]);
/// ```
pub struct CartesianCursor<C: Cursor, R: Reiterable> {
    outer: C,
    inner: R,
    // Current outer element and the inner pass running against it.
    current: Option<(C::Item, R::Cursor)>,
    failure: Option<CursorError>,
}

impl<C, R> CartesianCursor<C, R>
where
    C: Cursor,
    C::Item: Clone,
    R: Reiterable,
{
    pub fn new(outer: C, inner: R) -> Self {
        Self {
            outer,
            inner,
            current: None,
            failure: None,
        }
    }
}

impl<C, R> Cursor for CartesianCursor<C, R>
where
    C: Cursor,
    C::Item: Clone,
    R: Reiterable,
{
    type Item = (C::Item, <R::Cursor as Cursor>::Item);

    fn has_next(&mut self) -> bool {
        if self.failure.is_some() {
            return true;
        }
        loop {
            if let Some((_, pass)) = &mut self.current {
                if pass.has_next() {
                    return true;
                }
            }
            match self.outer.pull() {
                Ok(Some(value)) => {
                    log::trace!("cartesian cursor starting a new inner pass");
                    self.current = Some((value, self.inner.cursor()));
                }
                Ok(None) => {
                    self.current = None;
                    return false;
                }
                Err(error) => {
                    self.current = None;
                    self.failure = Some(error);
                    return true;
                }
            }
        }
    }

    fn next(&mut self) -> Result<Self::Item, CursorError> {
        if !self.has_next() {
            return Err(CursorError::Exhausted);
        }
        if let Some(error) = self.failure.take() {
            return Err(error);
        }
        match &mut self.current {
            Some((value, pass)) => Ok((value.clone(), pass.next()?)),
            None => Err(CursorError::Exhausted),
        }
    }

    fn remove(&mut self) -> Result<(), CursorError> {
        Err(CursorError::unsupported("CartesianCursor"))
    }
}
