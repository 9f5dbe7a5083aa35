//! Element-wise transformation and observation.

use crate::core::Cursor;
use crate::error::CursorError;

/// Cursor applying a function to every upstream element.
///
/// `has_next` and `remove` go straight to the upstream.
pub struct MapCursor<C, F> {
    upstream: C,
    function: F,
}

impl<C, F, T> MapCursor<C, F>
where
    C: Cursor,
    F: FnMut(C::Item) -> T,
{
    pub fn new(upstream: C, function: F) -> Self {
        Self { upstream, function }
    }
}

impl<C, F, T> Cursor for MapCursor<C, F>
where
    C: Cursor,
    F: FnMut(C::Item) -> T,
{
    type Item = T;

    fn has_next(&mut self) -> bool {
        self.upstream.has_next()
    }

    fn next(&mut self) -> Result<T, CursorError> {
        self.upstream.next().map(&mut self.function)
    }

    fn remove(&mut self) -> Result<(), CursorError> {
        self.upstream.remove()
    }
}

/// Pass-through cursor invoking a callback on every produced element.
///
/// The callback observes the element; it cannot change it or the flow of
/// iteration. A panicking callback propagates to the caller.
pub struct EachCursor<C, F> {
    upstream: C,
    callback: F,
}

impl<C, F> EachCursor<C, F>
where
    C: Cursor,
    F: FnMut(&C::Item),
{
    pub fn new(upstream: C, callback: F) -> Self {
        Self { upstream, callback }
    }
}

impl<C, F> Cursor for EachCursor<C, F>
where
    C: Cursor,
    F: FnMut(&C::Item),
{
    type Item = C::Item;

    fn has_next(&mut self) -> bool {
        self.upstream.has_next()
    }

    fn next(&mut self) -> Result<C::Item, CursorError> {
        let value = self.upstream.next()?;
        (self.callback)(&value);
        Ok(value)
    }

    fn remove(&mut self) -> Result<(), CursorError> {
        self.upstream.remove()
    }
}
