//! Fluent construction API.
//!
//! This module provides the `CursorExt` combinators, serializable
//! configuration values and literal macros, so pipelines read left to right
//! instead of as nested constructor calls.

pub mod config;
pub mod macros;

pub use config::{Repeat, SliceBounds};

use crate::core::{Cursor, Iter, Reiterable};
use crate::error::CursorError;
use crate::transform::{
    BatchCursor, CartesianCursor, ChainCursor, CyclicCursor, EachCursor, FilterCursor, MapCursor,
    SubSequenceCursor, ZipCursor,
};

/// Type-erased cursor, used to chain cursors of different concrete types.
pub type BoxedCursor<'a, T> = Box<dyn Cursor<Item = T> + 'a>;

/// Combinators available on every [`Cursor`].
///
/// # Example
///
/// ```rust
/// use lazyseq::{CursorExt, IntoCursor, SliceBounds};
///
/// let values: Vec<_> = (0..20)
///     .into_cursor()
///     .filter(|n| n % 3 == 0)
///     .slice(SliceBounds::new().start(1).stop(5))
///     .unwrap()
///     .map(|n| n * 2)
///     .iter()
///     .collect();
///
/// assert_eq!(values, vec![6, 12, 18, 24]);
/// ```
pub trait CursorExt: Cursor + Sized {
    /// Keep only elements satisfying `predicate`.
    fn filter<P>(self, predicate: P) -> FilterCursor<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        FilterCursor::new(self, predicate)
    }

    /// Transform every element.
    fn map<F, T>(self, function: F) -> MapCursor<Self, F>
    where
        F: FnMut(Self::Item) -> T,
    {
        MapCursor::new(self, function)
    }

    /// Observe every element as it is produced.
    fn each<F>(self, callback: F) -> EachCursor<Self, F>
    where
        F: FnMut(&Self::Item),
    {
        EachCursor::new(self, callback)
    }

    /// Restrict to a start/stop/step sub-sequence.
    fn slice(self, bounds: SliceBounds) -> Result<SubSequenceCursor<Self>, CursorError> {
        SubSequenceCursor::new(self, bounds)
    }

    /// Replay without bound.
    fn cycle(self) -> CyclicCursor<Self>
    where
        Self::Item: Clone,
    {
        CyclicCursor::new(self, Repeat::Forever)
    }

    /// Replay for `passes` total passes.
    fn cycle_times(self, passes: usize) -> CyclicCursor<Self>
    where
        Self::Item: Clone,
    {
        CyclicCursor::new(self, Repeat::Times(passes))
    }

    /// Group into batches of `size`.
    fn batch(self, size: usize) -> Result<BatchCursor<Self>, CursorError> {
        BatchCursor::new(self, size)
    }

    /// Pair positionally with another cursor.
    fn zip<B: Cursor>(self, other: B) -> ZipCursor<Self, B> {
        ZipCursor::new(self, other)
    }

    /// Pair every element with every element of `inner`.
    fn product<R: Reiterable>(self, inner: R) -> CartesianCursor<Self, R>
    where
        Self::Item: Clone,
    {
        CartesianCursor::new(self, inner)
    }

    /// Continue with `other` once this cursor is exhausted.
    fn chain<'a, D>(self, other: D) -> ChainCursor<BoxedCursor<'a, Self::Item>>
    where
        Self: 'a,
        D: Cursor<Item = Self::Item> + 'a,
    {
        ChainCursor::new(vec![self.boxed(), other.boxed()])
    }

    /// Erase the concrete cursor type.
    fn boxed<'a>(self) -> BoxedCursor<'a, Self::Item>
    where
        Self: 'a,
    {
        Box::new(self)
    }

    /// Bridge into a std [`Iterator`].
    fn iter(self) -> Iter<Self> {
        Iter::new(self)
    }
}

impl<C: Cursor> CursorExt for C {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{IntoCursor, VecCursor};

    #[test]
    fn combinators_compose() {
        let values: Vec<_> = (1..=10)
            .into_cursor()
            .filter(|n| n % 2 == 1)
            .map(|n| n * n)
            .iter()
            .collect();
        assert_eq!(values, vec![1, 9, 25, 49, 81]);
    }

    #[test]
    fn chain_mixes_cursor_types() {
        let values: Vec<_> = (0..2)
            .into_cursor()
            .chain(vec![5, 6].into_cursor().map(|n| n + 1))
            .iter()
            .collect();
        assert_eq!(values, vec![0, 1, 6, 7]);
    }

    #[test]
    fn cycle_times_then_batch() {
        let batches: Vec<_> = vec!['a', 'b', 'c']
            .into_cursor()
            .cycle_times(2)
            .batch(4)
            .unwrap()
            .iter()
            .collect();
        assert_eq!(batches, vec![vec!['a', 'b', 'c', 'a'], vec!['b', 'c']]);
    }

    #[test]
    fn product_of_zip() {
        let inner = vec![true, false];
        let values: Vec<_> = (0..2)
            .into_cursor()
            .zip(vec!["a", "b", "c"].into_cursor())
            .product(&inner)
            .iter()
            .collect();
        assert_eq!(
            values,
            vec![
                ((0, "a"), true),
                ((0, "a"), false),
                ((1, "b"), true),
                ((1, "b"), false),
            ]
        );
    }

    #[test]
    fn cycle_is_unbounded() {
        let values: Vec<_> = vec![1].into_cursor().cycle().iter().take(3).collect();
        assert_eq!(values, vec![1, 1, 1]);
    }

    #[test]
    fn invalid_arguments_surface_through_combinators() {
        assert!((0..3).into_cursor().batch(0).is_err());
        assert!((0..3).into_cursor().slice(SliceBounds::new().step(0)).is_err());
    }

    #[test]
    fn remove_through_filter_and_each() {
        let mut values = vec![1, 2, 3, 4];
        let mut seen = Vec::new();
        let mut cursor = VecCursor::new(&mut values)
            .each(|n: &i32| seen.push(*n))
            .filter(|n| *n > 2);

        assert_eq!(cursor.next(), Ok(3));
        cursor.remove().unwrap();
        drop(cursor);

        assert_eq!(values, vec![1, 2, 4]);
        assert_eq!(seen, vec![1, 2, 3]);
    }
}
