//! One-element lookahead and removal bookkeeping.
//!
//! Filtering and slicing cursors must look ahead to answer `has_next` without
//! losing the element they found, and must know whether `remove` is still
//! legal. The shared algorithm lives in [`Lookahead`]; each cursor supplies
//! the two variable steps through the [`Scan`] trait.

use crate::error::CursorError;

/// Single-slot buffer holding a value fetched ahead of the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LookaheadCache<T> {
    slot: Option<T>,
}

impl<T> Default for LookaheadCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LookaheadCache<T> {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self { slot: None }
    }

    /// Store a value, replacing anything already cached.
    pub fn store(&mut self, value: T) {
        self.slot = Some(value);
    }

    /// Take the cached value out, leaving the cache empty.
    pub fn fetch(&mut self) -> Option<T> {
        self.slot.take()
    }

    /// Check whether a value is cached.
    pub fn is_populated(&self) -> bool {
        self.slot.is_some()
    }
}

/// Flag permitting exactly one `remove()` per freshly produced element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RemovalGate {
    enabled: bool,
}

impl RemovalGate {
    /// Create a closed gate.
    pub fn new() -> Self {
        Self { enabled: false }
    }

    /// Open the gate after an element was produced.
    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Close the gate.
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Pass through the gate, closing it behind.
    ///
    /// Fails with [`CursorError::IllegalState`] when the gate was closed.
    pub fn pass(&mut self) -> Result<(), CursorError> {
        if std::mem::take(&mut self.enabled) {
            Ok(())
        } else {
            Err(CursorError::IllegalState {
                reason: "remove() must directly follow a next() that produced an element",
            })
        }
    }
}

/// Variable part of a lookahead cursor.
pub trait Scan {
    type Item;

    /// Draw from upstream until the next element to produce is found.
    ///
    /// Returns `Ok(None)` once no element remains. Must keep returning
    /// `Ok(None)` after that. Errors raised by the upstream are passed on.
    fn find_next(&mut self) -> Result<Option<Self::Item>, CursorError>;

    /// Remove the element the upstream produced last.
    fn remove_last(&mut self) -> Result<(), CursorError>;
}

/// Lookahead cache plus removal gate, driving a [`Scan`].
///
/// An element handed out by `next` opens the gate, whether it was cached by a
/// preceding `has_next` or found on the spot. Any scan of the upstream closes
/// the gate first, found or not, because the upstream's most recent element
/// is then no longer the one the caller holds.
///
/// An upstream error met by `has_next` is held back: `has_next` answers
/// `true` and the following `next` returns the error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lookahead<T> {
    cache: LookaheadCache<T>,
    gate: RemovalGate,
    failure: Option<CursorError>,
}

impl<T> Default for Lookahead<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Lookahead<T> {
    pub fn new() -> Self {
        Self {
            cache: LookaheadCache::new(),
            gate: RemovalGate::new(),
            failure: None,
        }
    }

    pub fn has_next<S: Scan<Item = T>>(&mut self, scan: &mut S) -> bool {
        if self.cache.is_populated() || self.failure.is_some() {
            return true;
        }
        self.gate.disable();
        match scan.find_next() {
            Ok(Some(value)) => {
                self.cache.store(value);
                true
            }
            Ok(None) => false,
            Err(error) => {
                self.failure = Some(error);
                true
            }
        }
    }

    pub fn next<S: Scan<Item = T>>(&mut self, scan: &mut S) -> Result<T, CursorError> {
        if let Some(error) = self.failure.take() {
            return Err(error);
        }
        let value = match self.cache.fetch() {
            Some(value) => value,
            None => {
                self.gate.disable();
                scan.find_next()?.ok_or(CursorError::Exhausted)?
            }
        };
        self.gate.enable();
        Ok(value)
    }

    pub fn remove<S: Scan<Item = T>>(&mut self, scan: &mut S) -> Result<(), CursorError> {
        self.gate.pass()?;
        scan.remove_last()
    }
}
