use crate::core::Cursor;
use crate::error::CursorError;

/// Read-only cursor over a borrowed slice, producing clones.
#[derive(Clone, Debug)]
pub struct SliceCursor<'a, T> {
    slice: &'a [T],
    pos: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    pub fn new(slice: &'a [T]) -> Self {
        SliceCursor { slice, pos: 0 }
    }

    /// Number of elements not yet produced.
    pub fn remaining(&self) -> usize {
        self.slice.len() - self.pos
    }
}

impl<'a, T: Clone> Cursor for SliceCursor<'a, T> {
    type Item = T;

    fn has_next(&mut self) -> bool {
        self.pos < self.slice.len()
    }

    fn next(&mut self) -> Result<T, CursorError> {
        let value = self.slice.get(self.pos).ok_or(CursorError::Exhausted)?;
        self.pos += 1;
        Ok(value.clone())
    }

    fn remove(&mut self) -> Result<(), CursorError> {
        Err(CursorError::unsupported("SliceCursor"))
    }
}
