use crate::core::{Cursor, RemovalGate};
use crate::error::CursorError;

/// Cursor over a mutably borrowed `Vec`, supporting `remove`.
///
/// Removal deletes the element from the vector itself, so the change is
/// visible once the cursor is dropped and the borrow ends.
///
/// # Example
///
/// ```rust
/// use lazyseq::{Cursor, VecCursor};
///
/// let mut values = vec![1, 2, 3];
/// let mut cursor = VecCursor::new(&mut values);
/// cursor.next().unwrap();
/// cursor.next().unwrap();
/// cursor.remove().unwrap();
/// drop(cursor);
///
/// assert_eq!(values, vec![1, 3]);
/// ```
#[derive(Debug)]
pub struct VecCursor<'a, T> {
    vec: &'a mut Vec<T>,
    // Index of the element the next call to `next` produces.
    pos: usize,
    gate: RemovalGate,
}

impl<'a, T> VecCursor<'a, T> {
    pub fn new(vec: &'a mut Vec<T>) -> Self {
        VecCursor {
            vec,
            pos: 0,
            gate: RemovalGate::new(),
        }
    }
}

impl<'a, T: Clone> Cursor for VecCursor<'a, T> {
    type Item = T;

    fn has_next(&mut self) -> bool {
        self.pos < self.vec.len()
    }

    fn next(&mut self) -> Result<T, CursorError> {
        let value = self.vec.get(self.pos).ok_or(CursorError::Exhausted)?.clone();
        self.pos += 1;
        self.gate.enable();
        Ok(value)
    }

    fn remove(&mut self) -> Result<(), CursorError> {
        self.gate.pass()?;
        self.pos -= 1;
        self.vec.remove(self.pos);
        Ok(())
    }
}
