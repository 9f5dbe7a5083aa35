//! Leaf cursors reading from concrete collections and iterators.

mod iter;
mod slice;
mod vec;

pub use iter::{IntoCursor, IterCursor};
pub use slice::SliceCursor;
pub use vec::VecCursor;
