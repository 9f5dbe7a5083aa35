//! Lazy transformers wrapping upstream cursors.
//!
//! Each transformer owns its upstream (or, for the cartesian product, holds a
//! re-iterable collaborator) and does all of its work synchronously inside
//! the caller's `has_next`, `next` or `remove`.

mod batch;
mod cartesian;
mod chain;
mod cycle;
mod filter;
mod map;
mod slice;
mod zip;

pub use batch::BatchCursor;
pub use cartesian::CartesianCursor;
pub use chain::ChainCursor;
pub use cycle::{CyclePhase, CyclicCursor};
pub use filter::FilterCursor;
pub use map::{EachCursor, MapCursor};
pub use slice::SubSequenceCursor;
pub use zip::ZipCursor;
