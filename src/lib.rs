//! Lazyseq: composable, pull-based lazy cursors
//!
//! A cursor is a single-pass sequence reader exposing `has_next`, `next` and
//! an optional `remove`. Transformers wrap an upstream cursor without
//! materializing it and are themselves cursors, so they compose freely.
//!
//! # Core Concepts
//!
//! - **Cursor**: the capability contract every transformer implements
//! - **Lookahead**: one cached element plus a removal gate, making `has_next`
//!   idempotent and `remove` legal exactly once per produced element
//! - **Re-iterable**: a collaborator handing out a fresh cursor on demand,
//!   needed where a sequence is walked more than once
//!
//! # Transformers
//!
//! - `FilterCursor`: skips elements failing a predicate
//! - `SubSequenceCursor`: start/stop/step slice
//! - `CyclicCursor`: bounded or unbounded replay
//! - `ChainCursor`: concatenation
//! - `BatchCursor`: fixed-size windows
//! - `ZipCursor`: positional pairs
//! - `CartesianCursor`: ordered pairwise product
//! - `MapCursor` / `EachCursor`: transformation and observation
//!
//! # Example
//!
//! ```rust
//! use lazyseq::{Cursor, CursorExt, IntoCursor, SliceBounds};
//!
//! let mut cursor = (0..10)
//!     .into_cursor()
//!     .slice(SliceBounds::new().start(2).stop(8).step(2))
//!     .unwrap()
//!     .zip(vec!["a", "b"].into_cursor());
//!
//! assert_eq!(cursor.next(), Ok((2, "a")));
//! assert_eq!(cursor.next(), Ok((4, "b")));
//! assert!(!cursor.has_next());
//! ```
//!
//! All work happens synchronously inside the caller's calls. Cursors are not
//! reentrant and are driven by one caller at a time. Elements drawn and
//! discarded by a transformer (rejected by a filter, skipped by a slice) are
//! gone from the upstream for good.

pub mod builder;
pub mod checkpoint;
pub mod core;
pub mod error;
pub mod source;
pub mod transform;

// Re-export commonly used types
pub use builder::{BoxedCursor, CursorExt, Repeat, SliceBounds};
pub use self::core::{Cursor, FromFn, Iter, LookaheadCache, Reiterable, RemovalGate};
pub use error::{ArgumentError, CursorError};
pub use source::{IntoCursor, IterCursor, SliceCursor, VecCursor};
pub use transform::{
    BatchCursor, CartesianCursor, ChainCursor, CyclePhase, CyclicCursor, EachCursor, FilterCursor,
    MapCursor, SubSequenceCursor, ZipCursor,
};
