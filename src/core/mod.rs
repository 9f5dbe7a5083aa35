//! Core cursor contract and shared building blocks.
//!
//! This module contains the pieces every transformer is assembled from:
//! - The `Cursor` trait and the `Reiterable` trait
//! - `LookaheadCache` and `RemovalGate`, composed into lookahead cursors
//! - The `Iter` bridge to std iterators

mod cursor;
mod lookahead;
mod reiterable;

pub use cursor::{Cursor, Iter};
pub use lookahead::{Lookahead, LookaheadCache, RemovalGate, Scan};
pub use reiterable::{FromFn, Reiterable};
