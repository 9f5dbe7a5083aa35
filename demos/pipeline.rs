//! Lazy Pipeline
//!
//! This example builds a multi-stage pipeline over a large source and shows
//! that only the elements actually needed are ever drawn.
//!
//! Key concepts:
//! - Composition: every transformer wraps another cursor
//! - Laziness: nothing is drawn until the caller asks
//! - Removal: deleting elements from the source through wrappers
//!
//! Run with: cargo run --example pipeline

use lazyseq::{Cursor, CursorExt, IntoCursor, SliceBounds, VecCursor};
use std::cell::Cell;

fn main() {
    println!("=== Lazy Pipeline Example ===\n");

    let drawn = Cell::new(0usize);
    let readings = (0..1_000_000u64)
        .into_cursor()
        .each(|_| drawn.set(drawn.get() + 1));

    let batches = readings
        .filter(|n| n % 7 == 0)
        .slice(SliceBounds::new().start(3).stop(15).step(2))
        .expect("bounds are valid")
        .map(|n| n * n)
        .batch(4)
        .expect("batch size is positive");

    for (i, batch) in batches.iter().enumerate() {
        println!("Batch {}: {:?}", i, batch);
    }
    println!("Source elements drawn: {}", drawn.get());

    println!("\n=== Removing through a filter ===\n");

    let mut inventory = vec![12, 7, 30, 3, 18, 9];
    println!("Before: {:?}", inventory);
    {
        let mut low_stock = VecCursor::new(&mut inventory).filter(|count| *count < 10);
        while low_stock.has_next() {
            let count = low_stock.next().expect("has_next returned true");
            println!("  removing entry with {} left", count);
            low_stock.remove().expect("removal directly follows next");
        }
    }
    println!("After:  {:?}", inventory);

    println!("\n=== Pairing and products ===\n");

    let sizes = vec!["S", "M", "L"];
    let variants: Vec<_> = vec!["red", "blue"].into_cursor().product(&sizes).iter().collect();
    println!("Variants: {:?}", variants);

    let labelled: Vec<_> = (1..)
        .into_cursor()
        .zip(vec!["alpha", "beta", "gamma"].into_cursor())
        .iter()
        .collect();
    println!("Labelled: {:?}", labelled);

    println!("\n=== Example Complete ===");
}
