//! Checkpoint and Resume
//!
//! This example demonstrates checkpointing a cyclic cursor mid-replay and
//! resuming it later from its serialized form.
//!
//! Key concepts:
//! - A cyclic cursor drains its source once, then replays a frozen buffer
//! - Only a replaying cursor can be checkpointed
//! - Serialization formats (JSON for readability, binary for compactness)
//!
//! Run with: cargo run --example checkpoint_resume

use lazyseq::checkpoint::{Checkpoint, CheckpointError};
use lazyseq::{Cursor, CursorExt, IntoCursor};

fn main() -> Result<(), CheckpointError> {
    println!("=== Checkpoint and Resume Example ===\n");

    let shifts = vec!["night", "morning", "afternoon"];
    let mut rotation = shifts.into_cursor().map(String::from).cycle_times(3);

    println!("Draining the source:");
    for _ in 0..3 {
        println!("  {}", rotation.next().expect("three shifts available"));
    }

    match Checkpoint::capture(&rotation) {
        Err(error) => println!("  [Checkpoint] Not yet: {}", error),
        Ok(_) => unreachable!("cursor has not noticed the end of its source"),
    }

    println!("\nReplaying:");
    for _ in 0..2 {
        println!("  {}", rotation.next().expect("replay in progress"));
    }

    let checkpoint = Checkpoint::capture(&rotation)?;
    let json = checkpoint.to_json()?;
    let bytes = checkpoint.to_bytes()?;
    println!(
        "\n  [Checkpoint] {} ({} bytes JSON, {} bytes binary)",
        checkpoint.id,
        json.len(),
        bytes.len()
    );

    let restored: Checkpoint<String> = Checkpoint::from_bytes(&bytes)?;
    assert_eq!(restored, checkpoint);

    println!("\nResumed from checkpoint:");
    let resumed = restored.resume()?;
    for shift in resumed.iter() {
        println!("  {}", shift);
    }

    println!("\nOriginal cursor continues identically:");
    for shift in rotation.iter() {
        println!("  {}", shift);
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
