//! Failures capturing, encoding or resuming a cyclic cursor snapshot.

use thiserror::Error;

/// Reasons a snapshot cannot be taken, stored or turned back into a cursor.
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// A draining cursor still depends on its live upstream.
    #[error("cyclic cursor is still draining its upstream ({buffered} elements buffered)")]
    NotReplaying { buffered: usize },

    #[error("could not encode snapshot: {0}")]
    Encode(String),

    #[error("could not decode snapshot: {0}")]
    Decode(String),

    /// Snapshot written by a different format revision.
    #[error("snapshot format {found} cannot be resumed (expected {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Replay state that no cyclic cursor could have been in.
    #[error("snapshot does not describe a replaying cursor: {reason}")]
    Inconsistent { reason: String },
}
