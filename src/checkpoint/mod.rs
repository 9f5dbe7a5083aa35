//! Checkpoint and resume for cyclic cursors.
//!
//! Once a [`CyclicCursor`] has drained its upstream it replays a frozen
//! buffer and no longer depends on the upstream at all. Its explicit state
//! (buffer, replay position, passes done, repeat mode) can then be captured,
//! serialized and resumed later into a cursor that continues the exact same
//! sequence.

use crate::builder::Repeat;
use crate::core::Cursor;
use crate::source::IterCursor;
use crate::transform::{CyclePhase, CyclicCursor};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::iter::Empty;
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Cyclic cursor restored from a checkpoint. Its upstream is always empty.
pub type ResumedCursor<T> = CyclicCursor<IterCursor<Empty<T>>>;

/// Serializable snapshot of a replaying cyclic cursor.
///
/// Equality compares the cursor state only; `id` and `timestamp` describe
/// the snapshot itself and are ignored.
///
/// # Example
///
/// ```rust
/// use lazyseq::checkpoint::Checkpoint;
/// use lazyseq::{Cursor, CursorExt, IntoCursor};
///
/// let mut cursor = vec![1, 2, 3].into_cursor().cycle_times(2);
/// for _ in 0..4 {
///     cursor.next().unwrap();
/// }
///
/// let checkpoint = Checkpoint::capture(&cursor).unwrap();
/// let json = checkpoint.to_json().unwrap();
///
/// let restored: Checkpoint<i32> = Checkpoint::from_json(&json).unwrap();
/// let rest: Vec<_> = restored.resume().unwrap().iter().collect();
/// assert_eq!(rest, vec![2, 3]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Checkpoint<T> {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Frozen replay buffer
    pub buffer: Vec<T>,

    /// Position of the next element to replay
    pub replay_index: usize,

    /// Completed passes over the source
    pub passes_done: usize,

    /// Repeat bound of the cursor
    pub repeat: Repeat,
}

impl<T: PartialEq> PartialEq for Checkpoint<T> {
    fn eq(&self, other: &Self) -> bool {
        self.version == other.version
            && self.buffer == other.buffer
            && self.replay_index == other.replay_index
            && self.passes_done == other.passes_done
            && self.repeat == other.repeat
    }
}

impl<T: Clone> Checkpoint<T> {
    /// Capture the state of a cursor that has entered the replay phase.
    pub fn capture<C>(cursor: &CyclicCursor<C>) -> Result<Self, CheckpointError>
    where
        C: Cursor<Item = T>,
    {
        if cursor.phase() != CyclePhase::Replaying {
            return Err(CheckpointError::NotReplaying {
                buffered: cursor.buffer().len(),
            });
        }
        let checkpoint = Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            buffer: cursor.buffer().to_vec(),
            replay_index: cursor.replay_index(),
            passes_done: cursor.passes_done(),
            repeat: cursor.repeat(),
        };
        log::debug!(
            "captured checkpoint {} ({} buffered, pass {})",
            checkpoint.id,
            checkpoint.buffer.len(),
            checkpoint.passes_done
        );
        Ok(checkpoint)
    }

    /// Check the snapshot is internally consistent.
    pub fn validate(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }
        let reason = if !self.buffer.is_empty() && self.replay_index >= self.buffer.len() {
            Some(format!(
                "replay index {} outside buffer of {} elements",
                self.replay_index,
                self.buffer.len()
            ))
        } else if self.buffer.is_empty() && self.replay_index != 0 {
            Some("replay index set on an empty buffer".to_string())
        } else if self.passes_done == 0 {
            // Replaying starts once the draining pass is complete.
            Some("no completed pass".to_string())
        } else if let Repeat::Times(n) = self.repeat {
            (self.passes_done > n)
                .then(|| format!("{} passes done exceeds a bound of {n}", self.passes_done))
        } else {
            None
        };
        if let Some(reason) = reason {
            return Err(CheckpointError::Inconsistent { reason });
        }
        Ok(())
    }

    /// Rebuild a cursor continuing where the captured one stood.
    pub fn resume(self) -> Result<ResumedCursor<T>, CheckpointError> {
        self.validate()?;
        log::debug!("resuming checkpoint {}", self.id);
        Ok(CyclicCursor::replaying(
            IterCursor::new(std::iter::empty()),
            self.buffer,
            self.replay_index,
            self.passes_done,
            self.repeat,
        ))
    }
}

impl<T: Serialize + DeserializeOwned> Checkpoint<T> {
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self)
            .map_err(|e| CheckpointError::Encode(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        serde_json::from_str(json)
            .map_err(|e| CheckpointError::Decode(e.to_string()))
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self)
            .map_err(|e| CheckpointError::Encode(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::Decode(e.to_string()))
    }
}
