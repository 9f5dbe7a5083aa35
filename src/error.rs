//! Error types shared by every cursor.

use thiserror::Error;

/// Errors raised by cursor construction and traversal.
///
/// Every error is local to the call that produced it. Cursors never retry
/// or recover on their own, so an error always points at misuse by the
/// caller (or at an upstream that broke the [`Cursor`](crate::Cursor)
/// contract).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CursorError {
    /// Construction parameters were malformed. Never raised mid-iteration.
    #[error("Invalid argument: {}", describe(.violations))]
    InvalidArgument { violations: Vec<ArgumentError> },

    /// `next()` was called with no element left.
    #[error("Cursor is exhausted")]
    Exhausted,

    /// `remove()` was called without a fresh, removable element.
    #[error("Illegal state: {reason}")]
    IllegalState { reason: &'static str },

    /// The cursor structurally cannot remove elements.
    #[error("{cursor} does not support remove()")]
    Unsupported { cursor: &'static str },
}

impl CursorError {
    pub(crate) fn invalid(violation: ArgumentError) -> Self {
        Self::InvalidArgument {
            violations: vec![violation],
        }
    }

    pub(crate) fn unsupported(cursor: &'static str) -> Self {
        Self::Unsupported { cursor }
    }

    /// Check whether this error reports an exhausted cursor.
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted)
    }
}

/// A single malformed construction parameter.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("start must not be negative (got {start})")]
    NegativeStart { start: i64 },

    #[error("stop must not be negative (got {stop})")]
    NegativeStop { stop: i64 },

    #[error("stop ({stop}) must not be less than start ({start})")]
    StopBeforeStart { start: usize, stop: usize },

    #[error("step must be at least 1")]
    ZeroStep,

    #[error("step must not be negative (got {step})")]
    NegativeStep { step: i64 },

    #[error("batch size must be at least 1")]
    ZeroBatchSize,
}

fn describe(violations: &[ArgumentError]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_lists_every_violation() {
        let error = CursorError::InvalidArgument {
            violations: vec![
                ArgumentError::NegativeStart { start: -1 },
                ArgumentError::ZeroStep,
            ],
        };

        assert_eq!(
            error.to_string(),
            "Invalid argument: start must not be negative (got -1); step must be at least 1"
        );
    }

    #[test]
    fn unsupported_names_the_cursor() {
        let error = CursorError::unsupported("ZipCursor");
        assert_eq!(error.to_string(), "ZipCursor does not support remove()");
    }

    #[test]
    fn is_exhausted_matches_only_exhaustion() {
        assert!(CursorError::Exhausted.is_exhausted());
        assert!(!CursorError::invalid(ArgumentError::ZeroBatchSize).is_exhausted());
    }
}
