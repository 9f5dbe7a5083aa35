//! Serializable configuration values for transformers.

use crate::error::{ArgumentError, CursorError};
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Start/stop/step bounds of a sub-sequence.
///
/// Produces the upstream elements at indices `start, start + step, ...`
/// strictly below `stop` (or until the upstream ends when `stop` is `None`).
///
/// # Example
///
/// ```rust
/// use lazyseq::SliceBounds;
///
/// let bounds = SliceBounds::new().start(2).stop(8).step(2);
/// assert!(bounds.check().is_ok());
///
/// let invalid = SliceBounds::new().start(5).stop(3).step(0);
/// assert!(invalid.check().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliceBounds {
    /// First upstream index produced
    pub start: usize,
    /// Exclusive upper index, unbounded when `None`
    pub stop: Option<usize>,
    /// Distance between produced indices
    pub step: usize,
}

impl Default for SliceBounds {
    fn default() -> Self {
        Self::new()
    }
}

impl SliceBounds {
    /// Bounds covering the whole upstream.
    pub fn new() -> Self {
        Self {
            start: 0,
            stop: None,
            step: 1,
        }
    }

    /// Set the first produced index.
    pub fn start(mut self, start: usize) -> Self {
        self.start = start;
        self
    }

    /// Set the exclusive upper index.
    pub fn stop(mut self, stop: usize) -> Self {
        self.stop = Some(stop);
        self
    }

    /// Set the stride.
    pub fn step(mut self, step: usize) -> Self {
        self.step = step;
        self
    }

    /// Build bounds from signed values, rejecting negatives.
    ///
    /// A missing `step` defaults to 1. All violations are reported together.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lazyseq::{ArgumentError, CursorError, SliceBounds};
    ///
    /// let result = SliceBounds::from_signed(-1, Some(-2), Some(0));
    /// let Err(CursorError::InvalidArgument { violations }) = result else {
    ///     panic!("negative bounds must be rejected");
    /// };
    /// assert_eq!(violations.len(), 3);
    /// assert!(violations.contains(&ArgumentError::ZeroStep));
    /// ```
    pub fn from_signed(
        start: i64,
        stop: Option<i64>,
        step: Option<i64>,
    ) -> Result<Self, CursorError> {
        let step = step.unwrap_or(1);
        let mut checks: Vec<Validation<(), NonEmptyVec<ArgumentError>>> = Vec::new();

        if start < 0 {
            checks.push(Validation::fail(ArgumentError::NegativeStart { start }));
        }
        if let Some(stop) = stop.filter(|stop| *stop < 0) {
            checks.push(Validation::fail(ArgumentError::NegativeStop { stop }));
        }
        if step < 0 {
            checks.push(Validation::fail(ArgumentError::NegativeStep { step }));
        } else if step == 0 {
            checks.push(Validation::fail(ArgumentError::ZeroStep));
        }
        into_result(Validation::all_vec(checks).map(|_| ()))?;

        let bounds = Self {
            start: to_index(start),
            stop: stop.map(to_index),
            step: to_index(step),
        };
        bounds.check()?;
        Ok(bounds)
    }

    /// Validate the bounds, accumulating every violation.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ArgumentError>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ArgumentError>>> = Vec::new();

        if let Some(stop) = self.stop {
            let check = if stop < self.start {
                Validation::fail(ArgumentError::StopBeforeStart {
                    start: self.start,
                    stop,
                })
            } else {
                Validation::success(())
            };
            checks.push(check);
        }

        let check = if self.step == 0 {
            Validation::fail(ArgumentError::ZeroStep)
        } else {
            Validation::success(())
        };
        checks.push(check);

        Validation::all_vec(checks).map(|_| ())
    }

    /// Validate the bounds as a `Result`.
    pub fn check(&self) -> Result<(), CursorError> {
        into_result(self.validate())
    }
}

fn into_result(validation: Validation<(), NonEmptyVec<ArgumentError>>) -> Result<(), CursorError> {
    match validation {
        Validation::Success(_) => Ok(()),
        Validation::Failure(errors) => {
            let violations: Vec<ArgumentError> = errors.iter().copied().collect();
            log::debug!("rejected arguments: {violations:?}");
            Err(CursorError::InvalidArgument { violations })
        }
    }
}

// Only called on non-negative values; saturates on targets narrower than 64 bits.
fn to_index(value: i64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

/// How many passes a cyclic cursor makes over its source.
///
/// `Times(n)` counts total passes, the first (draining) pass included.
/// `Times(2)` over `[1, 2, 3]` yields `[1, 2, 3, 1, 2, 3]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Repeat {
    /// Replay indefinitely
    Forever,
    /// Stop after this many passes
    Times(usize),
}

impl Repeat {
    /// Check whether another pass may start after `passes_done` passes.
    pub fn allows(&self, passes_done: usize) -> bool {
        match self {
            Self::Forever => true,
            Self::Times(n) => passes_done < *n,
        }
    }
}
