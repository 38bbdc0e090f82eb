//! Side-length collection: a sequential micro-wizard that walks every side
//! of the committed polygon and records a user-supplied length, with
//! edit-in-place correction.
//!
//! Sides are numbered from 1 in everything user-facing; storage is 0-based.

#[cfg(test)]
#[path = "measure_test.rs"]
mod measure_test;

/// Validation failure for a submitted or edited side length. Rejected input
/// never advances the wizard.
#[derive(Debug, thiserror::Error)]
pub enum MeasureError {
    #[error("please provide a length")]
    Empty,
    #[error("check the number format")]
    NotANumber,
    #[error("please input a number larger than {min}")]
    TooShort { min: f64 },
    #[error("no length has been provided for side {side} yet")]
    NoSuchSide { side: usize },
}

/// Where the wizard is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureState {
    /// Waiting for the length of the given side (1-based).
    Collecting(usize),
    /// Every side has a length; further submissions are ignored.
    Complete,
}

/// Collects one length per polygon side, in side order.
#[derive(Debug, Clone)]
pub struct SideLengthCollector {
    side_count: usize,
    min_length: f64,
    lengths: Vec<f64>,
}

impl SideLengthCollector {
    /// Start a wizard over a polygon with `side_count` sides, accepting
    /// lengths of at least `min_length`.
    #[must_use]
    pub fn new(side_count: usize, min_length: f64) -> Self {
        Self { side_count, min_length, lengths: Vec::with_capacity(side_count) }
    }

    /// Current wizard state.
    #[must_use]
    pub fn state(&self) -> MeasureState {
        if self.lengths.len() >= self.side_count {
            MeasureState::Complete
        } else {
            MeasureState::Collecting(self.lengths.len() + 1)
        }
    }

    /// The 1-based side currently being measured, or `None` when complete.
    /// This is the side the renderer highlights.
    #[must_use]
    pub fn current_side(&self) -> Option<usize> {
        match self.state() {
            MeasureState::Collecting(side) => Some(side),
            MeasureState::Complete => None,
        }
    }

    /// Returns `true` once every side has a length.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state() == MeasureState::Complete
    }

    /// Submit a raw input string for the current side.
    ///
    /// Accepted values append and advance the wizard; the returned state is
    /// the state after the submission. Submitting while complete changes
    /// nothing.
    ///
    /// # Errors
    ///
    /// Returns a [`MeasureError`] when the input is empty, not a number, or
    /// below the minimum length. The wizard does not advance.
    pub fn submit(&mut self, raw: &str) -> Result<MeasureState, MeasureError> {
        if self.is_complete() {
            return Ok(MeasureState::Complete);
        }
        let value = self.parse_length(raw)?;
        self.lengths.push(value);
        Ok(self.state())
    }

    /// Overwrite the stored length for a 1-based side that already has one.
    /// Editing never moves the wizard.
    ///
    /// # Errors
    ///
    /// Returns a [`MeasureError`] when the replacement value fails the same
    /// validation as submission, or when the side has no stored length yet.
    pub fn edit(&mut self, side: usize, raw: &str) -> Result<(), MeasureError> {
        if side == 0 || side > self.lengths.len() {
            return Err(MeasureError::NoSuchSide { side });
        }
        let value = self.parse_length(raw)?;
        self.lengths[side - 1] = value;
        Ok(())
    }

    /// Discard every collected length and restart at side 1.
    pub fn reset(&mut self) {
        self.lengths.clear();
    }

    /// The collected lengths so far, in side order.
    #[must_use]
    pub fn lengths(&self) -> &[f64] {
        &self.lengths
    }

    /// Number of sides the wizard walks.
    #[must_use]
    pub fn side_count(&self) -> usize {
        self.side_count
    }

    fn parse_length(&self, raw: &str) -> Result<f64, MeasureError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(MeasureError::Empty);
        }
        let value: f64 = trimmed.parse().map_err(|_| MeasureError::NotANumber)?;
        if !value.is_finite() {
            return Err(MeasureError::NotANumber);
        }
        if value < self.min_length {
            return Err(MeasureError::TooShort { min: self.min_length });
        }
        Ok(value)
    }
}
