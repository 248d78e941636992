//! Error types for sequence construction and fallible reductions.

use thiserror::Error;

/// Failures reported when a sequence or cursor is set up.
#[derive(Debug, Error)]
pub enum SeqError {
    /// `step_by` was given a step of zero.
    #[error("step_by requires a non-zero step")]
    ZeroStep,
    /// The worker thread backing a cursor could not be started.
    #[error("failed to spawn cursor worker: {0}")]
    Spawn(#[from] std::io::Error),
}

/// A `try_fold` run that was stopped by its step function.
///
/// Holds the accumulator as it was when the failing step returned, the error
/// itself, and how many elements had been consumed including the failing one.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("fold interrupted after {consumed} elements: {error}")]
pub struct Interrupted<R, E> {
    /// Accumulator as the failing step left it.
    pub acc: R,
    /// Error returned by the failing step.
    pub error: E,
    /// Elements consumed, the failing one included.
    pub consumed: usize,
}

impl<R, E> Interrupted<R, E> {
    /// Split into the accumulator and the error.
    pub fn into_parts(self) -> (R, E) {
        (self.acc, self.error)
    }
}
