//! Operations that drive two sequences in lock-step.
//!
//! A push sequence cannot be paused, so anything that walks two sequences
//! side by side drives one directly and consumes the other through a
//! [`Cursor`] running on a scoped worker thread. This module holds the
//! cursor itself and the pairwise operators built on it.

mod compare;
mod cursor;
mod zip;

pub use compare::{cmp, cmp_by, eq, eq_by, is_sorted_by, is_sorted_by_key};
pub use cursor::{pull, pull_with, Cursor, CursorConfig};
pub use zip::{unzip, zip, Lefts, Rights, Zip};
