//! Commonly used imports
//!
//! Use `use lazyseq::prelude::*;` for quick access to the most common types and functions.

// Core types
pub use crate::{Seq, Sans, Step};

// Errors
pub use crate::{Interrupted, SeqError};

// Most common constructors
pub use crate::build::{empty, from_collection, from_fn, from_iter, once, repeat};
pub use crate::sans::drain;

// Pulling
pub use crate::concurrent::{pull, pull_with, CursorConfig};
pub use crate::{pull_peekable, Peekable};
