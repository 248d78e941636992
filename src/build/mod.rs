//! Building sequences from scratch
//!
//! This module provides the sources every pipeline starts from.

mod collection;
mod func;

// Re-export building blocks
pub use collection::{from_collection, from_iter, FromIter, Items};
pub use func::{empty, from_fn, once, repeat, Empty, FromFn, Once, Repeat};
