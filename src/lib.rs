//! # Lazyseq: Composable Push-Driven Sequences
//!
//! Build lazy pipelines over a single sequence abstraction and drive them
//! with terminal operators. Nothing runs until a terminal operator asks for
//! it, and every pipeline can be driven again.
//!
//! ## Core Traits
//!
//! - **[`Seq`]**: A replayable producer that pushes its elements into a step function
//! - **[`Sans<I, O>`]**: A pull-side coroutine that yields one value per `next()` call
//!
//! ## Key Features
//!
//! - **Composable**: `map`, `filter`, `scan`, `chain`, `flat_map`, `take_while`, ...
//! - **Short-circuiting**: A consumer that stops early stops the whole pipeline
//! - **Pairwise**: `zip`, `eq` and `cmp` walk two sequences in lock-step through a [`Cursor`]
//! - **Lookahead**: `peekable()` pairs every element with the one after it
//!
//! ## Example
//!
//! ```
//! use lazyseq::prelude::*;
//!
//! let squares = from_iter(1..).map(|x: u64| x * x);
//! let small = squares.take_while(|x| *x < 50);
//! assert_eq!(small.collect(), vec![1, 4, 9, 16, 25, 36, 49]);
//! assert_eq!(small.sum(), 140);
//! ```
//!
//! ## Common Functions
//!
//! **Building Sequences:**
//! - [`from_collection(items)`] - Replay an owned collection
//! - [`from_iter(iter)`] - Replay a cloneable iterator
//! - [`from_fn(f)`] - Push elements from a closure
//!
//! **Pulling:**
//! - [`pull(seq, f)`] - Consume a sequence one element at a time
//! - [`pull_peekable(seq, f)`] - Same, with one element of lookahead

pub mod build;
pub mod compose;
pub mod concurrent;
mod error;
mod iter;
mod peek;
pub mod prelude;
pub mod reduce;
pub mod sans;
mod seq;
mod step;

pub use build::{empty, from_collection, from_fn, from_iter, once, repeat};
pub use concurrent::{pull, pull_with, Cursor, CursorConfig};
pub use error::{Interrupted, SeqError};
pub use iter::SansIter;
pub use peek::{lookahead, pull_peekable, Lookahead, Peekable};
pub use sans::{drain, Sans};
pub use seq::{BoxSeq, Seq};
pub use step::Step;
