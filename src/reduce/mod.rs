//! Terminal operators that drive a sequence and produce a result
//!
//! Every function here runs the sequence once. Operators that can know
//! their answer early (`nth`, `find`, `all`, `position` and friends) halt
//! the source as soon as they do.

mod collect;
mod extrema;
mod fold;
mod search;

// Re-export terminal operators
pub use collect::{collect, partition, product, sum};
pub use extrema::{max, max_by, max_by_key, min, min_by, min_by_key};
pub use fold::{count, fold, for_each, last, nth, reduce, try_fold, try_for_each};
pub use search::{all, any, find, find_map, position, rposition};
