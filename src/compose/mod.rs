//! Transforming sequences into new lazy sequences
//!
//! Every combinator here takes its source by value and returns a new
//! [`Seq`](crate::Seq) without touching the source. Work only happens when
//! the result is driven. [`rev`] is the single exception and buffers the
//! whole source on each run.

mod bound;
mod chain;
mod flatten;
mod map;
mod rev;
mod scan;

// Re-export combinators
pub use bound::{
    skip, skip_while, step_by, take, take_while, Skip, SkipWhile, StepBy, Take, TakeWhile,
};
pub use chain::{chain, cycle, Chain, Cycle};
pub use flatten::{flat_map, flatten, FlatMap, Flatten};
pub use map::{
    cloned, enumerate, filter, filter_map, inspect, map, map_while, Cloned, Enumerate, Filter,
    FilterMap, Inspect, Map, MapWhile,
};
pub use rev::{rev, Rev};
pub use scan::{fuse, scan, Fuse, Scan};
