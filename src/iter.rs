//! Iterator adapter for pull-side coroutines with unit input.
//!
//! Any [`Sans<(), O>`], including a [`Cursor`](crate::Cursor) borrowed
//! mutably, can be turned into a std [`Iterator`] and combined with the
//! rest of the standard library.
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let mut iter = drain(vec![1, 2, 3]).into_iter();
//! let values: Vec<_> = iter.by_ref().collect();
//! assert_eq!(values, vec![1, 2, 3]);
//! assert!(iter.is_complete());
//! ```

use std::marker::PhantomData;

use crate::Sans;

/// Iterator adapter for [`Sans<(), O>`].
///
/// Repeatedly calls `next(())` on the wrapped coroutine and yields values
/// until the coroutine completes. The coroutine is dropped on completion
/// and never resumed again.
pub struct SansIter<O, S> {
    sans: Option<S>,
    _phantom: PhantomData<fn() -> O>,
}

impl<O, S> SansIter<O, S>
where
    S: Sans<(), O>,
{
    /// Create a new iterator from a coroutine.
    pub fn new(sans: S) -> Self {
        Self {
            sans: Some(sans),
            _phantom: PhantomData,
        }
    }

    /// Check if the iterator has completed.
    pub fn is_complete(&self) -> bool {
        self.sans.is_none()
    }
}

impl<O, S> Iterator for SansIter<O, S>
where
    S: Sans<(), O>,
{
    type Item = O;

    fn next(&mut self) -> Option<Self::Item> {
        let output = self.sans.as_mut()?.next(()).yielded_value();
        if output.is_none() {
            self.sans = None;
        }
        output
    }
}
