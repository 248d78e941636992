//! Stepping trait for pull-side coroutines.
//!
//! A [`Seq`](crate::Seq) pushes its elements into a callback. Anything that
//! needs to pull elements one at a time instead, such as a
//! [`Cursor`](crate::Cursor) or a [`Peekable`](crate::Peekable), is a [`Sans`]:
//! a stateful computation that takes an input, and either yields a value or
//! completes.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let mut stage = drain(vec![1, 2]);
//! assert_eq!(stage.next(()), Step::Yielded(1));
//! assert_eq!(stage.next(()), Step::Yielded(2));
//! assert_eq!(stage.next(()), Step::Complete(()));
//! ```

use crate::{iter::SansIter, step::Step};

/// Core trait for stateful computations that process input and yield intermediate values.
///
/// Each call to `next()` either yields an intermediate result or signals completion.
pub trait Sans<I, O> {
    /// Type of final result when computation completes
    type Return;

    /// Process input, returning `Yielded` to continue or `Complete` to finish.
    fn next(&mut self, input: I) -> Step<O, Self::Return>;

    /// Iterate over the yielded values of a coroutine that takes no input.
    #[allow(clippy::should_implement_trait)]
    fn into_iter(self) -> SansIter<O, Self>
    where
        Self: Sized + Sans<(), O>,
    {
        SansIter::new(self)
    }
}

impl<I, O, S> Sans<I, O> for &'_ mut S
where
    S: Sans<I, O> + ?Sized,
{
    type Return = S::Return;

    fn next(&mut self, input: I) -> Step<O, Self::Return> {
        (**self).next(input)
    }
}

/// Coroutine that yields the items of a std iterator, ignoring its input.
///
/// Useful for driving a [`Peekable`](crate::Peekable) without a worker thread.
pub struct Drain<I>(I);

/// Wrap an iterator as a coroutine with unit input.
pub fn drain<I: IntoIterator>(iter: I) -> Drain<I::IntoIter> {
    Drain(iter.into_iter())
}

impl<I: Iterator> Sans<(), I::Item> for Drain<I> {
    type Return = ();
    fn next(&mut self, _input: ()) -> Step<I::Item, ()> {
        self.0.next().into()
    }
}
