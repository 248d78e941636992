use std::marker::PhantomData;

use crate::Seq;

/// A sequence defined by a push closure.
pub struct FromFn<F, T> {
    f: F,
    _phantom: PhantomData<fn() -> T>,
}

impl<F: Clone, T> Clone for FromFn<F, T> {
    fn clone(&self) -> Self {
        FromFn {
            f: self.f.clone(),
            _phantom: PhantomData,
        }
    }
}

/// Create a sequence from a closure that pushes elements into a step function.
///
/// The closure must stop as soon as `step` returns `false` and report
/// whether it reached its own end, exactly like [`Seq::each`].
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let fibonacci = from_fn(|step: &mut dyn FnMut(u64) -> bool| {
///     let (mut a, mut b) = (0, 1);
///     loop {
///         if !step(a) {
///             return false;
///         }
///         (a, b) = (b, a + b);
///     }
/// });
/// assert_eq!(fibonacci.take(7).collect(), vec![0, 1, 1, 2, 3, 5, 8]);
/// ```
pub fn from_fn<F, T>(f: F) -> FromFn<F, T>
where
    F: Fn(&mut dyn FnMut(T) -> bool) -> bool,
{
    FromFn {
        f,
        _phantom: PhantomData,
    }
}

impl<F, T> Seq for FromFn<F, T>
where
    F: Fn(&mut dyn FnMut(T) -> bool) -> bool,
{
    type Item = T;
    fn each(&self, step: &mut dyn FnMut(T) -> bool) -> bool {
        (self.f)(step)
    }
}

/// A sequence with no elements.
pub struct Empty<T>(PhantomData<fn() -> T>);

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        empty()
    }
}

/// Create a sequence that yields nothing.
pub fn empty<T>() -> Empty<T> {
    Empty(PhantomData)
}

impl<T> Seq for Empty<T> {
    type Item = T;
    fn each(&self, _step: &mut dyn FnMut(T) -> bool) -> bool {
        true
    }
}

/// A sequence of exactly one element.
#[derive(Debug, Clone)]
pub struct Once<T>(T);

/// Create a sequence that yields a clone of `value` once per run.
pub fn once<T: Clone>(value: T) -> Once<T> {
    Once(value)
}

impl<T: Clone> Seq for Once<T> {
    type Item = T;
    fn each(&self, step: &mut dyn FnMut(T) -> bool) -> bool {
        step(self.0.clone())
    }
}

/// An endless sequence of the same element.
#[derive(Debug, Clone)]
pub struct Repeat<T>(T);

/// Create a sequence that yields clones of `value` forever.
///
/// Never completes on its own; bound it with `take` or a short-circuiting terminal.
pub fn repeat<T: Clone>(value: T) -> Repeat<T> {
    Repeat(value)
}

impl<T: Clone> Seq for Repeat<T> {
    type Item = T;
    fn each(&self, step: &mut dyn FnMut(T) -> bool) -> bool {
        while step(self.0.clone()) {}
        false
    }
}
