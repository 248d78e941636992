//! Core trait for push-driven sequences.
//!
//! A [`Seq`] never hands out a materialised container. It is driven by
//! calling [`Seq::each`] with a step function: the sequence calls `step`
//! once per element, in order, and stops the moment `step` returns `false`.
//!
//! `each` takes `&self`, so a sequence can be run any number of times. Any
//! state a combinator needs (counters, accumulators, buffers) lives inside a
//! single call to `each` and is gone when the run ends.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let evens = from_collection(1..=10).filter(|x| x % 2 == 0).map(|x| x * 10);
//! assert_eq!(evens.collect(), vec![20, 40, 60, 80, 100]);
//! // the same sequence can be driven again
//! assert_eq!(evens.count(), 5);
//! ```

use std::{cmp::Ordering, sync::Arc};

use either::Either;
use num_traits::{One, Zero};

use crate::{
    compose::{
        Chain, Cloned, Cycle, Enumerate, Filter, FilterMap, FlatMap, Flatten, Fuse, Inspect,
        Map, MapWhile, Rev, Scan, Skip, SkipWhile, StepBy, Take, TakeWhile,
    },
    concurrent::{self, Lefts, Rights, Zip},
    error::{Interrupted, SeqError},
    peek::Lookahead,
    reduce,
};

/// A lazy, replayable producer of values driven through a push protocol.
///
/// Implementors only provide [`each`](Seq::each). Every combinator and
/// terminal operator is a provided method that delegates to the free
/// functions in [`compose`](crate::compose), [`concurrent`](crate::concurrent)
/// and [`reduce`](crate::reduce).
pub trait Seq {
    /// Type of the elements produced
    type Item;

    /// Push each element into `step` until the source ends or `step` returns `false`.
    ///
    /// Returns `true` if the source ran to its end and `false` if `step`
    /// halted the run. An empty sequence never calls `step`. Once `step`
    /// returns `false` it must not be called again during this run.
    fn each(&self, step: &mut dyn FnMut(Self::Item) -> bool) -> bool;

    /// Transform every element with `f`.
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item) -> U,
    {
        crate::compose::map(self, f)
    }

    /// Keep only elements for which `pred` holds.
    fn filter<P>(self, pred: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        crate::compose::filter(self, pred)
    }

    /// Transform and filter in one pass, keeping the `Some` results.
    fn filter_map<U, F>(self, f: F) -> FilterMap<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item) -> Option<U>,
    {
        crate::compose::filter_map(self, f)
    }

    /// Transform elements until `f` first returns `None`, then end.
    fn map_while<U, F>(self, f: F) -> MapWhile<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item) -> Option<U>,
    {
        crate::compose::map_while(self, f)
    }

    /// Pair each element with its zero-based index.
    fn enumerate(self) -> Enumerate<Self>
    where
        Self: Sized,
    {
        crate::compose::enumerate(self)
    }

    /// Call `f` on each element as it passes through.
    fn inspect<F>(self, f: F) -> Inspect<Self, F>
    where
        Self: Sized,
        F: Fn(&Self::Item),
    {
        crate::compose::inspect(self, f)
    }

    /// Clone each borrowed element.
    fn cloned<'a, T>(self) -> Cloned<Self>
    where
        Self: Sized + Seq<Item = &'a T>,
        T: Clone + 'a,
    {
        crate::compose::cloned(self)
    }

    /// Map each element to a sequence and yield the inner elements in turn.
    fn flat_map<U, F>(self, f: F) -> FlatMap<Self, F>
    where
        Self: Sized,
        U: Seq,
        F: Fn(Self::Item) -> U,
    {
        crate::compose::flat_map(self, f)
    }

    /// Flatten a sequence of sequences.
    fn flatten(self) -> Flatten<Self>
    where
        Self: Sized,
        Self::Item: Seq,
    {
        crate::compose::flatten(self)
    }

    /// Thread an accumulator through the run, yielding each new state.
    ///
    /// The sequence ends as soon as `f` returns `None`.
    fn scan<R, F>(self, seed: R, f: F) -> Scan<Self, R, F>
    where
        Self: Sized,
        R: Clone,
        F: Fn(R, Self::Item) -> Option<R>,
    {
        crate::compose::scan(self, seed, f)
    }

    /// Yield every `step`-th element, starting with the first.
    ///
    /// Fails with [`SeqError::ZeroStep`] if `step` is zero.
    fn step_by(self, step: usize) -> Result<StepBy<Self>, SeqError>
    where
        Self: Sized,
    {
        crate::compose::step_by(self, step)
    }

    /// Yield elements while `pred` holds, then end for good.
    fn take_while<P>(self, pred: P) -> TakeWhile<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        crate::compose::take_while(self, pred)
    }

    /// Drop elements while `pred` holds, then pass everything through.
    fn skip_while<P>(self, pred: P) -> SkipWhile<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        crate::compose::skip_while(self, pred)
    }

    /// Yield at most the first `n` elements.
    fn take(self, n: usize) -> Take<Self>
    where
        Self: Sized,
    {
        crate::compose::take(self, n)
    }

    /// Drop the first `n` elements.
    fn skip(self, n: usize) -> Skip<Self>
    where
        Self: Sized,
    {
        crate::compose::skip(self, n)
    }

    /// Yield all of `self`, then all of `other`.
    fn chain<B>(self, other: B) -> Chain<Self, B>
    where
        Self: Sized,
        B: Seq<Item = Self::Item>,
    {
        crate::compose::chain(self, other)
    }

    /// Repeat the sequence forever. Bound it with `take` or a short-circuiting terminal.
    fn cycle(self) -> Cycle<Self>
    where
        Self: Sized,
    {
        crate::compose::cycle(self)
    }

    /// Yield the elements in reverse order.
    ///
    /// This is the one eager combinator: every run buffers the whole source
    /// before yielding anything, so it must not be used on infinite sources.
    fn rev(self) -> Rev<Self>
    where
        Self: Sized,
    {
        crate::compose::rev(self)
    }

    /// Yield present values and end for good at the first `None`.
    fn fuse<T>(self) -> Fuse<Self>
    where
        Self: Sized + Seq<Item = Option<T>>,
    {
        crate::compose::fuse(self)
    }

    /// Pair every element with the one after it; the last is paired with `None`.
    ///
    /// See [`Lookahead`] for peeking at the first element.
    fn peekable(self) -> Lookahead<Self>
    where
        Self: Sized,
        Self::Item: Clone,
    {
        crate::peek::lookahead(self)
    }

    /// Pair elements of `self` and `other` until either runs out.
    ///
    /// # Panics
    ///
    /// Each run pulls `other` through a [`Cursor`](crate::Cursor) and panics
    /// if its worker thread cannot be started. Use [`pull_with`](crate::pull_with)
    /// to handle that as an error.
    fn zip<B>(self, other: B) -> Zip<Self, B>
    where
        Self: Sized,
        B: Seq + Sync,
        B::Item: Send,
    {
        concurrent::zip(self, other)
    }

    /// Split a sequence of pairs into two sequences that each re-drive `self`.
    fn unzip<A, B>(self) -> (Lefts<Self>, Rights<Self>)
    where
        Self: Sized + Seq<Item = (A, B)>,
    {
        concurrent::unzip(Arc::new(self))
    }

    /// Number of elements in one run.
    fn count(&self) -> usize {
        reduce::count(self)
    }

    /// Final element, if any.
    fn last(&self) -> Option<Self::Item> {
        reduce::last(self)
    }

    /// Element at index `n`, if any. Stops the source right after it.
    fn nth(&self, n: usize) -> Option<Self::Item> {
        reduce::nth(self, n)
    }

    /// Call `f` on every element.
    fn for_each<F>(&self, f: F)
    where
        Self: Sized,
        F: FnMut(Self::Item),
    {
        reduce::for_each(self, f)
    }

    /// Fold every element into an accumulator, left to right.
    fn fold<R, F>(&self, init: R, f: F) -> R
    where
        Self: Sized,
        F: FnMut(R, Self::Item) -> R,
    {
        reduce::fold(self, init, f)
    }

    /// Fold with a step that may fail; see [`reduce::try_fold`].
    fn try_fold<R, E, F>(&self, init: R, f: F) -> Result<R, Interrupted<R, E>>
    where
        Self: Sized,
        F: FnMut(&mut R, Self::Item) -> Result<(), E>,
    {
        reduce::try_fold(self, init, f)
    }

    /// Call a fallible `f` on every element, stopping at the first error.
    fn try_for_each<E, F>(&self, f: F) -> Result<(), E>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> Result<(), E>,
    {
        reduce::try_for_each(self, f)
    }

    /// Fold seeded by the first element. `None` for an empty sequence.
    fn reduce<F>(&self, f: F) -> Option<Self::Item>
    where
        Self: Sized,
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        reduce::reduce(self, f)
    }

    /// `true` if `pred` holds for every element; stops at the first failure.
    fn all<P>(&self, pred: P) -> bool
    where
        Self: Sized,
        P: FnMut(Self::Item) -> bool,
    {
        reduce::all(self, pred)
    }

    /// `true` if `pred` holds for some element; stops at the first match.
    fn any<P>(&self, pred: P) -> bool
    where
        Self: Sized,
        P: FnMut(Self::Item) -> bool,
    {
        reduce::any(self, pred)
    }

    /// First element satisfying `pred`.
    fn find<P>(&self, pred: P) -> Option<Self::Item>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        reduce::find(self, pred)
    }

    /// First `Some` produced by `f`.
    fn find_map<U, F>(&self, f: F) -> Option<U>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> Option<U>,
    {
        reduce::find_map(self, f)
    }

    /// Index of the first element satisfying `pred`.
    fn position<P>(&self, pred: P) -> Option<usize>
    where
        Self: Sized,
        P: FnMut(Self::Item) -> bool,
    {
        reduce::position(self, pred)
    }

    /// Index of the last element satisfying `pred`. Always drives the whole run.
    fn rposition<P>(&self, pred: P) -> Option<usize>
    where
        Self: Sized,
        P: FnMut(Self::Item) -> bool,
    {
        reduce::rposition(self, pred)
    }

    /// Largest element; the earliest wins a tie.
    fn max(&self) -> Option<Self::Item>
    where
        Self::Item: Ord,
    {
        reduce::max(self)
    }

    /// Smallest element; the earliest wins a tie.
    fn min(&self) -> Option<Self::Item>
    where
        Self::Item: Ord,
    {
        reduce::min(self)
    }

    /// Element with the largest key; the earliest wins a tie.
    fn max_by_key<K, F>(&self, f: F) -> Option<Self::Item>
    where
        Self: Sized,
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        reduce::max_by_key(self, f)
    }

    /// Element with the smallest key; the earliest wins a tie.
    fn min_by_key<K, F>(&self, f: F) -> Option<Self::Item>
    where
        Self: Sized,
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        reduce::min_by_key(self, f)
    }

    /// Largest element under `compare`; the earliest wins a tie.
    fn max_by<F>(&self, compare: F) -> Option<Self::Item>
    where
        Self: Sized,
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        reduce::max_by(self, compare)
    }

    /// Smallest element under `compare`; the earliest wins a tie.
    fn min_by<F>(&self, compare: F) -> Option<Self::Item>
    where
        Self: Sized,
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        reduce::min_by(self, compare)
    }

    /// Sum of all elements, `zero` for an empty sequence.
    fn sum(&self) -> Self::Item
    where
        Self::Item: Zero,
    {
        reduce::sum(self)
    }

    /// Product of all elements, `one` for an empty sequence.
    fn product(&self) -> Self::Item
    where
        Self::Item: One,
    {
        reduce::product(self)
    }

    /// Materialise one run into a `Vec`.
    fn collect(&self) -> Vec<Self::Item> {
        reduce::collect(self)
    }

    /// Split one run into the elements that satisfy `pred` and those that do not.
    fn partition<P>(&self, pred: P) -> (Vec<Self::Item>, Vec<Self::Item>)
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        reduce::partition(self, pred)
    }

    /// Element-wise equality with `other`; different lengths are unequal.
    ///
    /// # Panics
    ///
    /// Panics if the worker thread that pulls `other` cannot be started.
    fn eq<B>(&self, other: &B) -> bool
    where
        Self: Sized,
        Self::Item: PartialEq<B::Item>,
        B: Seq + Sync + ?Sized,
        B::Item: Send,
    {
        concurrent::eq(self, other)
    }

    /// Element-wise equality under `eq`.
    ///
    /// # Panics
    ///
    /// Panics if the worker thread that pulls `other` cannot be started.
    fn eq_by<B, F>(&self, other: &B, eq: F) -> bool
    where
        Self: Sized,
        B: Seq + Sync + ?Sized,
        B::Item: Send,
        F: FnMut(&Self::Item, &B::Item) -> bool,
    {
        concurrent::eq_by(self, other, eq)
    }

    /// Negation of [`eq`](Seq::eq).
    ///
    /// # Panics
    ///
    /// Panics if the worker thread that pulls `other` cannot be started.
    fn ne<B>(&self, other: &B) -> bool
    where
        Self: Sized,
        Self::Item: PartialEq<B::Item>,
        B: Seq + Sync + ?Sized,
        B::Item: Send,
    {
        !concurrent::eq(self, other)
    }

    /// Lexicographic comparison with `other`.
    ///
    /// # Panics
    ///
    /// Panics if the worker thread that pulls `other` cannot be started.
    fn cmp<B>(&self, other: &B) -> Ordering
    where
        Self: Sized,
        Self::Item: Ord,
        B: Seq<Item = Self::Item> + Sync + ?Sized,
        B::Item: Send,
    {
        concurrent::cmp(self, other)
    }

    /// Lexicographic comparison under `compare`.
    ///
    /// # Panics
    ///
    /// Panics if the worker thread that pulls `other` cannot be started.
    fn cmp_by<B, F>(&self, other: &B, compare: F) -> Ordering
    where
        Self: Sized,
        B: Seq + Sync + ?Sized,
        B::Item: Send,
        F: FnMut(&Self::Item, &B::Item) -> Ordering,
    {
        concurrent::cmp_by(self, other, compare)
    }

    /// `true` if `self` sorts before `other`.
    ///
    /// Panics under the same conditions as [`cmp`](Seq::cmp).
    fn lt<B>(&self, other: &B) -> bool
    where
        Self: Sized,
        Self::Item: Ord,
        B: Seq<Item = Self::Item> + Sync + ?Sized,
        B::Item: Send,
    {
        concurrent::cmp(self, other) == Ordering::Less
    }

    /// `true` unless `self` sorts after `other`.
    ///
    /// Panics under the same conditions as [`cmp`](Seq::cmp).
    fn le<B>(&self, other: &B) -> bool
    where
        Self: Sized,
        Self::Item: Ord,
        B: Seq<Item = Self::Item> + Sync + ?Sized,
        B::Item: Send,
    {
        concurrent::cmp(self, other) != Ordering::Greater
    }

    /// `true` if `self` sorts after `other`.
    ///
    /// Panics under the same conditions as [`cmp`](Seq::cmp).
    fn gt<B>(&self, other: &B) -> bool
    where
        Self: Sized,
        Self::Item: Ord,
        B: Seq<Item = Self::Item> + Sync + ?Sized,
        B::Item: Send,
    {
        concurrent::cmp(self, other) == Ordering::Greater
    }

    /// `true` unless `self` sorts before `other`.
    ///
    /// Panics under the same conditions as [`cmp`](Seq::cmp).
    fn ge<B>(&self, other: &B) -> bool
    where
        Self: Sized,
        Self::Item: Ord,
        B: Seq<Item = Self::Item> + Sync + ?Sized,
        B::Item: Send,
    {
        concurrent::cmp(self, other) != Ordering::Less
    }

    /// `true` if the run never reverses direction; see [`concurrent::is_sorted_by`].
    fn is_sorted(&self) -> bool
    where
        Self::Item: Ord,
    {
        concurrent::is_sorted_by(self, Ord::cmp)
    }

    /// Sortedness under `compare`.
    fn is_sorted_by<F>(&self, compare: F) -> bool
    where
        Self: Sized,
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        concurrent::is_sorted_by(self, compare)
    }

    /// Sortedness of the keys produced by `f`, computed once per element.
    fn is_sorted_by_key<K, F>(&self, f: F) -> bool
    where
        Self: Sized,
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        concurrent::is_sorted_by_key(self, f)
    }
}

impl<S> Seq for &'_ S
where
    S: Seq + ?Sized,
{
    type Item = S::Item;

    fn each(&self, step: &mut dyn FnMut(Self::Item) -> bool) -> bool {
        (**self).each(step)
    }
}

impl<S> Seq for Box<S>
where
    S: Seq + ?Sized,
{
    type Item = S::Item;

    fn each(&self, step: &mut dyn FnMut(Self::Item) -> bool) -> bool {
        (**self).each(step)
    }
}

impl<S> Seq for Arc<S>
where
    S: Seq + ?Sized,
{
    type Item = S::Item;

    fn each(&self, step: &mut dyn FnMut(Self::Item) -> bool) -> bool {
        (**self).each(step)
    }
}

impl<L, R> Seq for Either<L, R>
where
    L: Seq,
    R: Seq<Item = L::Item>,
{
    type Item = L::Item;

    fn each(&self, step: &mut dyn FnMut(Self::Item) -> bool) -> bool {
        match self {
            Either::Left(l) => l.each(step),
            Either::Right(r) => r.each(step),
        }
    }
}

/// A type-erased sequence.
pub type BoxSeq<'a, T> = Box<dyn Seq<Item = T> + Send + Sync + 'a>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{empty, from_collection};

    #[test]
    fn test_empty_never_calls_step() {
        let mut calls = 0;
        let finished = empty::<i32>().each(&mut |_| {
            calls += 1;
            true
        });
        assert!(finished);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_each_reports_early_halt() {
        let mut seen = Vec::new();
        let finished = from_collection(vec![1, 2, 3]).each(&mut |x| {
            seen.push(x);
            x < 2
        });
        assert!(!finished);
        assert_eq!(seen, vec![1, 2]);
    }

    #[test]
    fn test_either_drives_active_side() {
        let pick = |flag: bool| {
            if flag {
                Either::Left(from_collection(vec![1, 2]))
            } else {
                Either::Right(from_collection(vec![3]).map(|x| x * 10))
            }
        };
        assert_eq!(pick(true).collect(), vec![1, 2]);
        assert_eq!(pick(false).collect(), vec![30]);
    }

    #[test]
    fn test_boxed_sequences_are_interchangeable() {
        let seqs: Vec<BoxSeq<'_, i32>> = vec![
            Box::new(from_collection(vec![1, 2])),
            Box::new(from_collection(vec![3, 4]).map(|x| x + 1)),
        ];
        let all: Vec<i32> = seqs.iter().flat_map(|s| s.collect()).collect();
        assert_eq!(all, vec![1, 2, 4, 5]);
    }

    #[test]
    fn test_borrowed_sequence_is_replayable() {
        let numbers = from_collection(vec![1, 2, 3]);
        let doubled = (&numbers).map(|x| x * 2);
        assert_eq!(doubled.collect(), vec![2, 4, 6]);
        assert_eq!(numbers.sum(), 6);
    }
}
