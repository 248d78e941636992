//! One-element lookahead, on the push side and on the pull side.
//!
//! [`Lookahead`] is a plain [`Seq`]: each run buffers one element and yields
//! every element together with the one that follows it, so it composes with
//! every other combinator and terminal. Get one with [`Seq::peekable`].
//!
//! [`Peekable`] wraps a pull source instead, for code that wants to inspect
//! the next element and then decide whether to consume it. Use
//! [`pull_peekable`] to get one over any [`Seq`], or wrap a
//! [`drain`](crate::sans::drain) to peek into a plain iterator without a
//! worker thread.

use crate::{concurrent::pull, reduce, Cursor, Sans, Seq, Step};

/// Pairs every element with the element after it.
///
/// The last element of a run is paired with `None`. Each run holds exactly
/// one buffered element and never reads further ahead than that.
#[derive(Clone)]
pub struct Lookahead<S> {
    source: S,
}

/// Create a sequence of `(element, next element)` pairs over `source`.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let seq = from_collection(vec![1, 2, 3]).peekable();
/// assert_eq!(seq.peek(), Some(1));
/// assert_eq!(seq.collect(), vec![(1, Some(2)), (2, Some(3)), (3, None)]);
/// ```
pub fn lookahead<S>(source: S) -> Lookahead<S>
where
    S: Seq,
    S::Item: Clone,
{
    Lookahead { source }
}

impl<S> Lookahead<S>
where
    S: Seq,
    S::Item: Clone,
{
    /// First element a run would yield, without running past it.
    ///
    /// Each call looks at a fresh run, so peeking any number of times never
    /// changes what a later run produces.
    pub fn peek(&self) -> Option<S::Item> {
        reduce::nth(&self.source, 0)
    }
}

impl<S> Seq for Lookahead<S>
where
    S: Seq,
    S::Item: Clone,
{
    type Item = (S::Item, Option<S::Item>);
    fn each(&self, step: &mut dyn FnMut(Self::Item) -> bool) -> bool {
        let mut buffered: Option<S::Item> = None;
        let mut halted = false;
        self.source.each(&mut |item| {
            let Some(current) = buffered.replace(item.clone()) else {
                return true;
            };
            halted = !step((current, Some(item)));
            !halted
        });
        if halted {
            return false;
        }
        match buffered {
            Some(last) => step((last, None)),
            None => true,
        }
    }
}

/// A pull source with a single buffered lookahead element.
///
/// The buffer remembers whether the source was exhausted when it was filled,
/// so `peek` at the end of the run keeps answering `None` without touching
/// the source again.
pub struct Peekable<S, T> {
    source: S,
    peeked: Option<Option<T>>,
    finished: bool,
}

impl<S, T> Peekable<S, T>
where
    S: Sans<(), T>,
{
    /// Wrap `source`. Nothing is pulled until the first `peek` or `next`.
    pub fn new(source: S) -> Self {
        Peekable {
            source,
            peeked: None,
            finished: false,
        }
    }

    fn advance(&mut self) -> Option<T> {
        if self.finished {
            return None;
        }
        let item = self.source.next(()).yielded_value();
        self.finished = item.is_none();
        item
    }

    /// Look at the next element without consuming it.
    ///
    /// Calling `peek` again before `next` returns the same element.
    pub fn peek(&mut self) -> Option<&T> {
        if self.peeked.is_none() {
            let next = self.advance();
            self.peeked = Some(next);
        }
        self.peeked.as_ref().and_then(Option::as_ref)
    }

    /// Like [`peek`](Peekable::peek), with mutable access to the buffered element.
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.peek();
        self.peeked.as_mut().and_then(Option::as_mut)
    }

    /// Consume the next element, buffered or fresh.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<T> {
        match self.peeked.take() {
            Some(peeked) => peeked,
            None => self.advance(),
        }
    }

    /// Consume the next element only if `accept` approves of it.
    pub fn next_if(&mut self, accept: impl FnOnce(&T) -> bool) -> Option<T> {
        match self.next() {
            Some(item) if accept(&item) => Some(item),
            other => {
                self.peeked = Some(other);
                None
            }
        }
    }

    /// Consume the next element only if it equals `expected`.
    pub fn next_if_eq<U>(&mut self, expected: &U) -> Option<T>
    where
        U: ?Sized,
        T: PartialEq<U>,
    {
        self.next_if(|item| item == expected)
    }

    /// Push the remaining elements, buffered one first, into `step`.
    ///
    /// Returns `true` if the source ran out and `false` if `step` halted,
    /// the same as [`Seq::each`].
    pub fn each(&mut self, step: &mut dyn FnMut(T) -> bool) -> bool {
        while let Some(item) = self.next() {
            if !step(item) {
                return false;
            }
        }
        true
    }
}

impl<S, T> Sans<(), T> for Peekable<S, T>
where
    S: Sans<(), T>,
{
    type Return = ();
    fn next(&mut self, _input: ()) -> Step<T, ()> {
        Peekable::next(self).into()
    }
}

/// Run `f` with a peekable cursor over `seq`.
///
/// The cursor is stopped when `f` returns, exactly as with [`pull`].
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let tokens = from_collection(vec![1, 1, 2, 3]);
/// let (ones, rest) = pull_peekable(&tokens, |p| {
///     let mut ones = 0;
///     while p.next_if_eq(&1).is_some() {
///         ones += 1;
///     }
///     (ones, p.peek().copied())
/// });
/// assert_eq!((ones, rest), (2, Some(2)));
/// ```
///
/// # Panics
///
/// Panics if the cursor's worker thread cannot be started, like [`pull`].
pub fn pull_peekable<S, R, F>(seq: &S, f: F) -> R
where
    S: Seq + Sync + ?Sized,
    S::Item: Send,
    F: FnOnce(&mut Peekable<&mut Cursor<'_, S::Item>, S::Item>) -> R,
{
    pull(seq, |cursor| f(&mut Peekable::new(cursor)))
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::{
        build::{empty, from_collection, from_iter},
        sans::drain,
    };

    #[test]
    fn test_lookahead_pairs_each_element_with_the_next() {
        let seq = lookahead(from_collection(vec!['a', 'b', 'c']));
        assert_eq!(
            seq.collect(),
            vec![('a', Some('b')), ('b', Some('c')), ('c', None)]
        );
        assert_eq!(lookahead(from_collection(vec![7])).collect(), vec![(7, None)]);
        assert_eq!(lookahead(empty::<i32>()).count(), 0);
    }

    #[test]
    fn test_lookahead_peek_is_idempotent() {
        let seq = lookahead(from_collection(vec![4, 5]));
        assert_eq!(seq.peek(), Some(4));
        assert_eq!(seq.peek(), Some(4));
        assert_eq!(seq.collect(), vec![(4, Some(5)), (5, None)]);
        assert_eq!(lookahead(empty::<i32>()).peek(), None);
    }

    #[test]
    fn test_lookahead_peek_reads_one_element() {
        let pulled = Cell::new(0);
        let seq = lookahead(from_iter(0..).inspect(|_| pulled.set(pulled.get() + 1)));
        assert_eq!(seq.peek(), Some(0));
        assert_eq!(pulled.get(), 1);
    }

    #[test]
    fn test_lookahead_composes_with_combinators() {
        // keep elements that start a run of equal neighbours
        let seq = from_collection(vec![1, 1, 2, 3, 3, 3])
            .peekable()
            .filter(|(x, next)| *next == Some(*x))
            .map(|(x, _)| x);
        assert_eq!(seq.collect(), vec![1, 3, 3]);

        let infinite = from_iter(0..).peekable().take(2);
        assert_eq!(infinite.collect(), vec![(0, Some(1)), (1, Some(2))]);
    }

    #[test]
    fn test_lookahead_halt_skips_final_pair() {
        let seq = lookahead(from_collection(vec![1, 2])).chain(from_collection(vec![(9, None)]));
        assert_eq!((&seq).take(1).collect(), vec![(1, Some(2))]);
        assert_eq!(seq.collect(), vec![(1, Some(2)), (2, None), (9, None)]);
    }

    #[test]
    fn test_peek_twice_returns_same_element() {
        let mut p = Peekable::new(drain(vec![1, 2]));
        assert_eq!(p.peek(), Some(&1));
        assert_eq!(p.peek(), Some(&1));
        assert_eq!(p.next(), Some(1));
        assert_eq!(p.next(), Some(2));
        assert_eq!(p.peek(), None);
        assert_eq!(p.next(), None);
    }

    #[test]
    fn test_peek_does_not_skip_elements() {
        let mut p = Peekable::new(drain(vec!['a', 'b', 'c']));
        let mut seen = Vec::new();
        while let Some(&c) = p.peek() {
            assert_eq!(p.next(), Some(c));
            seen.push(c);
        }
        assert_eq!(seen, vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_next_if_keeps_rejected_element() {
        let mut p = Peekable::new(drain(vec![1, 2, 3]));
        assert_eq!(p.next_if(|x| *x == 1), Some(1));
        assert_eq!(p.next_if(|x| *x == 5), None);
        assert_eq!(p.next(), Some(2));
    }

    #[test]
    fn test_peek_mut_changes_next() {
        let mut p = Peekable::new(drain(vec![1, 2]));
        if let Some(first) = p.peek_mut() {
            *first = 10;
        }
        assert_eq!(p.next(), Some(10));
    }

    #[test]
    fn test_each_drains_buffer_first() {
        let mut p = Peekable::new(drain(1..=4));
        assert_eq!(p.peek(), Some(&1));
        let mut rest = Vec::new();
        assert!(!p.each(&mut |x| {
            rest.push(x);
            x < 2
        }));
        assert_eq!(rest, vec![1, 2]);
        assert_eq!(p.next(), Some(3));
    }

    #[test]
    fn test_pull_peekable_over_sequence() {
        let seq = from_collection(vec![5, 6, 7]);
        let collected = pull_peekable(&seq, |p| {
            assert_eq!(p.peek(), Some(&5));
            let mut out = Vec::new();
            p.each(&mut |x| {
                out.push(x);
                true
            });
            out
        });
        assert_eq!(collected, vec![5, 6, 7]);
    }
}
