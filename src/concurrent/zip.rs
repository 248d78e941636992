use std::sync::Arc;

use super::cursor::pull;
use crate::Seq;

/// Pairs up two sequences element by element.
#[derive(Clone)]
pub struct Zip<A, B> {
    a: A,
    b: B,
}

/// Create a sequence of pairs that ends as soon as either side runs out.
///
/// `a` is driven directly; `b` is consumed through a [`Cursor`](super::Cursor),
/// one element per element of `a`. The cursor is stopped when the run ends
/// for any reason. As with any zip over a push source, the element of `a`
/// that finds `b` exhausted has already been produced and is discarded.
///
/// # Panics
///
/// Driving the result panics if the cursor's worker thread cannot be started.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let pairs = from_collection(1..=5).zip(from_collection(vec!['a', 'b', 'c']));
/// assert_eq!(pairs.collect(), vec![(1, 'a'), (2, 'b'), (3, 'c')]);
/// ```
pub fn zip<A, B>(a: A, b: B) -> Zip<A, B>
where
    A: Seq,
    B: Seq + Sync,
    B::Item: Send,
{
    Zip { a, b }
}

impl<A, B> Seq for Zip<A, B>
where
    A: Seq,
    B: Seq + Sync,
    B::Item: Send,
{
    type Item = (A::Item, B::Item);
    fn each(&self, step: &mut dyn FnMut(Self::Item) -> bool) -> bool {
        pull(&self.b, |cursor| {
            let mut halted = false;
            self.a.each(&mut |x| match cursor.next() {
                Some(y) => {
                    halted = !step((x, y));
                    !halted
                }
                None => false,
            });
            !halted
        })
    }
}

/// First halves of a sequence of pairs.
pub struct Lefts<S> {
    source: Arc<S>,
}

/// Second halves of a sequence of pairs.
pub struct Rights<S> {
    source: Arc<S>,
}

impl<S> Clone for Lefts<S> {
    fn clone(&self) -> Self {
        Lefts {
            source: Arc::clone(&self.source),
        }
    }
}

impl<S> Clone for Rights<S> {
    fn clone(&self) -> Self {
        Rights {
            source: Arc::clone(&self.source),
        }
    }
}

/// Split a sequence of pairs into its two sides.
///
/// The halves share `source` but nothing else: each run of either half
/// drives `source` again from the start.
pub fn unzip<S, A, B>(source: Arc<S>) -> (Lefts<S>, Rights<S>)
where
    S: Seq<Item = (A, B)>,
{
    (
        Lefts {
            source: Arc::clone(&source),
        },
        Rights { source },
    )
}

impl<S, A, B> Seq for Lefts<S>
where
    S: Seq<Item = (A, B)>,
{
    type Item = A;
    fn each(&self, step: &mut dyn FnMut(A) -> bool) -> bool {
        self.source.each(&mut |(a, _)| step(a))
    }
}

impl<S, A, B> Seq for Rights<S>
where
    S: Seq<Item = (A, B)>,
{
    type Item = B;
    fn each(&self, step: &mut dyn FnMut(B) -> bool) -> bool {
        self.source.each(&mut |(_, b)| step(b))
    }
}
