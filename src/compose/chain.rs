use crate::Seq;

/// Run the first sequence to its end, then the second.
///
/// If the consumer halts during the first sequence, the second is never started.
pub fn chain<A, B>(first: A, second: B) -> Chain<A, B>
where
    A: Seq,
    B: Seq<Item = A::Item>,
{
    Chain(first, second)
}

/// Two sequences joined end to end.
///
/// Created via `chain()` or [`Seq::chain`].
#[derive(Clone)]
pub struct Chain<A, B>(A, B);

impl<A, B> Seq for Chain<A, B>
where
    A: Seq,
    B: Seq<Item = A::Item>,
{
    type Item = A::Item;
    fn each(&self, step: &mut dyn FnMut(A::Item) -> bool) -> bool {
        self.0.each(&mut *step) && self.1.each(step)
    }
}

/// Repeats a sequence without end.
#[derive(Clone)]
pub struct Cycle<S> {
    source: S,
}

/// Create a sequence that replays `source` forever.
///
/// The result is infinite unless `source` is empty, in which case it is
/// empty too. Only drive it through something that stops on its own, such
/// as [`take`](crate::compose::take) or [`find`](crate::Seq::find).
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let seq = from_collection(vec![1, 2]).cycle().take(5);
/// assert_eq!(seq.collect(), vec![1, 2, 1, 2, 1]);
/// ```
pub fn cycle<S: Seq>(source: S) -> Cycle<S> {
    Cycle { source }
}

impl<S: Seq> Seq for Cycle<S> {
    type Item = S::Item;
    fn each(&self, step: &mut dyn FnMut(S::Item) -> bool) -> bool {
        loop {
            let mut produced = false;
            let finished = self.source.each(&mut |item| {
                produced = true;
                step(item)
            });
            if !finished {
                return false;
            }
            if !produced {
                return true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{empty, from_collection};

    #[test]
    fn test_chain_runs_second_after_first() {
        let seq = chain(from_collection(vec![1, 2]), from_collection(vec![3]));
        assert_eq!(seq.collect(), vec![1, 2, 3]);
    }

    #[test]
    fn test_chain_with_empty_is_identity() {
        let s = || from_collection(vec![4, 5, 6]);
        assert_eq!(chain(empty(), s()).collect(), s().collect());
        assert_eq!(chain(s(), empty()).collect(), s().collect());
    }

    #[test]
    fn test_chain_halt_in_first_skips_second() {
        let mut seen = Vec::new();
        let finished = chain(from_collection(vec![1, 2]), from_collection(vec![3])).each(&mut |x| {
            seen.push(x);
            x != 1
        });
        assert!(!finished);
        assert_eq!(seen, vec![1]);
    }

    #[test]
    fn test_cycle_is_bounded_by_take() {
        let seq = from_collection(vec!['a', 'b', 'c']).cycle().take(7);
        assert_eq!(seq.collect(), vec!['a', 'b', 'c', 'a', 'b', 'c', 'a']);
    }

    #[test]
    fn test_cycle_with_find() {
        let seq = from_collection(1..=3).cycle().enumerate();
        assert_eq!(seq.find(|(i, x)| *i > 3 && *x == 2), Some((4, 2)));
    }

    #[test]
    fn test_cycle_of_empty_is_empty() {
        assert_eq!(empty::<u8>().cycle().take(5).count(), 0);
    }
}
