use crate::{error::SeqError, Seq};

/// Yields at most a fixed number of elements.
#[derive(Clone)]
pub struct Take<S> {
    source: S,
    n: usize,
}

/// Create a sequence of the first `n` elements of `source`.
///
/// The source is halted right after the `n`-th element; it is never asked
/// for one more.
pub fn take<S: Seq>(source: S, n: usize) -> Take<S> {
    Take { source, n }
}

impl<S: Seq> Seq for Take<S> {
    type Item = S::Item;
    fn each(&self, step: &mut dyn FnMut(S::Item) -> bool) -> bool {
        if self.n == 0 {
            return true;
        }
        let mut taken = 0;
        let mut halted = false;
        self.source.each(&mut |item| {
            taken += 1;
            if !step(item) {
                halted = true;
                return false;
            }
            taken < self.n
        });
        !halted
    }
}

/// Drops a fixed number of leading elements.
#[derive(Clone)]
pub struct Skip<S> {
    source: S,
    n: usize,
}

/// Create a sequence of everything in `source` after the first `n` elements.
pub fn skip<S: Seq>(source: S, n: usize) -> Skip<S> {
    Skip { source, n }
}

impl<S: Seq> Seq for Skip<S> {
    type Item = S::Item;
    fn each(&self, step: &mut dyn FnMut(S::Item) -> bool) -> bool {
        let mut skipped = 0;
        self.source.each(&mut |item| {
            if skipped < self.n {
                skipped += 1;
                return true;
            }
            step(item)
        })
    }
}

/// Yields leading elements while a predicate holds.
#[derive(Clone)]
pub struct TakeWhile<S, P> {
    source: S,
    pred: P,
}

/// Create a sequence that ends at the first element of `source` rejected by `pred`.
pub fn take_while<S, P>(source: S, pred: P) -> TakeWhile<S, P>
where
    S: Seq,
    P: Fn(&S::Item) -> bool,
{
    TakeWhile { source, pred }
}

impl<S, P> Seq for TakeWhile<S, P>
where
    S: Seq,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;
    fn each(&self, step: &mut dyn FnMut(S::Item) -> bool) -> bool {
        let mut halted = false;
        self.source.each(&mut |item| {
            if !(self.pred)(&item) {
                return false;
            }
            halted = !step(item);
            !halted
        });
        !halted
    }
}

/// Drops leading elements while a predicate holds.
#[derive(Clone)]
pub struct SkipWhile<S, P> {
    source: S,
    pred: P,
}

/// Create a sequence that starts at the first element of `source` rejected by `pred`.
///
/// Once that element is found, `pred` is no longer called.
pub fn skip_while<S, P>(source: S, pred: P) -> SkipWhile<S, P>
where
    S: Seq,
    P: Fn(&S::Item) -> bool,
{
    SkipWhile { source, pred }
}

impl<S, P> Seq for SkipWhile<S, P>
where
    S: Seq,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;
    fn each(&self, step: &mut dyn FnMut(S::Item) -> bool) -> bool {
        let mut skipping = true;
        self.source.each(&mut |item| {
            if skipping && (self.pred)(&item) {
                return true;
            }
            skipping = false;
            step(item)
        })
    }
}

/// Yields every n-th element.
#[derive(Clone)]
pub struct StepBy<S> {
    source: S,
    step: usize,
}

/// Create a sequence of the elements of `source` at indices `0, step, 2 * step, ...`.
///
/// A zero `step` is rejected here, before anything is driven.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let odd = from_collection(1..=7).step_by(2).unwrap();
/// assert_eq!(odd.collect(), vec![1, 3, 5, 7]);
/// assert!(matches!(from_collection(1..=7).step_by(0), Err(SeqError::ZeroStep)));
/// ```
pub fn step_by<S: Seq>(source: S, step: usize) -> Result<StepBy<S>, SeqError> {
    if step == 0 {
        log::debug!("rejecting step_by with a zero step");
        return Err(SeqError::ZeroStep);
    }
    Ok(StepBy { source, step })
}

impl<S: Seq> Seq for StepBy<S> {
    type Item = S::Item;
    fn each(&self, step: &mut dyn FnMut(S::Item) -> bool) -> bool {
        let mut index = 0;
        self.source.each(&mut |item| {
            let keep = index % self.step == 0;
            index += 1;
            !keep || step(item)
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::build::{from_collection, from_iter};

    #[test]
    fn test_take_bounds_an_infinite_source() {
        assert_eq!(take(from_iter(1..), 4).collect(), vec![1, 2, 3, 4]);
        assert_eq!(take(from_iter(1..), 0).collect(), Vec::<i32>::new());
    }

    #[test]
    fn test_take_does_not_pull_past_its_bound() {
        let pulled = Cell::new(0);
        let seq = from_collection(1..=10).inspect(|_| pulled.set(pulled.get() + 1)).take(3);
        assert_eq!(seq.count(), 3);
        assert_eq!(pulled.get(), 3);
    }

    #[test]
    fn test_take_longer_than_source() {
        let seq = from_collection(vec![1, 2]).take(5).chain(from_collection(vec![3]));
        assert_eq!(seq.collect(), vec![1, 2, 3]);
    }

    #[test]
    fn test_skip_passes_the_rest_through() {
        assert_eq!(skip(from_collection(1..=5), 2).collect(), vec![3, 4, 5]);
        assert_eq!(skip(from_collection(1..=2), 5).count(), 0);
    }

    #[test]
    fn test_take_while_never_resumes() {
        let seq = from_collection(vec![1, 2, 5, 1, 2]).take_while(|x| *x < 3);
        assert_eq!(seq.collect(), vec![1, 2]);
    }

    #[test]
    fn test_skip_while_stops_checking_after_first_rejection() {
        let checks = Cell::new(0);
        let seq = from_collection(vec![1, 2, 5, 1, 2]).skip_while(|x| {
            checks.set(checks.get() + 1);
            *x < 3
        });
        assert_eq!(seq.collect(), vec![5, 1, 2]);
        assert_eq!(checks.get(), 3);
    }

    #[test]
    fn test_step_by() {
        let seq = step_by(from_collection(1..=7), 2).unwrap();
        assert_eq!(seq.collect(), vec![1, 3, 5, 7]);
        let seq = step_by(from_collection(0..10), 3).unwrap();
        assert_eq!(seq.collect(), vec![0, 3, 6, 9]);
    }

    #[test]
    fn test_step_by_zero_is_rejected() {
        assert!(matches!(
            step_by(from_collection(1..=7), 0),
            Err(SeqError::ZeroStep)
        ));
    }
}
