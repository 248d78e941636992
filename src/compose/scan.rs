use crate::Seq;

/// Threads a running state through the sequence.
#[derive(Clone)]
pub struct Scan<S, R, F> {
    source: S,
    seed: R,
    f: F,
}

/// Create a sequence of running states.
///
/// Each run starts from a clone of `seed`. For every element, `f` receives
/// the current state and returns the next one, which is yielded. The first
/// `None` ends the whole sequence, not just that element.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let totals = from_collection(1..=5).scan(0, |acc, x| (acc + x < 10).then_some(acc + x));
/// assert_eq!(totals.collect(), vec![1, 3, 6]);
/// ```
pub fn scan<S, R, F>(source: S, seed: R, f: F) -> Scan<S, R, F>
where
    S: Seq,
    R: Clone,
    F: Fn(R, S::Item) -> Option<R>,
{
    Scan { source, seed, f }
}

impl<S, R, F> Seq for Scan<S, R, F>
where
    S: Seq,
    R: Clone,
    F: Fn(R, S::Item) -> Option<R>,
{
    type Item = R;
    fn each(&self, step: &mut dyn FnMut(R) -> bool) -> bool {
        let mut state = Some(self.seed.clone());
        let mut halted = false;
        self.source.each(&mut |item| {
            let Some(current) = state.take() else {
                return false;
            };
            match (self.f)(current, item) {
                Some(next) => {
                    state = Some(next.clone());
                    halted = !step(next);
                    !halted
                }
                None => false,
            }
        });
        !halted
    }
}

/// Ends at the first absent value.
#[derive(Clone)]
pub struct Fuse<S> {
    source: S,
}

/// Create a sequence of the present values of `source` up to its first `None`.
///
/// Values after the first `None` are never yielded, even if present.
pub fn fuse<S, T>(source: S) -> Fuse<S>
where
    S: Seq<Item = Option<T>>,
{
    Fuse { source }
}

impl<S, T> Seq for Fuse<S>
where
    S: Seq<Item = Option<T>>,
{
    type Item = T;
    fn each(&self, step: &mut dyn FnMut(T) -> bool) -> bool {
        let mut halted = false;
        self.source.each(&mut |item| match item {
            Some(value) => {
                halted = !step(value);
                !halted
            }
            None => false,
        });
        !halted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::from_collection;

    #[test]
    fn test_scan_yields_running_state() {
        let seq = scan(from_collection(1..=4), 1, |acc, x| Some(acc * x));
        assert_eq!(seq.collect(), vec![1, 2, 6, 24]);
    }

    #[test]
    fn test_scan_stop_ends_the_sequence() {
        let seq = scan(from_collection(vec![2, 3, -1, 4]), 0, |acc, x| {
            (x > 0).then_some(acc + x)
        });
        assert_eq!(seq.collect(), vec![2, 5]);
    }

    #[test]
    fn test_scan_state_is_per_run() {
        let seq = scan(from_collection(vec![1, 1]), 0, |acc, x| Some(acc + x));
        assert_eq!(seq.collect(), vec![1, 2]);
        assert_eq!(seq.collect(), vec![1, 2]);
    }

    #[test]
    fn test_fuse_stops_at_first_none() {
        let seq = fuse(from_collection(vec![Some(1), Some(2), None, Some(4)]));
        assert_eq!(seq.collect(), vec![1, 2]);
    }
}
