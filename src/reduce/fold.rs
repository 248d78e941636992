use crate::{error::Interrupted, Seq};

/// Number of elements in one run.
pub fn count<S: Seq + ?Sized>(seq: &S) -> usize {
    let mut n = 0;
    seq.each(&mut |_| {
        n += 1;
        true
    });
    n
}

/// Final element of one run.
pub fn last<S: Seq + ?Sized>(seq: &S) -> Option<S::Item> {
    let mut last = None;
    seq.each(&mut |item| {
        last = Some(item);
        true
    });
    last
}

/// Element at zero-based index `n`. The source is halted right after it.
pub fn nth<S: Seq + ?Sized>(seq: &S, n: usize) -> Option<S::Item> {
    let mut index = 0;
    let mut found = None;
    seq.each(&mut |item| {
        if index == n {
            found = Some(item);
            return false;
        }
        index += 1;
        true
    });
    found
}

/// Call `f` on every element of one run.
pub fn for_each<S, F>(seq: &S, mut f: F)
where
    S: Seq + ?Sized,
    F: FnMut(S::Item),
{
    seq.each(&mut |item| {
        f(item);
        true
    });
}

/// Left fold of one run into `init`.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let joined = from_collection(vec!["a", "b", "c"]).fold(String::new(), |mut acc, s| {
///     acc.push_str(s);
///     acc
/// });
/// assert_eq!(joined, "abc");
/// ```
pub fn fold<S, R, F>(seq: &S, init: R, mut f: F) -> R
where
    S: Seq + ?Sized,
    F: FnMut(R, S::Item) -> R,
{
    let mut acc = Some(init);
    seq.each(&mut |item| {
        let current = acc.take().expect("accumulator is restored after every step");
        acc = Some(f(current, item));
        true
    });
    acc.expect("accumulator is restored after every step")
}

/// Left fold with a step that may fail.
///
/// `f` updates the accumulator in place. The first `Err` halts the source
/// and is returned inside an [`Interrupted`] together with the accumulator
/// as `f` left it and the number of elements consumed, the failing one
/// included.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let seq = from_collection(vec![1, 2, -1, 4]);
/// let result = seq.try_fold(0, |acc, x| {
///     if x < 0 {
///         return Err("negative");
///     }
///     *acc += x;
///     Ok(())
/// });
/// let stopped = result.unwrap_err();
/// assert_eq!((stopped.acc, stopped.error, stopped.consumed), (3, "negative", 3));
/// ```
pub fn try_fold<S, R, E, F>(seq: &S, init: R, mut f: F) -> Result<R, Interrupted<R, E>>
where
    S: Seq + ?Sized,
    F: FnMut(&mut R, S::Item) -> Result<(), E>,
{
    let mut acc = init;
    let mut consumed = 0;
    let mut error = None;
    seq.each(&mut |item| {
        consumed += 1;
        match f(&mut acc, item) {
            Ok(()) => true,
            Err(e) => {
                error = Some(e);
                false
            }
        }
    });
    match error {
        None => Ok(acc),
        Some(error) => {
            log::debug!("try_fold interrupted after {consumed} elements");
            Err(Interrupted {
                acc,
                error,
                consumed,
            })
        }
    }
}

/// Call a fallible `f` on every element, returning the first error.
pub fn try_for_each<S, E, F>(seq: &S, mut f: F) -> Result<(), E>
where
    S: Seq + ?Sized,
    F: FnMut(S::Item) -> Result<(), E>,
{
    let mut result = Ok(());
    seq.each(&mut |item| match f(item) {
        Ok(()) => true,
        Err(e) => {
            result = Err(e);
            false
        }
    });
    result
}

/// Fold seeded with the first element; `None` for an empty run.
pub fn reduce<S, F>(seq: &S, mut f: F) -> Option<S::Item>
where
    S: Seq + ?Sized,
    F: FnMut(S::Item, S::Item) -> S::Item,
{
    let mut acc = None;
    seq.each(&mut |item| {
        acc = Some(match acc.take() {
            Some(current) => f(current, item),
            None => item,
        });
        true
    });
    acc
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::build::{empty, from_collection, from_iter};

    #[test]
    fn test_count_and_last() {
        let seq = from_collection(vec!['x', 'y', 'z']);
        assert_eq!(count(&seq), 3);
        assert_eq!(last(&seq), Some('z'));
        assert_eq!(count(&empty::<u8>()), 0);
        assert_eq!(last(&empty::<u8>()), None);
    }

    #[test]
    fn test_nth_stops_early() {
        let pulled = Cell::new(0);
        let seq = from_iter(0..).inspect(|_| pulled.set(pulled.get() + 1));
        assert_eq!(nth(&seq, 3), Some(3));
        assert_eq!(pulled.get(), 4);
        assert_eq!(nth(&from_collection(vec![1, 2]), 2), None);
    }

    #[test]
    fn test_fold_left_to_right() {
        let seq = from_collection(vec![1, 2, 3]);
        assert_eq!(fold(&seq, 0, |acc, x| acc * 10 + x), 123);
        assert_eq!(fold(&empty::<i32>(), 7, |acc, x| acc + x), 7);
    }

    #[test]
    fn test_try_fold_keeps_accumulator_on_error() {
        let seq = from_collection(vec![1, 2, -1, 4]);
        let step = |acc: &mut i32, x: i32| {
            if x < 0 {
                return Err(format!("bad element {x}"));
            }
            *acc += x;
            Ok(())
        };
        let stopped = try_fold(&seq, 0, step).unwrap_err();
        assert_eq!(stopped.acc, 3);
        assert_eq!(stopped.consumed, 3);
        assert_eq!(stopped.error, "bad element -1");
        assert_eq!(
            stopped.to_string(),
            "fold interrupted after 3 elements: bad element -1"
        );

        assert_eq!(try_fold(&from_collection(vec![1, 2]), 0, step), Ok(3));
    }

    #[test]
    fn test_try_for_each_returns_first_error() {
        let seen = Cell::new(0);
        let seq = from_collection(vec![1, 2, 3]);
        let result = try_for_each(&seq, |x| {
            seen.set(seen.get() + 1);
            if x == 2 {
                Err(x)
            } else {
                Ok(())
            }
        });
        assert_eq!(result, Err(2));
        assert_eq!(seen.get(), 2);
    }

    #[test]
    fn test_reduce() {
        assert_eq!(reduce(&from_collection(1..=4), |a, b| a * b), Some(24));
        assert_eq!(reduce(&empty::<i32>(), |a, b| a + b), None);
    }
}
