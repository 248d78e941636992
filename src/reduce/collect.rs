use num_traits::{One, Zero};

use super::fold::fold;
use crate::Seq;

/// Materialise one run into a `Vec`, in order.
pub fn collect<S: Seq + ?Sized>(seq: &S) -> Vec<S::Item> {
    let mut out = Vec::new();
    seq.each(&mut |item| {
        out.push(item);
        true
    });
    out
}

/// Split one run by `pred`: accepted elements first, rejected second.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let (even, odd) = from_collection(1..=10).partition(|x| x % 2 == 0);
/// assert_eq!(even, vec![2, 4, 6, 8, 10]);
/// assert_eq!(odd, vec![1, 3, 5, 7, 9]);
/// ```
pub fn partition<S, P>(seq: &S, mut pred: P) -> (Vec<S::Item>, Vec<S::Item>)
where
    S: Seq + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    let mut accepted = Vec::new();
    let mut rejected = Vec::new();
    seq.each(&mut |item| {
        if pred(&item) {
            accepted.push(item);
        } else {
            rejected.push(item);
        }
        true
    });
    (accepted, rejected)
}

/// Sum of one run, starting from zero.
pub fn sum<S>(seq: &S) -> S::Item
where
    S: Seq + ?Sized,
    S::Item: Zero,
{
    fold(seq, <S::Item as Zero>::zero(), |acc, item| acc + item)
}

/// Product of one run, starting from one.
pub fn product<S>(seq: &S) -> S::Item
where
    S: Seq + ?Sized,
    S::Item: One,
{
    fold(seq, <S::Item as One>::one(), |acc, item| acc * item)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{empty, from_collection};

    #[test]
    fn test_collect_preserves_order() {
        assert_eq!(collect(&from_collection(vec![3, 1, 2])), vec![3, 1, 2]);
        assert!(collect(&empty::<i32>()).is_empty());
    }

    #[test]
    fn test_partition_keeps_relative_order() {
        let (small, large) = partition(&from_collection(vec![5, 1, 7, 2]), |x| *x < 4);
        assert_eq!(small, vec![1, 2]);
        assert_eq!(large, vec![5, 7]);
    }

    #[test]
    fn test_sum_and_product() {
        let seq = from_collection(1..=5);
        assert_eq!(sum(&seq), 15);
        assert_eq!(product(&seq), 120);
        assert_eq!(sum(&empty::<f64>()), 0.0);
        assert_eq!(product(&empty::<u32>()), 1);
    }
}
