use std::cmp::Ordering;

use super::cursor::pull;
use crate::Seq;

/// `true` if `a` and `b` have the same length and equal elements pairwise.
pub fn eq<A, B>(a: &A, b: &B) -> bool
where
    A: Seq + ?Sized,
    A::Item: PartialEq<B::Item>,
    B: Seq + Sync + ?Sized,
    B::Item: Send,
{
    eq_by(a, b, |x, y| x == y)
}

/// Like [`eq`], with a custom element comparison.
///
/// Stops both sides at the first mismatch.
///
/// # Panics
///
/// Panics if the worker thread that pulls `b` cannot be started.
pub fn eq_by<A, B, F>(a: &A, b: &B, mut eq: F) -> bool
where
    A: Seq + ?Sized,
    B: Seq + Sync + ?Sized,
    B::Item: Send,
    F: FnMut(&A::Item, &B::Item) -> bool,
{
    pull(b, |cursor| {
        let exhausted = a.each(&mut |x| match cursor.next() {
            Some(y) => eq(&x, &y),
            None => false,
        });
        // `a` ran out: equal only if `b` has nothing left either
        exhausted && cursor.next().is_none()
    })
}

/// Lexicographic comparison of `a` and `b`.
pub fn cmp<A, B>(a: &A, b: &B) -> Ordering
where
    A: Seq + ?Sized,
    A::Item: Ord,
    B: Seq<Item = A::Item> + Sync + ?Sized,
    B::Item: Send,
{
    cmp_by(a, b, Ord::cmp)
}

/// Lexicographic comparison under `compare`.
///
/// The first non-equal pair decides. If one side is a prefix of the other,
/// the shorter one is `Less`.
///
/// # Panics
///
/// Panics if the worker thread that pulls `b` cannot be started.
pub fn cmp_by<A, B, F>(a: &A, b: &B, mut compare: F) -> Ordering
where
    A: Seq + ?Sized,
    B: Seq + Sync + ?Sized,
    B::Item: Send,
    F: FnMut(&A::Item, &B::Item) -> Ordering,
{
    pull(b, |cursor| {
        let mut decided = None;
        a.each(&mut |x| {
            let ordering = match cursor.next() {
                Some(y) => compare(&x, &y),
                None => Ordering::Greater,
            };
            if ordering.is_ne() {
                decided = Some(ordering);
            }
            decided.is_none()
        });
        decided.unwrap_or_else(|| match cursor.next() {
            Some(_) => Ordering::Less,
            None => Ordering::Equal,
        })
    })
}

/// `true` if consecutive elements of `seq` never change direction under `compare`.
///
/// Runs of equal elements are allowed anywhere. The first non-equal pair
/// fixes the direction, ascending or descending, and any later pair that
/// goes the other way makes the run unsorted. Empty and single-element
/// sequences are sorted.
pub fn is_sorted_by<S, F>(seq: &S, mut compare: F) -> bool
where
    S: Seq + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    let mut previous: Option<S::Item> = None;
    let mut direction = Ordering::Equal;
    seq.each(&mut |item| {
        let keeps = match &previous {
            Some(prev) => keeps_direction(&mut direction, compare(prev, &item)),
            None => true,
        };
        previous = Some(item);
        keeps
    })
}

/// Like [`is_sorted_by`], comparing the keys produced by `f`.
///
/// Each key is computed exactly once.
pub fn is_sorted_by_key<S, K, F>(seq: &S, mut f: F) -> bool
where
    S: Seq + ?Sized,
    K: Ord,
    F: FnMut(&S::Item) -> K,
{
    let mut previous: Option<K> = None;
    let mut direction = Ordering::Equal;
    seq.each(&mut |item| {
        let key = f(&item);
        let keeps = match &previous {
            Some(prev) => keeps_direction(&mut direction, prev.cmp(&key)),
            None => true,
        };
        previous = Some(key);
        keeps
    })
}

/// Equal pairs never matter; the first unequal pair fixes `direction`.
fn keeps_direction(direction: &mut Ordering, ordering: Ordering) -> bool {
    match (*direction, ordering) {
        (_, Ordering::Equal) => true,
        (Ordering::Equal, ordering) => {
            *direction = ordering;
            true
        }
        (fixed, ordering) => fixed == ordering,
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::build::{empty, from_collection, from_iter};

    #[test]
    fn test_eq_requires_equal_length() {
        let abc = from_collection(vec![1, 2, 3]);
        assert!(eq(&abc, &from_collection(vec![1, 2, 3])));
        assert!(!eq(&abc, &from_collection(vec![1, 2])));
        assert!(!eq(&abc, &from_collection(vec![1, 2, 3, 4])));
        assert!(!eq(&abc, &from_collection(vec![1, 5, 3])));
        assert!(eq(&empty::<i32>(), &empty::<i32>()));
    }

    #[test]
    fn test_eq_stops_at_first_mismatch() {
        let inspected = Cell::new(0);
        let a = from_iter(0..).inspect(|_| inspected.set(inspected.get() + 1));
        assert!(!eq(&a, &from_collection(vec![0, 1, 7, 3])));
        assert_eq!(inspected.get(), 3);
    }

    #[test]
    fn test_eq_by_across_item_types() {
        let numbers = from_collection(vec![1, 2]);
        let words = from_collection(vec!["1", "2"]);
        assert!(eq_by(&numbers, &words, |n, w| n.to_string() == *w));
    }

    #[test]
    fn test_cmp_lexicographic() {
        let short = from_collection(vec![1, 2, 3]);
        assert_eq!(cmp(&short, &from_collection(vec![1, 2, 3, 4])), Ordering::Less);
        assert_eq!(cmp(&from_collection(vec![1, 2, 3, 4]), &short), Ordering::Greater);
        assert_eq!(cmp(&short, &from_collection(vec![1, 2, 3])), Ordering::Equal);
        assert_eq!(cmp(&short, &from_collection(vec![1, 3])), Ordering::Less);
        assert_eq!(cmp(&from_collection(vec![2]), &short), Ordering::Greater);
        assert_eq!(cmp(&empty::<i32>(), &short), Ordering::Less);
    }

    #[test]
    fn test_comparisons_against_infinite_side_terminate() {
        let finite = from_collection(vec![0, 1, 9]);
        assert_eq!(cmp(&finite, &from_iter(0..)), Ordering::Greater);
        assert!(!eq(&finite, &from_iter(0..)));
    }

    #[test]
    fn test_is_sorted_either_direction() {
        assert!(is_sorted_by(&from_collection(vec![1, 1, 2, 3, 3, 5]), Ord::cmp));
        assert!(is_sorted_by(&from_collection(vec![5, 5, 3, 1]), Ord::cmp));
        assert!(!is_sorted_by(&from_collection(vec![1, 3, 2]), Ord::cmp));
        assert!(!is_sorted_by(&from_collection(vec![3, 3, 1, 2]), Ord::cmp));
        assert!(is_sorted_by(&empty::<i32>(), Ord::cmp));
        assert!(is_sorted_by(&from_collection(vec![4]), Ord::cmp));
    }

    #[test]
    fn test_is_sorted_by_key_computes_each_key_once() {
        let calls = Cell::new(0);
        let words = from_collection(vec!["a", "bb", "ccc", "dd"]);
        let sorted = is_sorted_by_key(&words, |w| {
            calls.set(calls.get() + 1);
            w.len()
        });
        assert!(!sorted);
        assert_eq!(calls.get(), 4);
    }
}
