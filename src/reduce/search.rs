use crate::Seq;

/// `true` if `pred` holds for every element. Stops at the first failure.
pub fn all<S, P>(seq: &S, mut pred: P) -> bool
where
    S: Seq + ?Sized,
    P: FnMut(S::Item) -> bool,
{
    seq.each(&mut |item| pred(item))
}

/// `true` if `pred` holds for any element. Stops at the first match.
pub fn any<S, P>(seq: &S, mut pred: P) -> bool
where
    S: Seq + ?Sized,
    P: FnMut(S::Item) -> bool,
{
    !seq.each(&mut |item| !pred(item))
}

/// First element accepted by `pred`.
pub fn find<S, P>(seq: &S, mut pred: P) -> Option<S::Item>
where
    S: Seq + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    find_map(seq, |item| pred(&item).then_some(item))
}

/// First `Some` returned by `f`.
pub fn find_map<S, U, F>(seq: &S, mut f: F) -> Option<U>
where
    S: Seq + ?Sized,
    F: FnMut(S::Item) -> Option<U>,
{
    let mut found = None;
    seq.each(&mut |item| {
        found = f(item);
        found.is_none()
    });
    found
}

/// Index of the first element accepted by `pred`.
pub fn position<S, P>(seq: &S, mut pred: P) -> Option<usize>
where
    S: Seq + ?Sized,
    P: FnMut(S::Item) -> bool,
{
    let mut index = 0;
    let mut found = None;
    seq.each(&mut |item| {
        if pred(item) {
            found = Some(index);
            return false;
        }
        index += 1;
        true
    });
    found
}

/// Index of the last element accepted by `pred`.
///
/// The source has no end to search back from, so the whole run is driven.
pub fn rposition<S, P>(seq: &S, mut pred: P) -> Option<usize>
where
    S: Seq + ?Sized,
    P: FnMut(S::Item) -> bool,
{
    let mut index = 0;
    let mut found = None;
    seq.each(&mut |item| {
        if pred(item) {
            found = Some(index);
        }
        index += 1;
        true
    });
    found
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::build::{empty, from_collection, from_iter};

    #[test]
    fn test_all_and_any_short_circuit() {
        let pulled = Cell::new(0);
        let seq = from_iter(1..).inspect(|_| pulled.set(pulled.get() + 1));
        assert!(!all(&seq, |x| x < 3));
        assert_eq!(pulled.get(), 3);
        assert!(any(&seq, |x| x == 5));
        assert_eq!(pulled.get(), 8);
    }

    #[test]
    fn test_all_and_any_on_empty() {
        assert!(all(&empty::<i32>(), |_| false));
        assert!(!any(&empty::<i32>(), |_| true));
    }

    #[test]
    fn test_find_and_find_map() {
        let seq = from_collection(vec!["1", "two", "3"]);
        assert_eq!(find(&seq, |s| s.len() > 1), Some("two"));
        assert_eq!(find_map(&seq, |s| s.parse::<i32>().ok()), Some(1));
        assert_eq!(find(&seq, |s| s.is_empty()), None);
    }

    #[test]
    fn test_position_and_rposition() {
        let seq = from_collection(vec![1, 2, 1, 3]);
        assert_eq!(position(&seq, |x| x == 1), Some(0));
        assert_eq!(rposition(&seq, |x| x == 1), Some(2));
        assert_eq!(position(&seq, |x| x == 9), None);
        assert_eq!(rposition(&seq, |x| x == 9), None);
    }
}
