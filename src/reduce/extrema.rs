use std::cmp::Ordering;

use crate::Seq;

/// Largest element. The earliest of several equal maxima wins.
pub fn max<S>(seq: &S) -> Option<S::Item>
where
    S: Seq + ?Sized,
    S::Item: Ord,
{
    max_by(seq, Ord::cmp)
}

/// Smallest element. The earliest of several equal minima wins.
pub fn min<S>(seq: &S) -> Option<S::Item>
where
    S: Seq + ?Sized,
    S::Item: Ord,
{
    min_by(seq, Ord::cmp)
}

/// Element whose key is largest; each key is computed once.
pub fn max_by_key<S, K, F>(seq: &S, f: F) -> Option<S::Item>
where
    S: Seq + ?Sized,
    K: Ord,
    F: FnMut(&S::Item) -> K,
{
    best_by_key(seq, f, Ordering::Greater)
}

/// Element whose key is smallest; each key is computed once.
pub fn min_by_key<S, K, F>(seq: &S, f: F) -> Option<S::Item>
where
    S: Seq + ?Sized,
    K: Ord,
    F: FnMut(&S::Item) -> K,
{
    best_by_key(seq, f, Ordering::Less)
}

/// Largest element under `compare`.
pub fn max_by<S, F>(seq: &S, compare: F) -> Option<S::Item>
where
    S: Seq + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    best_by(seq, compare, Ordering::Greater)
}

/// Smallest element under `compare`.
pub fn min_by<S, F>(seq: &S, compare: F) -> Option<S::Item>
where
    S: Seq + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    best_by(seq, compare, Ordering::Less)
}

// A candidate replaces the current best only when it compares strictly as `wins`.
fn best_by<S, F>(seq: &S, mut compare: F, wins: Ordering) -> Option<S::Item>
where
    S: Seq + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    let mut best: Option<S::Item> = None;
    seq.each(&mut |item| {
        let replace = match &best {
            Some(current) => compare(&item, current) == wins,
            None => true,
        };
        if replace {
            best = Some(item);
        }
        true
    });
    best
}

fn best_by_key<S, K, F>(seq: &S, mut f: F, wins: Ordering) -> Option<S::Item>
where
    S: Seq + ?Sized,
    K: Ord,
    F: FnMut(&S::Item) -> K,
{
    let mut best: Option<(K, S::Item)> = None;
    seq.each(&mut |item| {
        let key = f(&item);
        let replace = match &best {
            Some((current, _)) => key.cmp(current) == wins,
            None => true,
        };
        if replace {
            best = Some((key, item));
        }
        true
    });
    best.map(|(_, item)| item)
}
