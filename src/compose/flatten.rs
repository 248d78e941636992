use crate::Seq;

/// Maps each element to an inner sequence and drives it to its end.
#[derive(Clone)]
pub struct FlatMap<S, F> {
    source: S,
    f: F,
}

/// Create a sequence of the elements of `f(x)` for each `x` in `source`.
///
/// Each inner sequence is fully driven before the outer one advances. A
/// halt from the consumer stops both immediately.
pub fn flat_map<S, F, U>(source: S, f: F) -> FlatMap<S, F>
where
    S: Seq,
    U: Seq,
    F: Fn(S::Item) -> U,
{
    FlatMap { source, f }
}

impl<S, F, U> Seq for FlatMap<S, F>
where
    S: Seq,
    U: Seq,
    F: Fn(S::Item) -> U,
{
    type Item = U::Item;
    fn each(&self, step: &mut dyn FnMut(U::Item) -> bool) -> bool {
        self.source.each(&mut |item| (self.f)(item).each(&mut *step))
    }
}

/// Flattens one level of nesting.
#[derive(Clone)]
pub struct Flatten<S> {
    source: S,
}

/// Create a sequence of the elements of every inner sequence of `source`, in order.
pub fn flatten<S>(source: S) -> Flatten<S>
where
    S: Seq,
    S::Item: Seq,
{
    Flatten { source }
}

impl<S> Seq for Flatten<S>
where
    S: Seq,
    S::Item: Seq,
{
    type Item = <S::Item as Seq>::Item;
    fn each(&self, step: &mut dyn FnMut(Self::Item) -> bool) -> bool {
        self.source.each(&mut |inner| inner.each(&mut *step))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::build::{from_collection, from_iter};

    #[test]
    fn test_flat_map_drives_inner_before_outer() {
        let seq = from_collection(1..=3).flat_map(|n| from_collection(vec![n; n as usize]));
        assert_eq!(seq.collect(), vec![1, 2, 2, 3, 3, 3]);
    }

    #[test]
    fn test_flat_map_halt_stops_outer_too() {
        let outer = Cell::new(0);
        let seq = from_collection(1..=5)
            .inspect(|_| outer.set(outer.get() + 1))
            .flat_map(|n| from_iter(0..).map(move |i| n * 100 + i));
        assert_eq!(seq.take(3).collect(), vec![100, 101, 102]);
        assert_eq!(outer.get(), 1);
    }

    #[test]
    fn test_flatten_skips_empty_inner_sequences() {
        let nested = from_collection(vec![
            from_collection(vec![1, 2]),
            from_collection(vec![]),
            from_collection(vec![3]),
        ]);
        assert_eq!(flatten(nested).collect(), vec![1, 2, 3]);
    }
}
