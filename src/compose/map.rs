use crate::Seq;

/// Transforms each element of the wrapped sequence.
#[derive(Clone)]
pub struct Map<S, F> {
    source: S,
    f: F,
}

/// Create a sequence that applies `f` to every element of `source`.
pub fn map<S, F, U>(source: S, f: F) -> Map<S, F>
where
    S: Seq,
    F: Fn(S::Item) -> U,
{
    Map { source, f }
}

impl<S, F, U> Seq for Map<S, F>
where
    S: Seq,
    F: Fn(S::Item) -> U,
{
    type Item = U;
    fn each(&self, step: &mut dyn FnMut(U) -> bool) -> bool {
        self.source.each(&mut |item| step((self.f)(item)))
    }
}

/// Passes through only the elements accepted by a predicate.
#[derive(Clone)]
pub struct Filter<S, P> {
    source: S,
    pred: P,
}

/// Create a sequence of the elements of `source` that satisfy `pred`.
pub fn filter<S, P>(source: S, pred: P) -> Filter<S, P>
where
    S: Seq,
    P: Fn(&S::Item) -> bool,
{
    Filter { source, pred }
}

impl<S, P> Seq for Filter<S, P>
where
    S: Seq,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;
    fn each(&self, step: &mut dyn FnMut(S::Item) -> bool) -> bool {
        self.source.each(&mut |item| !(self.pred)(&item) || step(item))
    }
}

/// Maps and filters in a single pass.
#[derive(Clone)]
pub struct FilterMap<S, F> {
    source: S,
    f: F,
}

/// Create a sequence of the `Some` results of `f` over `source`.
pub fn filter_map<S, F, U>(source: S, f: F) -> FilterMap<S, F>
where
    S: Seq,
    F: Fn(S::Item) -> Option<U>,
{
    FilterMap { source, f }
}

impl<S, F, U> Seq for FilterMap<S, F>
where
    S: Seq,
    F: Fn(S::Item) -> Option<U>,
{
    type Item = U;
    fn each(&self, step: &mut dyn FnMut(U) -> bool) -> bool {
        self.source.each(&mut |item| match (self.f)(item) {
            Some(mapped) => step(mapped),
            None => true,
        })
    }
}

/// Maps elements until the mapping first declines.
#[derive(Clone)]
pub struct MapWhile<S, F> {
    source: S,
    f: F,
}

/// Create a sequence that yields `f(x)` until `f` returns `None` for the first time.
///
/// Later elements are never inspected, even if `f` would accept them.
pub fn map_while<S, F, U>(source: S, f: F) -> MapWhile<S, F>
where
    S: Seq,
    F: Fn(S::Item) -> Option<U>,
{
    MapWhile { source, f }
}

impl<S, F, U> Seq for MapWhile<S, F>
where
    S: Seq,
    F: Fn(S::Item) -> Option<U>,
{
    type Item = U;
    fn each(&self, step: &mut dyn FnMut(U) -> bool) -> bool {
        let mut halted = false;
        self.source.each(&mut |item| match (self.f)(item) {
            Some(mapped) => {
                halted = !step(mapped);
                !halted
            }
            None => false,
        });
        !halted
    }
}

/// Pairs every element with its index.
#[derive(Clone)]
pub struct Enumerate<S> {
    source: S,
}

/// Create a sequence of `(index, element)` pairs, indices starting at zero.
pub fn enumerate<S: Seq>(source: S) -> Enumerate<S> {
    Enumerate { source }
}

impl<S: Seq> Seq for Enumerate<S> {
    type Item = (usize, S::Item);
    fn each(&self, step: &mut dyn FnMut(Self::Item) -> bool) -> bool {
        let mut index = 0;
        self.source.each(&mut |item| {
            let current = index;
            index += 1;
            step((current, item))
        })
    }
}

/// Calls a closure on every element before passing it on.
#[derive(Clone)]
pub struct Inspect<S, F> {
    source: S,
    f: F,
}

/// Create a sequence that calls `f` on each element of `source` as it flows by.
pub fn inspect<S, F>(source: S, f: F) -> Inspect<S, F>
where
    S: Seq,
    F: Fn(&S::Item),
{
    Inspect { source, f }
}

impl<S, F> Seq for Inspect<S, F>
where
    S: Seq,
    F: Fn(&S::Item),
{
    type Item = S::Item;
    fn each(&self, step: &mut dyn FnMut(S::Item) -> bool) -> bool {
        self.source.each(&mut |item| {
            (self.f)(&item);
            step(item)
        })
    }
}

/// Clones borrowed elements into owned ones.
#[derive(Clone)]
pub struct Cloned<S> {
    source: S,
}

/// Create a sequence of owned clones from a sequence of references.
pub fn cloned<'a, S, T>(source: S) -> Cloned<S>
where
    S: Seq<Item = &'a T>,
    T: Clone + 'a,
{
    Cloned { source }
}

impl<'a, S, T> Seq for Cloned<S>
where
    S: Seq<Item = &'a T>,
    T: Clone + 'a,
{
    type Item = T;
    fn each(&self, step: &mut dyn FnMut(T) -> bool) -> bool {
        self.source.each(&mut |item| step(item.clone()))
    }
}
