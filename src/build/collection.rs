use crate::Seq;

/// A sequence backed by an owned, ordered collection.
///
/// Every run yields clones of the stored elements, so it can be replayed
/// any number of times.
#[derive(Debug, Clone)]
pub struct Items<T> {
    items: Vec<T>,
}

/// Create a replayable sequence over the elements of `items`, in order.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let seq = from_collection(vec![1, 2, 3]);
/// assert_eq!(seq.count(), 3);
/// assert_eq!(seq.collect(), vec![1, 2, 3]);
/// ```
pub fn from_collection<C>(items: C) -> Items<C::Item>
where
    C: IntoIterator,
    C::Item: Clone,
{
    Items {
        items: items.into_iter().collect(),
    }
}

impl<T> Items<T> {
    /// Number of backing elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// `true` if there are no backing elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Give back the backing collection.
    pub fn into_inner(self) -> Vec<T> {
        self.items
    }
}

impl<T: Clone> Seq for Items<T> {
    type Item = T;
    fn each(&self, step: &mut dyn FnMut(T) -> bool) -> bool {
        self.items.iter().cloned().all(step)
    }
}

/// A sequence that replays a cloneable iterator.
///
/// Each run drives a fresh clone of the stored iterator, so the original is
/// never advanced. Infinite iterators such as `0..` are fine as long as the
/// consumer stops.
#[derive(Debug, Clone)]
pub struct FromIter<I> {
    iter: I,
}

/// Create a lazy, replayable sequence from a cloneable iterator.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let naturals = from_iter(0..);
/// assert_eq!(naturals.take(3).collect(), vec![0, 1, 2]);
/// ```
pub fn from_iter<I>(iter: I) -> FromIter<I::IntoIter>
where
    I: IntoIterator,
    I::IntoIter: Clone,
{
    FromIter {
        iter: iter.into_iter(),
    }
}

impl<I> Seq for FromIter<I>
where
    I: Iterator + Clone,
{
    type Item = I::Item;
    fn each(&self, step: &mut dyn FnMut(I::Item) -> bool) -> bool {
        self.iter.clone().all(step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_replay_independently() {
        let seq = from_collection(vec![String::from("a"), String::from("b")]);
        assert_eq!(seq.collect(), vec!["a", "b"]);
        assert_eq!(seq.collect(), vec!["a", "b"]);
        assert_eq!(seq.len(), 2);
        assert!(!seq.is_empty());
    }

    #[test]
    fn test_from_iter_does_not_advance_original() {
        let seq = from_iter(vec![1, 2, 3].into_iter().map(|x| x * 2));
        assert_eq!((&seq).take(2).collect(), vec![2, 4]);
        assert_eq!(seq.collect(), vec![2, 4, 6]);
    }
}
