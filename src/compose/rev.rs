use crate::Seq;

/// Yields the source in reverse order.
///
/// Unlike every other combinator, `Rev` is eager: each run first drives the
/// source to its end and buffers every element, then yields from the back.
/// Memory use grows with the source, and an infinite source never yields.
#[derive(Clone)]
pub struct Rev<S> {
    source: S,
}

/// Create a sequence of the elements of `source` from last to first.
///
/// Nothing is buffered until the result is driven.
pub fn rev<S: Seq>(source: S) -> Rev<S> {
    Rev { source }
}

impl<S: Seq> Seq for Rev<S> {
    type Item = S::Item;
    fn each(&self, step: &mut dyn FnMut(S::Item) -> bool) -> bool {
        let mut buffer = Vec::new();
        self.source.each(&mut |item| {
            buffer.push(item);
            true
        });
        log::trace!("rev buffered {} elements", buffer.len());
        buffer.into_iter().rev().all(step)
    }
}
