/// Outcome of advancing a pull-side coroutine by one step.
///
/// A cursor over a sequence either hands out the next element
/// (`Yielded`) or reports that the run is over (`Complete`).
///
/// # Examples
///
/// ```rust
/// use lazyseq::Step;
///
/// let next: Step<i32, ()> = Some(42).into();
/// assert_eq!(next, Step::Yielded(42));
///
/// let done: Step<i32, ()> = Step::Complete(());
/// assert_eq!(done.yielded_value(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<Y, D> {
    /// The coroutine produced a value and can be resumed
    Yielded(Y),
    /// The coroutine finished with a final value
    Complete(D),
}

impl<Y, D> Step<Y, D> {
    /// Converts from `Step<Y, D>` to `Option<Y>`, discarding the complete value.
    ///
    /// This is how a cursor step becomes the `Option` end-of-sequence signal.
    #[inline]
    pub fn yielded_value(self) -> Option<Y> {
        match self {
            Step::Yielded(y) => Some(y),
            Step::Complete(_) => None,
        }
    }
}

impl<Y> From<Option<Y>> for Step<Y, ()> {
    fn from(value: Option<Y>) -> Self {
        match value {
            Some(y) => Step::Yielded(y),
            None => Step::Complete(()),
        }
    }
}
