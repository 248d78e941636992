//! Pull cursors over push-driven sequences.
//!
//! A [`Seq`] only knows how to run to completion while calling back. To
//! consume two sequences in lock-step, one of them has to be paused between
//! elements. A [`Cursor`] does that by running the producer on a scoped
//! worker thread that hands over one element per request:
//!
//! - the consumer sends a demand over a rendezvous channel,
//! - the worker advances the source by exactly one element and places it in
//!   a single-slot supply channel,
//! - the worker then blocks until the next demand.
//!
//! The worker never runs ahead of the consumer. Dropping the demand side
//! makes the worker's step function return `false`, so the source halts
//! without producing anything further, and [`Cursor::stop`] joins the worker
//! before returning.
//!
//! Cursors can only be created inside [`pull`] or [`pull_with`], which stop
//! the cursor on every exit path of the scope.

use std::{
    sync::mpsc::{self, Receiver, SyncSender},
    thread::{self, Scope, ScopedJoinHandle},
};

use crate::{error::SeqError, Seq, Step};

/// Worker thread settings used by [`pull_with`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CursorConfig {
    name: Option<String>,
    stack_size: Option<usize>,
}

impl CursorConfig {
    /// Name the worker thread, which shows up in panic messages and debuggers.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the worker's stack size in bytes.
    pub fn with_stack_size(mut self, bytes: usize) -> Self {
        self.stack_size = Some(bytes);
        self
    }

    fn builder(&self) -> thread::Builder {
        let mut builder = thread::Builder::new();
        if let Some(name) = &self.name {
            builder = builder.name(name.clone());
        }
        if let Some(bytes) = self.stack_size {
            builder = builder.stack_size(bytes);
        }
        builder
    }
}

/// A pull handle over one run of a sequence.
///
/// `next()` returns the following element or `None` once the run is over.
/// After [`stop`](Cursor::stop), `next()` keeps returning `None`.
pub struct Cursor<'scope, T> {
    demand: Option<SyncSender<()>>,
    supply: Receiver<T>,
    worker: Option<ScopedJoinHandle<'scope, ()>>,
    pulled: usize,
}

impl<'scope, T> Cursor<'scope, T>
where
    T: Send + 'scope,
{
    fn spawn<'env, S>(
        scope: &'scope Scope<'scope, 'env>,
        config: &CursorConfig,
        seq: &'env S,
    ) -> Result<Self, SeqError>
    where
        S: Seq<Item = T> + Sync + ?Sized,
    {
        let (demand, demands) = mpsc::sync_channel::<()>(0);
        let (supplier, supply) = mpsc::sync_channel::<T>(1);
        let body = move || {
            if demands.recv().is_err() {
                return;
            }
            seq.each(&mut |item| supplier.send(item).is_ok() && demands.recv().is_ok());
        };
        let worker = config.builder().spawn_scoped(scope, body)?;
        log::trace!("spawned cursor worker {:?}", config.name);
        Ok(Cursor {
            demand: Some(demand),
            supply,
            worker: Some(worker),
            pulled: 0,
        })
    }
}

impl<T> Cursor<'_, T> {
    /// Pull the next element, or `None` if the run is over or the cursor was stopped.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<T> {
        let demand = self.demand.as_ref()?;
        if demand.send(()).is_err() {
            self.stop();
            return None;
        }
        match self.supply.recv() {
            Ok(item) => {
                self.pulled += 1;
                Some(item)
            }
            Err(_) => {
                self.stop();
                None
            }
        }
    }

    /// Number of elements handed out so far.
    pub fn pulled(&self) -> usize {
        self.pulled
    }

    /// `true` once the cursor has been stopped, explicitly or by exhaustion.
    pub fn is_stopped(&self) -> bool {
        self.demand.is_none()
    }

    /// Halt the producer and wait for its worker to finish.
    ///
    /// Safe to call any number of times. If the producer panicked, the panic
    /// is resumed here unless the current thread is already unwinding.
    pub fn stop(&mut self) {
        self.demand = None;
        let Some(worker) = self.worker.take() else {
            return;
        };
        let joined = worker.join();
        log::trace!("cursor stopped after {} pulls", self.pulled);
        if let Err(panic) = joined {
            if !thread::panicking() {
                std::panic::resume_unwind(panic);
            }
        }
    }
}

impl<T> Drop for Cursor<'_, T> {
    fn drop(&mut self) {
        self.stop();
    }
}

impl<T> crate::Sans<(), T> for Cursor<'_, T> {
    type Return = ();
    fn next(&mut self, _input: ()) -> Step<T, ()> {
        Cursor::next(self).into()
    }
}

/// Run `f` with a cursor over `seq`, stopping the cursor when `f` returns.
///
/// The cursor cannot escape `f`, and its worker is always joined before
/// `pull` returns, including when `f` returns early or panics.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let letters = from_collection(vec!['a', 'b', 'c']);
/// let first_two = pull(&letters, |cursor| (cursor.next(), cursor.next()));
/// assert_eq!(first_two, (Some('a'), Some('b')));
/// ```
///
/// # Panics
///
/// Panics if the OS refuses to start the worker thread, or if the producer
/// panics. Use [`pull_with`] to get spawn failures as an error.
pub fn pull<S, R, F>(seq: &S, f: F) -> R
where
    S: Seq + Sync + ?Sized,
    S::Item: Send,
    F: FnOnce(&mut Cursor<'_, S::Item>) -> R,
{
    match pull_with(&CursorConfig::default(), seq, f) {
        Ok(result) => result,
        Err(err) => panic!("{err}"),
    }
}

/// Like [`pull`], with worker thread settings and spawn failures reported as
/// [`SeqError::Spawn`].
pub fn pull_with<S, R, F>(config: &CursorConfig, seq: &S, f: F) -> Result<R, SeqError>
where
    S: Seq + Sync + ?Sized,
    S::Item: Send,
    F: FnOnce(&mut Cursor<'_, S::Item>) -> R,
{
    thread::scope(|scope| {
        let mut cursor = Cursor::spawn(scope, config, seq)?;
        let result = f(&mut cursor);
        cursor.stop();
        Ok(result)
    })
}
