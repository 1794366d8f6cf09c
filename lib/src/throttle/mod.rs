//! Trailing-edge throttling.
//!
//! A [`ThrottledInvoker`] runs its handler at most once per interval. A call
//! that lands inside the interval is deferred to the end of it; a newer call
//! replaces the deferred one, so the most recent arguments always get through.
//!
//! ```text
//! interval = 100ms
//! call A @0   -> runs A @0
//! call B @50  -> deferred to @100
//! call C @90  -> replaces B, deferred to @100
//!             -> runs C @100
//! ```

mod manual;
mod scheduler;

pub use {
    manual::ManualScheduler,
    scheduler::{Scheduler, Task, TokioScheduler},
};

use std::{sync::Arc, time::Duration};

use parking_lot::Mutex;
use tracing::trace;

struct Pending<A, H> {
    args: A,
    handle: H,
    generation: u64,
}

struct State<A, H> {
    last: Option<Duration>,
    pending: Option<Pending<A, H>>,
    generation: u64,
}

struct Shared<A, S: Scheduler> {
    handler: Box<dyn Fn(A) + Send + Sync>,
    interval: Duration,
    scheduler: S,
    state: Mutex<State<A, S::Handle>>,
}

impl<A: Send + 'static, S: Scheduler> Shared<A, S> {
    fn fire(&self, generation: u64) {
        let args = {
            let mut state = self.state.lock();

            // A replaced or canceled timer that still managed to run.
            match &state.pending {
                Some(pending) if pending.generation == generation => {}
                _ => return,
            }

            state.last = Some(self.scheduler.now());
            state.pending.take().map(|pending| pending.args)
        };

        if let Some(args) = args {
            trace!(generation, "trailing call");
            (self.handler)(args);
        }
    }
}

/// Rate limited handler. Clones share the same throttle state.
pub struct ThrottledInvoker<A, S: Scheduler> {
    shared: Arc<Shared<A, S>>,
}

impl<A, S: Scheduler> Clone for ThrottledInvoker<A, S> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<A: Send + 'static, S: Scheduler> ThrottledInvoker<A, S> {
    pub fn new<F>(handler: F, interval: Duration, scheduler: S) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self {
            shared: Arc::new(Shared {
                handler: Box::new(handler),
                interval,
                scheduler,
                state: Mutex::new(State {
                    last: None,
                    pending: None,
                    generation: 0,
                }),
            }),
        }
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.shared.interval
    }

    /// Runs the handler now if the interval since the last run has passed,
    /// otherwise (re)schedules it for the end of the interval with `args`.
    ///
    /// The handler runs on the caller's thread for immediate calls and on the
    /// scheduler for trailing ones. Its panics are not caught.
    pub fn call(&self, args: A) {
        let shared = &self.shared;
        let now = shared.scheduler.now();
        let mut state = shared.state.lock();

        if let Some(pending) = state.pending.take() {
            shared.scheduler.cancel(pending.handle);
        }

        let elapsed = state.last.map(|last| now.saturating_sub(last));

        match elapsed {
            Some(elapsed) if elapsed <= shared.interval => {
                state.generation += 1;
                let generation = state.generation;
                let delay = shared.interval - elapsed;

                let task_shared = Arc::clone(shared);
                let handle = shared
                    .scheduler
                    .schedule(delay, Box::new(move || task_shared.fire(generation)));

                trace!(generation, ?delay, "call deferred");
                state.pending = Some(Pending {
                    args,
                    handle,
                    generation,
                });
            }
            _ => {
                state.last = Some(now);
                drop(state);
                (shared.handler)(args);
            }
        }
    }

    /// Whether a trailing call is scheduled.
    pub fn is_pending(&self) -> bool {
        self.shared.state.lock().pending.is_some()
    }

    /// Drops the scheduled trailing call. Returns `false` if there was none.
    pub fn cancel(&self) -> bool {
        let pending = self.shared.state.lock().pending.take();

        match pending {
            Some(pending) => {
                self.shared.scheduler.cancel(pending.handle);
                true
            }
            None => false,
        }
    }

    /// Runs the scheduled trailing call immediately. Returns `false` if there
    /// was none.
    pub fn flush(&self) -> bool {
        let pending = {
            let mut state = self.shared.state.lock();
            let pending = state.pending.take();
            if pending.is_some() {
                state.last = Some(self.shared.scheduler.now());
            }
            pending
        };

        match pending {
            Some(pending) => {
                self.shared.scheduler.cancel(pending.handle);
                (self.shared.handler)(pending.args);
                true
            }
            None => false,
        }
    }
}

/// Wraps `handler` so it runs at most once per `interval`, trailing edge
/// guaranteed.
pub fn throttle<A, S, F>(handler: F, interval: Duration, scheduler: S) -> ThrottledInvoker<A, S>
where
    A: Send + 'static,
    S: Scheduler,
    F: Fn(A) + Send + Sync + 'static,
{
    ThrottledInvoker::new(handler, interval, scheduler)
}
