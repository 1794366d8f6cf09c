use std::time::Duration;

use tokio::{runtime::Handle, task::JoinHandle, time::Instant};

use crate::error::ScheduleError;

pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Timer facility a throttle defers its trailing call onto.
///
/// `now` is measured from an arbitrary, fixed origin of the scheduler.
pub trait Scheduler: Send + Sync + 'static {
    type Handle: Send + 'static;

    fn now(&self) -> Duration;
    fn schedule(&self, delay: Duration, task: Task) -> Self::Handle;
    fn cancel(&self, handle: Self::Handle);
}

/// Runs deferred tasks on a tokio runtime.
///
/// Follows `tokio::time`, so a paused test clock drives it as well.
#[derive(Clone, Debug)]
pub struct TokioScheduler {
    runtime: Handle,
    origin: Instant,
}

impl TokioScheduler {
    /// Binds to the runtime of the calling context.
    pub fn current() -> Result<Self, ScheduleError> {
        let runtime =
            Handle::try_current().map_err(|error| ScheduleError::Runtime(error.to_string()))?;

        Ok(Self::with_handle(runtime))
    }

    pub fn with_handle(runtime: Handle) -> Self {
        // Instant::now must run inside the runtime to honour a paused clock.
        let origin = {
            let _guard = runtime.enter();
            Instant::now()
        };

        Self { runtime, origin }
    }
}

impl Scheduler for TokioScheduler {
    type Handle = JoinHandle<()>;

    fn now(&self) -> Duration {
        let _guard = self.runtime.enter();
        Instant::now().duration_since(self.origin)
    }

    fn schedule(&self, delay: Duration, task: Task) -> Self::Handle {
        self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            task();
        })
    }

    fn cancel(&self, handle: Self::Handle) {
        handle.abort();
    }
}
