use std::{sync::Arc, time::Duration};

use hashbrown::HashMap;
use parking_lot::Mutex;

use crate::throttle::scheduler::{Scheduler, Task};

#[derive(Default)]
struct Timeline {
    now: Duration,
    next_id: u64,
    tasks: HashMap<u64, (Duration, Task)>,
}

impl Timeline {
    // Earliest task due at or before `until`, ties broken by scheduling order.
    fn pop_due(&mut self, until: Duration) -> Option<(Duration, Task)> {
        let id = self
            .tasks
            .iter()
            .filter(|(_, (due, _))| *due <= until)
            .min_by_key(|(id, (due, _))| (*due, **id))
            .map(|(id, _)| *id)?;

        self.tasks.remove(&id)
    }
}

/// Virtual clock scheduler. Time only moves when [`ManualScheduler::advance`]
/// is called, which makes throttle behaviour fully deterministic in tests.
///
/// Clones share the same timeline.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    timeline: Arc<Mutex<Timeline>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the clock forward, running every task that falls due on the way
    /// at its own due time. Tasks scheduled while advancing are honoured too.
    pub fn advance(&self, by: Duration) {
        let until = self.timeline.lock().now + by;

        loop {
            let next = {
                let mut timeline = self.timeline.lock();
                let next = timeline.pop_due(until);
                if let Some((due, _)) = &next {
                    timeline.now = timeline.now.max(*due);
                }
                next
            };

            match next {
                // Lock released: the task may schedule or cancel.
                Some((_, task)) => task(),
                None => break,
            }
        }

        self.timeline.lock().now = until;
    }

    /// Number of tasks waiting to fire.
    pub fn pending(&self) -> usize {
        self.timeline.lock().tasks.len()
    }
}

impl std::fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let timeline = self.timeline.lock();
        f.debug_struct("ManualScheduler")
            .field("now", &timeline.now)
            .field("pending", &timeline.tasks.len())
            .finish()
    }
}

impl Scheduler for ManualScheduler {
    type Handle = u64;

    fn now(&self) -> Duration {
        self.timeline.lock().now
    }

    fn schedule(&self, delay: Duration, task: Task) -> Self::Handle {
        let mut timeline = self.timeline.lock();
        let id = timeline.next_id;
        let due = timeline.now + delay;

        timeline.next_id += 1;
        timeline.tasks.insert(id, (due, task));
        id
    }

    fn cancel(&self, handle: Self::Handle) {
        self.timeline.lock().tasks.remove(&handle);
    }
}
