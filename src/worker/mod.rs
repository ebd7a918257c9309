mod pause;
mod state;

pub use pause::{Pause, PauseKind, Rendezvous, DEFAULT_DELAY};
pub use state::{StateCell, WorkerState};

use crate::error::Result;
use crate::lock::{LockId, NamedLock};
use crate::report::{Event, Reporter};
use std::fmt;
use std::sync::{Arc, MutexGuard};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkerId {
    One,
    Two,
}

impl WorkerId {
    pub const ALL: [WorkerId; 2] = [WorkerId::One, WorkerId::Two];
}

impl fmt::Display for WorkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkerId::One => f.write_str("worker_one"),
            WorkerId::Two => f.write_str("worker_two"),
        }
    }
}

/// One of the two tasks: take `first`, pause, take `second`, release both.
pub struct Worker {
    id: WorkerId,
    first: Arc<NamedLock>,
    second: Arc<NamedLock>,
    pause: Pause,
    state: StateCell,
    reporter: Arc<dyn Reporter>,
}

impl Worker {
    pub fn new(
        id: WorkerId,
        first: Arc<NamedLock>,
        second: Arc<NamedLock>,
        pause: Pause,
        reporter: Arc<dyn Reporter>,
    ) -> Self {
        Worker {
            id,
            first,
            second,
            pause,
            state: StateCell::new(),
            reporter,
        }
    }

    /// Handle for observing this worker's progress from another thread
    pub fn state(&self) -> StateCell {
        self.state.clone()
    }

    /// Run the acquisition sequence.
    ///
    /// Blocks forever on the second lock when the other worker holds it and
    /// is itself waiting on our first lock.
    pub fn run(&self) -> Result<()> {
        self.announce(self.first.id());
        let first = self.acquire_first()?;
        self.state.set(WorkerState::HoldingFirstLock);

        self.pause.wait();

        self.state.set(WorkerState::WaitingOnSecondLock);
        self.announce(self.second.id());
        let second = self.second.lock()?;
        self.state.set(WorkerState::HoldingBoth);
        self.reporter.report(Event::AcquiredBoth(self.id));

        // Release in reverse acquisition order
        drop(second);
        drop(first);
        self.state.set(WorkerState::Released);
        debug!("{} released {} and {}", self.id, self.second.id(), self.first.id());

        Ok(())
    }

    fn announce(&self, lock: LockId) {
        self.reporter.report(Event::Acquiring {
            worker: self.id,
            lock,
        });
    }

    fn acquire_first(&self) -> Result<MutexGuard<'_, ()>> {
        match &self.pause {
            Pause::Sleep(_) => self.first.lock(),
            Pause::Rendezvous(meeting) => {
                // Arrive before blocking on a contended first lock
                let guard = match self.first.try_lock()? {
                    Some(guard) => {
                        meeting.arrive();
                        guard
                    }
                    None => {
                        meeting.arrive();
                        self.first.lock()?
                    }
                };
                Ok(guard)
            }
        }
    }
}
