use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::thread;
use std::time::Duration;
use tracing::trace;

/// Default pause between the first and second acquisition
pub const DEFAULT_DELAY: Duration = Duration::from_secs(1);

/// How workers wait between their two acquisitions, as configured on a demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseKind {
    Sleep(Duration),
    Rendezvous,
}

impl Default for PauseKind {
    fn default() -> Self {
        PauseKind::Sleep(DEFAULT_DELAY)
    }
}

/// The pause a single worker runs with.
#[derive(Debug, Clone)]
pub enum Pause {
    Sleep(Duration),
    Rendezvous(Arc<Rendezvous>),
}

impl Pause {
    /// Build the per-worker pauses for a run of `workers` workers
    pub fn for_run(kind: PauseKind, workers: usize) -> Vec<Pause> {
        match kind {
            PauseKind::Sleep(delay) => vec![Pause::Sleep(delay); workers],
            PauseKind::Rendezvous => {
                let meeting = Arc::new(Rendezvous::new(workers));
                vec![Pause::Rendezvous(meeting); workers]
            }
        }
    }

    pub fn wait(&self) {
        match self {
            Pause::Sleep(delay) => {
                trace!("Sleeping for {:?}", delay);
                thread::sleep(*delay);
            }
            Pause::Rendezvous(meeting) => meeting.wait(),
        }
    }
}

/// A meeting point: `wait` returns once `parties` arrivals were recorded.
///
/// Unlike `std::sync::Barrier`, arriving and waiting are separate steps so a
/// worker stuck on a contended lock still counts as arrived.
#[derive(Debug)]
pub struct Rendezvous {
    parties: usize,
    arrived: Mutex<usize>,
    all_arrived: Condvar,
}

impl Rendezvous {
    pub fn new(parties: usize) -> Self {
        Rendezvous {
            parties,
            arrived: Mutex::new(0),
            all_arrived: Condvar::new(),
        }
    }

    pub fn arrive(&self) {
        let mut arrived = self
            .arrived
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *arrived += 1;
        trace!("Rendezvous arrival {}/{}", *arrived, self.parties);
        if *arrived >= self.parties {
            self.all_arrived.notify_all();
        }
    }

    pub fn wait(&self) {
        let mut arrived = self
            .arrived
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        while *arrived < self.parties {
            arrived = self
                .all_arrived
                .wait(arrived)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }

    pub fn arrivals(&self) -> usize {
        *self
            .arrived
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
