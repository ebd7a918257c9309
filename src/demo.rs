//! Spawns the two workers and waits for them

use crate::error::{DemoError, Result};
use crate::lock::{LockOrder, LockPair};
use crate::report::{Event, Reporter, StdoutReporter};
use crate::worker::{Pause, PauseKind, StateCell, Worker, WorkerId, WorkerState};
use std::any::Any;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tracing::{debug, info, warn};

pub struct Demo {
    order: LockOrder,
    pause: PauseKind,
    reporter: Arc<dyn Reporter>,
}

impl Demo {
    pub fn new(order: LockOrder) -> Self {
        Demo {
            order,
            pause: PauseKind::default(),
            reporter: Arc::new(StdoutReporter),
        }
    }

    pub fn with_pause(mut self, pause: PauseKind) -> Self {
        self.pause = pause;
        self
    }

    pub fn with_reporter(mut self, reporter: Arc<dyn Reporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// Create the locks and launch both workers without waiting for them
    pub fn start(self) -> Result<RunningDemo> {
        info!(
            "Starting demo (order: {:?}, pause: {:?})",
            self.order, self.pause
        );
        if self.order.has_inversion() {
            warn!("Workers acquire locks in opposite orders; expect a hang");
        }
        self.reporter.report(Event::Starting(self.order));

        let locks = LockPair::new();
        let pauses = Pause::for_run(self.pause, WorkerId::ALL.len());

        let mut workers = Vec::with_capacity(WorkerId::ALL.len());
        for (id, pause) in WorkerId::ALL.into_iter().zip(pauses) {
            let (first, second) = self.order.plan(id);
            debug!("{} will take {} then {}", id, first, second);

            let worker = Worker::new(
                id,
                locks.get(first),
                locks.get(second),
                pause,
                Arc::clone(&self.reporter),
            );
            let state = worker.state();
            let handle = thread::Builder::new()
                .name(id.to_string())
                .spawn(move || worker.run())
                .map_err(|e| DemoError::SpawnFailed { worker: id, source: e })?;

            workers.push(SpawnedWorker { id, state, handle });
        }

        Ok(RunningDemo {
            workers,
            reporter: self.reporter,
        })
    }

    /// Start both workers and block until they finish.
    ///
    /// Never returns when the lock order is inverted and the race is lost.
    pub fn run(self) -> Result<()> {
        self.start()?.join()
    }
}

struct SpawnedWorker {
    id: WorkerId,
    state: StateCell,
    handle: JoinHandle<Result<()>>,
}

/// Both workers in flight.
///
/// Dropping this detaches the worker threads.
pub struct RunningDemo {
    workers: Vec<SpawnedWorker>,
    reporter: Arc<dyn Reporter>,
}

impl RunningDemo {
    pub fn states(&self) -> Vec<(WorkerId, WorkerState)> {
        self.workers.iter().map(|w| (w.id, w.state.get())).collect()
    }

    pub fn is_finished(&self) -> bool {
        self.workers.iter().all(|w| w.handle.is_finished())
    }

    /// Wait for both workers in spawn order
    pub fn join(self) -> Result<()> {
        for worker in self.workers {
            debug!("Joining {}", worker.id);
            match worker.handle.join() {
                Ok(result) => result?,
                Err(payload) => {
                    return Err(DemoError::worker_panicked(
                        worker.id,
                        panic_message(payload.as_ref()),
                    ))
                }
            }
        }

        self.reporter.report(Event::Finished);
        info!("Both workers finished");
        Ok(())
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
