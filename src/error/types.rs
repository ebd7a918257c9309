use crate::lock::LockId;
use crate::worker::WorkerId;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("Failed to spawn {worker}: {source}")]
    SpawnFailed { worker: WorkerId, source: io::Error },

    #[error("{worker} panicked: {message}")]
    WorkerPanicked { worker: WorkerId, message: String },

    #[error("Lock {0} is poisoned")]
    LockPoisoned(LockId),

    #[error("Invalid duration format '{input}': {message}")]
    InvalidDuration { input: String, message: String },
}

impl DemoError {
    pub fn exit_code(&self) -> i32 {
        match self {
            DemoError::SpawnFailed { .. } => 1,
            DemoError::WorkerPanicked { .. } | DemoError::LockPoisoned(_) => 101,
            DemoError::InvalidDuration { .. } => 2,
        }
    }

    pub fn worker_panicked(worker: WorkerId, message: impl Into<String>) -> Self {
        DemoError::WorkerPanicked {
            worker,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;
