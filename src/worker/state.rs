use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

/// Where a worker is in its acquisition sequence.
///
/// Under the inverted order both workers stop at `WaitingOnSecondLock`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum WorkerState {
    NotStarted = 0,
    HoldingFirstLock = 1,
    WaitingOnSecondLock = 2,
    HoldingBoth = 3,
    Released = 4,
}

impl WorkerState {
    fn from_u8(value: u8) -> Self {
        match value {
            0 => WorkerState::NotStarted,
            1 => WorkerState::HoldingFirstLock,
            2 => WorkerState::WaitingOnSecondLock,
            3 => WorkerState::HoldingBoth,
            4 => WorkerState::Released,
            _ => unreachable!("invalid worker state {value}"),
        }
    }
}

/// A worker's state, readable from other threads while the worker runs.
#[derive(Debug, Clone)]
pub struct StateCell {
    inner: Arc<AtomicU8>,
}

impl StateCell {
    pub fn new() -> Self {
        StateCell {
            inner: Arc::new(AtomicU8::new(WorkerState::NotStarted as u8)),
        }
    }

    pub fn get(&self) -> WorkerState {
        WorkerState::from_u8(self.inner.load(Ordering::Acquire))
    }

    pub fn set(&self, state: WorkerState) {
        self.inner.store(state as u8, Ordering::Release);
    }
}

impl Default for StateCell {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_observe_the_same_state() {
        let cell = StateCell::new();
        let observer = cell.clone();
        assert_eq!(observer.get(), WorkerState::NotStarted);

        cell.set(WorkerState::WaitingOnSecondLock);
        assert_eq!(observer.get(), WorkerState::WaitingOnSecondLock);
    }
}
