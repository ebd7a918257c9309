use crate::error::{DemoError, Result};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, TryLockError};
use tracing::{debug, trace};

/// Identifies one of the two shared locks. `A < B` is the global order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LockId {
    A,
    B,
}

impl fmt::Display for LockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LockId::A => f.write_str("lock_a"),
            LockId::B => f.write_str("lock_b"),
        }
    }
}

/// An exclusive lock that protects no data, only its own ownership.
#[derive(Debug)]
pub struct NamedLock {
    id: LockId,
    inner: Mutex<()>,
}

impl NamedLock {
    pub fn new(id: LockId) -> Self {
        NamedLock {
            id,
            inner: Mutex::new(()),
        }
    }

    pub fn id(&self) -> LockId {
        self.id
    }

    /// Block until the lock is held
    pub fn lock(&self) -> Result<MutexGuard<'_, ()>> {
        trace!("Blocking on {}", self.id);
        let guard = self
            .inner
            .lock()
            .map_err(|_| DemoError::LockPoisoned(self.id))?;
        debug!("Acquired {}", self.id);
        Ok(guard)
    }

    /// Take the lock if it is free; `Ok(None)` means another thread holds it
    pub fn try_lock(&self) -> Result<Option<MutexGuard<'_, ()>>> {
        match self.inner.try_lock() {
            Ok(guard) => {
                debug!("Acquired {} without contention", self.id);
                Ok(Some(guard))
            }
            Err(TryLockError::WouldBlock) => {
                debug!("{} is contended", self.id);
                Ok(None)
            }
            Err(TryLockError::Poisoned(_)) => Err(DemoError::LockPoisoned(self.id)),
        }
    }
}

/// Lock A and lock B for a single demo run.
///
/// The handles are passed to the workers explicitly so that every run gets
/// fresh locks and nothing is shared through process-wide statics.
#[derive(Debug, Clone)]
pub struct LockPair {
    a: Arc<NamedLock>,
    b: Arc<NamedLock>,
}

impl LockPair {
    pub fn new() -> Self {
        LockPair {
            a: Arc::new(NamedLock::new(LockId::A)),
            b: Arc::new(NamedLock::new(LockId::B)),
        }
    }

    pub fn get(&self, id: LockId) -> Arc<NamedLock> {
        match id {
            LockId::A => Arc::clone(&self.a),
            LockId::B => Arc::clone(&self.b),
        }
    }
}

impl Default for LockPair {
    fn default() -> Self {
        Self::new()
    }
}
