//! Two threads, two locks, opposite acquisition order: a reproducible deadlock

pub mod demo;
pub mod error;
pub mod lock;
pub mod report;
pub mod utils;
pub mod worker;

pub use demo::{Demo, RunningDemo};
pub use error::{DemoError, Result};
pub use lock::{LockId, LockOrder, LockPair, NamedLock};
pub use report::{ChannelReporter, Event, Reporter, StdoutReporter};
pub use utils::duration::{parse_delay, parse_duration};
pub use worker::{PauseKind, WorkerId, WorkerState, DEFAULT_DELAY};
