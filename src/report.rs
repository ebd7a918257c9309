//! Progress events and where they are written

use crate::lock::{LockId, LockOrder};
use crate::worker::WorkerId;
use std::fmt;
use std::io::{self, Write};
use std::sync::mpsc::{self, Receiver, Sender};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Starting(LockOrder),
    Acquiring { worker: WorkerId, lock: LockId },
    AcquiredBoth(WorkerId),
    Finished,
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Starting(LockOrder::Inverted) => f.write_str("Starting deadlock demo..."),
            Event::Starting(LockOrder::Consistent) => f.write_str("Starting ordered demo..."),
            Event::Acquiring { worker, lock } => write!(f, "{} acquiring {}", worker, lock),
            Event::AcquiredBoth(worker) => write!(f, "{} acquired both locks", worker),
            Event::Finished => f.write_str("Both workers finished"),
        }
    }
}

pub trait Reporter: Send + Sync {
    fn report(&self, event: Event);
}

/// Prints one line per event to stdout
#[derive(Debug, Default)]
pub struct StdoutReporter;

impl Reporter for StdoutReporter {
    fn report(&self, event: Event) {
        let mut out = io::stdout().lock();
        // Nothing useful to do if stdout is gone
        let _ = writeln!(out, "{}", event);
        let _ = out.flush();
    }
}

/// Forwards events to a channel so they can be inspected in-process
#[derive(Debug)]
pub struct ChannelReporter {
    tx: Sender<Event>,
}

impl ChannelReporter {
    pub fn new() -> (Self, Receiver<Event>) {
        let (tx, rx) = mpsc::channel();
        (ChannelReporter { tx }, rx)
    }
}

impl Reporter for ChannelReporter {
    fn report(&self, event: Event) {
        // A dropped receiver only means nobody is listening any more
        let _ = self.tx.send(event);
    }
}
