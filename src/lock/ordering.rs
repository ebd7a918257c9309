use super::LockId;
use crate::worker::WorkerId;

/// How the two workers order their acquisitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockOrder {
    /// worker_one takes A then B, worker_two takes B then A
    Inverted,
    /// Both workers follow the global `LockId` order
    Consistent,
}

impl LockOrder {
    /// The `(first, second)` locks `worker` acquires under this order
    pub fn plan(self, worker: WorkerId) -> (LockId, LockId) {
        let inverted = match worker {
            WorkerId::One => (LockId::A, LockId::B),
            WorkerId::Two => (LockId::B, LockId::A),
        };

        match self {
            LockOrder::Inverted => inverted,
            LockOrder::Consistent => {
                let (first, second) = inverted;
                if first <= second {
                    (first, second)
                } else {
                    (second, first)
                }
            }
        }
    }

    /// Whether the two workers disagree on which lock comes first
    pub fn has_inversion(self) -> bool {
        let (one_first, _) = self.plan(WorkerId::One);
        let (two_first, _) = self.plan(WorkerId::Two);
        one_first != two_first
    }
}
