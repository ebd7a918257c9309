mod ordering;
mod pair;

pub use ordering::LockOrder;
pub use pair::{LockId, LockPair, NamedLock};
