mod types;

pub use types::{DemoError, Result};
