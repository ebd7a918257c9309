mod args;
mod demo_command;

use deadlock_demo::Result;
pub use args::{Args, Command};

pub fn run(args: Args) -> Result<()> {
    demo_command::execute_demo(args)
}
