use clap::{Parser, Subcommand};
use deadlock_demo::parse_delay;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "deadlock-demo",
    version,
    about = "Two threads, two locks, opposite acquisition order: a reproducible deadlock",
    long_about = None
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Pause between a worker's two locks, e.g. 250ms [default: 1s]
    #[arg(
        short = 'd',
        long,
        value_name = "DURATION",
        value_parser = parse_delay,
        global = true
    )]
    pub delay: Option<Duration>,

    /// Meet at a rendezvous instead of sleeping
    #[arg(long, conflicts_with = "delay", global = true)]
    pub rendezvous: bool,

    /// Verbose diagnostics on stderr (repeat for more)
    #[arg(short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the same workers with a single global lock order (terminates)
    Ordered,
}
