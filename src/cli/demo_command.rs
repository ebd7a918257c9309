use crate::cli::{Args, Command};
use deadlock_demo::{Demo, LockOrder, PauseKind, Result};
use tracing::debug;

pub fn execute_demo(args: Args) -> Result<()> {
    let order = match args.command {
        Some(Command::Ordered) => LockOrder::Consistent,
        None => LockOrder::Inverted,
    };

    let pause = if args.rendezvous {
        PauseKind::Rendezvous
    } else {
        args.delay.map(PauseKind::Sleep).unwrap_or_default()
    };

    debug!("Running with order {:?}, pause {:?}", order, pause);

    // Under the inverted order this never returns
    Demo::new(order).with_pause(pause).run()
}
