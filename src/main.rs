use std::io;
use log::{error, info};

mod constants;
mod rendering;
mod session;
mod terminal_io;
mod types;

use constants::{LOG_FILE, LOG_LEVEL};
use rendering::OutputTarget;
use session::Session;

/// Starts file logging. The log is diagnostic only, so a file that cannot be
/// created is reported on stderr and the program runs without a logger.
fn init_logging(path: &str) -> bool {
    match simple_logging::log_to_file(path, LOG_LEVEL) {
        Ok(()) => true,
        Err(e) => {
            eprintln!("Logging disabled: cannot open {}: {}", path, e);
            false
        }
    }
}

fn main() -> io::Result<()> {
    if init_logging(LOG_FILE) {
        info!("Starting vector2d.");
    }

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), OutputTarget::stdout());
    let analysis = session.run().map_err(|e| { error!("Session aborted: {}", e); e })?;

    info!("Finished: {}.", analysis.orientation.label());
    Ok(())
}
