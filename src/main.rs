use anyhow::Result;
use std::io;
use std::path::Path;

use bill_demo::{logging, session, BILL_FILE};

fn main() -> Result<()> {
    logging::init_cli_logger();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    // A failed save is reported by the session; the process still exits 0
    session::run(&mut input, &mut output, Path::new(BILL_FILE))?;

    Ok(())
}
