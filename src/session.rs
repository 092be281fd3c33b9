// Interactive bill session: show, ask for a new name, show again, save
//
// Streams and output path are parameters so the whole flow runs against
// in-memory buffers in tests; the binary passes stdin, stdout and BILL_FILE.

use crate::bill::Bill;
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// File the final breakdown is written to, relative to the working directory
pub const BILL_FILE: &str = "bill.txt";

/// Name the bill carries before the operator picks one
pub const INITIAL_NAME: &str = "old name";

pub const PROMPT: &str = "Enter new name: ";

/// How the session ended
#[derive(Debug)]
pub struct SessionOutcome {
    pub bill: Bill,
    pub rendered: String,
    /// `None` when the breakdown was saved
    pub write_error: Option<io::Error>,
}

impl SessionOutcome {
    pub fn saved(&self) -> bool {
        self.write_error.is_none()
    }
}

/// Print `prompt`, read one line and trim it.
///
/// End of input gives an empty string.
pub fn read_input<R: BufRead, W: Write>(prompt: &str, input: &mut R, output: &mut W) -> Result<String> {
    write!(output, "{}", prompt).context("Failed to write prompt")?;
    output.flush().context("Failed to flush prompt")?;

    let mut line = String::new();
    input.read_line(&mut line).context("Failed to read from input")?;

    Ok(line.trim().to_string())
}

/// Create or truncate `path` with `contents`, owner read/write and world read
pub fn save_bill(path: &Path, contents: &str) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }

    let mut file = options.open(path)?;
    file.write_all(contents.as_bytes())
}

/// Run the full session.
///
/// A failed save is reported on `output` and in the outcome, not as an error.
pub fn run<R: BufRead, W: Write>(input: &mut R, output: &mut W, path: &Path) -> Result<SessionOutcome> {
    let mut bill = Bill::new(INITIAL_NAME);

    writeln!(output, "bill: {}", bill.format()).context("Failed to write bill")?;

    let name = read_input(PROMPT, input, output)?;
    tracing::debug!(name = %name, "renaming bill");
    bill.rename(name);

    let rendered = bill.format();
    writeln!(output, "bill: {}", rendered).context("Failed to write bill")?;

    let write_error = match save_bill(path, &rendered) {
        Ok(()) => {
            tracing::info!(path = %path.display(), "bill saved");
            None
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "could not save bill");
            writeln!(output, "Error writing file: {}", e).context("Failed to write error message")?;
            Some(e)
        }
    };

    Ok(SessionOutcome {
        bill,
        rendered,
        write_error,
    })
}
