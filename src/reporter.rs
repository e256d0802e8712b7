use std::io::{self, Write};

use crate::prober::{Outcome, ProbeResult};

/// Prints the name of every reachable server as soon as its probe finishes.
pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Writes `name\n` for a success and nothing for a failure. Returns whether a line was
    /// written.
    pub fn report(&mut self, result: &ProbeResult) -> io::Result<bool> {
        match result.outcome {
            Outcome::Success => {
                // one write per line so concurrent writers never split it
                let line = format!("{}\n", result.name);
                self.out.write_all(line.as_bytes())?;
                self.out.flush()?;
                Ok(true)
            }
            Outcome::Failure(_) => Ok(false),
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}
