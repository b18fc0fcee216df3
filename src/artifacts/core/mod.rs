//! Core utilities and shared types
//!
//! - `config`: engine thresholds and cache sizes
//! - `OutputWriter`: stdout or the `minus` pager, chosen at startup

pub mod config;

use derive_new::new;
use is_terminal::IsTerminal;
use minus::Pager;
use std::io::{self, Write};

/// Setting this variable (to any value) disables the pager
pub const NO_PAGER_ENV: &str = "NO_PAGER";

/// Adapts the `minus` pager to `std::io::Write`
///
/// Output is buffered in the pager until [`OutputWriter::finish`] hands it
/// over for interactive display.
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let s =
            std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(s).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Destination for command output
pub enum OutputWriter {
    Stdout(io::Stdout),
    Pager(PagerWriter),
}

impl OutputWriter {
    /// Pages only when stdout is a terminal and `NO_PAGER` is unset
    pub fn detect() -> Self {
        let stdout = io::stdout();
        if std::env::var_os(NO_PAGER_ENV).is_some() || !stdout.is_terminal() {
            OutputWriter::Stdout(stdout)
        } else {
            OutputWriter::Pager(PagerWriter::new(Pager::new()))
        }
    }

    /// Flushes stdout, or blocks in the pager until the user quits it
    pub fn finish(self) -> anyhow::Result<()> {
        match self {
            OutputWriter::Stdout(mut stdout) => stdout.flush()?,
            OutputWriter::Pager(writer) => minus::page_all(writer.pager)?,
        }

        Ok(())
    }
}

impl Write for OutputWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            OutputWriter::Stdout(stdout) => stdout.write(buf),
            OutputWriter::Pager(pager) => pager.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            OutputWriter::Stdout(stdout) => stdout.flush(),
            OutputWriter::Pager(pager) => pager.flush(),
        }
    }
}
