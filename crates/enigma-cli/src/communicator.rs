//! Line-oriented request/response boundary.
//!
//! The dialogue and batch modes only ever read a line, read an integer or
//! write a line. [`Communicator`] is that contract; [`LineCommunicator`]
//! implements it over any buffered reader and writer, which is stdin/stdout
//! in the binary and in-memory buffers in tests.

use std::io::{BufRead, Write};

use crate::error::CliError;

/// Narrow text I/O used to drive the engine.
pub trait Communicator {
    /// Next line without its line terminator. End of input is
    /// [`CliError::Closed`].
    fn next_line(&mut self) -> Result<String, CliError>;

    /// Next line parsed as an integer.
    fn next_int(&mut self) -> Result<i64, CliError> {
        let line = self.next_line()?;
        let line = line.trim();
        line.parse().map_err(|_| CliError::NotANumber { line: line.to_string() })
    }

    /// Write one line.
    fn send(&mut self, line: &str) -> Result<(), CliError>;
}

/// [`Communicator`] over a reader and a writer.
#[derive(Debug)]
pub struct LineCommunicator<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LineCommunicator<R, W> {
    /// Wrap a reader and a writer.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Give back the writer, e.g. to inspect captured output.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Communicator for LineCommunicator<R, W> {
    fn next_line(&mut self) -> Result<String, CliError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(CliError::Closed);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    fn send(&mut self, line: &str) -> Result<(), CliError> {
        writeln!(self.writer, "{line}")?;
        self.writer.flush()?;
        Ok(())
    }
}
