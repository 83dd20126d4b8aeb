//! Destinations for human-readable report lines.
//!
//! Report lines are program output, not logs: they go to a [`ReportSink`],
//! never through `tracing`.

use std::io::{self, Write};

/// Receives one report line at a time.
pub trait ReportSink {
    fn emit(&mut self, line: &str) -> io::Result<()>;
}

/// Writes each line to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl ReportSink for StdoutSink {
    fn emit(&mut self, line: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{line}")
    }
}

/// Records lines in memory.
impl ReportSink for Vec<String> {
    fn emit(&mut self, line: &str) -> io::Result<()> {
        self.push(line.to_owned());
        Ok(())
    }
}

impl<S: ReportSink + ?Sized> ReportSink for &mut S {
    fn emit(&mut self, line: &str) -> io::Result<()> {
        (**self).emit(line)
    }
}
