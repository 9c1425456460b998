//! Standard stream sinks

use crate::core::{Result, Sink};
use std::io::Write;

/// Writes lines to the process's standard output. The default normal sink.
pub struct StdoutSink;

impl Sink for StdoutSink {
    fn write_line(&self, line: &str) -> Result<()> {
        let payload = format!("{line}\n");
        let mut out = std::io::stdout().lock();
        out.write_all(payload.as_bytes())?;
        out.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "stdout"
    }
}

/// Writes lines to the process's standard error. The default error sink.
pub struct StderrSink;

impl Sink for StderrSink {
    fn write_line(&self, line: &str) -> Result<()> {
        let payload = format!("{line}\n");
        let mut out = std::io::stderr().lock();
        out.write_all(payload.as_bytes())?;
        out.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "stderr"
    }
}
