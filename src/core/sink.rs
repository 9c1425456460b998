//! Sink trait for log output destinations

use super::error::Result;
use std::sync::Arc;

/// An output destination for serialized log lines.
///
/// Implementations receive one complete, newline-terminated payload per
/// call and should hand it to the underlying destination with a single
/// write, so that lines from concurrent callers do not interleave at the
/// byte level (assuming the destination itself performs atomic writes).
pub trait Sink: Send + Sync {
    /// Write one line. `line` does not include the trailing newline;
    /// the sink appends it as part of the same write.
    fn write_line(&self, line: &str) -> Result<()>;

    fn name(&self) -> &str;
}

/// Shared handle to a sink. The registry and in-flight records hold
/// clones of this; the destination's lifecycle is managed by whoever
/// created it.
pub type SharedSink = Arc<dyn Sink>;
