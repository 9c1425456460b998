//! Discard sink

use crate::core::{Result, Sink};

/// Accepts every line and reports success without storing or forwarding
/// anything. [`silence`](crate::silence) points both registry slots here.
pub struct DiscardSink;

impl Sink for DiscardSink {
    fn write_line(&self, _line: &str) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "discard"
    }
}
