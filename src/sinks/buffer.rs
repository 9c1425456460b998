//! In-memory buffer sink

use crate::core::{Result, Sink};
use parking_lot::Mutex;
use std::sync::Arc;

/// Collects lines into shared memory.
///
/// Clones share the same storage, so a test can install one clone in the
/// registry and read emitted output back through another.
///
/// # Examples
///
/// ```
/// use json_event_log::sinks::BufferSink;
/// use json_event_log::core::Sink;
///
/// let buffer = BufferSink::new();
/// buffer.write_line(r#"{"name":"test"}"#).unwrap();
/// assert_eq!(buffer.contents(), "{\"name\":\"test\"}\n");
/// ```
#[derive(Clone, Default)]
pub struct BufferSink {
    inner: Arc<Mutex<String>>,
}

impl BufferSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, newline-terminated per line.
    #[must_use]
    pub fn contents(&self) -> String {
        self.inner.lock().clone()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}

impl Sink for BufferSink {
    fn write_line(&self, line: &str) -> Result<()> {
        let mut inner = self.inner.lock();
        inner.push_str(line);
        inner.push('\n');
        Ok(())
    }

    fn name(&self) -> &str {
        "buffer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_storage() {
        let buffer = BufferSink::new();
        let clone = buffer.clone();
        buffer.write_line("one").unwrap();
        clone.write_line("two").unwrap();
        assert_eq!(buffer.contents(), "one\ntwo\n");
    }

    #[test]
    fn test_clear() {
        let buffer = BufferSink::new();
        buffer.write_line("one").unwrap();
        buffer.clear();
        assert!(buffer.is_empty());
    }
}
