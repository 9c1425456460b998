//! Top-level event emitters
//!
//! All emits are fire-and-forget: serialization or write failure produces
//! no output and no error. A broken sink loses lines silently rather than
//! disturbing the caller.

use super::event::{ErrorEvent, MessageEvent};
use super::registry;
use super::sink::SharedSink;
use super::timestamp::now_rfc3339;
use serde::Serialize;
use std::fmt::Display;

/// Write a message event to the current normal sink.
///
/// For `format!`-style descriptions use [`log_event!`](crate::log_event).
pub fn log(name: &str, desc: &str) {
    let event = MessageEvent {
        name,
        desc,
        timestamp: now_rfc3339(),
    };
    write_event(&registry::current().normal, &event);
}

/// Write an error event to the current error sink.
pub fn error<E: Display>(err: &E) {
    let event = ErrorEvent {
        error: err.to_string(),
        timestamp: now_rfc3339(),
    };
    write_event(&registry::current().error, &event);
}

/// Like [`error`], but a no-op on `None`. Covers call sites that hold an
/// `Option` and only want a line when something actually went wrong.
pub fn maybe_error<E: Display>(err: Option<&E>) {
    if let Some(err) = err {
        error(err);
    }
}

/// Serialize `event` and hand it to `sink` as one line, discarding any
/// failure.
pub(crate) fn write_event<T: Serialize>(sink: &SharedSink, event: &T) {
    if let Ok(line) = serde_json::to_string(event) {
        let _ = sink.write_line(&line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::registry::SinkPair;
    use crate::sinks::BufferSink;
    use std::sync::Arc;

    // Exercises write_event against a captured pair rather than the global
    // registry, so these run cleanly alongside the registry tests.
    fn captured_pair() -> (SinkPair, BufferSink, BufferSink) {
        let normal = BufferSink::new();
        let error = BufferSink::new();
        let pair = SinkPair {
            normal: Arc::new(normal.clone()),
            error: Arc::new(error.clone()),
        };
        (pair, normal, error)
    }

    #[test]
    fn test_write_event_emits_one_line() {
        let (pair, normal, _) = captured_pair();
        let event = MessageEvent {
            name: "boot",
            desc: "ready",
            timestamp: now_rfc3339(),
        };
        write_event(&pair.normal, &event);
        let contents = normal.contents();
        assert_eq!(contents.lines().count(), 1);
        assert!(contents.ends_with('\n'));
    }

    #[test]
    fn test_write_event_swallows_sink_failure() {
        struct BrokenSink;
        impl crate::core::Sink for BrokenSink {
            fn write_line(&self, _line: &str) -> crate::core::Result<()> {
                Err(crate::core::LogError::sink("closed"))
            }
            fn name(&self) -> &str {
                "broken"
            }
        }

        let sink: SharedSink = Arc::new(BrokenSink);
        let event = MessageEvent {
            name: "boot",
            desc: "ready",
            timestamp: now_rfc3339(),
        };
        // Must not panic or surface the error.
        write_event(&sink, &event);
    }
}
