//! Duration-tagged records

use super::emitter::write_event;
use super::event::TimedEvent;
use super::registry::{self, SinkPair};
use super::timestamp::{elapsed_millis, now_rfc3339};
use std::time::Instant;

/// Measures the duration of an event when logged.
///
/// Construction snapshots the current time and the currently registered
/// sinks; a later registry swap does not redirect a record already in
/// flight. A record usually produces one line, but logging it again is
/// fine and yields an independent line with the duration recomputed from
/// the original start.
///
/// # Examples
///
/// ```
/// use json_event_log::Record;
///
/// let record = Record::new("import");
/// // ... do the work ...
/// record.log("42 rows");
/// ```
pub struct Record {
    name: String,
    start: Instant,
    sinks: SinkPair,
}

impl Record {
    /// Start a record named `name`, capturing the current time and sinks.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            start: Instant::now(),
            sinks: registry::current(),
        }
    }

    /// The label this record was created with.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whole milliseconds since the record was created, floor-truncated.
    #[must_use]
    pub fn elapsed_millis(&self) -> u64 {
        elapsed_millis(self.start)
    }

    /// Write one timed line to the record's captured normal sink.
    ///
    /// For `format!`-style descriptions use
    /// [`record_log!`](crate::record_log).
    pub fn log(&self, desc: &str) {
        let event = TimedEvent {
            name: &self.name,
            desc,
            duration: self.elapsed_millis(),
            timestamp: now_rfc3339(),
        };
        write_event(&self.sinks.normal, &event);
    }
}
