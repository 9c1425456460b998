//! Wire shapes for emitted events
//!
//! Each event serializes to a single-line JSON object (JSONL), fields in
//! declaration order. Within a variant no field is ever omitted.

use serde::Serialize;

/// Plain message: `{"name": ..., "desc": ..., "timestamp": ...}`
#[derive(Debug, Serialize)]
pub struct MessageEvent<'a> {
    pub name: &'a str,
    pub desc: &'a str,
    pub timestamp: String,
}

/// Error: `{"error": ..., "timestamp": ...}`
#[derive(Debug, Serialize)]
pub struct ErrorEvent {
    pub error: String,
    pub timestamp: String,
}

/// Duration-tagged record: `{"name": ..., "desc": ..., "duration": ..., "timestamp": ...}`
///
/// `duration` is whole milliseconds.
#[derive(Debug, Serialize)]
pub struct TimedEvent<'a> {
    pub name: &'a str,
    pub desc: &'a str,
    pub duration: u64,
    pub timestamp: String,
}
