//! Timestamp and duration helpers
//!
//! Event timestamps are rendered as RFC 3339 at seconds precision
//! (`2024-01-02T15:04:05Z`); durations are integer milliseconds,
//! floor-truncated.

use chrono::{SecondsFormat, Utc};
use std::time::Instant;

/// Current instant rendered per RFC 3339.
#[must_use]
pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Whole milliseconds elapsed since `start`, truncated toward zero.
#[must_use]
pub fn elapsed_millis(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}
