//! # JSON Event Log
//!
//! A minimal structured-logging facility: single-line JSON events written
//! to a process-wide pair of swappable sinks, duration-tagged records, and
//! an axum middleware that logs each request's outcome.
//!
//! ## Features
//!
//! - **Fixed schema**: three event shapes (message, error, timed), one
//!   self-contained JSON object per line
//! - **Swappable sinks**: redirect or silence all output, overridable for
//!   tests
//! - **Fire and forget**: a broken sink loses lines silently; logging
//!   never disturbs the caller
//! - **Request logging**: one line per HTTP request with status, path,
//!   query, and elapsed milliseconds (feature `middleware`, on by default)
//!
//! ## Example
//!
//! ```
//! use json_event_log::{log_event, Record};
//!
//! json_event_log::log("startup", "ready");
//! log_event!("startup", "listening on port {}", 8080);
//!
//! let record = Record::new("import");
//! // ... do the work ...
//! record.log("42 rows");
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

#[cfg(feature = "middleware")]
pub mod middleware;

pub mod prelude {
    pub use crate::core::{
        elapsed_millis, error, error_sink, log, maybe_error, normal_sink, now_rfc3339, reset,
        set_error_sink, set_normal_sink, silence, ErrorEvent, LogError, MessageEvent, Record,
        Result, SharedSink, Sink, TimedEvent,
    };
    pub use crate::sinks::{BufferSink, DiscardSink, StderrSink, StdoutSink};

    #[cfg(feature = "middleware")]
    pub use crate::middleware::request_logging;
}

pub use crate::core::{
    elapsed_millis, error, error_sink, log, maybe_error, normal_sink, now_rfc3339, reset,
    set_error_sink, set_normal_sink, silence, ErrorEvent, LogError, MessageEvent, Record, Result,
    SharedSink, Sink, TimedEvent,
};
pub use crate::sinks::{BufferSink, DiscardSink, StderrSink, StdoutSink};

#[cfg(feature = "middleware")]
pub use crate::middleware::request_logging;
