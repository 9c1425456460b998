//! Core types: sink trait, registry, wire shapes, emitters, records

pub mod emitter;
pub mod error;
pub mod event;
pub mod record;
pub mod registry;
pub mod sink;
pub mod timestamp;

pub use emitter::{error, log, maybe_error};
pub use error::{LogError, Result};
pub use event::{ErrorEvent, MessageEvent, TimedEvent};
pub use record::Record;
pub use registry::{error_sink, normal_sink, reset, set_error_sink, set_normal_sink, silence};
pub use sink::{SharedSink, Sink};
pub use timestamp::{elapsed_millis, now_rfc3339};
