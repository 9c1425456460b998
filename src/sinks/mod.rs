//! Sink implementations

pub mod buffer;
pub mod discard;
pub mod standard;

pub use buffer::BufferSink;
pub use discard::DiscardSink;
pub use standard::{StderrSink, StdoutSink};

// Re-export the trait for convenience
pub use crate::core::Sink;
