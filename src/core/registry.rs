//! Process-wide output sink registry
//!
//! Holds the pair of destinations used by subsequent top-level emits:
//! `normal` (messages, timed records) and `error` (error events). Defaults
//! to the process's standard output and standard error. Swaps are expected
//! at process initialization or in test setup/teardown, not concurrently
//! with active logging; the lock only makes the swap itself well-defined.

use super::sink::{SharedSink, Sink};
use crate::sinks::{DiscardSink, StderrSink, StdoutSink};
use parking_lot::RwLock;
use std::sync::Arc;

/// The two active destinations. Records snapshot this at construction so
/// a later registry swap does not redirect an in-flight record.
#[derive(Clone)]
pub(crate) struct SinkPair {
    pub normal: SharedSink,
    pub error: SharedSink,
}

impl Default for SinkPair {
    fn default() -> Self {
        Self {
            normal: Arc::new(StdoutSink),
            error: Arc::new(StderrSink),
        }
    }
}

// None means "defaults", so reset() needs no stored copy of them.
static REGISTRY: RwLock<Option<SinkPair>> = RwLock::new(None);

pub(crate) fn current() -> SinkPair {
    REGISTRY.read().clone().unwrap_or_default()
}

fn update(f: impl FnOnce(&mut SinkPair)) {
    let mut guard = REGISTRY.write();
    let pair = guard.get_or_insert_with(SinkPair::default);
    f(pair);
}

/// Replace the destination used by subsequent message and record emits.
pub fn set_normal_sink<S: Sink + 'static>(sink: S) {
    update(|pair| pair.normal = Arc::new(sink));
}

/// Replace the destination used by subsequent error emits.
pub fn set_error_sink<S: Sink + 'static>(sink: S) {
    update(|pair| pair.error = Arc::new(sink));
}

/// Current normal destination. Lets tests save a sink before swapping it.
#[must_use]
pub fn normal_sink() -> SharedSink {
    current().normal
}

/// Current error destination.
#[must_use]
pub fn error_sink() -> SharedSink {
    current().error
}

/// Point both destinations at a discard sink so nothing gets emitted.
/// Useful in tests.
pub fn silence() {
    update(|pair| {
        pair.normal = Arc::new(DiscardSink);
        pair.error = Arc::new(DiscardSink);
    });
}

/// Restore the default destinations (stdout / stderr).
pub fn reset() {
    *REGISTRY.write() = None;
}

// Registry state is process-wide; every test that swaps it takes this
// lock so parallel tests cannot observe each other's swaps.
#[cfg(test)]
pub(crate) fn test_lock() -> parking_lot::MutexGuard<'static, ()> {
    static GUARD: parking_lot::Mutex<()> = parking_lot::Mutex::new(());
    GUARD.lock()
}
