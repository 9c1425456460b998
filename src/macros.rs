//! Macros for `format!`-style event descriptions.
//!
//! The plain functions take a finished description string; these macros
//! expand format arguments first, like `println!`.
//!
//! # Examples
//!
//! ```
//! use json_event_log::{log_event, record_log, Record};
//!
//! json_event_log::silence();
//! log_event!("startup", "listening on port {}", 8080);
//!
//! let record = Record::new("import");
//! record_log!(record, "{} rows in {} batches", 42, 3);
//! ```

/// Write a message event with a formatted description.
///
/// `log_event!(name, desc)` is equivalent to calling
/// [`log`](crate::log) directly.
#[macro_export]
macro_rules! log_event {
    ($name:expr, $($arg:tt)+) => {
        $crate::log($name, &format!($($arg)+))
    };
}

/// Log a [`Record`](crate::Record) with a formatted description.
#[macro_export]
macro_rules! record_log {
    ($record:expr, $($arg:tt)+) => {
        $record.log(&format!($($arg)+))
    };
}
