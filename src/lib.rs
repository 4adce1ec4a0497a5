//! Process-wide leveled logging with two severity-banded sinks.
//!
//! `logcenter` replaces ad-hoc console printing: callers emit
//! severity-tagged, timestamped lines, fatal/error/warning messages go to
//! one sink and info/debug/trace messages to another, and a global
//! threshold discards everything less severe without touching the call
//! sites. Both sinks can be redirected at runtime to caller-owned streams
//! or to files the center opens and closes itself.
//!
//! The host application constructs a single [`LogCenter`], shares it
//! (typically behind [`std::sync::Arc`]), and logs through the leveled
//! macros. Writes are serialized across threads, and file-backed sinks
//! take an advisory lock per line so cooperating processes can share one
//! log file.

/// The process-wide configuration and dispatch engine.
pub mod center;
/// Feature-gated leveled logging macros.
pub mod macros;
/// Ordered message severities.
pub mod severity;
/// Output destinations for formatted log lines.
pub mod sink;

pub use center::{AbortPolicy, LogCenter};
pub use severity::Severity;
pub use sink::SharedStream;
