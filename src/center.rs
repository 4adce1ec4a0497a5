use std::{
    io::Write,
    path::Path,
    process,
    sync::{
        Mutex, MutexGuard, PoisonError,
        atomic::{AtomicU8, Ordering},
    },
};

use chrono::Local;

use crate::{
    severity::Severity,
    sink::{SharedStream, Sink},
};

/// Timestamp layout of every log line, second resolution.
const STAMP_FORMAT: &str = "%a %d %b %Y %H:%M:%S";

/// What happens after a severe message (fatal, error, warning) is written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AbortPolicy {
    /// Severe messages are logged and the call returns normally.
    #[default]
    Normal,
    /// The process exits with a failure status once the message is
    /// written and flushed. Intended for strict debugging runs where any
    /// severe message should stop the program at the point of failure.
    AbortOnSevereLog,
}

/// Mutable configuration guarded by the center's mutex.
struct Config {
    policy: AbortPolicy,
    high: Sink,
    low: Sink,
}

/// Process-wide log configuration and dispatch engine.
///
/// A `LogCenter` holds the severity threshold and two output sinks: one
/// for high-severity messages (fatal, error, warning) and one for
/// low-severity messages (info, debug, trace). The host application
/// constructs exactly one and passes it around, typically behind an
/// [`Arc`](std::sync::Arc); all methods take `&self` and are safe to call
/// from any thread.
///
/// Dispatch serializes on an internal mutex, and file-backed sinks
/// additionally take an advisory `flock` around each line, so cooperating
/// processes can share one log file without interleaving partial lines.
///
/// Logging calls have no error channel: a write that fails is dropped
/// silently, and a sink-file path that cannot be opened is reported
/// through the logger itself while the previous sink stays in place.
pub struct LogCenter {
    /// Read outside the mutex on the dispatch fast path; relaxed loads
    /// are sufficient for a single scalar that only gates emission.
    threshold: AtomicU8,
    config: Mutex<Config>,
}

impl LogCenter {
    /// Creates a center with the default configuration: threshold
    /// [`Severity::INFO`], high-severity messages to standard error,
    /// low-severity messages to standard output, [`AbortPolicy::Normal`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            threshold: AtomicU8::new(Severity::INFO.raw()),
            config: Mutex::new(Config {
                policy: AbortPolicy::Normal,
                high: Sink::Stderr,
                low: Sink::Stdout,
            }),
        }
    }

    /// Restores the default configuration. Owned sink files are closed.
    ///
    /// Meant for single-threaded test environments that reuse one center
    /// across cases.
    pub fn reset(&self) {
        self.threshold
            .store(Severity::INFO.raw(), Ordering::Relaxed);
        let mut config = self.lock_config();
        config.policy = AbortPolicy::Normal;
        config.high = Sink::Stderr;
        config.low = Sink::Stdout;
    }

    /// Sets the least severe level that is still emitted. Messages with a
    /// numerically greater (less severe) level are discarded.
    pub fn set_threshold(&self, level: Severity) {
        self.threshold.store(level.raw(), Ordering::Relaxed);
    }

    /// Current threshold level.
    #[must_use]
    pub fn threshold(&self) -> Severity {
        Severity::from_raw(self.threshold.load(Ordering::Relaxed))
    }

    pub fn set_policy(&self, policy: AbortPolicy) {
        self.lock_config().policy = policy;
    }

    #[must_use]
    pub fn policy(&self) -> AbortPolicy {
        self.lock_config().policy
    }

    /// Replaces the high-severity sink with a caller-owned stream.
    ///
    /// The previous sink is closed only if the center opened it; a stream
    /// supplied earlier remains open and stays the caller's to close.
    pub fn set_high_sink(&self, stream: SharedStream) {
        self.lock_config().high = Sink::Stream(stream);
    }

    /// Replaces the low-severity sink with a caller-owned stream.
    pub fn set_low_sink(&self, stream: SharedStream) {
        self.lock_config().low = Sink::Stream(stream);
    }

    /// Opens `path` (truncating) as the new high-severity sink.
    ///
    /// On failure the previous sink is left untouched and the error is
    /// reported through the logger itself at ERROR severity.
    pub fn set_high_sink_file<P: AsRef<Path>>(&self, path: P) {
        self.set_sink_file(path.as_ref(), true);
    }

    /// Opens `path` (truncating) as the new low-severity sink.
    pub fn set_low_sink_file<P: AsRef<Path>>(&self, path: P) {
        self.set_sink_file(path.as_ref(), false);
    }

    fn set_sink_file(&self, path: &Path, high: bool) {
        let failure = {
            let mut config = self.lock_config();
            match Sink::open(path) {
                Ok(sink) => {
                    // The old sink is dropped, and an owned file closed,
                    // only once the replacement opened successfully.
                    if high {
                        config.high = sink;
                    } else {
                        config.low = sink;
                    }
                    None
                }
                Err(err) => Some(err),
            }
        };
        // Reported after the lock is released; dispatch takes it again.
        if let Some(err) = failure {
            self.severe(
                Severity::ERROR,
                &format!("could not open log file {}: {err}", path.display()),
            );
        }
    }

    /// Formats and writes one log line, subject to the threshold.
    ///
    /// The line layout is `"[<stamp>] <SEVERITY>: <message>"` with a
    /// second-resolution local timestamp. Fatal, error, and warning
    /// levels go to the high-severity sink; everything else, unrecognized
    /// levels included, goes to the low-severity sink. Both sinks are
    /// flushed on every call, written-to or not, so tailing processes
    /// observe output promptly.
    pub fn log(&self, level: Severity, message: &str) {
        if level.raw() <= self.threshold.load(Ordering::Relaxed) {
            // Rendered before the lock to keep formatting out of the
            // critical section.
            let stamp = Local::now().format(STAMP_FORMAT);
            let mut config = self.lock_config();
            let sink = if level.is_high_band() {
                &mut config.high
            } else {
                &mut config.low
            };
            sink.lock_file();
            let _ = writeln!(sink, "[{stamp}] {}: {message}", level.label());
            sink.unlock_file();
        }
        let mut config = self.lock_config();
        let _ = config.high.flush();
        let _ = config.low.flush();
    }

    /// Like [`log`](Self::log), then applies the abort policy: under
    /// [`AbortPolicy::AbortOnSevereLog`] the process exits with a failure
    /// status once the message is written.
    pub fn severe(&self, level: Severity, message: &str) {
        self.log(level, message);
        if self.policy() == AbortPolicy::AbortOnSevereLog {
            process::exit(1);
        }
    }

    fn lock_config(&self) -> MutexGuard<'_, Config> {
        // A panic elsewhere must not take logging down with it.
        self.config.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for LogCenter {
    fn default() -> Self {
        Self::new()
    }
}
