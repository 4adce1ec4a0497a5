//! Leveled logging macros for a [`LogCenter`](crate::center::LogCenter).
//!
//! # Feature Flags
//! Individual log levels are controlled by cargo features:
//! `log-trace`, `log-debug`, `log-info`, `log-warn`, `log-error`.
//!
//! If a feature is disabled, the corresponding macros expand to `()`,
//! removing all formatting and dispatch overhead at compile time. This is
//! independent of the runtime threshold, which filters the levels that
//! remain compiled in. `log_fatal!` is never disabled.

// ============================================================================
// 1. GENERIC INTERNAL MACROS (The "Workers")
// ============================================================================
// These remain available so the enabled macros below can use them.

#[macro_export]
macro_rules! center_log {
    ($center:expr, $lvl:expr, $($arg:tt)*) => {{
        $center.log($lvl, &format!($($arg)*));
    }};
}

#[macro_export]
macro_rules! center_severe {
    ($center:expr, $lvl:expr, $($arg:tt)*) => {{
        $center.severe($lvl, &format!($($arg)*));
    }};
}

// ============================================================================
// 2. LEVEL-SPECIFIC MACROS (Feature Gated)
// ============================================================================

// ---------------------- FATAL ----------------------
// Never compiled out: a crash-worthy message is always worth the cost.
#[macro_export]
macro_rules! log_fatal   { ($center:expr, $($arg:tt)*) => { $crate::center_severe!($center, $crate::severity::Severity::FATAL, $($arg)*) } }

// ---------------------- ERROR ----------------------
// Generally always enabled, but the consistent structure allows a user to
// disable it if really needed.
#[cfg(feature = "log-error")]
#[macro_export]
macro_rules! log_error   { ($center:expr, $($arg:tt)*) => { $crate::center_severe!($center, $crate::severity::Severity::ERROR, $($arg)*) } }

#[cfg(not(feature = "log-error"))]
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- WARNING ----------------------
#[cfg(feature = "log-warn")]
#[macro_export]
macro_rules! log_warning { ($center:expr, $($arg:tt)*) => { $crate::center_severe!($center, $crate::severity::Severity::WARNING, $($arg)*) } }

#[cfg(not(feature = "log-warn"))]
#[macro_export]
macro_rules! log_warning {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- INFO ----------------------
#[cfg(feature = "log-info")]
#[macro_export]
macro_rules! log_info    { ($center:expr, $($arg:tt)*) => { $crate::center_log!($center, $crate::severity::Severity::INFO, $($arg)*) } }

#[cfg(not(feature = "log-info"))]
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- DEBUG ----------------------
#[cfg(feature = "log-debug")]
#[macro_export]
macro_rules! log_debug   { ($center:expr, $($arg:tt)*) => { $crate::center_log!($center, $crate::severity::Severity::DEBUG, $($arg)*) } }

#[cfg(not(feature = "log-debug"))]
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- TRACE ----------------------
#[cfg(feature = "log-trace")]
#[macro_export]
macro_rules! log_trace   { ($center:expr, $($arg:tt)*) => { $crate::center_log!($center, $crate::severity::Severity::TRACE, $($arg)*) } }

#[cfg(not(feature = "log-trace"))]
#[macro_export]
macro_rules! log_trace {
    ($($arg:tt)*) => {
        ()
    };
}
