use std::fmt;

/// Ordered severity of a log message. A lower raw value is more severe.
///
/// The named constants cover the usual six levels, but any raw value is a
/// legal severity: values between or beyond the constants compare by their
/// numeric order against the threshold, and display as `UNKNOWN`. This
/// leaves room for finer-grained levels without changing the type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Severity(u8);

impl Severity {
    /// Fatal errors that will cause the program to crash.
    pub const FATAL: Severity = Severity(0);
    /// Errors that require recovery and may compromise the results.
    pub const ERROR: Severity = Severity(1);
    /// Warnings that do not require recovery but should be investigated.
    pub const WARNING: Severity = Severity(2);
    /// Standard runtime output.
    pub const INFO: Severity = Severity(3);
    /// Debugging information with minimal runtime cost.
    pub const DEBUG: Severity = Severity(4);
    /// Detailed tracing information; may incur substantial overhead.
    pub const TRACE: Severity = Severity(5);

    #[must_use]
    pub const fn from_raw(raw: u8) -> Self {
        Severity(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Display name of the level; `UNKNOWN` for values with no constant.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self.0 {
            0 => "FATAL",
            1 => "ERROR",
            2 => "WARNING",
            3 => "INFO",
            4 => "DEBUG",
            5 => "TRACE",
            _ => "UNKNOWN",
        }
    }

    /// Whether this level routes to the high-severity sink.
    ///
    /// Only the named FATAL, ERROR, and WARNING values do; every other
    /// value, unrecognized ones included, belongs to the low band.
    #[must_use]
    pub const fn is_high_band(self) -> bool {
        matches!(self.0, 0..=2)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
