//! Time-related utilities with clock abstraction for testability.

use chrono::{DateTime, Local};

/// Clock trait for dependency injection and testing
pub trait Clock: Send + Sync {
    /// Get the current local wall-clock time
    fn now(&self) -> DateTime<Local>;
}

/// System clock implementation (uses actual system time)
#[derive(Debug, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Fixed clock implementation for testing (returns a fixed time)
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    fixed_time: DateTime<Local>,
}

impl FixedClock {
    /// Create a new fixed clock with the given time
    pub fn new(fixed_time: DateTime<Local>) -> Self {
        Self { fixed_time }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.fixed_time
    }
}

/// Format a time as `h:mm:ss AM/PM` (e.g. `3:04:05 PM`).
///
/// The hour is not zero padded, minutes and seconds are.
pub fn format_time_of_day(time: &DateTime<Local>) -> String {
    time.format("%-I:%M:%S %p").to_string()
}

/// Current local time formatted with [`format_time_of_day`]
pub fn current_time_of_day(clock: &dyn Clock) -> String {
    format_time_of_day(&clock.now())
}
