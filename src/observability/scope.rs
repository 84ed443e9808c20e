//! ObservationScope for paired begin/complete logging around a validation pass
//!
//! - Logs the begin event on creation
//! - Logs the complete event when `complete_with_fields()` is called
//! - Logs the complete event at WARN with `outcome=incomplete` if dropped early
//!   (a custom check panicked mid-pass)

use std::cell::Cell;
use std::time::Instant;

use super::events::Event;
use super::logger::{Logger, Severity};

/// A scope that logs a begin event now and a complete event later.
pub struct ObservationScope<'a> {
    complete: Event,
    completed: Cell<bool>,
    enabled: bool,
    fields: Vec<(&'a str, String)>,
}

impl<'a> ObservationScope<'a> {
    /// Create a scope and log `begin` with the given fields.
    ///
    /// A disabled scope logs nothing at all.
    pub fn with_fields(
        begin: Event,
        complete: Event,
        fields: &[(&'a str, &str)],
        enabled: bool,
    ) -> Self {
        if enabled {
            Logger::log(begin.severity(), begin.as_str(), fields);
        }

        Self {
            complete,
            completed: Cell::new(false),
            enabled,
            fields: fields.iter().map(|(k, v)| (*k, v.to_string())).collect(),
        }
    }

    /// Mark the scope as completed, appending extra fields to the event.
    pub fn complete_with_fields(self, extra_fields: &[(&str, &str)]) {
        self.completed.set(true);
        if !self.enabled {
            return;
        }

        let mut all_fields: Vec<(&str, &str)> =
            self.fields.iter().map(|(k, v)| (*k, v.as_str())).collect();
        all_fields.extend(extra_fields.iter().copied());

        Logger::log(self.complete.severity(), self.complete.as_str(), &all_fields);
    }

    /// Check if the scope has been completed
    pub fn is_completed(&self) -> bool {
        self.completed.get()
    }
}

impl Drop for ObservationScope<'_> {
    fn drop(&mut self) {
        if self.enabled && !self.completed.get() {
            let mut fields: Vec<(&str, &str)> =
                self.fields.iter().map(|(k, v)| (*k, v.as_str())).collect();
            fields.push(("outcome", "incomplete"));
            Logger::log(Severity::Warn, self.complete.as_str(), &fields);
        }
    }
}

/// Elapsed-time helper for log fields
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Create a new timer
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Elapsed microseconds as a string
    pub fn elapsed_us(&self) -> String {
        self.start.elapsed().as_micros().to_string()
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}
