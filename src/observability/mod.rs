//! Observability for schema construction and validation
//!
//! - Structured logging (JSON lines, stderr by default)
//! - Process-wide counters
//! - Begin/complete scopes around a validation pass
//!
//! Observability is read-only: nothing here changes a validation verdict.
//!
//! ```ignore
//! use validates_structure::observability::{Logger, Severity};
//!
//! // Show per-pass trace events
//! Logger::set_min_severity(Severity::Trace);
//! ```

mod events;
mod logger;
mod metrics;
mod scope;

pub use events::Event;
pub use logger::{LogTarget, Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};
pub use scope::{ObservationScope, Timer};

/// Log a typed event at its own severity.
pub fn emit(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}
