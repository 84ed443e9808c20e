//! Observable events emitted by schema construction and validation.
//!
//! Events are explicit and typed.

use std::fmt;

use super::logger::Severity;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A schema finished building
    SchemaBuilt,
    /// A schema failed to build
    SchemaRejected,
    /// A validation pass begins
    ValidationBegin,
    /// A validation pass finished
    ValidationComplete,
    /// JSON text input could not be parsed
    JsonParseFailed,
    /// Input nesting exceeded the configured maximum depth
    DepthLimitExceeded,
    /// Validator configuration loaded
    ConfigLoaded,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::SchemaBuilt => "SCHEMA_BUILT",
            Event::SchemaRejected => "SCHEMA_REJECTED",
            Event::ValidationBegin => "VALIDATION_BEGIN",
            Event::ValidationComplete => "VALIDATION_COMPLETE",
            Event::JsonParseFailed => "JSON_PARSE_FAILED",
            Event::DepthLimitExceeded => "DEPTH_LIMIT_EXCEEDED",
            Event::ConfigLoaded => "CONFIG_LOADED",
        }
    }

    /// Severity this event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::SchemaBuilt | Event::ValidationBegin | Event::ValidationComplete => {
                Severity::Trace
            }
            Event::ConfigLoaded => Severity::Info,
            Event::SchemaRejected | Event::JsonParseFailed | Event::DepthLimitExceeded => {
                Severity::Warn
            }
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_events_have_string_representation() {
        let events = [
            Event::SchemaBuilt,
            Event::SchemaRejected,
            Event::ValidationBegin,
            Event::ValidationComplete,
            Event::JsonParseFailed,
            Event::DepthLimitExceeded,
            Event::ConfigLoaded,
        ];

        for event in events {
            let s = event.as_str();
            assert!(!s.is_empty());
            assert!(s.chars().all(|c| c.is_uppercase() || c == '_'));
        }
    }

    #[test]
    fn test_degraded_input_events_warn() {
        assert_eq!(Event::JsonParseFailed.severity(), Severity::Warn);
        assert_eq!(Event::DepthLimitExceeded.severity(), Severity::Warn);
        assert_eq!(Event::ValidationComplete.severity(), Severity::Trace);
    }

    #[test]
    fn test_event_display() {
        assert_eq!(format!("{}", Event::ValidationBegin), "VALIDATION_BEGIN");
    }
}
