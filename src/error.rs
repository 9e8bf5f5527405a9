//! Error types for widget operations.
//!
//! The geometry core never fails (malformed times degrade to a defined
//! fallback angle), so errors only arise at the widget boundary: form
//! input that fails the emptiness check, list operations on unknown ids,
//! theme parsing, and time-source failures.

use thiserror::Error;

/// Result type alias for widget operations.
pub type Result<T, E = WidgetError> = std::result::Result<T, E>;

/// Main error type for the clock widget.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum WidgetError {
    /// A required form field was submitted empty. The only input
    /// validation the widget performs.
    #[error("field '{field}' must not be empty")]
    EmptyField { field: &'static str },

    #[error("no interval with id {id}")]
    IntervalNotFound { id: u64 },

    #[error("time source failed: {reason}")]
    Source {
        reason: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("invalid theme: {details}")]
    Theme {
        details: String,
        #[source]
        source: Option<serde_yaml_ng::Error>,
    },
}

impl WidgetError {
    /// Whether the error was caused by user input rather than the runtime.
    ///
    /// User errors are surfaced as localized notices and are safe to
    /// ignore programmatically; runtime errors indicate the widget itself
    /// is degraded.
    pub fn is_user_error(&self) -> bool {
        matches!(self, WidgetError::EmptyField { .. } | WidgetError::IntervalNotFound { .. })
    }

    /// Helper constructor for time-source failures.
    pub fn source_failed(reason: impl Into<String>) -> Self {
        WidgetError::Source { reason: reason.into(), source: None }
    }

    /// Helper constructor for time-source failures with an underlying cause.
    pub fn source_failed_with(
        reason: impl Into<String>,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        WidgetError::Source { reason: reason.into(), source: Some(source) }
    }

    pub(crate) fn theme_parse(source: serde_yaml_ng::Error) -> Self {
        WidgetError::Theme { details: source.to_string(), source: Some(source) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn error_traits_validation() {
        fn assert_send_sync_static<T: Send + Sync + 'static>() {}
        assert_send_sync_static::<WidgetError>();

        let error = WidgetError::source_failed("test");
        let _: &dyn std::error::Error = &error;
    }

    #[test]
    fn user_error_classification() {
        assert!(WidgetError::EmptyField { field: "start" }.is_user_error());
        assert!(WidgetError::IntervalNotFound { id: 7 }.is_user_error());
        assert!(!WidgetError::source_failed("clock gone").is_user_error());
    }

    #[test]
    fn messages_name_the_offending_input() {
        let err = WidgetError::EmptyField { field: "end" };
        assert!(err.to_string().contains("end"));

        let err = WidgetError::IntervalNotFound { id: 1234 };
        assert!(err.to_string().contains("1234"));
    }

    proptest! {
        #[test]
        fn prop_source_errors_preserve_reason(reason in "[a-zA-Z0-9 ]*") {
            let err = WidgetError::source_failed(reason.clone());
            prop_assert!(err.to_string().contains(&reason));
        }

        #[test]
        fn prop_source_chaining_preserves_cause(message in "[a-z ]{1,40}") {
            let cause = std::io::Error::other(message.clone());
            let err = WidgetError::source_failed_with("tick read", Box::new(cause));
            let source = std::error::Error::source(&err);
            prop_assert!(source.is_some());
            prop_assert_eq!(source.map(|s| s.to_string()), Some(message));
        }
    }
}
