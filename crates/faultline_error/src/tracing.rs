//! Tracing subscriber error types.

/// Kinds of subscriber installation failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum TracingErrorKind {
    /// A global subscriber was already installed
    #[display("Global subscriber already set: {}", _0)]
    AlreadyInstalled(String),
    /// The filter directive could not be parsed
    #[display("Invalid filter directive: {}", _0)]
    InvalidFilter(String),
}

/// Tracing error with location tracking.
///
/// # Examples
///
/// ```
/// use faultline_error::{TracingError, TracingErrorKind};
///
/// let err = TracingError::new(TracingErrorKind::InvalidFilter("=debug".to_string()));
/// assert!(format!("{}", err).contains("Invalid filter"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Tracing Error: {} at line {} in {}", kind, line, file)]
pub struct TracingError {
    kind: TracingErrorKind,
    line: u32,
    file: &'static str,
}

impl TracingError {
    /// Create a new tracing error with caller location tracking.
    #[track_caller]
    pub fn new(kind: TracingErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &TracingErrorKind {
        &self.kind
    }
}
