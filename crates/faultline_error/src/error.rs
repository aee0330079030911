//! Top-level error wrapper types.

use crate::{ConfigError, TracingError};

/// Every failure the faultline workspace itself can report.
///
/// Error values built with faultline never fail; only the ambient
/// machinery around them (configuration, subscriber setup) does.
///
/// # Examples
///
/// ```
/// use faultline_error::{ConfigError, FaultlineError};
///
/// let err: FaultlineError = ConfigError::new("bad depth").into();
/// assert!(format!("{}", err).contains("Capture configuration error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum FaultlineErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Tracing subscriber error
    #[from(TracingError)]
    Tracing(TracingError),
}

/// Faultline error with kind discrimination.
///
/// # Examples
///
/// ```
/// use faultline_error::{ConfigError, FaultlineResult};
///
/// fn might_fail() -> FaultlineResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Faultline Error: {}", _0)]
pub struct FaultlineError(Box<FaultlineErrorKind>);

impl FaultlineError {
    /// Create a new error from a kind.
    pub fn new(kind: FaultlineErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &FaultlineErrorKind {
        &self.0
    }
}

impl<T> From<T> for FaultlineError
where
    T: Into<FaultlineErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for faultline operations.
pub type FaultlineResult<T> = std::result::Result<T, FaultlineError>;
