//! Failures while loading or validating capture settings.

/// A capture configuration could not be built, parsed or validated.
///
/// Records where in this workspace the failure was raised, which points at
/// the failing check rather than at the caller of `CaptureConfig::load`.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Capture configuration error: {} ({}:{})", message, file, line)]
pub struct ConfigError {
    /// What was wrong with the settings
    pub message: String,
    /// Line of the check that rejected them
    pub line: u32,
    /// Source file of that check
    pub file: &'static str,
}

impl ConfigError {
    /// Records `message` at the caller's location.
    ///
    /// ```
    /// use faultline_error::ConfigError;
    ///
    /// let err = ConfigError::new("Stack depth must be in 1..=32, got 0");
    /// assert!(err.to_string().starts_with("Capture configuration error: Stack depth"));
    /// assert!(err.file.ends_with(".rs"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let caller = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: caller.line(),
            file: caller.file(),
        }
    }
}
