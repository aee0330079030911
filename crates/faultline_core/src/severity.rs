//! Severity levels attached to structured errors.

use serde::{Deserialize, Serialize};

/// How important an error is, so a handler can decide what to do with it.
///
/// Severity is metadata only: it never changes how an error renders.
/// Variants are declared in their historical order, which is why `Error`
/// (the default) comes first; the order is not a ranking.
///
/// # Examples
///
/// ```
/// use faultline_core::Severity;
///
/// assert_eq!(Severity::default(), Severity::Error);
/// assert_eq!(Severity::Critical.to_string(), "critical");
/// assert_eq!("warning".parse::<Severity>().unwrap(), Severity::Warning);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    /// An ordinary failure
    #[default]
    #[display("error")]
    Error,
    /// Safe to drop without action
    #[display("ignorable")]
    Ignorable,
    /// Informational
    #[display("info")]
    Info,
    /// Worth noticing, not a failure
    #[display("notice")]
    Notice,
    /// Something is off but work continues
    #[display("warning")]
    Warning,
    /// A component is unusable
    #[display("critical")]
    Critical,
    /// The process cannot continue
    #[display("fatal")]
    Fatal,
    /// Unrecoverable, equivalent to a panic
    #[display("panic")]
    Panic,
}

impl Severity {
    /// Stable lowercase name.
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// The `tracing` level events for this severity are emitted at.
    pub fn tracing_level(self) -> tracing::Level {
        match self {
            Severity::Ignorable => tracing::Level::DEBUG,
            Severity::Info | Severity::Notice => tracing::Level::INFO,
            Severity::Warning => tracing::Level::WARN,
            Severity::Error | Severity::Critical | Severity::Fatal | Severity::Panic => {
                tracing::Level::ERROR
            }
        }
    }
}
