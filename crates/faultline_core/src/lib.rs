//! Structured error values.
//!
//! A [`StructuredError`] carries a message plus the context a handler needs
//! to act on it: a [`Severity`], a numeric code, key/value parameters, the
//! error it wraps, and the call stack captured where it was built.
//!
//! # Examples
//!
//! ```
//! use faultline_core::{code, errorf, level, Render, Severity, StructuredError};
//!
//! fn read_config(path: &str) -> Result<String, StructuredError> {
//!     std::fs::read_to_string(path).map_err(|e| {
//!         StructuredError::wrap(e, format!("reading {}", path))
//!             .with_level(Severity::Critical)
//!             .add_param("path", path)
//!     })
//! }
//!
//! let err = read_config("/definitely/not/here.toml").unwrap_err();
//! assert_eq!(level(&err), Severity::Critical);
//! assert_eq!(code(&err), 0);
//! assert!(err.to_string().starts_with("reading /definitely/not/here.toml: "));
//!
//! let retry = errorf!("retry {} of {}", 2, 5).with_code(503);
//! assert_eq!(retry.to_string(), "retry 2 of 5");
//! println!("{}", retry.to_verbose_string());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod chain;
mod error;
mod render;
mod report;
mod severity;

pub use chain::{cause, code, level, params, NOT_STRUCTURED};
pub use error::{Cause, Params, StructuredError, STACK_UNAVAILABLE};
pub use render::{Render, RenderMode};
pub use severity::Severity;

/// Builds a [`StructuredError`] with a `format!` message.
///
/// The stack is captured at the macro call site.
///
/// ```
/// use faultline_core::errorf;
///
/// let err = errorf!("user {} not found", 42);
/// assert_eq!(err.to_string(), "user 42 not found");
/// ```
#[macro_export]
macro_rules! errorf {
    ($($arg:tt)*) => {
        $crate::StructuredError::new(::std::format!($($arg)*))
    };
}
