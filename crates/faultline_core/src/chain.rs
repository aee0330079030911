//! Queries over arbitrary error values.
//!
//! Each function accepts any error and answers with a fixed fallback when the
//! error is not a [`StructuredError`], so callers never need to downcast
//! first.

use crate::{Params, Severity, StructuredError};
use std::error::Error;

/// What [`code`] returns for errors that are not structured.
pub const NOT_STRUCTURED: i32 = -1;

/// The cause of a structured error.
///
/// Returns `None` for any other error, even one with a `source()`: foreign
/// errors are never unwrapped, and the input itself is never handed back.
///
/// ```
/// use faultline_core::{cause, StructuredError};
///
/// let io = std::io::Error::other("disk full");
/// assert!(cause(&io).is_none());
///
/// let err = StructuredError::wrap(io, "saving");
/// assert_eq!(cause(&err).unwrap().to_string(), "disk full");
/// ```
pub fn cause<'a>(
    err: &'a (dyn Error + 'static),
) -> Option<&'a (dyn Error + Send + Sync + 'static)> {
    err.downcast_ref::<StructuredError>()
        .and_then(StructuredError::cause)
}

/// The parameters of a structured error; `None` if it has none or the error
/// is not structured.
pub fn params<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a Params> {
    err.downcast_ref::<StructuredError>()
        .and_then(StructuredError::params)
}

/// The severity of a structured error, [`Severity::Error`] for anything else.
pub fn level(err: &(dyn Error + 'static)) -> Severity {
    err.downcast_ref::<StructuredError>()
        .map_or(Severity::default(), StructuredError::severity)
}

/// The code of a structured error, [`NOT_STRUCTURED`] for anything else.
///
/// ```
/// use faultline_core::{code, StructuredError, NOT_STRUCTURED};
///
/// assert_eq!(code(&StructuredError::new("x")), 0);
/// assert_eq!(code(&std::fmt::Error), NOT_STRUCTURED);
/// ```
pub fn code(err: &(dyn Error + 'static)) -> i32 {
    err.downcast_ref::<StructuredError>()
        .map_or(NOT_STRUCTURED, StructuredError::code)
}
