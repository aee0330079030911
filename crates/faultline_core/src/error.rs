//! The structured error value.

use crate::Severity;
use faultline_stack::{CapturePolicy, CapturedStack};
use serde_json::Value;
use std::collections::HashMap;
use std::error::Error;
use std::fmt;

/// Marker written by verbose rendering when no stack was captured.
pub const STACK_UNAVAILABLE: &str = "Stack is not available";

/// Any error an error can be wrapped around.
pub type Cause = Box<dyn Error + Send + Sync + 'static>;

/// Diagnostic key/value parameters.
pub type Params = HashMap<String, Value>;

/// An error message decorated with severity, code, parameters, a cause and
/// the call stack at the point it was built.
///
/// The message is fixed at construction. Everything else is set with the
/// fluent `with_*` methods (which consume and return the error) or the
/// in-place `set_*` methods.
///
/// # Rendering
///
/// - `{}` writes the message followed by every ancestor message, separated
///   by `": "`. The walk continues through structured causes and stops at the
///   first foreign error, whose own `Display` text is written as-is.
/// - `{:#}` writes the verbose form: the cause's verbose form (or its plain
///   text), then one block per captured frame, or
///   [`STACK_UNAVAILABLE`] if nothing was captured.
/// - [`Render::to_quoted_string`](crate::Render::to_quoted_string) writes the
///   plain form as an escaped string literal.
///
/// # Examples
///
/// ```
/// use faultline_core::{Severity, StructuredError};
///
/// let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
/// let err = StructuredError::wrap(io, "loading settings")
///     .with_level(Severity::Critical)
///     .with_code(404)
///     .add_param("path", "/etc/app.toml");
///
/// assert_eq!(err.to_string(), "loading settings: no such file");
/// assert_eq!(err.code(), 404);
/// ```
///
/// Chains must not loop back on themselves. Boxed ownership makes that hard
/// to build by accident; rendering does not check for it.
#[derive(Debug)]
pub struct StructuredError {
    severity: Severity,
    code: i32,
    message: String,
    cause: Option<Cause>,
    params: Option<Params>,
    stack: Option<CapturedStack>,
}

impl StructuredError {
    /// Creates an error, capturing the stack if the process-wide switch
    /// allows it.
    #[inline(never)]
    pub fn new(message: impl Into<String>) -> Self {
        let stack = CapturePolicy::global().capture(1);
        Self::from_parts(message.into(), None, stack)
    }

    /// Creates an error capturing through `policy` instead of the global one.
    #[inline(never)]
    pub fn new_in(policy: &CapturePolicy, message: impl Into<String>) -> Self {
        let stack = policy.capture(1);
        Self::from_parts(message.into(), None, stack)
    }

    /// Wraps `cause` in a new error.
    ///
    /// The stack is captured here, at the wrap site, not where `cause` came
    /// from; every layer of a chain carries its own snapshot.
    #[inline(never)]
    pub fn wrap(cause: impl Into<Cause>, message: impl Into<String>) -> Self {
        let stack = CapturePolicy::global().capture(1);
        Self::from_parts(message.into(), Some(cause.into()), stack)
    }

    /// Wraps `cause`, capturing through `policy`.
    #[inline(never)]
    pub fn wrap_in(
        policy: &CapturePolicy,
        cause: impl Into<Cause>,
        message: impl Into<String>,
    ) -> Self {
        let stack = policy.capture(1);
        Self::from_parts(message.into(), Some(cause.into()), stack)
    }

    fn from_parts(message: String, cause: Option<Cause>, stack: Option<CapturedStack>) -> Self {
        Self {
            severity: Severity::default(),
            code: 0,
            message,
            cause,
            params: None,
            stack,
        }
    }

    /// Sets the severity.
    pub fn with_level(mut self, severity: Severity) -> Self {
        self.set_level(severity);
        self
    }

    /// Replaces the cause.
    pub fn with_cause(mut self, cause: impl Into<Cause>) -> Self {
        self.set_cause(cause);
        self
    }

    /// Sets the numeric code.
    pub fn with_code(mut self, code: i32) -> Self {
        self.set_code(code);
        self
    }

    /// Inserts a parameter, replacing any earlier value under `key`.
    pub fn add_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert_param(key, value);
        self
    }

    /// Sets the severity in place.
    pub fn set_level(&mut self, severity: Severity) -> &mut Self {
        self.severity = severity;
        self
    }

    /// Replaces the cause in place.
    pub fn set_cause(&mut self, cause: impl Into<Cause>) -> &mut Self {
        self.cause = Some(cause.into());
        self
    }

    /// Sets the numeric code in place.
    pub fn set_code(&mut self, code: i32) -> &mut Self {
        self.code = code;
        self
    }

    /// Inserts a parameter in place. The map is allocated on first use.
    pub fn insert_param(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.params
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Severity, [`Severity::Error`] unless changed.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Numeric code, `0` unless set.
    pub fn code(&self) -> i32 {
        self.code
    }

    /// This error's own message, without its causes.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The wrapped error, if any.
    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Parameters, `None` until the first one is added.
    pub fn params(&self) -> Option<&Params> {
        self.params.as_ref()
    }

    /// The stack captured at construction, if any.
    pub fn stack(&self) -> Option<&CapturedStack> {
        self.stack.as_ref()
    }

    fn write_chain(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        let mut next = self.cause();
        while let Some(cause) = next {
            f.write_str(": ")?;
            match cause.downcast_ref::<StructuredError>() {
                Some(structured) => {
                    f.write_str(&structured.message)?;
                    next = structured.cause();
                }
                None => {
                    write!(f, "{}", cause)?;
                    break;
                }
            }
        }
        Ok(())
    }

    fn write_verbose(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(cause) = self.cause() {
            match cause.downcast_ref::<StructuredError>() {
                Some(structured) => structured.write_verbose(f)?,
                None => write!(f, "{}", cause)?,
            }
        }
        match &self.stack {
            Some(stack) => write!(f, "{:#}", stack),
            None => f.write_str(STACK_UNAVAILABLE),
        }
    }
}

impl fmt::Display for StructuredError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            self.write_verbose(f)
        } else {
            self.write_chain(f)
        }
    }
}

impl Error for StructuredError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause().map(|cause| cause as &(dyn Error + 'static))
    }
}
