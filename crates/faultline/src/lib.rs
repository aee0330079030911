//! faultline - structured error values.
//!
//! A [`StructuredError`] wraps a message with a [`Severity`], a numeric code,
//! diagnostic parameters, the error it was caused by, and a snapshot of the
//! call stack taken where it was built. Stacks are resolved to file, line and
//! function only when an error is rendered verbosely.
//!
//! # Quick Start
//!
//! ```
//! use faultline::{code, params, Render, Severity, StructuredError};
//!
//! let io = std::io::Error::other("connection refused");
//! let err = StructuredError::wrap(io, "fetching invoice")
//!     .with_level(Severity::Warning)
//!     .with_code(503)
//!     .add_param("invoice_id", 981);
//!
//! assert_eq!(err.to_string(), "fetching invoice: connection refused");
//! assert_eq!(code(&err), 503);
//! assert_eq!(params(&err).unwrap()["invoice_id"], 981);
//!
//! // Cause first, then the frames captured at the wrap site.
//! println!("{}", err.to_verbose_string());
//! ```
//!
//! # Capture Configuration
//!
//! Capture is on by default. Switch it globally with
//! [`set_stack_capture_enabled`], from a file or the environment with
//! [`CaptureConfig`], or per call with a [`CapturePolicy`] and the `*_in`
//! constructors.
//!
//! # Architecture
//!
//! - `faultline_error` - failure types for configuration and tracing setup
//! - `faultline_stack` - stack capture, frames, tracer seam
//! - `faultline_core` - the error value, rendering and chain queries
//!
//! This crate re-exports all of them and adds configuration loading and
//! subscriber setup.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod capture_config;
mod telemetry;

pub use capture_config::CaptureConfig;
pub use telemetry::{init_tracing, init_tracing_with};

pub use faultline_core::{
    cause, code, errorf, level, params, Cause, Params, Render, RenderMode, Severity,
    StructuredError, NOT_STRUCTURED, STACK_UNAVAILABLE,
};
pub use faultline_error::{
    ConfigError, FaultlineError, FaultlineErrorKind, FaultlineResult, TracingError,
    TracingErrorKind,
};
pub use faultline_stack::{
    set_stack_capture_enabled, short_function_name, stack_capture_enabled, BacktraceTracer,
    CapturePolicy, CapturedStack, Frame, StackTracer, Symbol, MAX_DEPTH,
};
