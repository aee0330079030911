//! Call stack capture for faultline errors.
//!
//! Capturing is split from resolving. At construction time an error records
//! only raw return addresses (at most [`MAX_DEPTH`]); file, line and function
//! names are looked up when the stack is rendered, once per frame.
//!
//! The platform unwinder and symbol table sit behind the [`StackTracer`]
//! trait. [`BacktraceTracer`] is the real implementation; tests provide their
//! own to get deterministic frames.
//!
//! # Examples
//!
//! ```
//! use faultline_stack::CapturePolicy;
//!
//! let stack = CapturePolicy::fixed(true).capture(0);
//! if let Some(stack) = stack {
//!     assert!(stack.len() <= faultline_stack::MAX_DEPTH);
//!     println!("{:#}", stack);
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod frame;
mod policy;
mod stack;
mod tracer;

pub use frame::{short_function_name, Frame, UNKNOWN};
pub use policy::{set_stack_capture_enabled, stack_capture_enabled, CapturePolicy, MAX_DEPTH};
pub use stack::CapturedStack;
pub use tracer::{BacktraceTracer, StackTracer, Symbol};
