//! Failure types for the faultline workspace.
//!
//! Structured error values never fail to build or render. The workspace still
//! has a few fallible edges (loading capture configuration, installing a
//! tracing subscriber) and those report through the types in this crate.
//!
//! # Error Hierarchy
//!
//! - `*ErrorKind` enums define specific conditions
//! - `*Error` structs wrap a kind or message with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use faultline_error::{ConfigError, FaultlineResult};
//!
//! fn load() -> FaultlineResult<u32> {
//!     Err(ConfigError::new("faultline.toml is not valid TOML"))?
//! }
//!
//! match load() {
//!     Ok(depth) => println!("depth {}", depth),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod tracing;

pub use config::ConfigError;
pub use error::{FaultlineError, FaultlineErrorKind, FaultlineResult};
pub use tracing::{TracingError, TracingErrorKind};
