//! Named rendering modes.

use crate::StructuredError;
use faultline_stack::{CapturedStack, Frame};
use std::fmt;

/// The output forms every renderable value supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::Display)]
pub enum RenderMode {
    /// `Display` text
    #[default]
    #[display("plain")]
    Plain,
    /// Plain text as an escaped, double-quoted string literal
    #[display("quoted")]
    Quoted,
    /// Alternate `Display` text (`{:#}`)
    #[display("verbose")]
    Verbose,
}

/// Rendering by mode name instead of format flags.
///
/// Implemented by [`StructuredError`], [`CapturedStack`] and [`Frame`]; any
/// other `Display` type whose alternate form means "verbose" can opt in with
/// an empty impl.
///
/// # Examples
///
/// ```
/// use faultline_core::{Render, RenderMode, StructuredError};
///
/// let err = StructuredError::new(r#"he said "hi""#);
/// assert_eq!(err.render(RenderMode::Plain), r#"he said "hi""#);
/// assert_eq!(err.to_quoted_string(), r#""he said \"hi\"""#);
/// ```
pub trait Render: fmt::Display {
    /// Renders in the given mode.
    fn render(&self, mode: RenderMode) -> String {
        match mode {
            RenderMode::Plain => self.to_string(),
            RenderMode::Quoted => format!("{:?}", self.to_string()),
            RenderMode::Verbose => format!("{:#}", self),
        }
    }

    /// Shorthand for [`RenderMode::Quoted`].
    fn to_quoted_string(&self) -> String {
        self.render(RenderMode::Quoted)
    }

    /// Shorthand for [`RenderMode::Verbose`].
    fn to_verbose_string(&self) -> String {
        self.render(RenderMode::Verbose)
    }
}

impl Render for StructuredError {}

impl Render for CapturedStack {}

impl Render for Frame {}
