//! Immutable snapshots of the call stack.

use crate::{Frame, StackTracer};
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Return addresses recorded when an error was built, innermost first.
///
/// The snapshot holds only raw addresses. [`CapturedStack::frames`] wraps them
/// in [`Frame`] views the first time it is asked and each frame resolves its
/// own symbol on first use, so an error that is never printed never pays for
/// symbol lookup.
///
/// `Display` lists the frames' base file names, `[main.rs lib.rs]`. The
/// alternate form (`{:#}`) writes every frame on its own block, each preceded
/// by a newline.
#[derive(Debug, Clone)]
pub struct CapturedStack {
    addresses: Vec<usize>,
    tracer: Arc<dyn StackTracer>,
    frames: OnceLock<Vec<Frame>>,
}

impl CapturedStack {
    /// Wraps addresses recorded by `tracer`.
    pub fn new(addresses: Vec<usize>, tracer: Arc<dyn StackTracer>) -> Self {
        Self {
            addresses,
            tracer,
            frames: OnceLock::new(),
        }
    }

    /// The recorded addresses, innermost first.
    pub fn addresses(&self) -> &[usize] {
        &self.addresses
    }

    /// Number of recorded frames.
    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    /// Whether no frame was recorded.
    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    /// Frame views over the recorded addresses, innermost first.
    pub fn frames(&self) -> &[Frame] {
        self.frames.get_or_init(|| {
            self.addresses
                .iter()
                .map(|&address| Frame::new(address, Arc::clone(&self.tracer)))
                .collect()
        })
    }

    /// The verbose rendering: function, path and line of every frame.
    pub fn to_verbose_string(&self) -> String {
        format!("{:#}", self)
    }
}

impl fmt::Display for CapturedStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            for frame in self.frames() {
                write!(f, "\n{:#}", frame)?;
            }
            return Ok(());
        }

        f.write_str("[")?;
        for (i, frame) in self.frames().iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", frame)?;
        }
        f.write_str("]")
    }
}
