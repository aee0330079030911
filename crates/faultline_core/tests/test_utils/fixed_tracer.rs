//! Deterministic tracer for error rendering tests.

use faultline_stack::{StackTracer, Symbol};
use std::path::PathBuf;

/// Tracer whose "stack" is a fixed list of symbols, in the order added.
///
/// Addresses are the list positions, so a frame added without a symbol
/// resolves to nothing and renders with placeholders.
#[derive(Debug, Default)]
pub struct FixedTracer {
    symbols: Vec<Option<Symbol>>,
}

impl FixedTracer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a resolvable frame.
    pub fn frame(mut self, function: &str, file: &str, line: u32) -> Self {
        self.symbols.push(Some(Symbol::new(
            Some(function.to_string()),
            Some(PathBuf::from(file)),
            Some(line),
        )));
        self
    }

    /// Appends a frame the tracer knows nothing about.
    pub fn unknown_frame(mut self) -> Self {
        self.symbols.push(None);
        self
    }
}

impl StackTracer for FixedTracer {
    fn capture(&self, _skip: usize, depth: usize) -> Vec<usize> {
        (0..self.symbols.len()).take(depth).collect()
    }

    fn resolve(&self, address: usize) -> Option<Symbol> {
        self.symbols.get(address).cloned().flatten()
    }
}
