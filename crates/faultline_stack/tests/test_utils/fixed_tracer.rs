//! Deterministic tracer for stack tests.

use faultline_stack::{StackTracer, Symbol};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Tracer that always "captures" the same addresses and resolves them from a
/// fixed table. Counts lookups so laziness can be asserted.
#[derive(Debug, Default)]
pub struct FixedTracer {
    addresses: Vec<usize>,
    symbols: HashMap<usize, Symbol>,
    lookups: AtomicUsize,
}

impl FixedTracer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a resolvable frame.
    pub fn frame(mut self, address: usize, function: &str, file: &str, line: u32) -> Self {
        self.addresses.push(address);
        self.symbols.insert(
            address,
            Symbol::new(
                Some(function.to_string()),
                Some(PathBuf::from(file)),
                Some(line),
            ),
        );
        self
    }

    /// Adds a frame the tracer knows nothing about.
    #[allow(dead_code)]
    pub fn unknown_frame(mut self, address: usize) -> Self {
        self.addresses.push(address);
        self
    }

    /// Number of `resolve` calls so far.
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl StackTracer for FixedTracer {
    fn capture(&self, skip: usize, depth: usize) -> Vec<usize> {
        // The fixed stack starts at the caller, so `skip` is ignored.
        let _ = skip;
        self.addresses.iter().copied().take(depth).collect()
    }

    fn resolve(&self, address: usize) -> Option<Symbol> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.symbols.get(&address).cloned()
    }
}
