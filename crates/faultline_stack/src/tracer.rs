//! The stack walking and symbol lookup seam.

use std::ffi::c_void;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::trace;

/// Upper bound on frames inspected while looking for the capture anchor.
const SCAN_LIMIT: usize = 256;

/// What a tracer knows about one address.
///
/// Every field is optional because debug info is frequently partial: a
/// stripped binary still names functions but has no file or line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, derive_getters::Getters)]
pub struct Symbol {
    /// Demangled function name without the trailing hash.
    function: Option<String>,
    /// Full path of the source file.
    file: Option<PathBuf>,
    /// Source line.
    line: Option<u32>,
}

impl Symbol {
    /// Creates a symbol from its parts.
    pub fn new(function: Option<String>, file: Option<PathBuf>, line: Option<u32>) -> Self {
        Self {
            function,
            file,
            line,
        }
    }
}

/// Walks the current call stack and resolves the addresses it records.
///
/// Implementations must be pure with respect to `resolve`: the same address
/// always yields the same answer. Tests swap in a deterministic tracer; the
/// default is [`BacktraceTracer`].
pub trait StackTracer: Send + Sync + fmt::Debug {
    /// Records up to `depth` return addresses of the calling thread, innermost
    /// first.
    ///
    /// The tracer's own frames are never recorded. `skip` further callers above
    /// the tracer are omitted as well, so a caller passing `skip = 0` sees its
    /// own frame first.
    fn capture(&self, skip: usize, depth: usize) -> Vec<usize>;

    /// Looks up an address recorded by [`StackTracer::capture`].
    ///
    /// Returns `None` when nothing at all is known about it.
    fn resolve(&self, address: usize) -> Option<Symbol>;
}

/// Tracer backed by the `backtrace` crate and the binary's debug info.
#[derive(Debug, Clone, Copy, Default)]
pub struct BacktraceTracer;

impl StackTracer for BacktraceTracer {
    /// Walks the stack from this method's own frame.
    ///
    /// Whatever the unwinder reports before this frame belongs to the
    /// `backtrace` crate and is dropped, then `skip` more frames are dropped.
    /// The walk must stay in this frame: a helper reached through a tail call
    /// leaves no frame of its own to anchor on.
    #[inline(never)]
    fn capture(&self, skip: usize, depth: usize) -> Vec<usize> {
        let anchor = <BacktraceTracer as StackTracer>::capture
            as fn(&BacktraceTracer, usize, usize) -> Vec<usize> as usize;
        let mut raw: Vec<usize> = Vec::with_capacity(depth + skip + 8);
        let mut start = None;

        backtrace::trace(|frame| {
            if start.is_none() && frame.symbol_address() as usize == anchor {
                start = Some(raw.len() + 1 + skip);
            }
            raw.push(frame.ip() as usize);
            match start {
                Some(start) => raw.len() < start + depth,
                None => raw.len() < SCAN_LIMIT,
            }
        });

        let start = start.unwrap_or_else(|| {
            trace!(frames = raw.len(), "Capture anchor not found, keeping every frame");
            0
        });
        raw.into_iter().skip(start).take(depth).collect()
    }

    fn resolve(&self, address: usize) -> Option<Symbol> {
        let mut found = None;
        // Recorded addresses are return addresses; `resolve` adjusts them back
        // into the calling instruction before the lookup.
        backtrace::resolve(address as *mut c_void, |symbol| {
            // Inlined functions report several symbols, innermost first.
            if found.is_none() {
                found = Some(Symbol::new(
                    symbol.name().map(|name| format!("{:#}", name)),
                    symbol.filename().map(Path::to_path_buf),
                    symbol.lineno(),
                ));
            }
        });
        if found.is_none() {
            trace!(address, "No symbol for address");
        }
        found
    }
}
