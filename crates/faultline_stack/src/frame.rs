//! A single entry of a captured stack.

use crate::{StackTracer, Symbol};
use std::borrow::Cow;
use std::fmt;
use std::path::Path;
use std::sync::{Arc, OnceLock};

/// Placeholder for anything the tracer could not resolve.
pub const UNKNOWN: &str = "unknown";

/// One return address plus its lazily resolved symbol.
///
/// Nothing is looked up until a name, file or line is requested. The lookup
/// runs at most once per frame and never alters the address.
///
/// `Display` renders the base file name, `pool.rs`; [`Frame::location`] adds
/// the line. The alternate form (`{:#}`) renders the shortened function name,
/// then the full path and line on the next line:
///
/// ```text
/// Pool::get
///     /src/db/pool.rs:42
/// ```
#[derive(Debug, Clone)]
pub struct Frame {
    address: usize,
    tracer: Arc<dyn StackTracer>,
    symbol: OnceLock<Option<Symbol>>,
}

impl Frame {
    /// Creates an unresolved frame for `address`.
    pub fn new(address: usize, tracer: Arc<dyn StackTracer>) -> Self {
        Self {
            address,
            tracer,
            symbol: OnceLock::new(),
        }
    }

    /// The raw return address.
    pub fn address(&self) -> usize {
        self.address
    }

    /// The resolved symbol, if the tracer knows the address.
    pub fn symbol(&self) -> Option<&Symbol> {
        self.symbol
            .get_or_init(|| self.tracer.resolve(self.address))
            .as_ref()
    }

    /// Full path of the source file, or `unknown`.
    pub fn file(&self) -> Cow<'_, str> {
        match self.symbol().and_then(|s| s.file().as_deref()) {
            Some(path) => path.to_string_lossy(),
            None => Cow::Borrowed(UNKNOWN),
        }
    }

    /// Final component of the source path, or `unknown`.
    pub fn file_name(&self) -> Cow<'_, str> {
        match self.symbol().and_then(|s| s.file().as_deref()) {
            Some(path) => base_name(path),
            None => Cow::Borrowed(UNKNOWN),
        }
    }

    /// Source line, or `0` when unknown.
    pub fn line(&self) -> u32 {
        self.symbol().and_then(|s| *s.line()).unwrap_or(0)
    }

    /// Fully qualified function name, or `unknown`.
    pub fn function(&self) -> &str {
        self.symbol()
            .and_then(|s| s.function().as_deref())
            .unwrap_or(UNKNOWN)
    }

    /// Base file name and line, `pool.rs:42`.
    pub fn location(&self) -> String {
        format!("{}:{}", self.file_name(), self.line())
    }

    /// Function name with its crate and module path removed.
    pub fn short_function(&self) -> &str {
        short_function_name(self.function())
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(
                f,
                "{}\n\t{}:{}",
                self.short_function(),
                self.file(),
                self.line()
            )
        } else {
            f.write_str(&self.file_name())
        }
    }
}

/// Strips the crate and module prefix from a demangled function path.
///
/// Type segments (capitalised or `<...>` qualified) stay attached to the
/// method they own, and trailing closure markers stay on the function that
/// contains them.
///
/// ```
/// use faultline_stack::short_function_name;
///
/// assert_eq!(short_function_name("app::db::Pool::get"), "Pool::get");
/// assert_eq!(short_function_name("app::cli::run"), "run");
/// assert_eq!(short_function_name("app::main::{{closure}}"), "main::{{closure}}");
/// ```
pub fn short_function_name(name: &str) -> &str {
    let starts = segment_starts(name);
    let segment = |i: usize| {
        let end = starts.get(i + 1).map_or(name.len(), |next| next - 2);
        &name[starts[i]..end]
    };

    let Some(mut keep) = (0..starts.len()).rev().find(|&i| !segment(i).starts_with('{')) else {
        return name;
    };
    while keep > 0 && is_type_segment(segment(keep - 1)) {
        keep -= 1;
    }
    &name[starts[keep]..]
}

/// Byte offsets where each `::` separated segment begins, ignoring
/// separators nested inside `<...>`.
fn segment_starts(name: &str) -> Vec<usize> {
    let bytes = name.as_bytes();
    let mut starts = vec![0];
    let mut depth = 0usize;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'<' => depth += 1,
            b'>' if i == 0 || bytes[i - 1] != b'-' => depth = depth.saturating_sub(1),
            b':' if depth == 0 && bytes.get(i + 1) == Some(&b':') => {
                starts.push(i + 2);
                i += 1;
            }
            _ => {}
        }
        i += 1;
    }
    starts
}

fn is_type_segment(segment: &str) -> bool {
    segment
        .chars()
        .next()
        .is_some_and(|c| c == '<' || c.is_uppercase())
}

fn base_name(path: &Path) -> Cow<'_, str> {
    path.file_name()
        .map_or_else(|| path.to_string_lossy(), |name| name.to_string_lossy())
}
