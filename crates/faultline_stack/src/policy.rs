//! When and how deep to capture.

use crate::{BacktraceTracer, CapturedStack, StackTracer};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, LazyLock};
use tracing::{debug, trace};

/// Most frames a single capture records.
pub const MAX_DEPTH: usize = 32;

static CAPTURE_ENABLED: AtomicBool = AtomicBool::new(true);

static GLOBAL_POLICY: LazyLock<CapturePolicy> = LazyLock::new(CapturePolicy::process_wide);

/// Turns stack capture on or off for every error built from now on.
///
/// Errors that already exist keep whatever they captured. The flag is read
/// with relaxed ordering, so another thread may observe the change a little
/// late.
pub fn set_stack_capture_enabled(enabled: bool) {
    CAPTURE_ENABLED.store(enabled, Ordering::Relaxed);
    debug!(enabled, "Stack capture toggled");
}

/// Whether the process-wide switch currently allows capture. Defaults to `true`.
pub fn stack_capture_enabled() -> bool {
    CAPTURE_ENABLED.load(Ordering::Relaxed)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Switch {
    /// Follow the process-wide flag, read at every capture.
    ProcessWide,
    Fixed(bool),
}

/// Decides whether an error captures a stack, how deep, and with which tracer.
///
/// The default policy follows [`set_stack_capture_enabled`] and walks the real
/// stack. A policy with a fixed switch ignores the process-wide flag, which
/// keeps tests that need a particular capture behavior independent of each
/// other.
///
/// # Examples
///
/// ```
/// use faultline_stack::CapturePolicy;
///
/// let policy = CapturePolicy::fixed(false);
/// assert!(policy.capture(0).is_none());
/// ```
#[derive(Debug, Clone)]
pub struct CapturePolicy {
    switch: Switch,
    depth: usize,
    tracer: Arc<dyn StackTracer>,
}

impl Default for CapturePolicy {
    fn default() -> Self {
        Self::process_wide()
    }
}

impl CapturePolicy {
    /// The shared policy used by constructors that take no explicit policy.
    pub fn global() -> &'static CapturePolicy {
        &GLOBAL_POLICY
    }

    /// A policy that follows the process-wide switch.
    pub fn process_wide() -> Self {
        Self {
            switch: Switch::ProcessWide,
            depth: MAX_DEPTH,
            tracer: Arc::new(BacktraceTracer),
        }
    }

    /// A policy that always (or never) captures, whatever the process-wide
    /// switch says.
    pub fn fixed(enabled: bool) -> Self {
        Self {
            switch: Switch::Fixed(enabled),
            ..Self::process_wide()
        }
    }

    /// Replaces the tracer.
    pub fn with_tracer(mut self, tracer: Arc<dyn StackTracer>) -> Self {
        self.tracer = tracer;
        self
    }

    /// Sets the capture depth, clamped to `1..=MAX_DEPTH`.
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth.clamp(1, MAX_DEPTH);
        self
    }

    /// Whether a capture made right now would record anything.
    pub fn is_enabled(&self) -> bool {
        match self.switch {
            Switch::ProcessWide => stack_capture_enabled(),
            Switch::Fixed(enabled) => enabled,
        }
    }

    /// Maximum number of frames recorded.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The tracer used to walk and resolve the stack.
    pub fn tracer(&self) -> &Arc<dyn StackTracer> {
        &self.tracer
    }

    /// Captures the caller's stack.
    ///
    /// `skip` counts frames above this call to leave out: `0` makes the
    /// direct caller the first frame, `1` starts at the caller's caller.
    /// Returns `None` when capture is disabled or the tracer recorded nothing.
    #[inline(never)]
    pub fn capture(&self, skip: usize) -> Option<CapturedStack> {
        if !self.is_enabled() {
            return None;
        }
        // Not a tail call: this frame is one of the `skip + 1` the tracer drops.
        let addresses = self.tracer.capture(skip + 1, self.depth);
        if addresses.is_empty() {
            trace!("Tracer recorded no frames");
            return None;
        }
        Some(CapturedStack::new(addresses, Arc::clone(&self.tracer)))
    }
}
