//! Captures against the real unwinder. Needs debug info, which test builds have.
//! Also run under `cargo test --profile optimized-test`, where calls in tail
//! position are compiled to jumps.

use faultline_stack::{BacktraceTracer, CapturePolicy, StackTracer, MAX_DEPTH};

// The helpers return after `black_box` so their own frame stays on the stack.
#[inline(never)]
fn capture_here() -> Option<faultline_stack::CapturedStack> {
    let stack = CapturePolicy::fixed(true).capture(0);
    std::hint::black_box(&stack);
    stack
}

#[inline(never)]
fn trace_here() -> Vec<usize> {
    let addresses = BacktraceTracer.capture(0, 4);
    std::hint::black_box(&addresses);
    addresses
}

#[test]
fn first_frame_is_the_direct_caller() {
    let stack = capture_here().expect("capture enabled");
    let first = &stack.frames()[0];

    assert!(
        first.function().ends_with("capture_here"),
        "unexpected first frame: {}",
        first.function()
    );
    assert_eq!(first.file_name(), "backtrace_test.rs");
    assert!(first.line() > 0);
}

#[test]
fn verbose_rendering_names_the_calling_test() {
    let stack = CapturePolicy::fixed(true).capture(0).expect("capture enabled");
    let verbose = stack.to_verbose_string();

    assert!(
        verbose.contains("verbose_rendering_names_the_calling_test"),
        "{}",
        verbose
    );
    assert!(stack.len() <= MAX_DEPTH);
}

#[test]
fn resolving_is_repeatable() {
    let addresses = BacktraceTracer.capture(0, 4);
    assert!(!addresses.is_empty());

    let first = BacktraceTracer.resolve(addresses[0]);
    let second = BacktraceTracer.resolve(addresses[0]);
    assert_eq!(first, second);
}

#[test]
fn tracer_frames_are_never_recorded() {
    let addresses = trace_here();
    let first = BacktraceTracer.resolve(addresses[0]).expect("debug info");
    let function = first.function().as_deref().unwrap_or_default();

    assert!(function.ends_with("trace_here"), "unexpected first frame: {}", function);
}
