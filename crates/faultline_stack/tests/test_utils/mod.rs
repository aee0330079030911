//! Test utilities for faultline_stack tests.
//!
//! Provides a tracer with a fixed, fully known stack.

pub mod fixed_tracer;

#[allow(unused_imports)]
pub use fixed_tracer::FixedTracer;
