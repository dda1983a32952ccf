//! Infrastructure Layer: Debugging
//!
//! Provides flag-gated diagnostic output for the socket abstraction:
//! a global debug switch, printf-style debug messages, state transition
//! tracing, and unconditional fatal-condition reporting used by the
//! kill path.

pub mod debug_utils;

pub use debug_utils::DebugUtils;
