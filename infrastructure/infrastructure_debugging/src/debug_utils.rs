//! Debug Utilities Module
//!
//! Provides debugging utility functions for socket operations:
//! - Debug output utilities
//! - Socket state transition tracing
//! - Fatal condition reporting
//! - Debug state management

use entities_socket_state::{SocketDescriptor, SocketState};
use std::sync::atomic::{AtomicBool, Ordering};

/// Global debug state
static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

/// Debug utilities for socket diagnostics
pub struct DebugUtils;

impl DebugUtils {
    /// Enable debug output
    ///
    /// When enabled, debug output functions will produce output.
    /// When disabled, debug output is suppressed.
    pub fn enable() {
        DEBUG_ENABLED.store(true, Ordering::Release);
    }

    /// Disable debug output
    pub fn disable() {
        DEBUG_ENABLED.store(false, Ordering::Release);
    }

    /// Check if debug output is enabled
    ///
    /// # Returns
    ///
    /// `true` if debug output is enabled, `false` otherwise
    pub fn is_enabled() -> bool {
        DEBUG_ENABLED.load(Ordering::Acquire)
    }

    /// Output a debug message
    ///
    /// This function outputs a debug message if debug output is enabled.
    ///
    /// # Arguments
    ///
    /// * `message` - The debug message to output
    pub fn debug_output(message: &str) {
        if Self::is_enabled() {
            eprintln!("[DEBUG] {}", message);
        }
    }

    /// Trace a socket state transition
    ///
    /// Only produces output when debug output is enabled.
    ///
    /// # Arguments
    ///
    /// * `descriptor` - Descriptor of the socket whose state changed
    /// * `new_state` - State the socket just entered
    pub fn trace_transition(descriptor: SocketDescriptor, new_state: SocketState) {
        if Self::is_enabled() {
            eprintln!("[DEBUG] socket {}: -> {:?}", descriptor, new_state);
        }
    }

    /// Report an unrecoverable condition
    ///
    /// Used by the kill path. Always writes to stderr, regardless of the
    /// debug switch: a fatal condition must not be silently droppable.
    ///
    /// # Arguments
    ///
    /// * `message` - Description of the condition
    pub fn report_fatal(message: &str) {
        eprintln!("[FATAL] {}", message);
    }
}
