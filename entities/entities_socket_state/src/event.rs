//! Socket Event Module
//!
//! Provides the state-change notification contract for socket handles.
//! Based on the LPSOCKET_EVENT_ROUTINE callback of the original C API,
//! reworked as a capability trait instead of a raw function pointer.

use crate::handle::SocketHandle;

/// Caller-supplied data passed through to the state-change callback
///
/// The original API carried an untyped pointer here; the only values ever
/// passed were nothing at all and a byte count after a send, so this is a
/// closed enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventContext {
    /// No additional data for this transition
    #[default]
    None,
    /// Number of bytes transferred by the operation that triggered the
    /// transition
    BytesSent(usize),
}

/// State-change handler for a socket handle
///
/// The handle stores a reference to an implementation of this trait and
/// invokes it synchronously on every state transition except entry into
/// [`SocketState::Ready`](crate::SocketState::Ready). The invocation happens
/// in the caller's thread, before the operation that triggered the
/// transition returns.
///
/// Implementers receive mutable access to the handle and must leave it in
/// the `Ready` state before returning, so that the handle is safe for the
/// next operation. Setting `Ready` from inside a handler does not re-enter
/// notification.
pub trait SocketEventHandler {
    /// Called after a state transition has been applied
    ///
    /// # Arguments
    ///
    /// * `socket` - The handle whose state just changed
    /// * `context` - Data supplied by the operation that triggered the change
    fn on_state_change(&self, socket: &mut SocketHandle, context: EventContext);
}
