//! Handle Lifecycle Module
//!
//! Provides the open, close, and kill operations for socket handles.
//! Based on OpenSocket, CloseSocket, and KillSocket of the original C API.

use entities_socket_state::{
    SocketError, SocketEventHandler, SocketHandle, SocketState, SocketType, Transport,
    INVALID_SOCKET_DESCRIPTOR,
};
use std::io;
use std::rc::Rc;

/// Open a new socket handle of the given type
///
/// Asks the transport for a fresh endpoint, wraps it in a handle with the
/// supplied state-change callback, assigns the type, and transitions the
/// handle to `Opened`. Both the type assignment and the `Opened` transition
/// notify the callback before this function returns.
///
/// # Arguments
///
/// * `socket_type` - Role of the new handle; must not be `Unknown`
/// * `callback` - State-change handler registered on the handle
/// * `transport` - Transport collaborator that creates the endpoint
///
/// # Returns
///
/// * `Ok(SocketHandle)` - The opened handle
/// * `Err(SocketError::UnknownType)` - `Unknown` was requested; nothing was
///   allocated and the transport was not called
/// * `Err(SocketError::EndpointFailed)` - The transport returned a
///   non-positive descriptor; the callback is not invoked on this path
pub fn open_socket(
    socket_type: SocketType,
    callback: Rc<dyn SocketEventHandler>,
    transport: &mut dyn Transport,
) -> Result<SocketHandle, SocketError> {
    if socket_type == SocketType::Unknown {
        return Err(SocketError::UnknownType);
    }

    let descriptor = transport.create_endpoint();
    if descriptor <= INVALID_SOCKET_DESCRIPTOR {
        return Err(SocketError::EndpointFailed);
    }

    let mut handle = SocketHandle::new(descriptor, callback);
    handle.set_type(socket_type);
    handle.set_state(SocketState::Opened);
    Ok(handle)
}

/// Close a socket handle and release its endpoint
///
/// Transitions through `Closing` and `Closed` (each notifying the callback),
/// asks the transport to close the underlying descriptor in between, and
/// consumes the handle. The caller's binding is moved into this function, so
/// use after close cannot compile.
pub fn close_socket(mut handle: SocketHandle, transport: &mut dyn Transport) {
    handle.set_state(SocketState::Closing);
    transport.close(handle.raw_descriptor());
    handle.set_state(SocketState::Closed);
}

/// Tear down a socket handle for an unrecoverable condition
///
/// The fail-fast path of the original API, which terminated the process.
/// Here it always produces a `SocketError::Fatal`; the top-level caller
/// decides whether that means exit.
///
/// # Arguments
///
/// * `handle` - The handle being killed; consumed either way
/// * `message` - Reason to report. When absent or empty, the OS description
///   of the handle's last error is used instead and the handle is dropped
///   without the close transitions
/// * `transport` - Transport collaborator used to close the endpoint
///
/// # Returns
///
/// The fatal error describing why the socket was killed.
pub fn kill_socket(
    handle: SocketHandle,
    message: Option<&str>,
    transport: &mut dyn Transport,
) -> SocketError {
    match message {
        None | Some("") => {
            let errno = handle.last_error();
            SocketError::Fatal(io::Error::from_raw_os_error(errno).to_string())
        }
        Some(message) => {
            let reason = message.to_string();
            close_socket(handle, transport);
            SocketError::Fatal(reason)
        }
    }
}
