//! Socket Facades
//!
//! Provides API facades matching the original C socket surface, one
//! function per C entry point. The C API's NULL handle becomes `None`, its
//! untyped callback pointer becomes an optional handler reference, and the
//! operations that terminated the process now hand a fatal error back to
//! the caller.

use entities_socket_state::{
    EventContext, ServerLoop, SocketError, SocketEventHandler, SocketHandle, SocketState,
    SocketType, Transport,
};
use infrastructure_debugging::DebugUtils;
use std::rc::Rc;
use usecases_socket_lifecycle::{
    close_socket as close_socket_usecase, connect_to_server as connect_usecase,
    kill_socket as kill_socket_usecase, open_socket as open_socket_usecase,
    run_server as run_server_usecase, send_data,
};

/// Sentinel returned by [`send`] when the operation failed
pub const SOCKET_ERROR: isize = -1;

/// Open a new socket of the specified type
///
/// Mirrors `OpenSocket`. Returns `None` - the invalid handle sentinel -
/// without allocating when the type is `Unknown`, when no callback is
/// supplied, or when the transport cannot produce a descriptor.
pub fn open_socket(
    socket_type: SocketType,
    callback: Option<Rc<dyn SocketEventHandler>>,
    transport: &mut dyn Transport,
) -> Option<SocketHandle> {
    let callback = callback?;
    open_socket_usecase(socket_type, callback, transport).ok()
}

/// Close the socket and release its resources
///
/// Mirrors `CloseSocket`. Does nothing on the invalid handle sentinel.
/// The handle is consumed; the caller has no reference left to misuse.
pub fn close_socket(handle: Option<SocketHandle>, transport: &mut dyn Transport) {
    if let Some(handle) = handle {
        DebugUtils::trace_transition(handle.raw_descriptor(), SocketState::Closing);
        close_socket_usecase(handle, transport);
    }
}

/// Tear the socket down for an unrecoverable condition
///
/// Mirrors `KillSocket`, which forcibly terminated the program. The fatal
/// outcome is reported on stderr and returned; whether it ends the process
/// is the top-level caller's decision. Does nothing on the invalid handle
/// sentinel.
pub fn kill_socket(
    handle: Option<SocketHandle>,
    message: Option<&str>,
    transport: &mut dyn Transport,
) -> Option<SocketError> {
    let handle = handle?;
    let error = kill_socket_usecase(handle, message, transport);
    DebugUtils::report_fatal(&error.to_string());
    Some(error)
}

/// Connect to a server at the specified host and port
///
/// Mirrors `ConnectToServer`. Does nothing on the invalid handle sentinel
/// or a handle without a registered callback; calling it on a non-client
/// handle is fatal.
pub fn connect_to_server(
    handle: Option<&mut SocketHandle>,
    host: &str,
    port: u16,
    transport: &mut dyn Transport,
) -> Result<(), SocketError> {
    match handle {
        Some(handle) => connect_usecase(handle, host, port, transport),
        None => Ok(()),
    }
}

/// Send data over an open and connected socket
///
/// Mirrors `Send`: returns the number of bytes sent, or [`SOCKET_ERROR`]
/// if the operation failed. A missing handle is a programming error in the
/// C contract; here it is reported and collapsed into the error sentinel.
pub fn send(
    handle: Option<&mut SocketHandle>,
    data: &[u8],
    transport: &mut dyn Transport,
) -> isize {
    let handle = match handle {
        Some(handle) => handle,
        None => {
            DebugUtils::report_fatal("send attempted without a socket handle");
            return SOCKET_ERROR;
        }
    };

    match send_data(handle, data, transport) {
        Ok(count) => count as isize,
        Err(error) => {
            if error.is_fatal() {
                DebugUtils::report_fatal(&error.to_string());
            }
            SOCKET_ERROR
        }
    }
}

/// Run the listen/accept loop for a server socket
///
/// Mirrors `RunServer`. Does nothing on the invalid handle sentinel;
/// blocks in the supplied loop implementation otherwise.
pub fn run_server(
    handle: Option<&mut SocketHandle>,
    port: u16,
    server_loop: &mut dyn ServerLoop,
    transport: &mut dyn Transport,
) -> Result<(), SocketError> {
    match handle {
        Some(handle) => run_server_usecase(handle, port, server_loop, transport),
        None => Ok(()),
    }
}

/// Get the current state of the socket
///
/// Mirrors `GetSocketState`; the invalid handle sentinel reads as `Unknown`.
pub fn get_socket_state(handle: Option<&SocketHandle>) -> SocketState {
    handle.map_or(SocketState::Unknown, |handle| handle.state())
}

/// Get the type the socket was opened as
///
/// Mirrors `GetSocketType`; the invalid handle sentinel reads as `Unknown`.
pub fn get_socket_type(handle: Option<&SocketHandle>) -> SocketType {
    handle.map_or(SocketType::Unknown, |handle| handle.socket_type())
}

/// Get the OS error code for the socket's last network error
///
/// Mirrors `GetLastError`: zero unless the socket is in the `Error` state.
pub fn get_last_error(handle: Option<&SocketHandle>) -> i32 {
    handle.map_or(0, |handle| handle.last_error())
}

/// Set the socket's state, notifying the callback with no user state
///
/// Mirrors `SetSocketState`, an alias for [`set_socket_state_ex`] with an
/// empty context.
pub fn set_socket_state(handle: Option<&mut SocketHandle>, new_state: SocketState) {
    set_socket_state_ex(handle, new_state, EventContext::None);
}

/// Set the socket's state, passing the context through to the callback
///
/// Mirrors `SetSocketStateEx`. Does nothing on the invalid handle sentinel.
pub fn set_socket_state_ex(
    handle: Option<&mut SocketHandle>,
    new_state: SocketState,
    context: EventContext,
) {
    if let Some(handle) = handle {
        DebugUtils::trace_transition(handle.raw_descriptor(), new_state);
        handle.set_state_with(new_state, context);
    }
}

/// Set the socket's type
///
/// Mirrors `SetSocketType`. Does nothing on the invalid handle sentinel or
/// once the type has already been assigned.
pub fn set_socket_type(handle: Option<&mut SocketHandle>, new_type: SocketType) {
    if let Some(handle) = handle {
        handle.set_type(new_type);
    }
}
