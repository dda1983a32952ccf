//! Data Transfer Module
//!
//! Provides the connect, send, and server-boundary operations for socket
//! handles. Based on ConnectToServer, Send, and RunServer of the original
//! C API.

use entities_socket_state::{
    EventContext, ServerLoop, SocketError, SocketHandle, SocketState, SocketType, Transport,
    INVALID_SOCKET_DESCRIPTOR,
};

/// Connect a client handle to a remote server
///
/// Transitions the handle to `Connecting`, delegates the blocking connect to
/// the transport, then transitions to `Connected`. Both transitions notify
/// the callback before this function returns; a transport failure is fatal
/// and propagates without the `Connected` transition.
///
/// # Arguments
///
/// * `handle` - An opened handle of type `Client`
/// * `host` - IPv4 address or resolvable hostname of the server
/// * `port` - Port the server is listening on
/// * `transport` - Transport collaborator performing the connect
///
/// # Returns
///
/// * `Ok(())` - Connected, or nothing to do because no callback is
///   registered on the handle
/// * `Err(SocketError::TypeMismatch)` - The handle is not a client socket;
///   unrecoverable at this layer
/// * `Err(SocketError::Fatal)` - The transport could not connect
pub fn connect_to_server(
    handle: &mut SocketHandle,
    host: &str,
    port: u16,
    transport: &mut dyn Transport,
) -> Result<(), SocketError> {
    if !handle.has_callback() {
        return Ok(());
    }
    if handle.socket_type() != SocketType::Client {
        return Err(SocketError::TypeMismatch {
            expected: SocketType::Client,
            actual: handle.socket_type(),
        });
    }

    handle.set_state(SocketState::Connecting);
    transport.connect(handle.raw_descriptor(), host, port)?;
    handle.set_state(SocketState::Connected);
    Ok(())
}

/// Send data over a connected handle
///
/// Sends are only permitted from the `Ready` state. The handle transitions
/// to `Sending`, the transport performs the blocking send, and the outcome
/// decides the final transition: `Sent` with the byte count as callback
/// context, or the `Error` trap with the OS errno recorded.
///
/// # Arguments
///
/// * `handle` - A connected handle in the `Ready` state
/// * `data` - Bytes to send; an empty slice is trivially successful
/// * `transport` - Transport collaborator performing the send
///
/// # Returns
///
/// * `Ok(count)` - Number of bytes the transport reported sent
/// * `Ok(0)` - `data` was empty; no state change, no transport call
/// * `Err(SocketError::NotReady)` - The handle was not `Ready`; no
///   transport call was made
/// * `Err(SocketError::SendFailed)` - The transport reported failure; the
///   handle is now trapped in `Error`
/// * `Err(SocketError::Fatal)` - The handle was never successfully opened;
///   a programming error, not recoverable
pub fn send_data(
    handle: &mut SocketHandle,
    data: &[u8],
    transport: &mut dyn Transport,
) -> Result<usize, SocketError> {
    if handle.raw_descriptor() <= INVALID_SOCKET_DESCRIPTOR {
        return Err(SocketError::Fatal(
            "send attempted on a socket that was never opened".to_string(),
        ));
    }
    if data.is_empty() {
        return Ok(0);
    }
    if handle.state() != SocketState::Ready {
        return Err(SocketError::NotReady);
    }

    handle.set_state(SocketState::Sending);
    let count = transport.send(handle.raw_descriptor(), data);
    if count < 0 {
        let errno = transport.last_error();
        handle.enter_error(errno);
        return Err(SocketError::SendFailed(errno));
    }

    handle.set_state_with(SocketState::Sent, EventContext::BytesSent(count as usize));
    Ok(count as usize)
}

/// Run a server on a listening handle
///
/// Boundary operation: validates the handle and hands control to the
/// [`ServerLoop`] collaborator, which owns the bind/listen/accept loop,
/// drives listener state changes through the handle's engine, and models
/// each accepted connection as its own handle. Blocks until the loop ends.
///
/// # Returns
///
/// * `Ok(())` - The loop finished, or nothing to do because no callback is
///   registered on the handle
/// * `Err(SocketError::TypeMismatch)` - The handle is not a server socket
/// * `Err(_)` - Whatever the loop implementation reports
pub fn run_server(
    handle: &mut SocketHandle,
    port: u16,
    server_loop: &mut dyn ServerLoop,
    transport: &mut dyn Transport,
) -> Result<(), SocketError> {
    if !handle.has_callback() {
        return Ok(());
    }
    if handle.socket_type() != SocketType::Server {
        return Err(SocketError::TypeMismatch {
            expected: SocketType::Server,
            actual: handle.socket_type(),
        });
    }

    server_loop.run(handle, port, transport)
}
