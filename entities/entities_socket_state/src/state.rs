//! Socket State Module
//!
//! Provides the state and type enumerations for socket handles.
//! Based on the SOCKET_STATE and SOCKET_TYPE values of the original C API.

/// Lifecycle state of a socket handle
///
/// `Unknown` is the default value of a freshly created record and is never
/// set explicitly. `Error` is a trap state: once entered, no further state
/// or type changes are accepted. `Ready` marks the handle as idle and safe
/// for the next operation; it is the only state a handle may enter without
/// notifying the registered callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocketState {
    /// An incoming connection has been accepted
    Accepted,
    /// Waiting for an incoming connection
    Accepting,
    /// Binding the socket to a local address
    Binding,
    /// Bound to a local address
    Bound,
    /// Releasing the socket back to the operating system
    Closing,
    /// The socket has been closed
    Closed,
    /// Connecting to a remote endpoint
    Connecting,
    /// Connected to a remote endpoint
    Connected,
    /// The remote endpoint has gone away
    Disconnected,
    /// Trap state; the handle accepts no further mutation
    Error,
    /// The socket has been opened
    Opened,
    /// A send operation is in progress
    Sending,
    /// A send operation has completed
    Sent,
    /// The socket is idle and ready for use
    Ready,
    /// A receive operation is in progress
    Receiving,
    /// A receive operation has completed
    Received,
    /// Listening for incoming connections
    Listening,
    /// Default state; never set explicitly
    Unknown,
}

/// Role of a socket handle
///
/// Set at most once after creation; a second assignment is silently ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocketType {
    /// Connects out to a server
    Client,
    /// Secondary data channel (typically only used by FTP-style protocols)
    Data,
    /// Listens for incoming connections
    Server,
    /// Default value; the role has not been assigned yet
    Unknown,
}
