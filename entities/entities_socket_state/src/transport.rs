//! Transport Contract Module
//!
//! Provides the traits the socket handle layer requires from its
//! collaborators: the OS-level transport primitives and the server
//! accept loop. Implementations live in the adapters layer.

use crate::error::SocketError;
use crate::handle::{SocketDescriptor, SocketHandle};

/// OS-level socket primitives
///
/// The handle layer addresses endpoints by raw descriptor and never touches
/// the operating system directly. Primitives block until completion or
/// failure; cancellation and timeouts are not modeled.
pub trait Transport {
    /// Create a new TCP endpoint
    ///
    /// # Returns
    ///
    /// The new endpoint's descriptor, or a non-positive value on failure.
    fn create_endpoint(&mut self) -> SocketDescriptor;

    /// Connect an endpoint to a remote host and port
    ///
    /// Blocks until the connection is established. Failure here is an
    /// unrecoverable condition: the error returned is fatal and the handle
    /// layer propagates it without re-checking.
    fn connect(
        &mut self,
        descriptor: SocketDescriptor,
        host: &str,
        port: u16,
    ) -> Result<(), SocketError>;

    /// Send data over a connected endpoint
    ///
    /// # Returns
    ///
    /// The signed number of bytes sent; negative on failure, in which case
    /// [`last_error`](Self::last_error) holds the OS error code.
    fn send(&mut self, descriptor: SocketDescriptor, data: &[u8]) -> isize;

    /// Close an endpoint and release it back to the operating system
    ///
    /// Best-effort: the handle layer does not observe failures here.
    fn close(&mut self, descriptor: SocketDescriptor);

    /// OS error code of the most recent failed primitive, 0 if none
    fn last_error(&self) -> i32;
}

/// Server accept loop collaborator
///
/// The run_server operation validates the listening handle and then hands
/// control to an implementation of this trait, which owns the bind, listen,
/// and accept/dispatch loop. The loop drives listener state changes through
/// the handle's transition engine (firing the server-level callback) and
/// models each accepted connection as its own [`SocketHandle`] with a
/// communication-level callback. Backlog policy and the concurrency model
/// for accepted connections are the implementation's business.
pub trait ServerLoop {
    /// Run the accept loop on a listening handle
    ///
    /// Blocks until the loop ends.
    fn run(
        &mut self,
        listener: &mut SocketHandle,
        port: u16,
        transport: &mut dyn Transport,
    ) -> Result<(), SocketError>;
}
