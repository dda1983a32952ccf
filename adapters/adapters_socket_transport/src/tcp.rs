//! TCP Transport Module
//!
//! Provides the socket2-backed implementation of the handle layer's
//! transport contract. Endpoints stay registered here, keyed by their raw
//! descriptor, until the handle layer asks for them to be closed.

use entities_socket_state::{SocketDescriptor, SocketError, Transport};
use socket2::{Domain, Protocol, SockAddr, Socket, Type};
use std::collections::HashMap;
use std::net::{SocketAddr, ToSocketAddrs};
use std::os::unix::io::AsRawFd;

/// Blocking TCP transport
///
/// Owns every endpoint it creates; dropping the transport (or closing a
/// descriptor) releases the socket back to the operating system. Sockets
/// stay in blocking mode: the handle layer's contract is that primitives
/// block until completion or failure.
pub struct TcpTransport {
    endpoints: HashMap<SocketDescriptor, Socket>,
    last_error: i32,
}

impl TcpTransport {
    /// Create a transport with no endpoints
    pub fn new() -> Self {
        Self {
            endpoints: HashMap::new(),
            last_error: 0,
        }
    }

    /// Number of endpoints currently registered
    pub fn endpoint_count(&self) -> usize {
        self.endpoints.len()
    }
}

impl Default for TcpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for TcpTransport {
    fn create_endpoint(&mut self) -> SocketDescriptor {
        match Socket::new(Domain::IPV4, Type::STREAM, Some(Protocol::TCP)) {
            Ok(socket) => {
                let descriptor = socket.as_raw_fd() as SocketDescriptor;
                self.endpoints.insert(descriptor, socket);
                self.last_error = 0;
                descriptor
            }
            Err(error) => {
                self.last_error = error.raw_os_error().unwrap_or(libc::EIO);
                -1
            }
        }
    }

    fn connect(
        &mut self,
        descriptor: SocketDescriptor,
        host: &str,
        port: u16,
    ) -> Result<(), SocketError> {
        let address = resolve(host, port)?;
        let socket = match self.endpoints.get(&descriptor) {
            Some(socket) => socket,
            None => {
                self.last_error = libc::EBADF;
                return Err(SocketError::Fatal(format!(
                    "connect on unknown descriptor {}",
                    descriptor
                )));
            }
        };

        match socket.connect(&SockAddr::from(address)) {
            Ok(()) => {
                self.last_error = 0;
                Ok(())
            }
            Err(error) => {
                self.last_error = error.raw_os_error().unwrap_or(libc::EIO);
                Err(SocketError::Fatal(format!(
                    "connect to {}:{} failed: {}",
                    host, port, error
                )))
            }
        }
    }

    fn send(&mut self, descriptor: SocketDescriptor, data: &[u8]) -> isize {
        let socket = match self.endpoints.get(&descriptor) {
            Some(socket) => socket,
            None => {
                self.last_error = libc::EBADF;
                return -1;
            }
        };

        match socket.send(data) {
            Ok(count) => {
                self.last_error = 0;
                count as isize
            }
            Err(error) => {
                self.last_error = error.raw_os_error().unwrap_or(libc::EIO);
                -1
            }
        }
    }

    fn close(&mut self, descriptor: SocketDescriptor) {
        // Dropping the socket closes the descriptor; unknown descriptors
        // are ignored, close is best-effort.
        self.endpoints.remove(&descriptor);
    }

    fn last_error(&self) -> i32 {
        self.last_error
    }
}

fn resolve(host: &str, port: u16) -> Result<SocketAddr, SocketError> {
    let addresses = (host, port).to_socket_addrs().map_err(|error| {
        SocketError::Fatal(format!("cannot resolve {}:{}: {}", host, port, error))
    })?;

    addresses
        .into_iter()
        .find(|address| address.is_ipv4())
        .ok_or_else(|| SocketError::Fatal(format!("no IPv4 address for {}:{}", host, port)))
}
