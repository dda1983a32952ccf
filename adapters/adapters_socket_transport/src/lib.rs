//! Adapters Layer: Socket Transport
//!
//! Provides the real [`Transport`](entities_socket_state::Transport)
//! implementation over the `socket2` crate: blocking TCP endpoint creation,
//! connect, send, and close, addressed by raw descriptor the way the handle
//! layer expects.

pub mod tcp;

pub use tcp::TcpTransport;
