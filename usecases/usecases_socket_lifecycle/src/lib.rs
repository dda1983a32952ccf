//! Use Cases Layer: Socket Handle Lifecycle
//!
//! Provides the thin procedures that drive a socket handle through its life:
//! open, close, and kill, plus the data transfer operations connect and send
//! and the server boundary. Each procedure operates on the
//! [`SocketHandle`](entities_socket_state::SocketHandle) entity and delegates
//! OS work to the [`Transport`](entities_socket_state::Transport)
//! collaborator supplied by the adapters layer.

pub mod lifecycle;
pub mod transfer;

pub use lifecycle::{close_socket, kill_socket, open_socket};
pub use transfer::{connect_to_server, run_server, send_data};
