//! Entities Layer: Socket Handle and State Machine
//!
//! Provides the core domain types for the handle-based socket abstraction:
//! the opaque [`SocketHandle`] record, the [`SocketState`] and [`SocketType`]
//! enumerations, the state transition engine, and the contracts that outer
//! layers implement ([`SocketEventHandler`] for state-change notification,
//! [`Transport`] for the OS-level socket primitives).
//!
//! ## Overview
//!
//! A socket handle wraps a raw descriptor together with its lifecycle state,
//! its role (client, data, or server), and an optional state-change callback.
//! Every state transition except entry into [`SocketState::Ready`] notifies
//! the registered callback synchronously, before the triggering operation
//! returns. The `Ready` exemption exists so a callback can mark the handle
//! reusable without re-entering notification.
//!
//! ## Architecture
//!
//! This crate is the entities layer of the CLEAN architecture layout. It has
//! no dependencies; the use cases layer drives handle lifecycle operations
//! through it, and the adapters layer supplies the [`Transport`]
//! implementation.

pub mod error;
pub mod event;
pub mod handle;
pub mod state;
pub mod transport;

pub use error::SocketError;
pub use event::{EventContext, SocketEventHandler};
pub use handle::{SocketDescriptor, SocketHandle, INVALID_SOCKET_DESCRIPTOR};
pub use state::{SocketState, SocketType};
pub use transport::{ServerLoop, Transport};
