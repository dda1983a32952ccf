//! API Facades Layer
//!
//! Provides facades that mirror the shape of the original C socket API
//! (OpenSocket, CloseSocket, Send, SetSocketState, ...). The facades keep
//! the C surface's sentinel conventions - `None` stands in for the invalid
//! handle value, `-1` for the send error result - while delegating all
//! behavior to the inner layers.
//!
//! All facades call underlying Rust modules from inner layers; the
//! process-terminating paths of the C API surface here as fatal error
//! values for the top-level caller to act on.

pub mod socket_facades;

pub use socket_facades::*;
