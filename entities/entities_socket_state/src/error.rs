//! Socket Error Module
//!
//! Provides the error type shared by all layers of the socket abstraction.

use crate::state::SocketType;
use std::fmt;

/// Socket error types
///
/// The fatal variants replace the process-terminating paths of the original
/// API: this layer reports an unrecoverable condition and leaves the
/// decision to exit to the top-level caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SocketError {
    /// A handle was requested with the Unknown socket type
    UnknownType,
    /// The transport failed to produce a usable descriptor
    EndpointFailed,
    /// The operation requires the handle to be in the Ready state
    NotReady,
    /// The transport send primitive failed; carries the OS errno, which is
    /// also recorded on the handle
    SendFailed(i32),
    /// The operation was invoked on a handle of the wrong type; treated as
    /// a programming error, not recoverable at this layer
    TypeMismatch {
        /// Type the operation requires
        expected: SocketType,
        /// Type the handle actually has
        actual: SocketType,
    },
    /// Unrecoverable condition; only the top-level caller should decide
    /// whether to terminate
    Fatal(String),
}

impl SocketError {
    /// Whether this error is unrecoverable at the socket layer
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            SocketError::TypeMismatch { .. } | SocketError::Fatal(_)
        )
    }
}

impl fmt::Display for SocketError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SocketError::UnknownType => {
                write!(f, "cannot open a socket of unknown type")
            }
            SocketError::EndpointFailed => {
                write!(f, "transport failed to create a socket endpoint")
            }
            SocketError::NotReady => {
                write!(f, "socket is not in the Ready state")
            }
            SocketError::SendFailed(errno) => {
                write!(f, "send failed with OS error {}", errno)
            }
            SocketError::TypeMismatch { expected, actual } => {
                write!(
                    f,
                    "operation requires a {:?} socket but the handle is {:?}",
                    expected, actual
                )
            }
            SocketError::Fatal(message) => write!(f, "{}", message),
        }
    }
}
