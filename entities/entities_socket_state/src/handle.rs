//! Socket Handle Module
//!
//! Provides the opaque socket handle record and its state transition engine.
//! Based on the _tagSOCKET record of the original C API: a raw descriptor
//! wrapped together with lifecycle state, role, last-error snapshot, and the
//! registered state-change callback.

use crate::event::{EventContext, SocketEventHandler};
use crate::state::{SocketState, SocketType};
use std::rc::Rc;

/// Raw transport descriptor, as handed out by the operating system
pub type SocketDescriptor = i32;

/// Highest reserved descriptor value. Descriptors 0 through 2 map to the
/// standard streams, so any descriptor at or below this value marks a handle
/// that was never successfully opened; such a handle rejects all state and
/// type mutation.
pub const INVALID_SOCKET_DESCRIPTOR: SocketDescriptor = 2;

/// Opaque socket handle
///
/// Owns its descriptor and its state for its whole life. A handle is created
/// by the open operation, mutated only through the state and type setters
/// here, and consumed by the close operation; after close the caller's
/// binding is gone and reuse is a compile error.
///
/// Handles are single-threaded by design: transitions and callback
/// invocations run in-line on the calling thread, and no synchronization
/// guards the fields.
pub struct SocketHandle {
    descriptor: SocketDescriptor,
    last_error: i32,
    socket_type: SocketType,
    socket_state: SocketState,
    callback: Option<Rc<dyn SocketEventHandler>>,
}

impl SocketHandle {
    /// Create a handle around an already-acquired descriptor
    ///
    /// The handle starts with `Unknown` state and type; the open operation
    /// is responsible for validating the descriptor and driving the handle
    /// to `Opened`.
    pub fn new(
        descriptor: SocketDescriptor,
        callback: Rc<dyn SocketEventHandler>,
    ) -> Self {
        Self {
            descriptor,
            last_error: 0,
            socket_type: SocketType::Unknown,
            socket_state: SocketState::Unknown,
            callback: Some(callback),
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> SocketState {
        self.socket_state
    }

    /// Role this handle was opened as
    pub fn socket_type(&self) -> SocketType {
        self.socket_type
    }

    /// OS error code for the last network error
    ///
    /// Meaningful only while the handle is in the `Error` state; returns 0
    /// otherwise.
    pub fn last_error(&self) -> i32 {
        if self.socket_state == SocketState::Error {
            self.last_error
        } else {
            0
        }
    }

    /// The underlying transport descriptor
    ///
    /// Exposed for transport collaborators, which address endpoints by
    /// descriptor; application code should stay on the handle operations.
    pub fn raw_descriptor(&self) -> SocketDescriptor {
        self.descriptor
    }

    /// Whether a state-change callback is registered
    pub fn has_callback(&self) -> bool {
        self.callback.is_some()
    }

    /// Set the handle's state, notifying the callback with an empty context
    ///
    /// Alias for [`set_state_with`](Self::set_state_with) with
    /// `EventContext::None`.
    pub fn set_state(&mut self, new_state: SocketState) {
        self.set_state_with(new_state, EventContext::None);
    }

    /// Set the handle's state, notifying the callback with the given context
    ///
    /// Does nothing if the descriptor is at or below the reserved sentinel
    /// or if the handle is already trapped in `Error`. Otherwise the state
    /// is assigned unconditionally; no legality graph is enforced beyond the
    /// `Error` trap.
    ///
    /// If a callback is registered and the new state is not `Ready`, it is
    /// invoked synchronously before this function returns. Entry into
    /// `Ready` deliberately skips notification so a handler can mark the
    /// handle reusable without re-entering itself.
    pub fn set_state_with(&mut self, new_state: SocketState, context: EventContext) {
        if self.descriptor <= INVALID_SOCKET_DESCRIPTOR {
            return;
        }
        if self.socket_state == SocketState::Error {
            return;
        }

        self.socket_state = new_state;

        if new_state == SocketState::Ready {
            return;
        }
        self.notify(context);
    }

    /// Set the handle's role
    ///
    /// Same guard clauses as [`set_state`](Self::set_state), and additionally
    /// does nothing once the type has been set to anything other than
    /// `Unknown`: a handle's role is assigned at most once. On success the
    /// callback is notified with an empty context.
    pub fn set_type(&mut self, new_type: SocketType) {
        if self.descriptor <= INVALID_SOCKET_DESCRIPTOR {
            return;
        }
        if self.socket_state == SocketState::Error {
            return;
        }
        if self.socket_type != SocketType::Unknown {
            return;
        }

        self.socket_type = new_type;
        self.notify(EventContext::None);
    }

    /// Record an OS error and trap the handle in the `Error` state
    ///
    /// The errno is stored before the transition so the callback fired on
    /// entry into `Error` can already observe it. After this call the handle
    /// accepts no further state or type changes; recovery means closing it
    /// and opening a new one.
    pub fn enter_error(&mut self, errno: i32) {
        self.last_error = errno;
        self.set_state(SocketState::Error);
    }

    // Invokes the registered callback with the handle itself. The Rc is
    // cloned first so the handler can mutate the handle it is observing.
    fn notify(&mut self, context: EventContext) {
        if let Some(callback) = self.callback.clone() {
            callback.on_state_change(self, context);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records every (state, context) pair the callback observes. When
    /// `make_ready` is set it honors the handler contract and returns the
    /// handle to `Ready`.
    struct RecordingHandler {
        events: RefCell<Vec<(SocketState, EventContext)>>,
        make_ready: bool,
    }

    impl RecordingHandler {
        fn new(make_ready: bool) -> Rc<Self> {
            Rc::new(Self {
                events: RefCell::new(Vec::new()),
                make_ready,
            })
        }

        fn events(&self) -> Vec<(SocketState, EventContext)> {
            self.events.borrow().clone()
        }
    }

    impl SocketEventHandler for RecordingHandler {
        fn on_state_change(&self, socket: &mut SocketHandle, context: EventContext) {
            self.events.borrow_mut().push((socket.state(), context));
            if self.make_ready {
                socket.set_state(SocketState::Ready);
            }
        }
    }

    fn handle_with(descriptor: SocketDescriptor, handler: &Rc<RecordingHandler>) -> SocketHandle {
        SocketHandle::new(descriptor, Rc::clone(handler) as Rc<dyn SocketEventHandler>)
    }

    #[test]
    fn test_new_handle_defaults() {
        let handler = RecordingHandler::new(false);
        let handle = handle_with(5, &handler);

        assert_eq!(handle.state(), SocketState::Unknown);
        assert_eq!(handle.socket_type(), SocketType::Unknown);
        assert_eq!(handle.last_error(), 0);
        assert_eq!(handle.raw_descriptor(), 5);
        assert!(handle.has_callback());
    }

    #[test]
    fn test_set_state_assigns_and_notifies() {
        let handler = RecordingHandler::new(false);
        let mut handle = handle_with(5, &handler);

        handle.set_state(SocketState::Opened);

        assert_eq!(handle.state(), SocketState::Opened);
        assert_eq!(
            handler.events(),
            vec![(SocketState::Opened, EventContext::None)]
        );
    }

    #[test]
    fn test_set_state_ready_skips_callback() {
        let handler = RecordingHandler::new(false);
        let mut handle = handle_with(5, &handler);

        handle.set_state(SocketState::Ready);

        assert_eq!(handle.state(), SocketState::Ready);
        assert!(handler.events().is_empty());
    }

    #[test]
    fn test_every_non_ready_state_notifies() {
        let states = [
            SocketState::Accepted,
            SocketState::Accepting,
            SocketState::Binding,
            SocketState::Bound,
            SocketState::Closing,
            SocketState::Closed,
            SocketState::Connecting,
            SocketState::Connected,
            SocketState::Disconnected,
            SocketState::Opened,
            SocketState::Sending,
            SocketState::Sent,
            SocketState::Receiving,
            SocketState::Received,
            SocketState::Listening,
        ];

        for state in states {
            let handler = RecordingHandler::new(false);
            let mut handle = handle_with(5, &handler);
            handle.set_state(state);
            assert_eq!(handler.events(), vec![(state, EventContext::None)]);
        }
    }

    #[test]
    fn test_set_state_with_context_reaches_callback() {
        let handler = RecordingHandler::new(false);
        let mut handle = handle_with(5, &handler);

        handle.set_state_with(SocketState::Sent, EventContext::BytesSent(4));

        assert_eq!(
            handler.events(),
            vec![(SocketState::Sent, EventContext::BytesSent(4))]
        );
    }

    #[test]
    fn test_invalid_descriptor_rejects_mutation() {
        // Descriptors 0..=2 are reserved; such a handle was never opened.
        for descriptor in [0, 1, 2, -1] {
            let handler = RecordingHandler::new(false);
            let mut handle = handle_with(descriptor, &handler);

            handle.set_state(SocketState::Opened);
            handle.set_type(SocketType::Client);

            assert_eq!(handle.state(), SocketState::Unknown);
            assert_eq!(handle.socket_type(), SocketType::Unknown);
            assert!(handler.events().is_empty());
        }
    }

    #[test]
    fn test_error_is_a_one_way_trap() {
        let handler = RecordingHandler::new(false);
        let mut handle = handle_with(5, &handler);

        handle.enter_error(104);
        assert_eq!(handle.state(), SocketState::Error);

        handle.set_state(SocketState::Opened);
        handle.set_state(SocketState::Ready);
        handle.set_type(SocketType::Client);

        assert_eq!(handle.state(), SocketState::Error);
        assert_eq!(handle.socket_type(), SocketType::Unknown);
        // Only the Error entry itself reached the callback.
        assert_eq!(
            handler.events(),
            vec![(SocketState::Error, EventContext::None)]
        );
    }

    #[test]
    fn test_enter_error_records_errno_before_callback() {
        struct ErrnoObserver {
            seen: RefCell<Option<i32>>,
        }

        impl SocketEventHandler for ErrnoObserver {
            fn on_state_change(&self, socket: &mut SocketHandle, _context: EventContext) {
                *self.seen.borrow_mut() = Some(socket.last_error());
            }
        }

        let observer = Rc::new(ErrnoObserver {
            seen: RefCell::new(None),
        });
        let mut handle =
            SocketHandle::new(5, Rc::clone(&observer) as Rc<dyn SocketEventHandler>);

        handle.enter_error(111);

        assert_eq!(*observer.seen.borrow(), Some(111));
        assert_eq!(handle.last_error(), 111);
    }

    #[test]
    fn test_last_error_gated_on_error_state() {
        let handler = RecordingHandler::new(false);
        let mut handle = handle_with(5, &handler);

        assert_eq!(handle.last_error(), 0);
        handle.set_state(SocketState::Opened);
        assert_eq!(handle.last_error(), 0);

        handle.enter_error(32);
        assert_eq!(handle.last_error(), 32);
    }

    #[test]
    fn test_set_type_succeeds_once() {
        let handler = RecordingHandler::new(false);
        let mut handle = handle_with(5, &handler);

        handle.set_type(SocketType::Client);
        assert_eq!(handle.socket_type(), SocketType::Client);

        // A second assignment with a different type is a no-op.
        handle.set_type(SocketType::Server);
        assert_eq!(handle.socket_type(), SocketType::Client);

        // Only the first assignment notified.
        assert_eq!(handler.events().len(), 1);
    }

    #[test]
    fn test_set_type_notifies_with_empty_context() {
        let handler = RecordingHandler::new(false);
        let mut handle = handle_with(5, &handler);

        handle.set_type(SocketType::Server);

        assert_eq!(
            handler.events(),
            vec![(SocketState::Unknown, EventContext::None)]
        );
    }

    #[test]
    fn test_handler_can_return_handle_to_ready() {
        let handler = RecordingHandler::new(true);
        let mut handle = handle_with(5, &handler);

        handle.set_state(SocketState::Opened);

        // The handler observed Opened, then moved the handle to Ready
        // without a second notification.
        assert_eq!(
            handler.events(),
            vec![(SocketState::Opened, EventContext::None)]
        );
        assert_eq!(handle.state(), SocketState::Ready);
    }

    #[test]
    fn test_ready_from_handler_does_not_reenter() {
        // A handler that always sets Ready must observe exactly one event
        // per external transition, never its own.
        let handler = RecordingHandler::new(true);
        let mut handle = handle_with(5, &handler);

        handle.set_state(SocketState::Connecting);
        handle.set_state(SocketState::Connected);

        assert_eq!(
            handler.events(),
            vec![
                (SocketState::Connecting, EventContext::None),
                (SocketState::Connected, EventContext::None),
            ]
        );
    }
}
