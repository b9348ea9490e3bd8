#![forbid(unsafe_code)]

//! Single-threaded event hub for control notifications.
//!
//! Controls expose one [`EventHub`] per notification kind (text changed,
//! focus lost, click, ...). Listeners are plain closures registered on
//! the UI thread; `emit` dispatches synchronously on the same thread.
//!
//! Subscribing returns a [`ListenerToken`] disposer. The validation
//! engine holds its tokens for the lifetime of the bound input, which
//! lets tests simulate firing and inspect wiring without a live UI
//! toolkit.
//!
//! Dispatch snapshots the listener list before invoking anything, so a
//! listener may subscribe or unsubscribe on the hub that is currently
//! emitting. The engine relies on this: a validation failure raised from
//! a change event arms further change listeners on the same hub.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// Identifies one registered listener within a hub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Callback type stored by a hub.
type Listener<T> = Rc<dyn Fn(&T)>;

/// A synchronous, single-threaded listener registry.
///
/// Not `Send`/`Sync` by construction: all engine operations execute on
/// the UI/event-dispatch thread.
pub struct EventHub<T> {
    listeners: RefCell<Vec<(ListenerId, Listener<T>)>>,
    next_id: Cell<u64>,
}

impl<T> Default for EventHub<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for EventHub<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventHub")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl<T> EventHub<T> {
    /// Create an empty hub.
    pub fn new() -> Self {
        Self {
            listeners: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        }
    }

    /// Register a listener and return its id.
    ///
    /// Registration happens-before any event the listener can observe:
    /// dispatch only picks up the listener on the next `emit`.
    pub fn subscribe(&self, listener: impl Fn(&T) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        #[cfg(feature = "tracing")]
        tracing::trace!(id = id.0, listeners = self.listener_count(), "listener registered");
        id
    }

    /// Remove a listener. Returns `true` if it was registered.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(lid, _)| *lid != id);
        let removed = listeners.len() != before;
        #[cfg(feature = "tracing")]
        tracing::trace!(id = id.0, removed, "listener unregistered");
        removed
    }

    /// Dispatch `args` to every listener registered at the start of the
    /// call.
    pub fn emit(&self, args: &T) {
        // Snapshot so listeners can mutate the registry mid-dispatch.
        let snapshot: Vec<Listener<T>> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();
        #[cfg(feature = "tracing")]
        tracing::trace!(listeners = snapshot.len(), "dispatching event");
        for listener in snapshot {
            listener(args);
        }
    }

    /// Number of currently registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

/// Disposer handle for one registration.
///
/// The engine keeps its tokens alive for the lifetime of the bound input
/// (there is no teardown path; controls and engine drop together). Tests
/// use [`ListenerToken::detach`] to unwire a listener explicitly.
pub struct ListenerToken {
    id: ListenerId,
    detach: Option<Box<dyn FnOnce()>>,
}

impl fmt::Debug for ListenerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerToken").field("id", &self.id).finish()
    }
}

impl ListenerToken {
    /// Wrap a registration with its detach action.
    pub fn new(id: ListenerId, detach: impl FnOnce() + 'static) -> Self {
        Self {
            id,
            detach: Some(Box::new(detach)),
        }
    }

    /// The registration this token controls.
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Unregister the listener now.
    pub fn detach(mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}
