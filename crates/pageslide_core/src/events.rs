//! Notification hub
//!
//! A minimal publish/subscribe registry scoped to one component instance.
//! Listeners subscribe to a notification *kind*; firing a notification
//! invokes every listener registered for its kind, synchronously and in
//! registration order.
//!
//! # Example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use pageslide_core::events::{EventHub, Notification};
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq)]
//! enum Kind { Ping }
//!
//! struct Ping(u32);
//!
//! impl Notification for Ping {
//!     type Kind = Kind;
//!     fn kind(&self) -> Kind { Kind::Ping }
//! }
//!
//! let seen = Rc::new(Cell::new(0));
//! let mut hub = EventHub::new();
//! let sink = seen.clone();
//! let id = hub.add(Kind::Ping, move |p: &Ping| sink.set(p.0));
//!
//! hub.fire(&Ping(7));
//! assert_eq!(seen.get(), 7);
//!
//! assert!(hub.remove(id));
//! hub.fire(&Ping(9));
//! assert_eq!(seen.get(), 7);
//! ```

use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

new_key_type! {
    /// Handle to a registered listener
    pub struct ListenerId;
}

/// A payload that can be dispatched through an [`EventHub`]
pub trait Notification {
    /// Discriminant listeners subscribe to
    type Kind: Copy + Eq + fmt::Debug;

    /// The kind of this notification
    fn kind(&self) -> Self::Kind;
}

/// Listener callback type
pub type ListenerCallback<N> = Box<dyn FnMut(&N)>;

struct Listener<N: Notification> {
    kind: N::Kind,
    callback: ListenerCallback<N>,
}

/// Outcome of a [`EventHub::fire`] call
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FireReport {
    /// Listeners that ran to completion
    pub delivered: usize,
    /// Listeners that panicked (isolated, the rest still ran)
    pub panicked: usize,
}

/// Per-instance publish/subscribe registry
pub struct EventHub<N: Notification> {
    listeners: SlotMap<ListenerId, Listener<N>>,
    /// Registration order
    order: SmallVec<[ListenerId; 4]>,
}

impl<N: Notification> Default for EventHub<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Notification> fmt::Debug for EventHub<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kinds: Vec<_> = self
            .order
            .iter()
            .filter_map(|id| self.listeners.get(*id).map(|l| l.kind))
            .collect();
        f.debug_struct("EventHub").field("listeners", &kinds).finish()
    }
}

impl<N: Notification> EventHub<N> {
    /// Create an empty hub
    pub fn new() -> Self {
        Self {
            listeners: SlotMap::with_key(),
            order: SmallVec::new(),
        }
    }

    /// Register `callback` for notifications of `kind`
    ///
    /// Returns a handle for [`remove`](Self::remove).
    pub fn add<F>(&mut self, kind: N::Kind, callback: F) -> ListenerId
    where
        F: FnMut(&N) + 'static,
    {
        let id = self.listeners.insert(Listener {
            kind,
            callback: Box::new(callback),
        });
        self.order.push(id);
        id
    }

    /// Unregister a listener
    ///
    /// Returns `false` if the handle was already removed.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        if self.listeners.remove(id).is_none() {
            return false;
        }
        self.order.retain(|entry| *entry != id);
        true
    }

    /// Unregister every listener of `kind`, returning how many were removed
    pub fn remove_kind(&mut self, kind: N::Kind) -> usize {
        let before = self.listeners.len();
        self.listeners.retain(|_, listener| listener.kind != kind);
        let listeners = &self.listeners;
        self.order.retain(|id| listeners.contains_key(*id));
        before - self.listeners.len()
    }

    /// Number of listeners registered for `kind`
    pub fn count(&self, kind: N::Kind) -> usize {
        self.listeners.values().filter(|l| l.kind == kind).count()
    }

    /// Total number of listeners
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Whether no listener is registered
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Invoke every listener registered for the notification's kind
    ///
    /// A panicking listener is isolated: the panic is logged and the remaining
    /// listeners still run.
    pub fn fire(&mut self, notification: &N) -> FireReport {
        let kind = notification.kind();
        let mut report = FireReport::default();

        for id in self.order.iter().copied() {
            let Some(listener) = self.listeners.get_mut(id) else {
                continue;
            };
            if listener.kind != kind {
                continue;
            }
            let callback = &mut listener.callback;
            match catch_unwind(AssertUnwindSafe(|| callback(notification))) {
                Ok(()) => report.delivered += 1,
                Err(_) => {
                    report.panicked += 1;
                    tracing::warn!("listener {:?} for {:?} panicked; continuing", id, kind);
                }
            }
        }

        report
    }
}
