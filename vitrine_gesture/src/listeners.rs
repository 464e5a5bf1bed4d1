// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scoped registration of host event listeners.
//!
//! A view that needs window- or container-level listeners acquires a
//! [`ListenerScope`] when it becomes active. Dropping the scope detaches every
//! listener it attached, so toggling between views any number of times never
//! accumulates duplicate listeners.
//!
//! Hosts implement [`ListenerHost`] on top of their event system. Methods take
//! `&self`: a host is shared between the scopes that borrow it and is expected
//! to use interior mutability, the way a DOM event target does.
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use vitrine_gesture::listeners::{EventKinds, ListenTarget, ListenerHost, ListenerScope};
//!
//! #[derive(Default)]
//! struct Host {
//!     live: RefCell<Vec<u32>>,
//!     next: RefCell<u32>,
//! }
//!
//! impl ListenerHost for Host {
//!     type Handle = u32;
//!     fn attach(&self, _target: ListenTarget, _kind: EventKinds) -> u32 {
//!         let mut next = self.next.borrow_mut();
//!         *next += 1;
//!         self.live.borrow_mut().push(*next);
//!         *next
//!     }
//!     fn detach(&self, handle: u32) {
//!         self.live.borrow_mut().retain(|h| *h != handle);
//!     }
//! }
//!
//! let host = Rc::new(Host::default());
//! let scope = ListenerScope::acquire(
//!     &host,
//!     "scatter",
//!     &[(ListenTarget::Window, EventKinds::POINTER_MOVE | EventKinds::POINTER_UP)],
//! );
//! assert_eq!(host.live.borrow().len(), 2);
//! drop(scope);
//! assert!(host.live.borrow().is_empty());
//! ```

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::fmt;

bitflags::bitflags! {
    /// Kinds of host events a view can listen for.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct EventKinds: u16 {
        /// Pointer (mouse or pen) pressed.
        const POINTER_DOWN = 1 << 0;
        /// Pointer moved.
        const POINTER_MOVE = 1 << 1;
        /// Pointer released.
        const POINTER_UP = 1 << 2;
        /// Pointer entered the target.
        const POINTER_ENTER = 1 << 3;
        /// Pointer left the target.
        const POINTER_LEAVE = 1 << 4;
        /// Touch started.
        const TOUCH_START = 1 << 5;
        /// Wheel or trackpad scroll input.
        const WHEEL = 1 << 6;
        /// Scroll position changed.
        const SCROLL = 1 << 7;
        /// Size changed.
        const RESIZE = 1 << 8;
    }
}

/// Where a listener is attached.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ListenTarget {
    /// The top-level window.
    Window,
    /// The view's own container element.
    Container,
}

/// A host event system that can attach and detach listeners.
pub trait ListenerHost {
    /// Opaque registration handle.
    type Handle;

    /// Attaches a listener for exactly one event kind on `target`.
    fn attach(&self, target: ListenTarget, kind: EventKinds) -> Self::Handle;

    /// Detaches a listener previously returned by [`ListenerHost::attach`].
    fn detach(&self, handle: Self::Handle);
}

/// Listeners attached for one activation of a view.
///
/// Every listener is detached when the scope is dropped.
pub struct ListenerScope<H: ListenerHost> {
    host: Rc<H>,
    label: &'static str,
    handles: Vec<H::Handle>,
}

impl<H: ListenerHost> ListenerScope<H> {
    /// Attaches one listener per event kind in each `(target, kinds)` request.
    pub fn acquire(host: &Rc<H>, label: &'static str, requests: &[(ListenTarget, EventKinds)]) -> Self {
        let mut handles = Vec::new();
        for &(target, kinds) in requests {
            for kind in kinds.iter() {
                handles.push(host.attach(target, kind));
            }
        }
        tracing::debug!(label, count = handles.len(), "listener scope acquired");
        Self {
            host: Rc::clone(host),
            label,
            handles,
        }
    }

    /// Name given at acquisition, for diagnostics.
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Number of attached listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Returns `true` if nothing was attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Detaches everything now. Equivalent to dropping the scope.
    pub fn release(self) {}
}

impl<H: ListenerHost> Drop for ListenerScope<H> {
    fn drop(&mut self) {
        let count = self.handles.len();
        for handle in self.handles.drain(..) {
            self.host.detach(handle);
        }
        tracing::debug!(label = self.label, count, "listener scope released");
    }
}

impl<H: ListenerHost> fmt::Debug for ListenerScope<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerScope")
            .field("label", &self.label)
            .field("listeners", &self.handles.len())
            .finish_non_exhaustive()
    }
}
