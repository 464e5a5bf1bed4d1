// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover tracking for flat card layouts.
//!
//! Cards do not nest, so hover is a single optional key rather than a path.
//! A leave for a card that is no longer hovered (because the pointer already
//! entered a neighbour) is ignored, which keeps out-of-order enter/leave pairs
//! from clearing the newer hover.
//!
//! ```
//! use vitrine_gesture::hover::HoverState;
//!
//! let mut hover = HoverState::new();
//! assert!(hover.enter("a"));
//! assert!(hover.enter("b"));
//! assert!(!hover.leave(&"a")); // stale leave
//! assert_eq!(hover.current(), Some(&"b"));
//! ```

/// The single key currently under the pointer.
#[derive(Clone, Debug)]
pub struct HoverState<K> {
    hovered: Option<K>,
}

impl<K> Default for HoverState<K> {
    fn default() -> Self {
        Self { hovered: None }
    }
}

impl<K: PartialEq> HoverState<K> {
    /// Creates an empty hover state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The hovered key, if any.
    #[must_use]
    pub fn current(&self) -> Option<&K> {
        self.hovered.as_ref()
    }

    /// Returns `true` if `key` is hovered.
    #[must_use]
    pub fn is_hovered(&self, key: &K) -> bool {
        self.hovered.as_ref() == Some(key)
    }

    /// Pointer entered `key`. Returns `true` if the hovered key changed.
    pub fn enter(&mut self, key: K) -> bool {
        if self.hovered.as_ref() == Some(&key) {
            return false;
        }
        self.hovered = Some(key);
        true
    }

    /// Pointer left `key`. Returns `true` if hover was cleared.
    pub fn leave(&mut self, key: &K) -> bool {
        if self.hovered.as_ref() == Some(key) {
            self.hovered = None;
            true
        } else {
            false
        }
    }

    /// Clears hover unconditionally.
    pub fn clear(&mut self) {
        self.hovered = None;
    }
}
