// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hashbrown::HashSet;
use vitrine_project::ProjectId;

use crate::TimelineEntry;

/// Horizontal band of the rail considered on screen. Both ends are inclusive.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RevealWindow {
    /// Leftmost visible position.
    pub start: f64,
    /// Rightmost visible position.
    pub end: f64,
}

impl RevealWindow {
    /// The viewport `[scroll_left, scroll_left + viewport_width]` grown by
    /// `buffer` on each side.
    #[must_use]
    pub fn new(scroll_left: f64, viewport_width: f64, buffer: f64) -> Self {
        Self {
            start: scroll_left - buffer,
            end: scroll_left + viewport_width + buffer,
        }
    }

    /// Returns `true` if `x` lies inside the window.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        x >= self.start && x <= self.end
    }
}

/// Set of cards currently inside the reveal window.
#[derive(Clone, Debug, Default)]
pub struct Visibility {
    visible: HashSet<ProjectId>,
}

impl Visibility {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recomputes the set from card positions. Returns `true` if it changed.
    pub fn update(&mut self, entries: &[TimelineEntry], window: RevealWindow) -> bool {
        let next: HashSet<ProjectId> = entries
            .iter()
            .filter(|e| window.contains(e.left()))
            .map(|e| e.id.clone())
            .collect();
        if next == self.visible {
            return false;
        }
        tracing::trace!(visible = next.len(), "timeline visibility changed");
        self.visible = next;
        true
    }

    /// Returns `true` if `id` is visible.
    #[must_use]
    pub fn contains(&self, id: &ProjectId) -> bool {
        self.visible.contains(id)
    }

    /// Number of visible cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.visible.len()
    }

    /// Returns `true` if nothing is visible.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// Empties the set.
    pub fn clear(&mut self) {
        self.visible.clear();
    }
}
