// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hashbrown::HashMap;
use kurbo::Vec2;
use vitrine_project::ProjectId;

/// Per-card drag offsets, keyed by project id.
///
/// A card without an entry has a zero offset.
#[derive(Clone, Debug, Default)]
pub struct DragOffsets {
    offsets: HashMap<ProjectId, Vec2>,
}

impl DragOffsets {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Offset of `id`, or zero if it was never dragged.
    #[must_use]
    pub fn get(&self, id: &ProjectId) -> Vec2 {
        self.offsets.get(id).copied().unwrap_or(Vec2::ZERO)
    }

    /// Stores the offset of `id`.
    pub fn set(&mut self, id: ProjectId, offset: Vec2) {
        self.offsets.insert(id, offset);
    }

    /// Forgets the offset of `id`. Returns `true` if it had one.
    pub fn clear(&mut self, id: &ProjectId) -> bool {
        self.offsets.remove(id).is_some()
    }

    /// Forgets every offset.
    pub fn clear_all(&mut self) {
        self.offsets.clear();
    }

    /// Number of cards with a stored offset.
    #[must_use]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Returns `true` if no card has a stored offset.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Iterates stored offsets in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&ProjectId, Vec2)> + '_ {
        self.offsets.iter().map(|(id, offset)| (id, *offset))
    }
}
