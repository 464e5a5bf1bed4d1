// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

/// Handle to work requested for the next frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FrameId(u64);

/// Work deferred to the next animation frame.
///
/// The host calls [`FrameQueue::take`] once per frame. Requests made while
/// handling a frame land in the following one.
#[derive(Debug)]
pub struct FrameQueue<T> {
    pending: Vec<(FrameId, T)>,
    next_id: u64,
}

impl<T> Default for FrameQueue<T> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
            next_id: 0,
        }
    }
}

impl<T> FrameQueue<T> {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests `payload` on the next frame.
    pub fn request(&mut self, payload: T) -> FrameId {
        let id = FrameId(self.next_id);
        self.next_id += 1;
        self.pending.push((id, payload));
        id
    }

    /// Withdraws a request. Returns `false` if it was already taken.
    pub fn cancel(&mut self, id: FrameId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|(pending, _)| *pending != id);
        before != self.pending.len()
    }

    /// Drops every pending request.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Returns `true` if anything is waiting for a frame.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Takes all requests for this frame, in request order.
    pub fn take(&mut self) -> Vec<T> {
        core::mem::take(&mut self.pending)
            .into_iter()
            .map(|(_, payload)| payload)
            .collect()
    }
}
