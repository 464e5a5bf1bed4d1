// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::rc::Rc;
use core::cell::Cell;

/// Shared stop flag for one task.
///
/// Clones observe the same flag. Cancellation is permanent.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Rc<Cell<bool>>,
}

impl CancelToken {
    /// Creates a live token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stops the task. Idempotent.
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    /// Returns `true` once [`CancelToken::cancel`] has been called on any clone.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

/// Holds at most one live task and numbers each activation.
#[derive(Debug, Default)]
pub struct TaskSlot {
    current: Option<CancelToken>,
    generation: u64,
}

impl TaskSlot {
    /// Creates an empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancels any running task and returns the token for a new one.
    pub fn start(&mut self) -> CancelToken {
        self.cancel();
        self.generation += 1;
        let token = CancelToken::new();
        self.current = Some(token.clone());
        token
    }

    /// Cancels the running task, if any.
    pub fn cancel(&mut self) {
        if let Some(token) = self.current.take() {
            if !token.is_cancelled() {
                tracing::trace!(generation = self.generation, "task cancelled");
            }
            token.cancel();
        }
    }

    /// Returns `true` if a task was started and has not been cancelled.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.current.as_ref().is_some_and(|t| !t.is_cancelled())
    }

    /// Number of tasks started so far.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
