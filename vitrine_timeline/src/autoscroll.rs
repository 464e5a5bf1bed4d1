// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use vitrine_timing::{CancelToken, Easing, FrameQueue, TaskSlot, Tween};

/// The slow eased reveal that pans the rail toward the most recent card.
///
/// The animation is a self-rescheduling frame loop: each step requests the
/// next frame, tagged with the token of the activation that started it.
/// Starting again, stopping, or interrupting cancels that token, so a stale
/// request is dropped when its frame arrives and two loops never drive the
/// same container.
///
/// An interrupt (wheel, pointer-down, touch) is one-shot per activation: once
/// set, the loop does not resume until [`AutoScroll::start`] is called again.
#[derive(Debug, Default)]
pub struct AutoScroll {
    slot: TaskSlot,
    frames: FrameQueue<CancelToken>,
    tween: Option<Tween>,
    interrupted: bool,
}

impl AutoScroll {
    /// Creates an idle animation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a fresh reveal from `from` to `to` at timestamp `now`.
    ///
    /// Supersedes any running reveal and clears a previous interrupt.
    pub fn start(&mut self, from: f64, to: f64, duration_ms: f64, now: f64) {
        let token = self.slot.start();
        self.frames.clear();
        self.frames.request(token);
        self.tween = Some(Tween::new(from, to, duration_ms, now, Easing::CubicOut));
        self.interrupted = false;
        tracing::debug!(from, to, duration_ms, "auto-scroll started");
    }

    /// Stops the reveal because the user took over. Returns `true` if it was
    /// running.
    pub fn interrupt(&mut self) -> bool {
        self.interrupted = true;
        let was_running = self.is_running();
        self.halt();
        if was_running {
            tracing::debug!("auto-scroll interrupted by user input");
        }
        was_running
    }

    /// Stops the reveal without marking it interrupted, e.g. on teardown.
    pub fn stop(&mut self) {
        self.halt();
    }

    fn halt(&mut self) {
        self.slot.cancel();
        self.frames.clear();
        self.tween = None;
    }

    /// Moves the end of a running reveal to `to`, keeping its start time.
    pub fn retarget(&mut self, to: f64) -> bool {
        match self.tween.as_mut() {
            Some(tween) if self.slot.is_active() => {
                tween.retarget(to);
                tracing::trace!(to, "auto-scroll retargeted");
                true
            }
            _ => false,
        }
    }

    /// Returns `true` while the reveal wants frames.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.slot.is_active() && self.frames.has_pending()
    }

    /// Returns `true` if user input stopped this activation's reveal.
    #[must_use]
    pub fn is_interrupted(&self) -> bool {
        self.interrupted
    }

    /// End value of the current reveal.
    #[must_use]
    pub fn target(&self) -> Option<f64> {
        self.tween.map(|t| t.end_value())
    }

    /// Runs one frame. Returns the scroll position to apply, if any.
    pub fn on_frame(&mut self, now: f64) -> Option<f64> {
        let token = self
            .frames
            .take()
            .into_iter()
            .find(|token| !token.is_cancelled())?;
        if self.interrupted {
            return None;
        }
        let tween = self.tween?;
        let sample = tween.sample(now);
        if sample.is_finished() {
            self.slot.cancel();
            self.tween = None;
            tracing::debug!(position = sample.value, "auto-scroll finished");
        } else {
            self.frames.request(token);
        }
        tracing::trace!(
            position = sample.value,
            progress = sample.progress,
            "auto-scroll step"
        );
        Some(sample.value)
    }
}
