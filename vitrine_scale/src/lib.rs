// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vitrine Scale: responsive scale factors shared by every card layout.
//!
//! Both the scatter and the timeline size their cards from one discrete scale
//! factor chosen by viewport width, so a card looks the same in either view at
//! a given breakpoint. The default ladder is:
//!
//! | viewport width | scale |
//! |---|---|
//! | `< 480` | `0.6` |
//! | `< 640` | `0.7` |
//! | `< 820` | `0.8` |
//! | `< 1024` | `0.9` |
//! | otherwise | `1.0` |
//!
//! Thresholds are exclusive upper bounds.
//!
//! ```rust
//! use vitrine_scale::resolve_scale;
//!
//! assert_eq!(resolve_scale(479.0), 0.6);
//! assert_eq!(resolve_scale(480.0), 0.7);
//! assert_eq!(resolve_scale(1920.0), 1.0);
//! ```
//!
//! [`ScaleTracker`] keeps the last resolved value for a host that feeds it
//! resize events, either immediately ([`ScaleTracker::observe`]) or coalesced
//! to one recompute per animation frame ([`ScaleTracker::queue`] +
//! [`ScaleTracker::flush`]).
//!
//! This crate is `no_std`.

#![no_std]

/// One step of the breakpoint ladder.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Breakpoint {
    /// Widths strictly below this value use `scale`.
    pub below: f64,
    /// Scale factor for this step.
    pub scale: f64,
}

/// Ordered breakpoints plus the scale used above the last one.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScaleBreakpoints {
    /// Steps in increasing `below` order.
    pub steps: [Breakpoint; 4],
    /// Scale for widths at or above the last step.
    pub wide: f64,
}

impl ScaleBreakpoints {
    /// The default ladder.
    pub const DEFAULT: Self = Self {
        steps: [
            Breakpoint {
                below: 480.0,
                scale: 0.6,
            },
            Breakpoint {
                below: 640.0,
                scale: 0.7,
            },
            Breakpoint {
                below: 820.0,
                scale: 0.8,
            },
            Breakpoint {
                below: 1024.0,
                scale: 0.9,
            },
        ],
        wide: 1.0,
    };

    /// Resolves the scale for `viewport_width`.
    ///
    /// Non-finite widths (a host reporting `NaN` before layout) resolve to the
    /// wide scale.
    #[must_use]
    pub fn resolve(&self, viewport_width: f64) -> f64 {
        self.steps
            .iter()
            .find(|step| viewport_width < step.below)
            .map_or(self.wide, |step| step.scale)
    }
}

impl Default for ScaleBreakpoints {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Resolves the scale for `viewport_width` with the default ladder.
#[must_use]
pub fn resolve_scale(viewport_width: f64) -> f64 {
    ScaleBreakpoints::DEFAULT.resolve(viewport_width)
}

/// Tracks the current viewport width and its resolved scale.
#[derive(Clone, Debug)]
pub struct ScaleTracker {
    breakpoints: ScaleBreakpoints,
    width: f64,
    scale: f64,
    pending: Option<f64>,
}

impl ScaleTracker {
    /// Creates a tracker already resolved for `initial_width`, so the first
    /// render uses the right scale.
    #[must_use]
    pub fn new(breakpoints: ScaleBreakpoints, initial_width: f64) -> Self {
        Self {
            breakpoints,
            width: initial_width,
            scale: breakpoints.resolve(initial_width),
            pending: None,
        }
    }

    /// Current scale factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Last applied viewport width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// The ladder in use.
    #[must_use]
    pub fn breakpoints(&self) -> &ScaleBreakpoints {
        &self.breakpoints
    }

    /// Applies a width immediately. Returns the new scale if it changed.
    pub fn observe(&mut self, width: f64) -> Option<f64> {
        self.pending = None;
        self.width = width;
        let next = self.breakpoints.resolve(width);
        if next == self.scale {
            return None;
        }
        tracing::debug!(width, from = self.scale, to = next, "scale changed");
        self.scale = next;
        Some(next)
    }

    /// Records a width to apply on the next [`ScaleTracker::flush`].
    ///
    /// Only the latest queued width is kept.
    pub fn queue(&mut self, width: f64) {
        self.pending = Some(width);
    }

    /// Returns `true` if a width is waiting to be applied.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Applies the latest queued width, if any. Returns the new scale if it
    /// changed.
    pub fn flush(&mut self) -> Option<f64> {
        let width = self.pending.take()?;
        self.observe(width)
    }
}

impl Default for ScaleTracker {
    fn default() -> Self {
        Self::new(ScaleBreakpoints::DEFAULT, f64::INFINITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_are_exclusive() {
        assert_eq!(resolve_scale(0.0), 0.6);
        assert_eq!(resolve_scale(479.0), 0.6);
        assert_eq!(resolve_scale(480.0), 0.7);
        assert_eq!(resolve_scale(639.9), 0.7);
        assert_eq!(resolve_scale(640.0), 0.8);
        assert_eq!(resolve_scale(820.0), 0.9);
        assert_eq!(resolve_scale(1023.0), 0.9);
        assert_eq!(resolve_scale(1024.0), 1.0);
    }

    #[test]
    fn scale_is_non_decreasing_in_width() {
        let mut prev = resolve_scale(-10.0);
        let mut w = -10.0;
        while w < 2000.0 {
            let s = resolve_scale(w);
            assert!(s >= prev, "scale dropped at width {w}");
            prev = s;
            w += 7.5;
        }
    }

    #[test]
    fn nan_width_is_wide() {
        assert_eq!(resolve_scale(f64::NAN), 1.0);
    }

    #[test]
    fn observe_reports_only_changes() {
        let mut tracker = ScaleTracker::new(ScaleBreakpoints::DEFAULT, 1200.0);
        assert_eq!(tracker.scale(), 1.0);
        assert_eq!(tracker.observe(1100.0), None);
        assert_eq!(tracker.observe(700.0), Some(0.8));
        assert_eq!(tracker.width(), 700.0);
        assert_eq!(tracker.observe(720.0), None);
    }

    #[test]
    fn queued_widths_coalesce_to_latest() {
        let mut tracker = ScaleTracker::new(ScaleBreakpoints::DEFAULT, 1200.0);
        tracker.queue(300.0);
        tracker.queue(500.0);
        tracker.queue(900.0);
        assert!(tracker.has_pending());
        assert_eq!(tracker.scale(), 1.0, "queue must not apply immediately");
        assert_eq!(tracker.flush(), Some(0.9));
        assert_eq!(tracker.flush(), None);
        assert!(!tracker.has_pending());
    }
}
