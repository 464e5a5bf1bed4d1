// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag gesture helper: separate drags from clicks on draggable cards.
//!
//! ## Usage
//!
//! 1) On pointer-down over a card, call [`DragTracker::pointer_down`] with the
//!    card id, the pointer position, and the card's current offset (its drag
//!    base).
//! 2) On each pointer-move, call [`DragTracker::pointer_move`] to get the new
//!    offset for the card: `base + (pointer - start)`. Once the pointer has
//!    moved more than the threshold along either axis, the gesture counts as
//!    a drag.
//! 3) On pointer-up, call [`DragTracker::pointer_up`]. If the gesture was a
//!    drag, the next click on the same card is suppressed exactly once.
//! 4) On click, call [`DragTracker::click`] and only act on
//!    [`ClickDisposition::Activate`].
//!
//! A new pointer-down clears any suppression left over from an earlier gesture
//! whose click never arrived (for example, a drag released off the card).
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use vitrine_gesture::drag::{ClickDisposition, DragTracker};
//!
//! let mut drag = DragTracker::new(3.0);
//!
//! // The card was already dragged to (5, 5) earlier.
//! drag.pointer_down(7_u32, Point::new(100.0, 100.0), Vec2::new(5.0, 5.0));
//!
//! // Small jitter: offset follows, but this is not a drag yet.
//! let m = drag.pointer_move(Point::new(102.0, 101.0)).unwrap();
//! assert_eq!(m.offset, Vec2::new(7.0, 6.0));
//! assert!(!m.dragging);
//!
//! let release = drag.pointer_up().unwrap();
//! assert!(!release.was_drag);
//! assert_eq!(drag.click(&7), ClickDisposition::Activate);
//! ```

use kurbo::{Point, Vec2};

/// Movement (per axis, in pixels) beyond which a gesture becomes a drag.
pub const DEFAULT_DRAG_THRESHOLD: f64 = 3.0;

/// What to do with a click event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClickDisposition {
    /// A genuine click: act on it.
    Activate,
    /// The tail of a drag: ignore it.
    Suppressed,
}

/// Result of a pointer move during a tracked gesture.
#[derive(Clone, Debug, PartialEq)]
pub struct DragMove<K> {
    /// Card being moved.
    pub target: K,
    /// New offset for the card: drag base plus pointer travel.
    pub offset: Vec2,
    /// Whether the gesture has crossed the threshold.
    pub dragging: bool,
}

/// Result of releasing a tracked gesture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragRelease<K> {
    /// Card that was pressed.
    pub target: K,
    /// Whether the gesture crossed the threshold at any point.
    pub was_drag: bool,
}

#[derive(Clone, Debug)]
struct ActiveGesture<K> {
    target: K,
    start: Point,
    base: Vec2,
    dragging: bool,
}

/// Tracks one pointer gesture at a time over keyed targets.
#[derive(Clone, Debug)]
pub struct DragTracker<K> {
    active: Option<ActiveGesture<K>>,
    suppress_click: Option<K>,
    threshold: f64,
}

impl<K> Default for DragTracker<K> {
    fn default() -> Self {
        Self::new(DEFAULT_DRAG_THRESHOLD)
    }
}

impl<K> DragTracker<K> {
    /// Creates a tracker with the given per-axis threshold in pixels.
    #[must_use]
    pub const fn new(threshold: f64) -> Self {
        Self {
            active: None,
            suppress_click: None,
            threshold,
        }
    }

    /// The per-axis threshold in pixels.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Returns `true` between pointer-down and pointer-up.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.active.is_some()
    }

    /// Returns `true` if the current gesture has crossed the threshold.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.active.as_ref().is_some_and(|a| a.dragging)
    }

    /// The card under the current gesture, if any.
    #[must_use]
    pub fn active_target(&self) -> Option<&K> {
        self.active.as_ref().map(|a| &a.target)
    }

    /// Starts tracking a gesture on `target`.
    ///
    /// `base` is the card's current offset; moves report offsets relative to
    /// it. Any pending click suppression from an earlier gesture is dropped.
    pub fn pointer_down(&mut self, target: K, pos: Point, base: Vec2) {
        self.suppress_click = None;
        self.active = Some(ActiveGesture {
            target,
            start: pos,
            base,
            dragging: false,
        });
    }

    /// Abandons the current gesture and any pending suppression.
    ///
    /// Offsets already reported stay wherever the caller stored them.
    pub fn cancel(&mut self) {
        if self.active.take().is_some() {
            tracing::trace!("drag gesture abandoned");
        }
        self.suppress_click = None;
    }
}

impl<K: Clone + PartialEq> DragTracker<K> {
    /// Updates the gesture with a new pointer position.
    ///
    /// Returns `None` when no gesture is being tracked.
    pub fn pointer_move(&mut self, pos: Point) -> Option<DragMove<K>> {
        let threshold = self.threshold;
        let active = self.active.as_mut()?;
        let travel = pos - active.start;
        if !active.dragging && (travel.x.abs() > threshold || travel.y.abs() > threshold) {
            active.dragging = true;
            tracing::trace!(x = travel.x, y = travel.y, "drag threshold crossed");
        }
        Some(DragMove {
            target: active.target.clone(),
            offset: active.base + travel,
            dragging: active.dragging,
        })
    }

    /// Ends the gesture. If it was a drag, arms a one-shot suppression of the
    /// next click on the same target.
    pub fn pointer_up(&mut self) -> Option<DragRelease<K>> {
        let active = self.active.take()?;
        if active.dragging {
            self.suppress_click = Some(active.target.clone());
        }
        Some(DragRelease {
            target: active.target,
            was_drag: active.dragging,
        })
    }

    /// Decides whether a click on `target` should act.
    ///
    /// Consumes any pending suppression, whichever card was clicked.
    pub fn click(&mut self, target: &K) -> ClickDisposition {
        if self.is_dragging() {
            return ClickDisposition::Suppressed;
        }
        match self.suppress_click.take() {
            Some(suppressed) if suppressed == *target => ClickDisposition::Suppressed,
            _ => ClickDisposition::Activate,
        }
    }

    /// Returns `true` if the next click on `target` will be suppressed.
    #[must_use]
    pub fn will_suppress(&self, target: &K) -> bool {
        self.suppress_click.as_ref() == Some(target)
    }
}
