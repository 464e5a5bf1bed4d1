// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Vec2};
use vitrine_gesture::drag::{ClickDisposition, DragRelease, DragTracker};
use vitrine_gesture::listeners::{EventKinds, ListenTarget};
use vitrine_project::{Accent, ProjectId, ProjectRecord};
use vitrine_scale::{ScaleBreakpoints, ScaleTracker};
use vitrine_selection::SelectProject;
use vitrine_timing::{TimerId, TimerQueue};

use crate::{CardTransform, DragOffsets, SCATTER_SLOTS, STACK_OFFSETS, ScatterConfig};

/// Listeners the scatter view needs while it is the active view.
pub const SCATTER_LISTENERS: &[(ListenTarget, EventKinds)] = &[(
    ListenTarget::Window,
    EventKinds::POINTER_MOVE
        .union(EventKinds::POINTER_UP)
        .union(EventKinds::RESIZE),
)];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum ScatterTimer {
    AutoOpen,
}

/// Render description of one scatter card.
#[derive(Clone, Debug, PartialEq)]
pub struct ScatterCard<'a> {
    /// The record shown on the card.
    pub project: &'a ProjectRecord,
    /// Position in the caller-supplied list.
    pub index: usize,
    /// Placement for the current open/closed state.
    pub transform: CardTransform,
    /// Stacking order; earlier cards sit on top.
    pub z_index: usize,
    /// Entrance animation delay in milliseconds.
    pub stagger_delay_ms: f64,
    /// Horizontal deal-in offset in pixels, alternating sign by index.
    pub deal_offset: f64,
    /// Accent token, falling back to the gallery default.
    pub accent: &'a Accent,
    /// Card title: bookmark label or name.
    pub title: &'a str,
    /// Leading tech-stack tags to show.
    pub tags: &'a [String],
    /// Whether this card is the selected project.
    pub is_active: bool,
}

/// State of the scatter view: open/closed, drag tracking, sticky offsets.
#[derive(Debug)]
pub struct ScatterView {
    config: ScatterConfig,
    scale: ScaleTracker,
    is_open: bool,
    timers: TimerQueue<ScatterTimer>,
    auto_open: Option<TimerId>,
    drag: DragTracker<ProjectId>,
    offsets: DragOffsets,
}

impl ScatterView {
    /// Creates a closed view sized for `viewport_width`.
    #[must_use]
    pub fn new(config: ScatterConfig, breakpoints: ScaleBreakpoints, viewport_width: f64) -> Self {
        Self {
            config,
            scale: ScaleTracker::new(breakpoints, viewport_width),
            is_open: false,
            timers: TimerQueue::new(),
            auto_open: None,
            drag: DragTracker::new(config.drag_threshold),
            offsets: DragOffsets::new(),
        }
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &ScatterConfig {
        &self.config
    }

    /// Schedules the deck to open `open_delay_ms` after `now`.
    pub fn mount(&mut self, now: f64) {
        if let Some(timer) = self.auto_open.take() {
            self.timers.cancel(timer);
        }
        self.auto_open = Some(
            self.timers
                .schedule(now + self.config.open_delay_ms, ScatterTimer::AutoOpen),
        );
    }

    /// Stops pending timers and abandons any gesture. Offsets are kept.
    pub fn unmount(&mut self) {
        self.timers.clear();
        self.auto_open = None;
        self.drag.cancel();
    }

    /// Fires due timers. Returns `true` if the view changed.
    pub fn tick(&mut self, now: f64) -> bool {
        let mut changed = false;
        while let Some((id, timer)) = self.timers.pop_due(now) {
            match timer {
                ScatterTimer::AutoOpen => {
                    if self.auto_open == Some(id) {
                        self.auto_open = None;
                    }
                    changed |= self.set_open(true);
                }
            }
        }
        changed
    }

    /// Earliest timestamp at which [`ScatterView::tick`] has work to do.
    #[must_use]
    pub fn next_deadline(&self) -> Option<f64> {
        self.timers.next_deadline()
    }

    /// Returns `true` if the deck is fanned out.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Opens or closes the deck. Returns `true` if the state changed.
    pub fn set_open(&mut self, open: bool) -> bool {
        if self.is_open == open {
            return false;
        }
        tracing::debug!(open, "scatter deck toggled");
        self.is_open = open;
        true
    }

    /// Pointer entered the stage.
    pub fn pointer_enter(&mut self) -> bool {
        self.set_open(true)
    }

    /// Touch started on the stage.
    pub fn touch_start(&mut self) -> bool {
        self.set_open(true)
    }

    /// Pointer left the stage.
    pub fn pointer_leave(&mut self) -> bool {
        self.set_open(false)
    }

    /// Current responsive scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale.scale()
    }

    /// Applies a viewport resize. Returns the new scale if it changed.
    pub fn resize(&mut self, viewport_width: f64) -> Option<f64> {
        self.scale.observe(viewport_width)
    }

    /// Scale of the folder backdrop behind the deck.
    #[must_use]
    pub fn folder_scale(&self) -> f64 {
        self.scale() * self.config.folder_scale_ratio
    }

    /// Starts a gesture on card `id`. Opens the deck.
    pub fn pointer_down(&mut self, id: &ProjectId, pos: Point) {
        let base = self.offsets.get(id);
        self.drag.pointer_down(id.clone(), pos, base);
        self.set_open(true);
    }

    /// Moves the card under the current gesture. Returns `true` if an offset
    /// changed.
    pub fn pointer_move(&mut self, pos: Point) -> bool {
        let Some(moved) = self.drag.pointer_move(pos) else {
            return false;
        };
        let changed = self.offsets.get(&moved.target) != moved.offset;
        self.offsets.set(moved.target, moved.offset);
        changed
    }

    /// Ends the current gesture.
    pub fn pointer_up(&mut self) -> Option<DragRelease<ProjectId>> {
        let release = self.drag.pointer_up()?;
        if release.was_drag {
            tracing::trace!(id = %release.target, "card dropped");
        }
        Some(release)
    }

    /// Handles a click on `project`, forwarding genuine clicks to `sink`.
    pub fn click(&mut self, project: &ProjectRecord, sink: &mut impl SelectProject) -> ClickDisposition {
        let disposition = self.drag.click(&project.id);
        match disposition {
            ClickDisposition::Activate => sink.select_project(project),
            ClickDisposition::Suppressed => {
                tracing::trace!(id = %project.id, "click after drag suppressed");
            }
        }
        disposition
    }

    /// Abandons an in-progress gesture without touching stored offsets.
    pub fn cancel_gesture(&mut self) {
        self.drag.cancel();
    }

    /// Stored drag offsets.
    #[must_use]
    pub fn offsets(&self) -> &DragOffsets {
        &self.offsets
    }

    /// Returns card `id` to its slot.
    pub fn clear_offset(&mut self, id: &ProjectId) -> bool {
        self.offsets.clear(id)
    }

    /// Returns every card to its slot.
    pub fn clear_offsets(&mut self) {
        self.offsets.clear_all();
    }

    /// Transform of the card at `index` with id `id` in the current state.
    #[must_use]
    pub fn card_transform(&self, index: usize, id: &ProjectId) -> CardTransform {
        let scale = self.scale();
        if self.is_open {
            let slot = SCATTER_SLOTS[index % SCATTER_SLOTS.len()];
            CardTransform {
                translate: slot.offset * scale + self.offsets.get(id),
                rotate_deg: slot.rotate_deg,
                scale,
            }
        } else {
            let stack = STACK_OFFSETS[index % STACK_OFFSETS.len()];
            let lift = index as f64 * self.config.stack_lift * scale;
            CardTransform {
                translate: Vec2::new(stack * scale, -lift),
                rotate_deg: stack * self.config.stack_rotation_ratio,
                scale: self.config.closed_scale * scale,
            }
        }
    }

    /// Describes every card for rendering, in list order.
    ///
    /// An empty list yields no cards.
    #[must_use]
    pub fn layout<'a>(
        &self,
        projects: &'a [ProjectRecord],
        selected: Option<&ProjectId>,
        fallback_accent: &'a Accent,
    ) -> Vec<ScatterCard<'a>> {
        let len = projects.len();
        projects
            .iter()
            .enumerate()
            .map(|(index, project)| ScatterCard {
                project,
                index,
                transform: self.card_transform(index, &project.id),
                z_index: self.config.base_z_index + (len - index),
                stagger_delay_ms: index as f64 * self.config.stagger_ms,
                deal_offset: if index % 2 == 0 {
                    -self.config.deal_offset
                } else {
                    self.config.deal_offset
                },
                accent: project.accent_or(fallback_accent),
                title: project.title(),
                tags: project.tag_preview(self.config.tag_preview),
                is_active: selected == Some(&project.id),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    fn view(width: f64) -> ScatterView {
        ScatterView::new(ScatterConfig::default(), ScaleBreakpoints::DEFAULT, width)
    }

    fn deck(n: usize) -> Vec<ProjectRecord> {
        (0..n)
            .map(|i| {
                let id = alloc::format!("p{}", i + 1);
                ProjectRecord::new(id.as_str(), id.as_str(), "Jan 2024")
            })
            .collect()
    }

    #[test]
    fn opens_after_delay() {
        let mut v = view(1440.0);
        v.mount(1000.0);
        assert!(!v.tick(1179.0));
        assert!(!v.is_open());
        assert_eq!(v.next_deadline(), Some(1180.0));
        assert!(v.tick(1180.0));
        assert!(v.is_open());
        assert_eq!(v.next_deadline(), None);
    }

    #[test]
    fn unmount_cancels_auto_open() {
        let mut v = view(1440.0);
        v.mount(0.0);
        v.unmount();
        assert!(!v.tick(10_000.0));
        assert!(!v.is_open());
    }

    #[test]
    fn remount_replaces_timer() {
        let mut v = view(1440.0);
        v.mount(0.0);
        v.mount(500.0);
        assert!(!v.tick(200.0));
        assert!(v.tick(680.0));
    }

    #[test]
    fn hover_opens_and_leave_closes() {
        let mut v = view(1440.0);
        assert!(v.pointer_enter());
        assert!(!v.touch_start());
        assert!(v.pointer_leave());
        assert!(!v.is_open());
    }

    #[test]
    fn slots_cycle_by_index() {
        let mut v = view(1440.0);
        v.set_open(true);
        let projects = deck(6);
        let fallback = Accent::fallback();
        let cards = v.layout(&projects, None, &fallback);
        assert_eq!(cards[4].transform.translate, cards[0].transform.translate);
        assert_eq!(cards[5].transform.rotate_deg, SCATTER_SLOTS[1].rotate_deg);
    }

    #[test]
    fn open_transform_scales_slot_but_not_drag() {
        let mut v = view(700.0); // 0.8
        v.set_open(true);
        let id = ProjectId::from("p1");
        v.offsets.set(id.clone(), Vec2::new(10.0, 20.0));
        let t = v.card_transform(0, &id);
        assert_eq!(t.translate, Vec2::new(-180.0 * 0.8 + 10.0, -120.0 * 0.8 + 20.0));
        assert_eq!(t.scale, 0.8);
        assert_eq!(t.rotate_deg, -8.0);
    }

    #[test]
    fn closed_transform_is_a_staggered_stack() {
        let v = view(1440.0);
        let id = ProjectId::from("p3");
        let t = v.card_transform(2, &id);
        assert_eq!(t.translate, Vec2::new(2.0, -6.0));
        assert!((t.rotate_deg - 1.2).abs() < 1e-12);
        assert_eq!(t.scale, 0.9);
    }

    #[test]
    fn drag_offsets_stick_across_toggles() {
        let mut v = view(1440.0);
        let id = ProjectId::from("p1");
        v.pointer_down(&id, Point::new(0.0, 0.0));
        assert!(v.is_open(), "pressing a card opens the deck");
        v.pointer_move(Point::new(40.0, -10.0));
        v.pointer_up();
        v.pointer_leave();
        v.pointer_enter();
        assert_eq!(v.offsets().get(&id), Vec2::new(40.0, -10.0));

        // The next drag starts from the stored offset.
        v.pointer_down(&id, Point::new(100.0, 100.0));
        v.pointer_move(Point::new(105.0, 100.0));
        assert_eq!(v.offsets().get(&id), Vec2::new(45.0, -10.0));
    }

    #[test]
    fn move_without_press_changes_nothing() {
        let mut v = view(1440.0);
        assert!(!v.pointer_move(Point::new(5.0, 5.0)));
        assert!(v.offsets().is_empty());
    }

    #[test]
    fn layout_metadata() {
        let v = view(1440.0);
        let mut projects = deck(3);
        projects[1].accent = Some(Accent::new("#0ea5e9"));
        projects[2].tech_stack = vec!["a".into(), "b".into(), "c".into(), "d".into()];
        let fallback = Accent::fallback();
        let cards = v.layout(&projects, Some(&projects[1].id), &fallback);
        assert_eq!(
            cards.iter().map(|c| c.z_index).collect::<Vec<_>>(),
            [53, 52, 51]
        );
        assert_eq!(
            cards.iter().map(|c| c.stagger_delay_ms).collect::<Vec<_>>(),
            [0.0, 70.0, 140.0]
        );
        assert_eq!(
            cards.iter().map(|c| c.deal_offset).collect::<Vec<_>>(),
            [-16.0, 16.0, -16.0]
        );
        assert_eq!(cards[0].accent.as_str(), Accent::FALLBACK);
        assert_eq!(cards[1].accent.as_str(), "#0ea5e9");
        assert_eq!(cards[2].tags.len(), 3);
        assert!(cards[1].is_active);
        assert!(!cards[0].is_active);
    }

    #[test]
    fn empty_list_renders_nothing() {
        let v = view(1440.0);
        let fallback = Accent::fallback();
        assert!(v.layout(&[], None, &fallback).is_empty());
    }

    #[test]
    fn folder_scale_tracks_resize() {
        let mut v = view(1440.0);
        assert_eq!(v.folder_scale(), 1.25);
        assert_eq!(v.resize(400.0), Some(0.6));
        assert!((v.folder_scale() - 0.75).abs() < 1e-12);
    }
}
