// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use vitrine_gesture::hover::HoverState;
use vitrine_gesture::listeners::{EventKinds, ListenTarget};
use vitrine_project::{Accent, ProjectId, ProjectRecord};
use vitrine_scale::{ScaleBreakpoints, ScaleTracker};

use crate::{
    AutoScroll, RevealWindow, Segment, TimelineConfig, TimelineLayout, Visibility, YearTick,
};

/// Listeners the timeline view needs while it is the active view.
pub const TIMELINE_LISTENERS: &[(ListenTarget, EventKinds)] = &[
    (
        ListenTarget::Container,
        EventKinds::WHEEL
            .union(EventKinds::POINTER_DOWN)
            .union(EventKinds::TOUCH_START)
            .union(EventKinds::SCROLL),
    ),
    (ListenTarget::Window, EventKinds::RESIZE),
];

/// Render description of one visible timeline card.
#[derive(Clone, Debug, PartialEq)]
pub struct TimelineCard<'a> {
    /// The record shown on the card.
    pub project: &'a ProjectRecord,
    /// 1-based rank in recency order.
    pub ordinal: usize,
    /// Left edge on the rail.
    pub left: f64,
    /// Top edge on the rail.
    pub top: f64,
    /// Accent token, falling back to the gallery default.
    pub accent: &'a Accent,
    /// Card title: bookmark label or name.
    pub title: &'a str,
    /// Leading tech-stack tags to show.
    pub tags: &'a [String],
    /// Whether this card is the selected project.
    pub is_active: bool,
    /// Whether the pointer is over this card.
    pub is_hovered: bool,
    /// Start-to-end connector, present only while hovered or selected.
    pub segment: Option<Segment>,
}

/// Everything a renderer needs to draw the timeline for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct TimelineFrame<'a> {
    /// Rail width.
    pub width: f64,
    /// Rail height.
    pub rail_height: f64,
    /// Vertical position of the year axis.
    pub axis_top: f64,
    /// Current responsive scale.
    pub scale: f64,
    /// Current horizontal scroll position of the container.
    pub scroll_left: f64,
    /// Year labels.
    pub ticks: &'a [YearTick],
    /// Cards inside the reveal window, most recent first.
    pub cards: Vec<TimelineCard<'a>>,
}

/// State of the timeline view: geometry, scroll, reveal animation, hover.
#[derive(Debug)]
pub struct TimelineView {
    config: TimelineConfig,
    scale: ScaleTracker,
    layout: TimelineLayout,
    scroll_left: f64,
    visibility: Visibility,
    auto_scroll: AutoScroll,
    hover: HoverState<ProjectId>,
    active: bool,
}

impl TimelineView {
    /// Creates an inactive view with no projects for a container
    /// `viewport_width` pixels wide.
    #[must_use]
    pub fn new(config: TimelineConfig, breakpoints: ScaleBreakpoints, viewport_width: f64) -> Self {
        let scale = ScaleTracker::new(breakpoints, viewport_width);
        let layout = TimelineLayout::compute(&[], &config, 0.0);
        let mut view = Self {
            config,
            scale,
            layout,
            scroll_left: 0.0,
            visibility: Visibility::new(),
            auto_scroll: AutoScroll::new(),
            hover: HoverState::new(),
            active: false,
        };
        view.refresh_width();
        view
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    /// Current geometry.
    #[must_use]
    pub fn layout(&self) -> &TimelineLayout {
        &self.layout
    }

    /// Rail width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.layout.width()
    }

    /// Current responsive scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale.scale()
    }

    /// Container width last reported by the host.
    #[must_use]
    pub fn viewport_width(&self) -> f64 {
        self.scale.width()
    }

    /// Current horizontal scroll position.
    #[must_use]
    pub fn scroll_left(&self) -> f64 {
        self.scroll_left
    }

    /// Cards inside the reveal window.
    #[must_use]
    pub fn visibility(&self) -> &Visibility {
        &self.visibility
    }

    /// Returns `true` while this is the active view.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns `true` while the reveal animation is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.auto_scroll.is_running()
    }

    /// Returns `true` if user input stopped this activation's reveal.
    #[must_use]
    pub fn is_interrupted(&self) -> bool {
        self.auto_scroll.is_interrupted()
    }

    /// Recomputes geometry for a new project list.
    ///
    /// While active, the reveal restarts from the left edge as it does on
    /// activation.
    pub fn set_projects(&mut self, projects: &[ProjectRecord], now: f64) {
        self.layout = TimelineLayout::compute(projects, &self.config, self.width());
        self.refresh_width();
        if self.active {
            self.begin_reveal(now);
        } else {
            self.update_visibility();
        }
    }

    /// Makes this the active view and starts the reveal at `now`.
    ///
    /// Returns `true` if an animation started. Nothing animates when the most
    /// recent record has no parseable end month.
    pub fn activate(&mut self, now: f64) -> bool {
        self.active = true;
        tracing::debug!("timeline activated");
        self.begin_reveal(now)
    }

    fn begin_reveal(&mut self, now: f64) -> bool {
        self.auto_scroll.stop();
        self.scroll_left = 0.0;
        self.update_visibility();
        let Some(target) = self.layout.reveal_target(&self.config) else {
            return false;
        };
        self.auto_scroll.start(0.0, target, self.config.sweep_duration_ms, now);
        true
    }

    /// Leaves the view: stops the reveal and forgets hover.
    pub fn deactivate(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        self.auto_scroll.stop();
        self.hover.clear();
        tracing::debug!("timeline deactivated");
    }

    /// Wheel, pointer-down or touch-start on the container. Returns `true` if
    /// a running reveal was stopped.
    pub fn interrupt(&mut self) -> bool {
        self.auto_scroll.interrupt()
    }

    /// Advances the reveal. Returns the scroll position the host should apply.
    pub fn on_frame(&mut self, now: f64) -> Option<f64> {
        let position = self.auto_scroll.on_frame(now)?;
        self.scroll_left = position;
        self.update_visibility();
        Some(position)
    }

    /// The container scrolled. Returns `true` if the visible set changed.
    pub fn on_scroll(&mut self, scroll_left: f64) -> bool {
        self.scroll_left = scroll_left;
        self.update_visibility()
    }

    /// The container was resized. Returns `true` if the rail width changed.
    ///
    /// A running reveal is retargeted to the new position of the most recent
    /// card rather than restarted. The scroll position is clamped to the
    /// scroll range of the resized rail.
    pub fn on_resize(&mut self, viewport_width: f64) -> bool {
        self.scale.observe(viewport_width);
        let changed = self.refresh_width();
        if changed && let Some(target) = self.layout.reveal_target(&self.config) {
            self.auto_scroll.retarget(target);
        }
        self.scroll_left = self.scroll_left.min(self.max_scroll_left());
        self.update_visibility();
        changed
    }

    /// Pointer entered card `id`.
    pub fn pointer_enter(&mut self, id: ProjectId) -> bool {
        self.hover.enter(id)
    }

    /// Pointer left card `id`.
    pub fn pointer_leave(&mut self, id: &ProjectId) -> bool {
        self.hover.leave(id)
    }

    /// Card under the pointer.
    #[must_use]
    pub fn hovered(&self) -> Option<&ProjectId> {
        self.hover.current()
    }

    /// Furthest scroll position the container can reach.
    #[must_use]
    pub fn max_scroll_left(&self) -> f64 {
        (self.width() - self.viewport_width()).max(0.0)
    }

    fn refresh_width(&mut self) -> bool {
        let meta = self.layout.meta();
        let width = meta.timeline_width(self.scale.scale(), self.scale.width(), &self.config);
        self.layout.set_width(width)
    }

    fn update_visibility(&mut self) -> bool {
        let window = RevealWindow::new(
            self.scroll_left,
            self.scale.width(),
            self.config.reveal_buffer,
        );
        self.visibility.update(self.layout.entries(), window)
    }

    /// Describes the visible part of the timeline.
    ///
    /// `projects` must be the list last passed to
    /// [`TimelineView::set_projects`]; entries that no longer match it are
    /// skipped.
    #[must_use]
    pub fn frame<'a>(
        &'a self,
        projects: &'a [ProjectRecord],
        selected: Option<&ProjectId>,
        fallback_accent: &'a Accent,
    ) -> TimelineFrame<'a> {
        let top = self.config.card_top();
        let cards = self
            .layout
            .entries()
            .iter()
            .filter(|entry| self.visibility.contains(&entry.id))
            .filter_map(|entry| {
                let project = projects.get(entry.index).filter(|p| p.id == entry.id)?;
                let is_active = selected == Some(&entry.id);
                let is_hovered = self.hover.is_hovered(&entry.id);
                Some(TimelineCard {
                    project,
                    ordinal: entry.ordinal,
                    left: entry.left(),
                    top,
                    accent: project.accent_or(fallback_accent),
                    title: project.title(),
                    tags: project.tag_preview(self.config.tag_preview),
                    is_active,
                    is_hovered,
                    segment: (is_active || is_hovered).then(|| entry.segment(&self.config)),
                })
            })
            .collect();

        TimelineFrame {
            width: self.width(),
            rail_height: self.config.rail_height(),
            axis_top: self.config.axis_y,
            scale: self.scale(),
            scroll_left: self.scroll_left,
            ticks: &self.layout.meta().ticks,
            cards,
        }
    }
}
