// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::fmt;

use kurbo::Point;
use vitrine_gesture::drag::ClickDisposition;
use vitrine_gesture::listeners::{ListenerHost, ListenerScope};
use vitrine_project::{Catalog, Language, ProjectId, ProjectRecord};
use vitrine_scatter::{SCATTER_LISTENERS, ScatterCard, ScatterView};
use vitrine_selection::{DetailPanel, SelectProject, SelectionCoordinator};
use vitrine_timeline::{TIMELINE_LISTENERS, TimelineFrame, TimelineView};

use crate::{GalleryConfig, ViewMode};

/// What changed during one call to [`Gallery::frame`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FrameOutcome {
    /// A scatter timer fired and the deck changed state.
    pub scatter_changed: bool,
    /// Scroll position the host should apply to the timeline container.
    pub scroll_to: Option<f64>,
    /// The detail panel was scrolled into view.
    pub revealed: bool,
}

impl FrameOutcome {
    /// Returns `true` if anything needs re-rendering.
    #[must_use]
    pub fn needs_render(&self) -> bool {
        self.scatter_changed || self.scroll_to.is_some() || self.revealed
    }
}

/// A project gallery with two interchangeable layouts and one selection.
///
/// The gallery owns the project list and the selection. Each view computes
/// its own geometry from the list and reports picks through the shared
/// coordinator. Host listeners for the active view are held in a
/// [`ListenerScope`], released on mode switch and on unmount.
pub struct Gallery<H: ListenerHost> {
    config: GalleryConfig,
    host: Rc<H>,
    projects: Vec<ProjectRecord>,
    language: Option<Language>,
    selection: SelectionCoordinator,
    scatter: ScatterView,
    timeline: TimelineView,
    mode: ViewMode,
    listeners: Option<ListenerScope<H>>,
}

impl<H: ListenerHost> Gallery<H> {
    /// Creates an unmounted gallery with no projects.
    #[must_use]
    pub fn new(config: GalleryConfig, host: Rc<H>, viewport_width: f64) -> Self {
        let scatter = ScatterView::new(config.scatter, config.scale, viewport_width);
        let timeline = TimelineView::new(config.timeline, config.scale, viewport_width);
        let mode = config.initial_mode;
        Self {
            config,
            host,
            projects: Vec::new(),
            language: None,
            selection: SelectionCoordinator::new(),
            scatter,
            timeline,
            mode,
            listeners: None,
        }
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    /// The active mode.
    #[must_use]
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Returns `true` between [`Gallery::mount`] and [`Gallery::unmount`].
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.listeners.is_some()
    }

    /// Number of host listeners currently attached for the active view.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.as_ref().map_or(0, ListenerScope::len)
    }

    /// Attaches the active view's listeners and starts its entrance.
    pub fn mount(&mut self, now: f64) {
        if self.is_mounted() {
            return;
        }
        self.enter(self.mode, now);
    }

    /// Detaches all listeners and stops timers and animations.
    pub fn unmount(&mut self) {
        if let Some(scope) = self.listeners.take() {
            scope.release();
        }
        self.leave(self.mode);
    }

    /// Switches layouts. Returns `false` if `mode` is already active.
    ///
    /// Any drag in progress is abandoned and the timeline reveal is stopped.
    /// Dragged scatter offsets survive the switch.
    pub fn set_mode(&mut self, mode: ViewMode, now: f64) -> bool {
        if self.mode == mode {
            return false;
        }
        tracing::debug!(from = self.mode.label(), to = mode.label(), "view mode switched");
        let mounted = self.is_mounted();
        // Drop the old scope before attaching the new one.
        self.listeners = None;
        self.leave(self.mode);
        self.mode = mode;
        if mounted {
            self.enter(mode, now);
        }
        true
    }

    fn enter(&mut self, mode: ViewMode, now: f64) {
        let requests = match mode {
            ViewMode::Scatter => SCATTER_LISTENERS,
            ViewMode::Timeline => TIMELINE_LISTENERS,
        };
        self.listeners = Some(ListenerScope::acquire(&self.host, mode.label(), requests));
        match mode {
            ViewMode::Scatter => {
                self.scatter.set_open(false);
                self.scatter.mount(now);
            }
            ViewMode::Timeline => {
                self.timeline.activate(now);
            }
        }
    }

    fn leave(&mut self, mode: ViewMode) {
        match mode {
            ViewMode::Scatter => self.scatter.unmount(),
            ViewMode::Timeline => self.timeline.deactivate(),
        }
    }

    /// Current project list, in caller order.
    #[must_use]
    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    /// Replaces the project list, e.g. after a language switch.
    ///
    /// A selection whose id is no longer listed is cleared, and timeline
    /// geometry is recomputed.
    pub fn set_projects(&mut self, projects: Vec<ProjectRecord>, now: f64) {
        self.projects = projects;
        self.selection.invalidate_if_missing(&self.projects);
        self.timeline.set_projects(&self.projects, now);
        tracing::debug!(count = self.projects.len(), "project list replaced");
    }

    /// Shows `catalog` in `language`.
    pub fn set_language(&mut self, catalog: &Catalog, language: Language, now: f64) {
        self.language = Some(language);
        self.set_projects(catalog.localized(language), now);
    }

    /// Language of the current list, if set through [`Gallery::set_language`].
    #[must_use]
    pub fn language(&self) -> Option<Language> {
        self.language
    }

    /// The selection coordinator.
    #[must_use]
    pub fn selection(&self) -> &SelectionCoordinator {
        &self.selection
    }

    /// The record the detail panel should show.
    #[must_use]
    pub fn selected_project(&self) -> Option<&ProjectRecord> {
        self.selection.selected_project(&self.projects)
    }

    /// Clears the selection.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// The scatter view.
    #[must_use]
    pub fn scatter(&self) -> &ScatterView {
        &self.scatter
    }

    /// The timeline view.
    #[must_use]
    pub fn timeline(&self) -> &TimelineView {
        &self.timeline
    }

    /// Viewport resize. Both views track the width so a mode switch renders
    /// at the right scale immediately.
    pub fn resize(&mut self, viewport_width: f64) {
        self.scatter.resize(viewport_width);
        self.timeline.on_resize(viewport_width);
    }

    /// Pointer entered the scatter stage.
    pub fn pointer_enter(&mut self) -> bool {
        self.mode == ViewMode::Scatter && self.scatter.pointer_enter()
    }

    /// Pointer left the scatter stage.
    pub fn pointer_leave(&mut self) -> bool {
        self.mode == ViewMode::Scatter && self.scatter.pointer_leave()
    }

    /// Touch started on the active view.
    pub fn touch_start(&mut self) -> bool {
        match self.mode {
            ViewMode::Scatter => self.scatter.touch_start(),
            ViewMode::Timeline => self.timeline.interrupt(),
        }
    }

    /// Wheel input on the active view.
    pub fn wheel(&mut self) -> bool {
        self.mode == ViewMode::Timeline && self.timeline.interrupt()
    }

    /// Pointer pressed, on card `card` if any.
    pub fn pointer_down(&mut self, card: Option<&ProjectId>, pos: Point) {
        match self.mode {
            ViewMode::Scatter => {
                if let Some(id) = card {
                    self.scatter.pointer_down(id, pos);
                }
            }
            ViewMode::Timeline => {
                self.timeline.interrupt();
            }
        }
    }

    /// Pointer moved. Returns `true` if a card moved.
    pub fn pointer_move(&mut self, pos: Point) -> bool {
        self.mode == ViewMode::Scatter && self.scatter.pointer_move(pos)
    }

    /// Pointer released.
    pub fn pointer_up(&mut self) {
        if self.mode == ViewMode::Scatter {
            self.scatter.pointer_up();
        }
    }

    /// Timeline container scrolled. Returns `true` if the visible set changed.
    pub fn scroll(&mut self, scroll_left: f64) -> bool {
        self.mode == ViewMode::Timeline && self.timeline.on_scroll(scroll_left)
    }

    /// Pointer entered timeline card `id`.
    pub fn card_enter(&mut self, id: &ProjectId) -> bool {
        self.mode == ViewMode::Timeline && self.timeline.pointer_enter(id.clone())
    }

    /// Pointer left timeline card `id`.
    pub fn card_leave(&mut self, id: &ProjectId) -> bool {
        self.mode == ViewMode::Timeline && self.timeline.pointer_leave(id)
    }

    /// Click on card `id`. Unknown ids are ignored.
    pub fn click(&mut self, id: &ProjectId) -> ClickDisposition {
        let Some(project) = self.projects.iter().find(|p| p.id == *id) else {
            tracing::trace!(id = %id, "click on unknown card ignored");
            return ClickDisposition::Suppressed;
        };
        match self.mode {
            ViewMode::Scatter => self.scatter.click(project, &mut self.selection),
            ViewMode::Timeline => {
                self.selection.select_project(project);
                ClickDisposition::Activate
            }
        }
    }

    /// Runs timers, the reveal animation and the deferred detail reveal.
    pub fn frame(&mut self, now: f64, panel: &mut impl DetailPanel) -> FrameOutcome {
        let (scatter_changed, scroll_to) = match self.mode {
            ViewMode::Scatter => (self.scatter.tick(now), None),
            ViewMode::Timeline => (false, self.timeline.on_frame(now)),
        };
        FrameOutcome {
            scatter_changed,
            scroll_to,
            revealed: self.selection.on_frame(panel),
        }
    }

    /// Scatter cards for rendering.
    #[must_use]
    pub fn scatter_cards(&self) -> Vec<ScatterCard<'_>> {
        self.scatter.layout(
            &self.projects,
            self.selection.selected(),
            &self.config.fallback_accent,
        )
    }

    /// Timeline frame for rendering.
    #[must_use]
    pub fn timeline_frame(&self) -> TimelineFrame<'_> {
        self.timeline.frame(
            &self.projects,
            self.selection.selected(),
            &self.config.fallback_accent,
        )
    }
}

impl<H: ListenerHost> fmt::Debug for Gallery<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gallery")
            .field("mode", &self.mode)
            .field("projects", &self.projects.len())
            .field("language", &self.language)
            .field("selection", &self.selection)
            .field("scatter", &self.scatter)
            .field("timeline", &self.timeline)
            .field("listeners", &self.listeners)
            .finish_non_exhaustive()
    }
}
