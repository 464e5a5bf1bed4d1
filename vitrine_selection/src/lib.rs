// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vitrine Selection: the single source of truth for "which project is open".
//!
//! Both gallery layouts highlight the selected card and report clicks, but
//! neither owns selection. [`SelectionCoordinator`] does:
//!
//! - It holds at most one selected [`ProjectId`] plus a revision counter that
//!   bumps whenever the selection actually changes.
//! - Selecting a project schedules a reveal of the detail panel for the next
//!   animation frame, giving the panel a chance to render the new record
//!   first. The host passes its panel to [`SelectionCoordinator::on_frame`].
//! - [`SelectionCoordinator::invalidate_if_missing`] clears a selection whose
//!   id is no longer in the project list, so the detail panel never shows a
//!   stale record after a list refresh.
//!
//! Layouts report picks through the [`SelectProject`] trait, which the
//! coordinator implements and which any `FnMut(&ProjectRecord)` also
//! satisfies.
//!
//! ## Minimal example
//!
//! ```rust
//! use vitrine_project::{ProjectId, ProjectRecord};
//! use vitrine_selection::{DetailPanel, SelectProject, SelectionCoordinator};
//!
//! struct Panel(Vec<ProjectId>);
//! impl DetailPanel for Panel {
//!     fn scroll_into_view(&mut self, id: &ProjectId) {
//!         self.0.push(id.clone());
//!     }
//! }
//!
//! let projects = vec![ProjectRecord::new("x", "X", "Jan 2024")];
//! let mut selection = SelectionCoordinator::new();
//! selection.select_project(&projects[0]);
//! assert!(selection.is_selected(&projects[0].id));
//!
//! // The reveal waits for the next frame.
//! let mut panel = Panel(Vec::new());
//! assert!(selection.on_frame(&mut panel));
//! assert_eq!(panel.0, [ProjectId::from("x")]);
//!
//! // The list is replaced by one without "x": the selection goes away.
//! assert!(selection.invalidate_if_missing(&[]));
//! assert_eq!(selection.selected(), None);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use vitrine_project::{ProjectId, ProjectRecord, contains_id};
use vitrine_timing::{FrameId, FrameQueue};

/// Receives "this project was picked" from a layout.
pub trait SelectProject {
    /// Called once per genuine pick.
    fn select_project(&mut self, project: &ProjectRecord);
}

impl<F: FnMut(&ProjectRecord)> SelectProject for F {
    fn select_project(&mut self, project: &ProjectRecord) {
        self(project);
    }
}

/// The host's detail panel.
pub trait DetailPanel {
    /// Brings the panel showing `id` into view.
    fn scroll_into_view(&mut self, id: &ProjectId);
}

impl<F: FnMut(&ProjectId)> DetailPanel for F {
    fn scroll_into_view(&mut self, id: &ProjectId) {
        self(id);
    }
}

/// Owns the selected project id.
#[derive(Debug, Default)]
pub struct SelectionCoordinator {
    selected: Option<ProjectId>,
    revision: u64,
    reveals: FrameQueue<ProjectId>,
    pending_reveal: Option<FrameId>,
}

impl SelectionCoordinator {
    /// Creates a coordinator with nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The selected id, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&ProjectId> {
        self.selected.as_ref()
    }

    /// Returns `true` if `id` is selected.
    #[must_use]
    pub fn is_selected(&self, id: &ProjectId) -> bool {
        self.selected.as_ref() == Some(id)
    }

    /// Counter bumped on every change of the selected id.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Selects `id` and schedules a detail reveal for the next frame.
    ///
    /// Re-selecting the current id still schedules a reveal but does not bump
    /// the revision. A newer selection before the frame replaces the pending
    /// reveal.
    pub fn select_id(&mut self, id: ProjectId) {
        if self.selected.as_ref() != Some(&id) {
            tracing::debug!(id = %id, "project selected");
            self.selected = Some(id.clone());
            self.revision += 1;
        }
        if let Some(pending) = self.pending_reveal.take() {
            self.reveals.cancel(pending);
        }
        self.pending_reveal = Some(self.reveals.request(id));
    }

    /// Clears the selection and any pending reveal.
    pub fn clear(&mut self) {
        if let Some(pending) = self.pending_reveal.take() {
            self.reveals.cancel(pending);
        }
        if self.selected.take().is_some() {
            self.revision += 1;
        }
    }

    /// Clears the selection if its id is absent from `projects`.
    ///
    /// Returns `true` if the selection was cleared.
    pub fn invalidate_if_missing(&mut self, projects: &[ProjectRecord]) -> bool {
        let Some(selected) = &self.selected else {
            return false;
        };
        if contains_id(projects, selected) {
            return false;
        }
        tracing::debug!(id = %selected, "selected project no longer listed; clearing");
        self.clear();
        true
    }

    /// Resolves the selected record in `projects`, for the detail panel.
    #[must_use]
    pub fn selected_project<'a>(&self, projects: &'a [ProjectRecord]) -> Option<&'a ProjectRecord> {
        let selected = self.selected.as_ref()?;
        projects.iter().find(|p| &p.id == selected)
    }

    /// Returns `true` if a reveal is waiting for the next frame.
    #[must_use]
    pub fn has_pending_reveal(&self) -> bool {
        self.reveals.has_pending()
    }

    /// Runs frame-deferred work. Returns `true` if the panel was scrolled.
    pub fn on_frame(&mut self, panel: &mut impl DetailPanel) -> bool {
        self.pending_reveal = None;
        let mut revealed = false;
        for id in self.reveals.take() {
            // The selection may have been cleared since the request.
            if self.is_selected(&id) {
                panel.scroll_into_view(&id);
                revealed = true;
            }
        }
        revealed
    }
}

impl SelectProject for SelectionCoordinator {
    fn select_project(&mut self, project: &ProjectRecord) {
        self.select_id(project.id.clone());
    }
}
