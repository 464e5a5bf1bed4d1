// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vitrine Gallery: a project gallery with scatter and timeline layouts.
//!
//! [`Gallery`] composes the Vitrine crates into one headless component:
//!
//! - the ordered project list, optionally localized from a
//!   [`Catalog`](vitrine_project::Catalog),
//! - a [`SelectionCoordinator`](vitrine_selection::SelectionCoordinator) that
//!   owns the selected id and reveals the detail panel a frame later,
//! - a [`ScatterView`](vitrine_scatter::ScatterView) and a
//!   [`TimelineView`](vitrine_timeline::TimelineView), of which one is active,
//! - a [`ListenerScope`](vitrine_gesture::listeners::ListenerScope) holding the
//!   active view's host listeners.
//!
//! The host forwards events and calls [`Gallery::frame`] on each animation
//! frame, then renders [`Gallery::scatter_cards`] or
//! [`Gallery::timeline_frame`].
//!
//! ## Minimal example
//!
//! ```rust
//! use std::rc::Rc;
//! use kurbo::Point;
//! use vitrine_gallery::{Gallery, GalleryConfig, ViewMode};
//! use vitrine_gesture::listeners::{EventKinds, ListenTarget, ListenerHost};
//! use vitrine_project::{ProjectId, ProjectRecord};
//!
//! struct NoopHost;
//! impl ListenerHost for NoopHost {
//!     type Handle = ();
//!     fn attach(&self, _: ListenTarget, _: EventKinds) {}
//!     fn detach(&self, _: ()) {}
//! }
//!
//! let mut gallery = Gallery::new(GalleryConfig::default(), Rc::new(NoopHost), 1920.0);
//! gallery.set_projects(
//!     vec![
//!         ProjectRecord::new("p1", "Atlas", "Aug 2025 – Oct 2025"),
//!         ProjectRecord::new("p2", "Beacon", "Mar 2025 – Jun 2025"),
//!     ],
//!     0.0,
//! );
//! gallery.mount(0.0);
//!
//! // A tap on a card selects it; the detail panel is revealed next frame.
//! let p2 = ProjectId::from("p2");
//! gallery.pointer_down(Some(&p2), Point::new(0.0, 0.0));
//! gallery.pointer_up();
//! gallery.click(&p2);
//! let mut revealed = Vec::new();
//! let outcome = gallery.frame(16.0, &mut |id: &ProjectId| revealed.push(id.clone()));
//! assert!(outcome.revealed);
//! assert_eq!(revealed, [p2]);
//!
//! // The timeline highlights the same selection.
//! gallery.set_mode(ViewMode::Timeline, 32.0);
//! let frame = gallery.timeline_frame();
//! assert!(frame.cards.iter().any(|c| c.is_active));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod gallery;

pub use config::{GalleryConfig, ViewMode};
pub use gallery::{FrameOutcome, Gallery};
