// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vitrine Scatter: a deck of project cards that fans out and can be dragged.
//!
//! The scatter view has two states:
//!
//! - **Closed**: cards sit in a tight stack with a small per-card stagger, like
//!   a deck in a folder.
//! - **Open**: each card moves to a fixed scatter slot, scaled by the
//!   responsive scale factor, plus whatever offset the user has dragged it by.
//!
//! Slots come from two small tables reused cyclically by array index:
//! [`SCATTER_SLOTS`] (4 entries) for the open state and [`STACK_OFFSETS`]
//! (5 entries) for the closed state. A card's slot therefore depends on its
//! position in the list, not on its identity.
//!
//! Drag offsets are sticky: they survive open/close toggles and are only
//! removed by an explicit [`ScatterView::clear_offsets`] or
//! [`ScatterView::clear_offset`]. Clicks that end a drag are suppressed, so
//! moving a card never selects it.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use vitrine_project::{Accent, ProjectRecord};
//! use vitrine_scale::ScaleBreakpoints;
//! use vitrine_scatter::{ScatterConfig, ScatterView};
//!
//! let projects: Vec<_> = ["p1", "p2", "p3", "p4"]
//!     .into_iter()
//!     .map(|id| ProjectRecord::new(id, id, "Jan 2024"))
//!     .collect();
//!
//! let mut view = ScatterView::new(ScatterConfig::default(), ScaleBreakpoints::DEFAULT, 1440.0);
//! view.mount(0.0);
//! view.tick(180.0); // the deck opens on its own shortly after mount
//! assert!(view.is_open());
//!
//! let fallback = Accent::fallback();
//! let cards = view.layout(&projects, None, &fallback);
//! assert_eq!(cards[0].transform.translate, Vec2::new(-180.0, -120.0));
//! assert_eq!(cards[0].transform.rotate_deg, -8.0);
//!
//! // Drag p1 by (10, 10); the release click is swallowed.
//! let mut picked = Vec::new();
//! view.pointer_down(&projects[0].id, Point::new(0.0, 0.0));
//! view.pointer_move(Point::new(10.0, 10.0));
//! view.pointer_up();
//! view.click(&projects[0], &mut |p: &ProjectRecord| picked.push(p.id.clone()));
//! assert!(picked.is_empty());
//! assert_eq!(view.offsets().get(&projects[0].id), Vec2::new(10.0, 10.0));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod offsets;
mod transform;
mod view;

pub use config::{SCATTER_SLOTS, STACK_OFFSETS, ScatterConfig, ScatterSlot};
pub use offsets::DragOffsets;
pub use transform::CardTransform;
pub use view::{SCATTER_LISTENERS, ScatterCard, ScatterView};
