// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vitrine Timeline: project cards on a horizontal time axis.
//!
//! Cards sit at the position of their end month, proportional to the months
//! elapsed since the start of the axis:
//!
//! ```text
//! x = (end - min_month) / month_span * width
//! width = max(min_width, month_span * px_per_month * scale, viewport + overscroll)
//! ```
//!
//! The axis always covers a fixed baseline window (January 2024 to December
//! 2025 by default) plus a month of padding on each side, so sparse data never
//! collapses it. Records whose period does not parse are left off the rail
//! rather than placed at a default position.
//!
//! The pieces:
//!
//! - [`TimelineMeta`]: the padded month range and year ticks.
//! - [`TimelineLayout`]: recency-ordered entries with pixel positions.
//! - [`Visibility`]: culling against a [`RevealWindow`] around the viewport.
//! - [`AutoScroll`]: the slow ease-out reveal toward the most recent card,
//!   stopped for good by user input.
//! - [`TimelineView`]: ties the above to host events and produces a
//!   [`TimelineFrame`] for rendering.
//!
//! ## Minimal example
//!
//! ```rust
//! use vitrine_project::{Accent, ProjectRecord};
//! use vitrine_scale::ScaleBreakpoints;
//! use vitrine_timeline::{TimelineConfig, TimelineView};
//!
//! let projects = vec![
//!     ProjectRecord::new("a", "Alpha", "Jan 2024 – Mar 2024"),
//!     ProjectRecord::new("b", "Beta", "Aug 2025 – Oct 2025"),
//! ];
//!
//! let mut view = TimelineView::new(TimelineConfig::default(), ScaleBreakpoints::DEFAULT, 1200.0);
//! view.set_projects(&projects, 0.0);
//! assert!(view.activate(0.0));
//!
//! // The host applies each returned position to its scroll container.
//! let mut last = 0.0;
//! for frame in 1..=3 {
//!     if let Some(x) = view.on_frame(frame as f64 * 16.0) {
//!         last = x;
//!     }
//! }
//! assert!(last > 0.0);
//!
//! // Wheel input takes over for the rest of this activation.
//! view.interrupt();
//! assert_eq!(view.on_frame(100.0), None);
//!
//! let fallback = Accent::fallback();
//! let frame = view.frame(&projects, None, &fallback);
//! assert_eq!(frame.cards[0].project.id.as_str(), "a");
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod autoscroll;
mod config;
mod layout;
mod meta;
mod view;
mod visibility;

pub use autoscroll::AutoScroll;
pub use config::TimelineConfig;
pub use layout::{Segment, TimelineEntry, TimelineLayout, recency_order};
pub use meta::{TimelineMeta, YearTick};
pub use view::{TIMELINE_LISTENERS, TimelineCard, TimelineFrame, TimelineView};
pub use visibility::{RevealWindow, Visibility};
