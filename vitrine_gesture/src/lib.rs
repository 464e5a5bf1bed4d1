// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vitrine Gesture: small state machines for card interactions.
//!
//! Each module handles one interaction pattern that needs state across
//! several events:
//!
//! - [`drag`]: pointer drags with a movement threshold, and the one-shot click
//!   suppression that stops a drag release from also selecting the card.
//! - [`hover`]: the single card currently under the pointer.
//! - [`listeners`]: scoped registration of host event listeners, detached
//!   automatically when the scope is dropped.
//!
//! The crate does not assume any UI framework. Hosts feed in pointer positions
//! and target ids and read back offsets and decisions.
//!
//! ## Drag or click?
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use vitrine_gesture::drag::{ClickDisposition, DragTracker};
//!
//! let mut drag = DragTracker::<&str>::default();
//!
//! // A real drag: the release must not select the card.
//! drag.pointer_down("p1", Point::new(0.0, 0.0), Vec2::ZERO);
//! let moved = drag.pointer_move(Point::new(10.0, 10.0)).unwrap();
//! assert_eq!(moved.offset, Vec2::new(10.0, 10.0));
//! drag.pointer_up();
//! assert_eq!(drag.click(&"p1"), ClickDisposition::Suppressed);
//!
//! // A tap: the click goes through.
//! drag.pointer_down("p1", Point::new(0.0, 0.0), Vec2::new(10.0, 10.0));
//! drag.pointer_up();
//! assert_eq!(drag.click(&"p1"), ClickDisposition::Activate);
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

pub mod drag;
pub mod hover;
pub mod listeners;
