// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vitrine Timing: host-agnostic scheduling primitives.
//!
//! Nothing in Vitrine owns a clock or an event loop. Hosts pass timestamps in
//! (milliseconds, as a browser's `performance.now()` would report) and call in
//! on each animation frame. This crate supplies the small pieces that make that
//! model safe:
//!
//! - [`TimerQueue`]: deadlines with payloads, e.g. "open the scatter deck
//!   180ms after mount". Timers can be cancelled by id.
//! - [`FrameQueue`]: work deferred to the next animation frame, e.g. "scroll
//!   the detail panel into view once it has rendered".
//! - [`CancelToken`] and [`TaskSlot`]: explicit cancellation for
//!   self-rescheduling loops. A slot holds at most one live task; starting a
//!   new one cancels the old, so two loops can never drive the same target.
//! - [`Easing`] and [`Tween`]: time-based interpolation.
//!
//! ## Minimal example
//!
//! ```rust
//! use vitrine_timing::{Easing, TaskSlot, Tween};
//!
//! let mut slot = TaskSlot::new();
//! let token = slot.start();
//! let tween = Tween::new(0.0, 100.0, 1000.0, 0.0, Easing::CubicOut);
//!
//! // Each frame: check the token first, then sample.
//! assert!(!token.is_cancelled());
//! let s = tween.sample(500.0);
//! assert!(s.value > 50.0); // ease-out runs ahead of linear
//!
//! // A second activation supersedes the first loop.
//! let _next = slot.start();
//! assert!(token.is_cancelled());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod cancel;
mod easing;
mod frame;
mod timer;

pub use cancel::{CancelToken, TaskSlot};
pub use easing::{Easing, Tween, TweenSample};
pub use frame::{FrameId, FrameQueue};
pub use timer::{TimerId, TimerQueue};
