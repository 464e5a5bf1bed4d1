// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

/// Open-state position of a card relative to the stage centre, before scaling.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScatterSlot {
    /// Translation in unscaled pixels.
    pub offset: Vec2,
    /// Fixed rotation in degrees.
    pub rotate_deg: f64,
}

impl ScatterSlot {
    const fn new(x: f64, y: f64, rotate_deg: f64) -> Self {
        Self {
            offset: Vec2::new(x, y),
            rotate_deg,
        }
    }
}

/// Open-state slots, reused cyclically by card index.
pub const SCATTER_SLOTS: [ScatterSlot; 4] = [
    ScatterSlot::new(-180.0, -120.0, -8.0),
    ScatterSlot::new(-50.0, -20.0, -3.0),
    ScatterSlot::new(220.0, -90.0, 6.0),
    ScatterSlot::new(-150.0, 90.0, 5.0),
];

/// Closed-state horizontal stagger, reused cyclically by card index.
pub const STACK_OFFSETS: [f64; 5] = [-4.0, -2.0, 2.0, 6.0, -6.0];

/// Tunables for the scatter view. Defaults match the shipped gallery.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScatterConfig {
    /// Delay after mount before the deck opens by itself, in milliseconds.
    pub open_delay_ms: f64,
    /// Per-axis pointer travel that turns a press into a drag, in pixels.
    pub drag_threshold: f64,
    /// Entrance animation delay added per card index, in milliseconds.
    pub stagger_ms: f64,
    /// Magnitude of the alternating horizontal deal-in offset, in pixels.
    pub deal_offset: f64,
    /// Card scale in the closed stack, relative to the responsive scale.
    pub closed_scale: f64,
    /// Vertical lift per card in the closed stack, in unscaled pixels.
    pub stack_lift: f64,
    /// Closed-stack rotation in degrees per pixel of stack offset.
    pub stack_rotation_ratio: f64,
    /// z-index of the bottom card; earlier cards stack above later ones.
    pub base_z_index: usize,
    /// Folder backdrop scale relative to the responsive scale.
    pub folder_scale_ratio: f64,
    /// Number of tech-stack tags shown on a card.
    pub tag_preview: usize,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            open_delay_ms: 180.0,
            drag_threshold: 3.0,
            stagger_ms: 70.0,
            deal_offset: 16.0,
            closed_scale: 0.9,
            stack_lift: 3.0,
            stack_rotation_ratio: 0.6,
            base_z_index: 50,
            folder_scale_ratio: 1.25,
            tag_preview: 3,
        }
    }
}
