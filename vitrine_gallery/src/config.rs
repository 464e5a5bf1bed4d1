// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use vitrine_project::Accent;
use vitrine_scale::ScaleBreakpoints;
use vitrine_scatter::ScatterConfig;
use vitrine_timeline::TimelineConfig;

/// Which layout the gallery shows.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ViewMode {
    /// Draggable deck of cards.
    #[default]
    Scatter,
    /// Chronological rail.
    Timeline,
}

impl ViewMode {
    /// The other mode.
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::Scatter => Self::Timeline,
            Self::Timeline => Self::Scatter,
        }
    }

    /// Short name, used in logs and listener scope labels.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Scatter => "scatter",
            Self::Timeline => "timeline",
        }
    }
}

/// Everything tunable about a gallery.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GalleryConfig {
    /// Viewport-width to scale ladder shared by both views.
    pub scale: ScaleBreakpoints,
    /// Scatter view tunables.
    pub scatter: ScatterConfig,
    /// Timeline view tunables.
    pub timeline: TimelineConfig,
    /// Accent used for records without one.
    pub fallback_accent: Accent,
    /// Mode shown on mount.
    pub initial_mode: ViewMode,
}
