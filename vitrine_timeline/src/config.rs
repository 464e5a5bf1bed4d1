// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use vitrine_period::MonthIndex;

/// Tunables for the timeline view. Defaults match the shipped gallery.
///
/// Pixel values are in unscaled CSS pixels unless noted otherwise.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TimelineConfig {
    /// First month the axis always covers.
    pub baseline_start: MonthIndex,
    /// Last month the axis always covers.
    pub baseline_end: MonthIndex,
    /// Months of padding added on both sides of the data range.
    pub padding_months: i32,
    /// Horizontal pixels per month at scale 1.
    pub px_per_month: f64,
    /// Minimum rail width.
    pub min_width: f64,
    /// Extra rail width beyond the viewport so the reveal has travel.
    pub overscroll: f64,
    /// Culling margin on both sides of the viewport.
    pub reveal_buffer: f64,
    /// Gap left before the most recent card when the reveal settles.
    pub leading_margin: f64,
    /// Duration of the auto-scroll reveal, in milliseconds.
    pub sweep_duration_ms: f64,
    /// Minimum width of a hover connector.
    pub segment_min_width: f64,
    /// Vertical position of the year axis.
    pub axis_y: f64,
    /// Connector offset below the axis.
    pub line_offset: f64,
    /// Card row offset below the axis.
    pub cards_offset: f64,
    /// Height reserved for the card row.
    pub card_band_height: f64,
    /// Number of tech-stack tags shown on a card.
    pub tag_preview: usize,
}

impl TimelineConfig {
    /// Vertical position of the card row.
    #[must_use]
    pub fn card_top(&self) -> f64 {
        self.axis_y + self.cards_offset
    }

    /// Vertical position of hover connectors.
    #[must_use]
    pub fn line_top(&self) -> f64 {
        self.axis_y + self.line_offset
    }

    /// Total rail height.
    #[must_use]
    pub fn rail_height(&self) -> f64 {
        self.card_top() + self.card_band_height
    }
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            baseline_start: MonthIndex::new(2024, 0),
            baseline_end: MonthIndex::new(2025, 11),
            padding_months: 1,
            px_per_month: 90.0,
            min_width: 900.0,
            overscroll: 600.0,
            reveal_buffer: 140.0,
            leading_margin: 24.0,
            sweep_duration_ms: 16_800.0,
            segment_min_width: 80.0,
            axis_y: 60.0,
            line_offset: 10.0,
            cards_offset: 80.0,
            card_band_height: 220.0,
            tag_preview: 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_rows() {
        let c = TimelineConfig::default();
        assert_eq!(c.card_top(), 140.0);
        assert_eq!(c.line_top(), 70.0);
        assert_eq!(c.rail_height(), 360.0);
    }
}
