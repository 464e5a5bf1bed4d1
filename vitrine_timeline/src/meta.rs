// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use smallvec::SmallVec;
use vitrine_period::MonthIndex;
use vitrine_project::ProjectRecord;

use crate::TimelineConfig;

/// One year label on the axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct YearTick {
    /// Calendar year.
    pub year: i32,
    /// Offset of January of `year` along the rail, in percent of its width.
    pub percent: f64,
}

/// Start and end month of `project`, or `None` unless both parse.
pub(crate) fn datable_range(project: &ProjectRecord) -> Option<(MonthIndex, MonthIndex)> {
    Some((project.start_month()?, project.end_month()?))
}

/// Padded month range covered by the axis.
#[derive(Clone, Debug, PartialEq)]
pub struct TimelineMeta {
    /// First month on the axis.
    pub min_month: MonthIndex,
    /// Last month on the axis.
    pub max_month: MonthIndex,
    /// `max_month - min_month + 1`, never below 1.
    pub month_span: u32,
    /// Year of `min_month`.
    pub min_year: i32,
    /// Year of `max_month`.
    pub max_year: i32,
    /// Year labels in increasing order.
    pub ticks: SmallVec<[YearTick; 4]>,
}

impl TimelineMeta {
    /// Computes the axis range for `projects`.
    ///
    /// The range covers the start and end months of every datable record,
    /// widened to the configured baseline window and padded on both sides.
    /// A record contributes only if both ends of its period parse. With no
    /// datable record the axis is the padded baseline window.
    #[must_use]
    pub fn compute(projects: &[ProjectRecord], config: &TimelineConfig) -> Self {
        let mut min_data = config.baseline_start;
        let mut max_data = config.baseline_end;
        for (start, end) in projects.iter().filter_map(datable_range) {
            min_data = min_data.min(start);
            max_data = max_data.max(end);
        }
        Self::from_range(min_data, max_data, config)
    }

    fn from_range(min_data: MonthIndex, max_data: MonthIndex, config: &TimelineConfig) -> Self {
        let min_month = MonthIndex::from_raw(min_data.offset(-config.padding_months).raw().max(0));
        let max_month = max_data.offset(config.padding_months);
        let month_span = u32::try_from(max_month.months_since(min_month) + 1)
            .unwrap_or(1)
            .max(1);
        let min_year = min_month.year();
        let max_year = max_month.year();

        let first_tick = min_year.max(config.baseline_start.year());
        let last_tick = max_year.max(config.baseline_end.year());
        let ticks = (first_tick..=last_tick)
            .map(|year| YearTick {
                year,
                percent: f64::from(MonthIndex::new(year, 0).months_since(min_month))
                    / f64::from(month_span)
                    * 100.0,
            })
            .collect();

        tracing::trace!(%min_month, %max_month, month_span, "timeline axis computed");
        Self {
            min_month,
            max_month,
            month_span,
            min_year,
            max_year,
            ticks,
        }
    }

    /// Horizontal position of `month` on a rail `width` pixels wide.
    #[must_use]
    pub fn position(&self, month: MonthIndex, width: f64) -> f64 {
        f64::from(month.months_since(self.min_month)) * width / f64::from(self.month_span)
    }

    /// Rail width for this axis at `scale` in a viewport `viewport_width` wide.
    ///
    /// Large enough for a usable minimum, for the months at the configured
    /// density, and for the reveal to have somewhere to travel.
    #[must_use]
    pub fn timeline_width(&self, scale: f64, viewport_width: f64, config: &TimelineConfig) -> f64 {
        let by_density = f64::from(self.month_span) * config.px_per_month * scale;
        let by_viewport = if viewport_width > 0.0 {
            viewport_width + config.overscroll
        } else {
            0.0
        };
        config.min_width.max(by_density).max(by_viewport)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    fn record(period: &str) -> ProjectRecord {
        ProjectRecord::new("x", "x", period)
    }

    #[test]
    fn baseline_is_padded() {
        let meta = TimelineMeta::compute(&[record("Mar 2024 \u{2013} Apr 2024")], &TimelineConfig::default());
        assert_eq!(meta.min_month, MonthIndex::new(2023, 11));
        assert_eq!(meta.max_month, MonthIndex::new(2026, 0));
        assert_eq!(meta.month_span, 26);
        assert_eq!(meta.min_year, 2023);
        assert_eq!(meta.max_year, 2026);
        let years: Vec<_> = meta.ticks.iter().map(|t| t.year).collect();
        assert_eq!(years, [2024, 2025, 2026]);
        assert_eq!(meta.ticks[0].percent, 1.0 / 26.0 * 100.0);
    }

    #[test]
    fn half_dated_records_do_not_widen_axis() {
        let config = TimelineConfig::default();
        let meta = TimelineMeta::compute(
            &[
                record("Jan 2024 \u{2013} Mar 2024"),
                record("Foo 2026 \u{2013} Dec 2026"),
                record("Jun 2021 \u{2013} Soon"),
            ],
            &config,
        );
        assert_eq!(meta, TimelineMeta::compute(&[], &config));
        assert_eq!(meta.max_month, MonthIndex::new(2026, 0));
    }

    #[test]
    fn data_outside_baseline_widens_axis() {
        let meta = TimelineMeta::compute(
            &[
                record("Sep 2022 \u{2013} Jan 2023"),
                record("Nov 2026 \u{2013} Feb 2027"),
            ],
            &TimelineConfig::default(),
        );
        assert_eq!(meta.min_month, MonthIndex::new(2022, 7));
        assert_eq!(meta.max_month, MonthIndex::new(2027, 2));
        // Ticks start at the baseline year even when data starts earlier.
        assert_eq!(meta.ticks.first().map(|t| t.year), Some(2024));
        assert_eq!(meta.ticks.last().map(|t| t.year), Some(2027));
    }

    #[test]
    fn unparseable_records_are_ignored() {
        let config = TimelineConfig::default();
        let with_junk = TimelineMeta::compute(
            &[record("Jun 2024 \u{2013} Jul 2024"), record("someday")],
            &config,
        );
        let without = TimelineMeta::compute(&[record("Jun 2024 \u{2013} Jul 2024")], &config);
        assert_eq!(with_junk, without);
    }

    #[test]
    fn no_data_falls_back_to_baseline() {
        let config = TimelineConfig::default();
        let empty = TimelineMeta::compute(&[], &config);
        let junk = TimelineMeta::compute(&[record("TBD")], &config);
        assert_eq!(empty, junk);
        assert_eq!(empty.min_month, MonthIndex::new(2023, 11));
        assert_eq!(empty.max_month, MonthIndex::new(2026, 0));
    }

    #[test]
    fn min_month_never_negative() {
        let meta = TimelineMeta::compute(&[record("Jan 0 \u{2013} Feb 0")], &TimelineConfig::default());
        assert_eq!(meta.min_month.raw(), 0);
    }

    #[test]
    fn width_takes_the_largest_requirement() {
        let config = TimelineConfig::default();
        let meta = TimelineMeta::compute(&[], &config);
        // 26 months * 90px = 2340px.
        assert_eq!(meta.timeline_width(1.0, 1000.0, &config), 2340.0);
        assert_eq!(meta.timeline_width(0.6, 400.0, &config), 26.0 * 90.0 * 0.6);
        assert_eq!(meta.timeline_width(1.0, 2000.0, &config), 2600.0);
        assert_eq!(meta.timeline_width(0.1, 0.0, &config), 900.0);
    }

    #[test]
    fn positions_scale_with_width() {
        let config = TimelineConfig::default();
        let meta = TimelineMeta::compute(&[], &config);
        assert_eq!(meta.position(meta.min_month, 2600.0), 0.0);
        assert_eq!(meta.position(MonthIndex::new(2025, 0), 2600.0), 13.0 / 26.0 * 2600.0);
    }
}
