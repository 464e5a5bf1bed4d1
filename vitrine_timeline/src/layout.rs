// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::cmp::Reverse;

use vitrine_period::MonthIndex;
use vitrine_project::{ProjectId, ProjectRecord};

use crate::meta::datable_range;
use crate::{TimelineConfig, TimelineMeta};

/// Indices of `projects` ordered most recent first.
///
/// Orders by descending end month. Records whose end month cannot be parsed
/// go last. Ties keep their input order.
#[must_use]
pub fn recency_order(projects: &[ProjectRecord]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..projects.len()).collect();
    // `None < Some(_)`, so reversing puts unknown ends after every known one.
    order.sort_by_key(|&i| Reverse(projects[i].end_month()));
    order
}

/// Connector drawn between a card's start and end months.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Segment {
    /// Left edge, never negative.
    pub left: f64,
    /// Width, never below the configured minimum.
    pub width: f64,
    /// Vertical position of the line.
    pub top: f64,
    /// Vertical position of the month labels.
    pub label_top: f64,
    /// Label at `left`.
    pub start_label: &'static str,
    /// Label at `left + width`.
    pub end_label: &'static str,
}

impl Segment {
    /// Horizontal position of the end label.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }
}

/// A record placed on the rail.
#[derive(Clone, Debug, PartialEq)]
pub struct TimelineEntry {
    /// Position of the record in the caller's list.
    pub index: usize,
    /// Identity of the record.
    pub id: ProjectId,
    /// 1-based rank in recency order.
    pub ordinal: usize,
    /// Parsed start month.
    pub start: MonthIndex,
    /// Parsed end month.
    pub end: MonthIndex,
    /// Horizontal position of the start month.
    pub start_px: f64,
    /// Horizontal position of the end month; the card's left edge.
    pub end_px: f64,
}

impl TimelineEntry {
    /// Left edge of the card.
    #[must_use]
    pub fn left(&self) -> f64 {
        self.end_px
    }

    /// Connector between the start and end months.
    #[must_use]
    pub fn segment(&self, config: &TimelineConfig) -> Segment {
        let top = config.line_top();
        Segment {
            left: self.start_px.min(self.end_px).max(0.0),
            width: (self.end_px - self.start_px).abs().max(config.segment_min_width),
            top,
            label_top: top - 10.0,
            start_label: self.start.abbreviation(),
            end_label: self.end.abbreviation(),
        }
    }
}

/// Geometry of every placeable record.
///
/// Month math is done once per project list. Pixel positions are refreshed by
/// [`TimelineLayout::set_width`] when the rail width changes.
#[derive(Clone, Debug, PartialEq)]
pub struct TimelineLayout {
    meta: TimelineMeta,
    width: f64,
    entries: Vec<TimelineEntry>,
    most_recent_end: Option<MonthIndex>,
}

impl TimelineLayout {
    /// Lays out `projects` on a rail `width` pixels wide.
    ///
    /// Records whose start or end cannot be parsed are left off the rail.
    #[must_use]
    pub fn compute(projects: &[ProjectRecord], config: &TimelineConfig, width: f64) -> Self {
        let meta = TimelineMeta::compute(projects, config);
        let order = recency_order(projects);
        let mut entries = Vec::with_capacity(order.len());
        for (rank, &index) in order.iter().enumerate() {
            let project = &projects[index];
            let Some((start, end)) = datable_range(project) else {
                tracing::warn!(
                    id = %project.id,
                    period = %project.period,
                    "period not parseable; left off the timeline"
                );
                continue;
            };
            entries.push(TimelineEntry {
                index,
                id: project.id.clone(),
                ordinal: rank + 1,
                start,
                end,
                start_px: meta.position(start, width),
                end_px: meta.position(end, width),
            });
        }
        let most_recent_end = entries.first().map(|e| e.end);

        Self {
            meta,
            width,
            entries,
            most_recent_end,
        }
    }

    /// Axis range and ticks.
    #[must_use]
    pub fn meta(&self) -> &TimelineMeta {
        &self.meta
    }

    /// Current rail width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Placed records, most recent first.
    #[must_use]
    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    /// The placed record with id `id`.
    #[must_use]
    pub fn entry(&self, id: &ProjectId) -> Option<&TimelineEntry> {
        self.entries.iter().find(|e| e.id == *id)
    }

    /// Recomputes pixel positions for a new rail width. Returns `true` if the
    /// width changed.
    pub fn set_width(&mut self, width: f64) -> bool {
        if self.width == width {
            return false;
        }
        self.width = width;
        for entry in &mut self.entries {
            entry.start_px = self.meta.position(entry.start, width);
            entry.end_px = self.meta.position(entry.end, width);
        }
        true
    }

    /// Left edge of the most recent card.
    ///
    /// `None` if no record was placed on the rail.
    #[must_use]
    pub fn most_recent_left(&self) -> Option<f64> {
        self.most_recent_end.map(|end| self.meta.position(end, self.width))
    }

    /// Where the reveal animation settles: just before the most recent card.
    #[must_use]
    pub fn reveal_target(&self, config: &TimelineConfig) -> Option<f64> {
        let left = self.most_recent_left()?;
        let target = (left - config.leading_margin).max(0.0);
        target.is_finite().then_some(target)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    fn record(id: &str, period: &str) -> ProjectRecord {
        ProjectRecord::new(id, id, period)
    }

    #[test]
    fn newest_first_unknown_last_stable() {
        let projects = vec![
            record("old", "Jan 2024 \u{2013} Mar 2024"),
            record("junk", "soon"),
            record("new", "Jun 2025 \u{2013} Sep 2025"),
            record("tie", "Feb 2024 \u{2013} Mar 2024"),
        ];
        assert_eq!(recency_order(&projects), [2, 0, 3, 1]);
    }

    #[test]
    fn entries_skip_unparseable_but_keep_ordinals() {
        let projects = vec![
            record("a", "Jan 2024 \u{2013} Mar 2024"),
            record("b", "Apr 2024 \u{2013} Later"),
            record("c", "Jun 2025 \u{2013} Sep 2025"),
        ];
        let layout = TimelineLayout::compute(&projects, &TimelineConfig::default(), 2600.0);
        let placed: Vec<_> = layout
            .entries()
            .iter()
            .map(|e| (e.id.as_str(), e.ordinal))
            .collect();
        assert_eq!(placed, [("c", 1), ("a", 2)]);
    }

    #[test]
    fn half_dated_record_is_not_revealed() {
        let config = TimelineConfig::default();
        let projects = vec![
            record("a", "Jan 2024 \u{2013} Mar 2024"),
            record("ghost", "Foo 2026 \u{2013} Dec 2026"),
        ];
        let layout = TimelineLayout::compute(&projects, &config, 2600.0);
        let placed: Vec<_> = layout.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(placed, ["a"]);
        assert_eq!(layout.meta().max_month, MonthIndex::new(2026, 0));
        let a_left = layout.entries()[0].left();
        assert_eq!(layout.most_recent_left(), Some(a_left));
        assert_eq!(layout.reveal_target(&config), Some(a_left - config.leading_margin));
    }

    #[test]
    fn entry_positions_follow_end_month() {
        let projects = vec![record("a", "Jan 2024 \u{2013} Jan 2025")];
        let config = TimelineConfig::default();
        let layout = TimelineLayout::compute(&projects, &config, 2600.0);
        let entry = &layout.entries()[0];
        // Axis runs Dec 2023 to Jan 2026: 26 months at 100px.
        assert_eq!(entry.start_px, 100.0);
        assert_eq!(entry.end_px, 1300.0);
        assert_eq!(entry.left(), 1300.0);
        assert_eq!(layout.reveal_target(&config), Some(1276.0));
    }

    #[test]
    fn resize_moves_entries() {
        let projects = vec![record("a", "Jan 2024 \u{2013} Jan 2025")];
        let mut layout = TimelineLayout::compute(&projects, &TimelineConfig::default(), 2600.0);
        assert!(!layout.set_width(2600.0));
        assert!(layout.set_width(5200.0));
        assert_eq!(layout.entries()[0].end_px, 2600.0);
    }

    #[test]
    fn segment_has_floor_and_clamp() {
        let config = TimelineConfig::default();
        let projects = vec![record("a", "Mar 2024 \u{2013} Mar 2024")];
        let layout = TimelineLayout::compute(&projects, &config, 2600.0);
        let seg = layout.entries()[0].segment(&config);
        assert_eq!(seg.width, 80.0);
        assert_eq!(seg.left, 300.0);
        assert_eq!(seg.right(), 380.0);
        assert_eq!(seg.top, 70.0);
        assert_eq!(seg.label_top, 60.0);
        assert_eq!((seg.start_label, seg.end_label), ("Mar", "Mar"));
    }

    #[test]
    fn no_reveal_when_most_recent_is_unknown() {
        let projects = vec![record("x", "Jan 2024 \u{2013} Feb 2024"), record("y", "Later")];
        let layout = TimelineLayout::compute(&projects, &TimelineConfig::default(), 2600.0);
        // "Later" sorts last, so the reveal still has a target.
        assert!(layout.most_recent_left().is_some());

        let only_junk = vec![record("y", "Later")];
        let layout = TimelineLayout::compute(&only_junk, &TimelineConfig::default(), 2600.0);
        assert_eq!(layout.most_recent_left(), None);
        assert!(layout.entries().is_empty());
    }

    #[test]
    fn reveal_target_clamps_to_zero() {
        let config = TimelineConfig {
            leading_margin: 10_000.0,
            ..TimelineConfig::default()
        };
        let projects = vec![record("a", "Jan 2024 \u{2013} Jan 2025")];
        let layout = TimelineLayout::compute(&projects, &config, 2600.0);
        assert_eq!(layout.reveal_target(&config), Some(0.0));
    }
}
