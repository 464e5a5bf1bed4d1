// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::{String, ToString};
use core::str::FromStr;

use crate::month::{MonthIndex, month_from_abbreviation};

/// Separator between the start and end of a period (U+2013 EN DASH).
pub const PERIOD_SEPARATOR: char = '\u{2013}';

/// Which end of a period to read.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// The segment before the separator.
    #[default]
    Start,
    /// The segment after the separator, falling back to the start segment
    /// when there is no (non-empty) end segment.
    End,
}

/// Why a period or month segment could not be parsed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PeriodError {
    /// The segment contained no text.
    #[error("period segment is empty")]
    Empty,
    /// A month was present but no year followed it.
    #[error("period segment has no year")]
    MissingYear,
    /// The month word is not one of the twelve English abbreviations.
    #[error("unknown month abbreviation `{0}`")]
    UnknownMonth(String),
    /// The year word is not an integer (or overflows the month encoding).
    #[error("invalid year `{0}`")]
    InvalidYear(String),
}

/// Parses one `<Mon> <Year>` segment.
///
/// Words after the year are ignored.
pub fn parse_month(segment: &str) -> Result<MonthIndex, PeriodError> {
    let mut words = segment.split_whitespace();
    let month_word = words.next().ok_or(PeriodError::Empty)?;
    let year_word = words.next().ok_or(PeriodError::MissingYear)?;
    let month = month_from_abbreviation(month_word)
        .ok_or_else(|| PeriodError::UnknownMonth(month_word.to_string()))?;
    let year: i32 = year_word
        .parse()
        .map_err(|_| PeriodError::InvalidYear(year_word.to_string()))?;
    MonthIndex::checked_new(year, month).ok_or_else(|| PeriodError::InvalidYear(year_word.to_string()))
}

/// Reads one end of a period string, returning `None` if it cannot be parsed.
///
/// This never returns a default date for bad input: callers must exclude
/// records with `None` from anything that depends on time.
#[must_use]
pub fn parse_month_index(period: &str, endpoint: Endpoint) -> Option<MonthIndex> {
    parse_month(select_segment(period, endpoint)).ok()
}

fn select_segment(period: &str, endpoint: Endpoint) -> &str {
    let mut parts = period.split(PERIOD_SEPARATOR).map(str::trim);
    // `split` always yields at least one item.
    let start = parts.next().unwrap_or_default();
    match endpoint {
        Endpoint::Start => start,
        Endpoint::End => parts.next().filter(|end| !end.is_empty()).unwrap_or(start),
    }
}

/// A fully parsed period with both ends known.
///
/// A period without a separator is a single month (`start == end`).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Period {
    /// First month of the period.
    pub start: MonthIndex,
    /// Last month of the period (inclusive).
    pub end: MonthIndex,
}

impl Period {
    /// Number of months covered, counting both ends.
    ///
    /// Periods written backwards (end before start) still report their
    /// absolute length.
    #[must_use]
    pub fn months(&self) -> u32 {
        self.end.months_since(self.start).unsigned_abs() + 1
    }

    /// Returns `true` if `month` falls within the period (inclusive).
    #[must_use]
    pub fn contains(&self, month: MonthIndex) -> bool {
        let (lo, hi) = if self.start <= self.end {
            (self.start, self.end)
        } else {
            (self.end, self.start)
        };
        lo <= month && month <= hi
    }
}

impl FromStr for Period {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let start = parse_month(select_segment(s, Endpoint::Start))?;
        let end = parse_month(select_segment(s, Endpoint::End))?;
        Ok(Self { start, end })
    }
}
