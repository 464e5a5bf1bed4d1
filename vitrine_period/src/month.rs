// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// English three-letter month abbreviations, indexed by 0-based month.
pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Looks up a 0-based month from its exact, case-sensitive abbreviation.
///
/// ```
/// use vitrine_period::month_from_abbreviation;
///
/// assert_eq!(month_from_abbreviation("Jan"), Some(0));
/// assert_eq!(month_from_abbreviation("Dec"), Some(11));
/// assert_eq!(month_from_abbreviation("jan"), None);
/// ```
#[must_use]
pub fn month_from_abbreviation(abbreviation: &str) -> Option<u8> {
    MONTH_ABBREVIATIONS
        .iter()
        .zip(0_u8..)
        .find_map(|(name, index)| (*name == abbreviation).then_some(index))
}

/// A calendar month encoded as `year * 12 + month` (month 0-based).
///
/// Ordering on `MonthIndex` is chronological, and the difference between two
/// indices is the number of months between them.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MonthIndex(i32);

impl MonthIndex {
    /// Creates the index for `month` (0-based, taken modulo 12) of `year`.
    ///
    /// Overflows for years outside roughly ±178 million; use
    /// [`MonthIndex::checked_new`] for untrusted input.
    #[must_use]
    pub const fn new(year: i32, month: u8) -> Self {
        Self(year * 12 + (month % 12) as i32)
    }

    /// Like [`MonthIndex::new`] but returns `None` on overflow.
    #[must_use]
    pub fn checked_new(year: i32, month: u8) -> Option<Self> {
        year.checked_mul(12)
            .and_then(|base| base.checked_add(i32::from(month % 12)))
            .map(Self)
    }

    /// Wraps a raw `year * 12 + month` value.
    #[must_use]
    pub const fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    /// Returns the raw `year * 12 + month` value.
    #[must_use]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Calendar year of this month.
    #[must_use]
    pub const fn year(self) -> i32 {
        self.0.div_euclid(12)
    }

    /// 0-based month of the year.
    #[must_use]
    pub const fn month(self) -> u8 {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "rem_euclid(12) is always in 0..12"
        )]
        {
            self.0.rem_euclid(12) as u8
        }
    }

    /// Three-letter English abbreviation of the month, e.g. `"Aug"`.
    #[must_use]
    pub const fn abbreviation(self) -> &'static str {
        MONTH_ABBREVIATIONS[self.month() as usize]
    }

    /// January of this month's year.
    #[must_use]
    pub const fn start_of_year(self) -> Self {
        Self(self.year() * 12)
    }

    /// Returns the month `months` later (or earlier when negative), saturating.
    #[must_use]
    pub const fn offset(self, months: i32) -> Self {
        Self(self.0.saturating_add(months))
    }

    /// Number of months from `earlier` to `self` (negative if `self` is earlier).
    #[must_use]
    pub const fn months_since(self, earlier: Self) -> i32 {
        self.0.saturating_sub(earlier.0)
    }
}

impl fmt::Display for MonthIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.abbreviation(), self.year())
    }
}
