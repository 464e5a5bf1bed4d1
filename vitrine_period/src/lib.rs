// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vitrine Period: month-granular parsing of project date ranges.
//!
//! Project records describe their active period as free text such as
//! `"Aug 2025 – Oct 2025"` (an en dash between two `<Mon> <Year>` pairs). This
//! crate turns that text into [`MonthIndex`] values, a single integer per
//! calendar month (`year * 12 + month`, months 0-based), which is the only unit
//! of time the layout crates compare.
//!
//! There are two entry points:
//!
//! - [`parse_month_index`] is the lenient form used by layout code. It returns
//!   `None` for anything it cannot read. Callers treat `None` as "unknown date"
//!   and leave the record out of time-dependent geometry; it never defaults to
//!   month zero.
//! - [`Period`] implements [`FromStr`](core::str::FromStr) and reports *why* a
//!   period failed to parse through [`PeriodError`].
//!
//! ## Minimal example
//!
//! ```rust
//! use vitrine_period::{Endpoint, MonthIndex, Period, parse_month_index};
//!
//! let start = parse_month_index("Aug 2025 – Oct 2025", Endpoint::Start);
//! let end = parse_month_index("Aug 2025 – Oct 2025", Endpoint::End);
//! assert_eq!(start, Some(MonthIndex::new(2025, 7)));
//! assert_eq!(end, Some(MonthIndex::new(2025, 9)));
//!
//! // Unknown months never become a default date.
//! assert_eq!(parse_month_index("Foo 2024", Endpoint::Start), None);
//!
//! let period: Period = "Jul 2024 – Oct 2024".parse().unwrap();
//! assert_eq!(period.months(), 4);
//! assert_eq!(period.end.to_string(), "Oct 2024");
//! ```
//!
//! Parsing is pure: the same input always yields the same result, which the
//! timeline relies on for a stable recency sort.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod month;
mod parse;

pub use month::{MONTH_ABBREVIATIONS, MonthIndex, month_from_abbreviation};
pub use parse::{Endpoint, PERIOD_SEPARATOR, Period, PeriodError, parse_month, parse_month_index};
