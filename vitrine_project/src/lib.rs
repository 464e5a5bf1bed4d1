// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vitrine Project: the records that the gallery layouts arrange.
//!
//! A [`ProjectRecord`] is plain, immutable data supplied by the host: an opaque
//! [`ProjectId`], a free-text period (see `vitrine_period`), display fields and
//! a few optional decorations ([`Accent`], [`Media`]). Layout crates read the
//! id and the period; everything else is passed through to rendering.
//!
//! Localized copy is modelled as overlays. A [`Catalog`] keeps one set of base
//! records plus per-[`Language`] [`ProjectTranslation`]s, and
//! [`Catalog::localized`] substitutes display text while keeping ids, periods
//! and decorations untouched. Because ids survive a language switch, selection
//! and drag state keyed by id stay valid across it.
//!
//! ```rust
//! use vitrine_project::{Catalog, Language, ProjectRecord, ProjectTranslation};
//!
//! let base = vec![ProjectRecord::new("vsas", "Virtual Scroll Access System", "Jul 2024 – Oct 2024")];
//! let mut catalog = Catalog::new(Language::English, base);
//! catalog.insert_translation(
//!     Language::Chinese,
//!     "vsas",
//!     ProjectTranslation {
//!         name: Some("虚拟卷轴访问系统".into()),
//!         ..ProjectTranslation::default()
//!     },
//! );
//!
//! let zh = catalog.localized(Language::Chinese);
//! assert_eq!(zh[0].id.as_str(), "vsas");
//! assert_eq!(zh[0].name, "虚拟卷轴访问系统");
//! assert_eq!(zh[0].period, "Jul 2024 – Oct 2024");
//! ```
//!
//! Optional `serde` support is available behind the `serde` feature.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod catalog;
mod id;
mod language;
mod record;

pub use catalog::{Catalog, ProjectTranslation};
pub use id::ProjectId;
pub use language::{Language, LanguageParseError};
pub use record::{Accent, Media, ProjectRecord, contains_id};
