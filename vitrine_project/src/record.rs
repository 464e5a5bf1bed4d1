// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use vitrine_period::{Endpoint, MonthIndex, parse_month_index};

use crate::ProjectId;

/// A display color token, such as `"#f97316"` or `"var(--accent-teal)"`.
///
/// The token is passed through to the renderer verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Accent(String);

impl Accent {
    /// Token used for records without an accent of their own.
    pub const FALLBACK: &'static str = "#e5e5e5";

    /// Wraps a color token.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The default accent, [`Accent::FALLBACK`].
    #[must_use]
    pub fn fallback() -> Self {
        Self(Self::FALLBACK.into())
    }

    /// Returns the token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Accent {
    fn default() -> Self {
        Self::fallback()
    }
}

/// Optional visual attached to a project card.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Media {
    /// A still image.
    Image {
        /// Image URL or path.
        src: String,
        /// Alternative text.
        alt: String,
    },
    /// A short looping video.
    Video {
        /// Video URL or path.
        src: String,
        /// Optional poster frame shown before playback.
        poster: Option<String>,
    },
    /// Drawn by the renderer when a record has no media.
    Placeholder,
}

static PLACEHOLDER: Media = Media::Placeholder;

/// One project as supplied by the host.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ProjectRecord {
    /// Stable identity; unchanged by localization.
    pub id: ProjectId,
    /// Free-text range such as `"Aug 2025 – Oct 2025"`.
    pub period: String,
    /// Full project name.
    pub name: String,
    /// Role held on the project.
    pub role: String,
    /// Technologies, in display order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub tech_stack: Vec<String>,
    /// One-line summary.
    #[cfg_attr(feature = "serde", serde(default))]
    pub short_description: String,
    /// Bullet points for the detail panel, in display order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub highlights: Vec<String>,
    /// Optional external link.
    #[cfg_attr(feature = "serde", serde(default))]
    pub link: Option<String>,
    /// Short label shown on cards instead of the full name.
    #[cfg_attr(feature = "serde", serde(default))]
    pub bookmark_label: Option<String>,
    /// Optional accent color token.
    #[cfg_attr(feature = "serde", serde(default))]
    pub accent: Option<Accent>,
    /// Optional media descriptor.
    #[cfg_attr(feature = "serde", serde(default))]
    pub media: Option<Media>,
}

impl ProjectRecord {
    /// Creates a record with the required fields; everything else is empty.
    #[must_use]
    pub fn new(id: impl Into<ProjectId>, name: impl Into<String>, period: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            period: period.into(),
            name: name.into(),
            role: String::new(),
            tech_stack: Vec::new(),
            short_description: String::new(),
            highlights: Vec::new(),
            link: None,
            bookmark_label: None,
            accent: None,
            media: None,
        }
    }

    /// Card title: the bookmark label if present, otherwise the name.
    #[must_use]
    pub fn title(&self) -> &str {
        self.bookmark_label.as_deref().unwrap_or(&self.name)
    }

    /// The record's accent token, or `fallback` when it has none.
    #[must_use]
    pub fn accent_or<'a>(&'a self, fallback: &'a Accent) -> &'a Accent {
        self.accent.as_ref().unwrap_or(fallback)
    }

    /// The record's media, or [`Media::Placeholder`].
    #[must_use]
    pub fn media_or_placeholder(&self) -> &Media {
        self.media.as_ref().unwrap_or(&PLACEHOLDER)
    }

    /// The first `count` entries of the tech stack.
    #[must_use]
    pub fn tag_preview(&self, count: usize) -> &[String] {
        &self.tech_stack[..count.min(self.tech_stack.len())]
    }

    /// Start month of the period, if parseable.
    #[must_use]
    pub fn start_month(&self) -> Option<MonthIndex> {
        parse_month_index(&self.period, Endpoint::Start)
    }

    /// End month of the period, if parseable.
    #[must_use]
    pub fn end_month(&self) -> Option<MonthIndex> {
        parse_month_index(&self.period, Endpoint::End)
    }

    /// Sets the role (builder style).
    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Sets the tech stack (builder style).
    #[must_use]
    pub fn with_tech_stack<I, S>(mut self, stack: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tech_stack = stack.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the accent (builder style).
    #[must_use]
    pub fn with_accent(mut self, accent: impl Into<String>) -> Self {
        self.accent = Some(Accent::new(accent));
        self
    }

    /// Sets the bookmark label (builder style).
    #[must_use]
    pub fn with_bookmark_label(mut self, label: impl Into<String>) -> Self {
        self.bookmark_label = Some(label.into());
        self
    }
}

/// Returns `true` if any record in `projects` has the given id.
#[must_use]
pub fn contains_id(projects: &[ProjectRecord], id: &ProjectId) -> bool {
    projects.iter().any(|p| &p.id == id)
}
