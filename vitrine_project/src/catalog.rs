// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Base records plus per-language display overlays.

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::{Language, ProjectId, ProjectRecord};

/// Localized display text for one project. `None` keeps the base value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ProjectTranslation {
    /// Localized name.
    pub name: Option<String>,
    /// Localized role.
    pub role: Option<String>,
    /// Localized one-line summary.
    pub short_description: Option<String>,
    /// Localized highlights; replaces the whole list.
    pub highlights: Option<Vec<String>>,
    /// Localized bookmark label.
    pub bookmark_label: Option<String>,
}

impl ProjectTranslation {
    fn apply(&self, record: &mut ProjectRecord) {
        if let Some(name) = &self.name {
            record.name.clone_from(name);
        }
        if let Some(role) = &self.role {
            record.role.clone_from(role);
        }
        if let Some(desc) = &self.short_description {
            record.short_description.clone_from(desc);
        }
        if let Some(highlights) = &self.highlights {
            record.highlights.clone_from(highlights);
        }
        if let Some(label) = &self.bookmark_label {
            record.bookmark_label = Some(label.clone());
        }
    }
}

/// Project records in their base language plus translation overlays.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Catalog {
    base_language: Language,
    projects: Vec<ProjectRecord>,
    #[cfg_attr(feature = "serde", serde(default))]
    translations: HashMap<Language, HashMap<ProjectId, ProjectTranslation>>,
}

impl Catalog {
    /// Creates a catalog whose records are written in `base_language`.
    #[must_use]
    pub fn new(base_language: Language, projects: Vec<ProjectRecord>) -> Self {
        Self {
            base_language,
            projects,
            translations: HashMap::new(),
        }
    }

    /// The language the base records are written in.
    #[must_use]
    pub fn base_language(&self) -> Language {
        self.base_language
    }

    /// Base records, in caller-supplied order.
    #[must_use]
    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    /// Looks up a base record by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ProjectRecord> {
        self.projects.iter().find(|p| p.id == *id)
    }

    /// Adds or replaces the overlay for `id` in `language`.
    ///
    /// Overlays for the base language are ignored by [`Catalog::localized`].
    pub fn insert_translation(
        &mut self,
        language: Language,
        id: impl Into<ProjectId>,
        translation: ProjectTranslation,
    ) {
        self.translations
            .entry(language)
            .or_default()
            .insert(id.into(), translation);
    }

    /// Records with display text for `language`, in base order.
    ///
    /// Records without an overlay keep their base text. Ids, periods, tech
    /// stacks, links, accents and media are never changed.
    #[must_use]
    pub fn localized(&self, language: Language) -> Vec<ProjectRecord> {
        let overlays = if language == self.base_language {
            None
        } else {
            self.translations.get(&language)
        };
        let Some(overlays) = overlays else {
            return self.projects.clone();
        };

        let mut missing = 0_usize;
        let localized = self
            .projects
            .iter()
            .map(|project| {
                let mut record = project.clone();
                match overlays.get(&project.id) {
                    Some(t) => t.apply(&mut record),
                    None => missing += 1,
                }
                record
            })
            .collect();
        if missing > 0 {
            tracing::debug!(%language, missing, "projects without translation keep base text");
        }
        localized
    }
}
