// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

/// Display language. Only used to pick labels; never affects identity.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Language {
    /// English (`"en"`).
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "en"))]
    English,
    /// Chinese (`"zh"`).
    #[cfg_attr(feature = "serde", serde(rename = "zh"))]
    Chinese,
}

impl Language {
    /// All supported languages.
    pub const ALL: [Self; 2] = [Self::English, Self::Chinese];

    /// Short language code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Chinese => "zh",
        }
    }

    /// The other language, as flipped by the language switcher.
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::English => Self::Chinese,
            Self::Chinese => Self::English,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Returned when a language code is not recognised.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language code `{0}`")]
pub struct LanguageParseError(String);

impl FromStr for Language {
    type Err = LanguageParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "en" | "EN" | "english" => Ok(Self::English),
            "zh" | "ZH" | "chinese" => Ok(Self::Chinese),
            other => Err(LanguageParseError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_round_trips() {
        for lang in Language::ALL {
            assert_eq!(lang.toggle().toggle(), lang);
            assert_ne!(lang.toggle(), lang);
        }
    }

    #[test]
    fn parse_codes() {
        assert_eq!("en".parse(), Ok(Language::English));
        assert_eq!(" zh ".parse(), Ok(Language::Chinese));
        assert!("fr".parse::<Language>().is_err());
    }
}
