//! # Jurisdiction Type
//!
//! A compact-member jurisdiction, identified by its postal abbreviation.
//!
//! The abbreviation is normalized to lowercase at construction so that
//! jurisdiction comparison is case-insensitive everywhere without repeated
//! lowercasing at comparison sites. `Display` renders the presentation form
//! (uppercase).
//!
//! The server uses the sentinel string `"unknown"` (and occasionally an empty
//! string) to mean "no home jurisdiction selected"; [`Jurisdiction::parse`]
//! maps both to `None` so the legacy fallback chain at the payload boundary
//! is a plain `or_else` over parsed options.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A jurisdiction postal abbreviation, normalized to lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Jurisdiction(String);

impl Jurisdiction {
    /// Parse a jurisdiction abbreviation.
    ///
    /// Trims whitespace and lowercases. Returns `None` for the empty string
    /// and for the server's `"unknown"` sentinel — neither denotes a real
    /// jurisdiction.
    pub fn parse(abbrev: &str) -> Option<Self> {
        let normalized = abbrev.trim().to_ascii_lowercase();
        if normalized.is_empty() || normalized == "unknown" {
            return None;
        }
        Some(Self(normalized))
    }

    /// The normalized (lowercase) abbreviation.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The presentation form of the abbreviation (uppercase).
    pub fn display_abbrev(&self) -> String {
        self.0.to_ascii_uppercase()
    }
}

impl std::fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display_abbrev())
    }
}

impl Serialize for Jurisdiction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Jurisdiction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Jurisdiction::parse(&raw).ok_or_else(|| {
            serde::de::Error::custom(format!("not a jurisdiction abbreviation: {raw:?}"))
        })
    }
}
