//! # Domain Identity Newtypes
//!
//! Newtype wrappers for the identifiers of the Compact Licensure Stack.
//! These prevent accidental identifier confusion — you cannot pass a
//! `ProviderId` where a `RecordId` is expected.
//!
//! Provider identifiers arrive from the server as opaque strings and are
//! never generated client-side, so both newtypes wrap `String` rather than
//! a UUID type.

use serde::{Deserialize, Serialize};

use crate::jurisdiction::Jurisdiction;

/// Unique identifier for a licensee (a "provider" in server terminology).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProviderId(pub String);

/// Unique identifier for a single license or privilege record,
/// unique per (licensee, jurisdiction, license-type) tuple.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId(pub String);

impl ProviderId {
    /// Access the inner identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl RecordId {
    /// Derive a record identifier from its component parts:
    /// `{licenseeId}-{jurisdiction}-{licenseTypeAbbreviation}`.
    ///
    /// Used when the server payload omits an explicit record id.
    pub fn derive(
        provider: &ProviderId,
        jurisdiction: &Jurisdiction,
        license_type_abbreviation: &str,
    ) -> Self {
        Self(format!(
            "{}-{}-{}",
            provider.as_str(),
            jurisdiction.as_str(),
            license_type_abbreviation
        ))
    }

    /// Access the inner identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_record_id() {
        let provider = ProviderId("prov-001".to_string());
        let jurisdiction = Jurisdiction::parse("CO").unwrap();
        let id = RecordId::derive(&provider, &jurisdiction, "aud");
        assert_eq!(id.as_str(), "prov-001-co-aud");
    }

    #[test]
    fn test_display_is_raw_id() {
        let provider = ProviderId("abc".to_string());
        assert_eq!(provider.to_string(), "abc");
    }
}
