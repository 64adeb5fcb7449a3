//! # Server Payload Boundary
//!
//! Deserialization from the server-shaped provider document into the
//! [`Licensee`] aggregate. The server contract uses different field names
//! than the domain model and has accumulated legacy variants; the mapping is
//! a single reviewable conversion per payload type rather than ad hoc
//! property probing.
//!
//! | Server field | Aggregate field |
//! |---|---|
//! | `providerId` | `id` |
//! | `givenName` / `middleName` / `familyName` | `first_name` / `middle_name` / `last_name` |
//! | `dateOfBirth` | `dob` |
//! | `currentHomeJurisdiction`, else legacy `licenseJurisdiction` when the former is absent or `"unknown"` | `home_jurisdiction` |
//! | `licenses[]` | `licenses` |
//! | `privileges[]` | `privileges` |
//! | `militaryAffiliations[]` | `military_affiliations` |
//! | `dateOfUpdate` | `last_updated` |
//! | `licenseStatus`, else legacy `status` | `status` |
//!
//! ## Degradation rules
//!
//! Arrays may contain `null` entries; they are accepted as `Vec<Option<…>>`
//! and filtered exactly once here, so the in-memory collections are
//! null-free by type. Unknown status strings and malformed dates are warned
//! through `tracing` and mapped to `None`. The only error this module
//! produces is a structurally malformed top-level document.

use serde::Deserialize;

use compact_core::{status, temporal, CompactError, Jurisdiction, ProviderId, RecordId};

use crate::licensee::{Licensee, MilitaryAffiliation};
use crate::record::{Encumbrance, Investigation, LicenseRecord};

/// Parse a provider document from JSON.
///
/// # Errors
///
/// Returns [`CompactError::Deserialization`] when the document is not valid
/// JSON or does not match the provider shape. Field-level problems degrade
/// to absent values instead of erroring.
pub fn parse_provider_document(json: &str) -> Result<Licensee, CompactError> {
    let payload: ProviderPayload = serde_json::from_str(json)
        .map_err(|e| CompactError::Deserialization(e.to_string()))?;
    Ok(payload.into())
}

// ─── Payload Shapes ──────────────────────────────────────────────────

/// The server-shaped provider document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderPayload {
    #[serde(default)]
    pub provider_id: Option<String>,
    #[serde(default)]
    pub given_name: Option<String>,
    #[serde(default)]
    pub middle_name: Option<String>,
    #[serde(default)]
    pub family_name: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub ssn_last_four: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    /// Preferred home-jurisdiction field.
    #[serde(default)]
    pub current_home_jurisdiction: Option<String>,
    /// Legacy home-jurisdiction field, consulted when the preferred one is
    /// absent or carries the `"unknown"` sentinel.
    #[serde(default)]
    pub license_jurisdiction: Option<String>,
    /// Preferred licensee-status field.
    #[serde(default)]
    pub license_status: Option<String>,
    /// Legacy licensee-status field.
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub licenses: Vec<Option<LicensePayload>>,
    #[serde(default)]
    pub privileges: Vec<Option<LicensePayload>>,
    #[serde(default)]
    pub military_affiliations: Vec<Option<MilitaryAffiliationPayload>>,
    #[serde(default)]
    pub date_of_update: Option<String>,
}

/// A license or privilege entry in the provider document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicensePayload {
    #[serde(default)]
    pub id: Option<String>,
    /// Role tag emitted by the flattened server listing
    /// (e.g. `"license-home"`); carried through unused.
    #[serde(rename = "type", default)]
    pub record_type: Option<String>,
    #[serde(default)]
    pub jurisdiction: Option<String>,
    #[serde(default)]
    pub date_of_issuance: Option<String>,
    /// Preferred record-status field.
    #[serde(default)]
    pub license_status: Option<String>,
    /// Legacy record-status field.
    #[serde(default)]
    pub status: Option<String>,
    /// Preferred eligibility field.
    #[serde(default)]
    pub compact_eligibility: Option<String>,
    /// Legacy eligibility field.
    #[serde(default)]
    pub eligibility: Option<String>,
    #[serde(default)]
    pub license_number: Option<String>,
    #[serde(default)]
    pub license_type: Option<String>,
    #[serde(default)]
    pub license_type_abbreviation: Option<String>,
    #[serde(default)]
    pub encumbrances: Vec<Option<EncumbrancePayload>>,
    #[serde(default)]
    pub investigations: Vec<Option<InvestigationPayload>>,
}

/// An encumbrance entry on a license or privilege.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncumbrancePayload {
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub lift_date: Option<String>,
}

/// An investigation entry on a license or privilege.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestigationPayload {
    #[serde(default)]
    pub jurisdiction: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    /// Preferred close-date field.
    #[serde(default)]
    pub end_date: Option<String>,
    /// Legacy close-date field.
    #[serde(default)]
    pub date_of_update: Option<String>,
}

/// A military-affiliation entry in the provider document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MilitaryAffiliationPayload {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub date_of_upload: Option<String>,
    #[serde(default)]
    pub document_keys: Vec<Option<String>>,
}

// ─── Conversions ─────────────────────────────────────────────────────

impl From<ProviderPayload> for Licensee {
    fn from(payload: ProviderPayload) -> Self {
        let id = payload.provider_id.map(ProviderId);

        // Fallback chain: currentHomeJurisdiction, then licenseJurisdiction.
        // Jurisdiction::parse already maps "" and "unknown" to None.
        let home_jurisdiction = payload
            .current_home_jurisdiction
            .as_deref()
            .and_then(Jurisdiction::parse)
            .or_else(|| {
                payload
                    .license_jurisdiction
                    .as_deref()
                    .and_then(Jurisdiction::parse)
            });

        // Fallback chain: licenseStatus, then legacy status.
        let status_raw = payload.license_status.or(payload.status);

        let licenses = convert_records(payload.licenses, id.as_ref());
        let privileges = convert_records(payload.privileges, id.as_ref());

        let military_affiliations = payload
            .military_affiliations
            .into_iter()
            .flatten()
            .map(MilitaryAffiliation::from)
            .collect();

        Licensee {
            id,
            first_name: payload.given_name,
            middle_name: payload.middle_name,
            last_name: payload.family_name,
            dob: temporal::parse_date(payload.date_of_birth.as_deref()),
            ssn_last_four: payload.ssn_last_four,
            phone_number: payload.phone_number,
            home_jurisdiction,
            status: status::parse_lenient("licenseStatus", status_raw.as_deref()),
            licenses,
            privileges,
            military_affiliations,
            last_updated: temporal::parse_datetime(payload.date_of_update.as_deref()),
        }
    }
}

/// Filter `null` entries and convert the remainder, threading the provider
/// id through for derived record ids.
fn convert_records(
    entries: Vec<Option<LicensePayload>>,
    provider: Option<&ProviderId>,
) -> Vec<LicenseRecord> {
    let total = entries.len();
    let records: Vec<LicenseRecord> = entries
        .into_iter()
        .flatten()
        .map(|entry| entry.into_record(provider))
        .collect();
    if records.len() < total {
        tracing::warn!(
            skipped = total - records.len(),
            "null record entries in provider document — skipping"
        );
    }
    records
}

impl LicensePayload {
    /// Convert one record entry, deriving the id from
    /// `{licenseeId}-{jurisdiction}-{licenseTypeAbbreviation}` when the
    /// server omitted it and all parts are available.
    fn into_record(self, provider: Option<&ProviderId>) -> LicenseRecord {
        let issue_jurisdiction = self.jurisdiction.as_deref().and_then(Jurisdiction::parse);

        let id = match self.id {
            Some(id) => Some(RecordId(id)),
            None => match (provider, &issue_jurisdiction, &self.license_type_abbreviation) {
                (Some(provider), Some(jurisdiction), Some(abbrev)) => {
                    Some(RecordId::derive(provider, jurisdiction, abbrev))
                }
                _ => None,
            },
        };

        let status_raw = self.license_status.or(self.status);
        let eligibility_raw = self.compact_eligibility.or(self.eligibility);

        let encumbrances = self
            .encumbrances
            .into_iter()
            .flatten()
            .map(Encumbrance::from)
            .collect();
        let investigations = self
            .investigations
            .into_iter()
            .flatten()
            .map(Investigation::from)
            .collect();

        LicenseRecord {
            id,
            issue_jurisdiction,
            issue_date: temporal::parse_date(self.date_of_issuance.as_deref()),
            status: status::parse_lenient("licenseStatus", status_raw.as_deref()),
            eligibility: status::parse_lenient("compactEligibility", eligibility_raw.as_deref()),
            license_number: self.license_number,
            license_type: self.license_type,
            license_type_abbreviation: self.license_type_abbreviation,
            encumbrances,
            investigations,
        }
    }
}

impl From<EncumbrancePayload> for Encumbrance {
    fn from(payload: EncumbrancePayload) -> Self {
        Encumbrance {
            start_date: temporal::parse_date(payload.start_date.as_deref()),
            lift_date: temporal::parse_date(payload.lift_date.as_deref()),
        }
    }
}

impl From<InvestigationPayload> for Investigation {
    fn from(payload: InvestigationPayload) -> Self {
        // Fallback chain: endDate, then legacy dateOfUpdate.
        let end_raw = payload.end_date.or(payload.date_of_update);
        Investigation {
            jurisdiction: payload.jurisdiction.as_deref().and_then(Jurisdiction::parse),
            start_date: temporal::parse_date(payload.start_date.as_deref()),
            end_date: temporal::parse_date(end_raw.as_deref()),
        }
    }
}

impl From<MilitaryAffiliationPayload> for MilitaryAffiliation {
    fn from(payload: MilitaryAffiliationPayload) -> Self {
        MilitaryAffiliation {
            status: status::parse_lenient("militaryStatus", payload.status.as_deref()),
            date_of_upload: temporal::parse_datetime(payload.date_of_upload.as_deref()),
            document_keys: payload.document_keys.into_iter().flatten().collect(),
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use compact_core::{CompactEligibility, LicenseStatus, MilitaryAffiliationStatus};

    #[test]
    fn test_field_mapping() {
        let json = r#"{
            "providerId": "prov-001",
            "givenName": "Jordan",
            "middleName": "A",
            "familyName": "Quinn",
            "dateOfBirth": "1990-08-04",
            "ssnLastFour": "1234",
            "phoneNumber": "+13035550100",
            "currentHomeJurisdiction": "co",
            "licenseStatus": "active",
            "dateOfUpdate": "2025-06-10T08:30:00+00:00",
            "licenses": [],
            "privileges": [],
            "militaryAffiliations": []
        }"#;
        let licensee = parse_provider_document(json).unwrap();
        assert_eq!(licensee.id.as_ref().unwrap().as_str(), "prov-001");
        assert_eq!(licensee.first_name.as_deref(), Some("Jordan"));
        assert_eq!(licensee.middle_name.as_deref(), Some("A"));
        assert_eq!(licensee.last_name.as_deref(), Some("Quinn"));
        assert_eq!(licensee.dob_display(), "8/4/1990");
        assert_eq!(licensee.home_jurisdiction, Jurisdiction::parse("co"));
        assert_eq!(licensee.status, Some(LicenseStatus::Active));
        assert_eq!(licensee.last_updated_display(), "6/10/2025");
    }

    #[test]
    fn test_home_jurisdiction_falls_back_to_legacy_field() {
        let json = r#"{
            "currentHomeJurisdiction": "unknown",
            "licenseJurisdiction": "ne"
        }"#;
        let licensee = parse_provider_document(json).unwrap();
        assert_eq!(licensee.home_jurisdiction, Jurisdiction::parse("ne"));

        let json = r#"{ "licenseJurisdiction": "ky" }"#;
        let licensee = parse_provider_document(json).unwrap();
        assert_eq!(licensee.home_jurisdiction, Jurisdiction::parse("ky"));
    }

    #[test]
    fn test_preferred_home_jurisdiction_wins() {
        let json = r#"{
            "currentHomeJurisdiction": "co",
            "licenseJurisdiction": "ne"
        }"#;
        let licensee = parse_provider_document(json).unwrap();
        assert_eq!(licensee.home_jurisdiction, Jurisdiction::parse("co"));
    }

    #[test]
    fn test_legacy_status_field_accepted() {
        let json = r#"{ "status": "inactive" }"#;
        let licensee = parse_provider_document(json).unwrap();
        assert_eq!(licensee.status, Some(LicenseStatus::Inactive));
    }

    #[test]
    fn test_null_array_entries_filtered() {
        let json = r#"{
            "providerId": "prov-001",
            "licenses": [null, {
                "jurisdiction": "co",
                "licenseStatus": "active",
                "encumbrances": [null],
                "investigations": [null]
            }, null],
            "privileges": [null],
            "militaryAffiliations": [null]
        }"#;
        let licensee = parse_provider_document(json).unwrap();
        assert_eq!(licensee.licenses.len(), 1);
        assert!(licensee.licenses[0].encumbrances.is_empty());
        assert!(licensee.licenses[0].investigations.is_empty());
        assert!(licensee.privileges.is_empty());
        assert!(licensee.military_affiliations.is_empty());
    }

    #[test]
    fn test_record_conversion() {
        let json = r#"{
            "providerId": "prov-001",
            "currentHomeJurisdiction": "co",
            "licenses": [{
                "id": "explicit-id",
                "type": "license-home",
                "jurisdiction": "CO",
                "dateOfIssuance": "2023-01-15",
                "licenseStatus": "active",
                "compactEligibility": "eligible",
                "licenseNumber": "A-0608",
                "licenseType": "audiologist",
                "licenseTypeAbbreviation": "aud",
                "encumbrances": [
                    { "startDate": "2024-01-01", "liftDate": "2024-06-01" }
                ],
                "investigations": [
                    { "jurisdiction": "al", "startDate": "2025-02-01" }
                ]
            }]
        }"#;
        let licensee = parse_provider_document(json).unwrap();
        let record = &licensee.licenses[0];
        assert_eq!(record.id.as_ref().unwrap().as_str(), "explicit-id");
        assert_eq!(record.issue_jurisdiction, Jurisdiction::parse("co"));
        assert_eq!(record.status, Some(LicenseStatus::Active));
        assert_eq!(record.eligibility, Some(CompactEligibility::Eligible));
        assert_eq!(record.license_number.as_deref(), Some("A-0608"));
        assert_eq!(record.encumbrances.len(), 1);
        assert_eq!(record.investigations.len(), 1);
        assert_eq!(
            record.investigations[0].jurisdiction,
            Jurisdiction::parse("al")
        );
    }

    #[test]
    fn test_record_id_derived_when_absent() {
        let json = r#"{
            "providerId": "prov-001",
            "licenses": [{
                "jurisdiction": "co",
                "licenseTypeAbbreviation": "aud"
            }]
        }"#;
        let licensee = parse_provider_document(json).unwrap();
        assert_eq!(
            licensee.licenses[0].id.as_ref().unwrap().as_str(),
            "prov-001-co-aud"
        );
    }

    #[test]
    fn test_record_id_not_derived_without_parts() {
        let json = r#"{
            "licenses": [{ "jurisdiction": "co" }]
        }"#;
        let licensee = parse_provider_document(json).unwrap();
        assert_eq!(licensee.licenses[0].id, None);
    }

    #[test]
    fn test_legacy_record_fields_accepted() {
        let json = r#"{
            "licenses": [{
                "jurisdiction": "co",
                "status": "inactive",
                "eligibility": "ineligible"
            }]
        }"#;
        let licensee = parse_provider_document(json).unwrap();
        assert_eq!(licensee.licenses[0].status, Some(LicenseStatus::Inactive));
        assert_eq!(
            licensee.licenses[0].eligibility,
            Some(CompactEligibility::Ineligible)
        );
    }

    #[test]
    fn test_unknown_status_degrades_to_absent() {
        let json = r#"{
            "licenseStatus": "suspended",
            "licenses": [{ "jurisdiction": "co", "licenseStatus": "probation" }]
        }"#;
        let licensee = parse_provider_document(json).unwrap();
        assert_eq!(licensee.status, None);
        assert_eq!(licensee.licenses[0].status, None);
    }

    #[test]
    fn test_malformed_dates_degrade_to_absent() {
        let json = r#"{
            "dateOfBirth": "08/04/1990",
            "dateOfUpdate": "recently",
            "licenses": [{ "jurisdiction": "co", "dateOfIssuance": "soon" }]
        }"#;
        let licensee = parse_provider_document(json).unwrap();
        assert_eq!(licensee.dob, None);
        assert_eq!(licensee.last_updated, None);
        assert_eq!(licensee.licenses[0].issue_date, None);
    }

    #[test]
    fn test_investigation_end_date_falls_back_to_date_of_update() {
        let json = r#"{
            "licenses": [{
                "jurisdiction": "co",
                "investigations": [
                    { "jurisdiction": "al", "startDate": "2025-01-01", "dateOfUpdate": "2025-03-01" }
                ]
            }]
        }"#;
        let licensee = parse_provider_document(json).unwrap();
        let investigation = &licensee.licenses[0].investigations[0];
        assert!(investigation.end_date.is_some());
    }

    #[test]
    fn test_military_affiliation_conversion() {
        let json = r#"{
            "militaryAffiliations": [{
                "status": "active",
                "dateOfUpload": "2025-05-01T00:00:00+00:00",
                "documentKeys": ["doc/one.pdf", null, "doc/two.pdf"]
            }]
        }"#;
        let licensee = parse_provider_document(json).unwrap();
        let affiliation = &licensee.military_affiliations[0];
        assert_eq!(affiliation.status, Some(MilitaryAffiliationStatus::Active));
        assert_eq!(affiliation.document_keys.len(), 2);
    }

    #[test]
    fn test_empty_document_is_inert_licensee() {
        let licensee = parse_provider_document("{}").unwrap();
        assert_eq!(licensee.id, None);
        assert!(licensee.licenses.is_empty());
        assert_eq!(licensee.best_license().license_number, None);
    }

    #[test]
    fn test_malformed_document_is_an_error() {
        assert!(parse_provider_document("not json").is_err());
        assert!(parse_provider_document("[1, 2, 3]").is_err());
    }
}
