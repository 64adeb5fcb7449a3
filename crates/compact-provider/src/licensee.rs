//! # Licensee Aggregate
//!
//! `Licensee` composes a licensee's license records, privilege records, and
//! military affiliations, and exposes the derived query surface the portal
//! renders: encumbrance and investigation flags, privilege-purchase
//! eligibility, best-record shortcuts, and military status.
//!
//! The aggregate is a computed view over whatever data it was constructed or
//! deserialized with — there are no state transitions. Every time-dependent
//! query takes `now` explicitly; no method mutates the aggregate.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use compact_core::{Jurisdiction, LicenseStatus, MilitaryAffiliationStatus, ProviderId};

use crate::record::LicenseRecord;
use crate::selector;

// ─── Military Affiliation ────────────────────────────────────────────

/// A military-affiliation record uploaded by the licensee.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MilitaryAffiliation {
    /// Processing status of the affiliation.
    pub status: Option<MilitaryAffiliationStatus>,
    /// When the supporting document was uploaded.
    pub date_of_upload: Option<DateTime<Utc>>,
    /// Storage keys of the uploaded documents.
    #[serde(default)]
    pub document_keys: Vec<String>,
}

// ─── Licensee ────────────────────────────────────────────────────────

/// A licensee and everything the portal knows about them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Licensee {
    /// Licensee identifier ("provider id" in server terminology).
    pub id: Option<ProviderId>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    /// Date of birth.
    pub dob: Option<NaiveDate>,
    /// Last four digits of the SSN, for masked display.
    pub ssn_last_four: Option<String>,
    pub phone_number: Option<String>,
    /// The licensee's home jurisdiction, if one is selected.
    pub home_jurisdiction: Option<Jurisdiction>,
    /// Licensee-level status.
    pub status: Option<LicenseStatus>,
    /// Licenses issued directly by jurisdictions.
    #[serde(default)]
    pub licenses: Vec<LicenseRecord>,
    /// Privileges held in other jurisdictions under the compact.
    #[serde(default)]
    pub privileges: Vec<LicenseRecord>,
    /// Military-affiliation uploads, oldest first as delivered.
    #[serde(default)]
    pub military_affiliations: Vec<MilitaryAffiliation>,
    /// When the server record was last updated.
    pub last_updated: Option<DateTime<Utc>>,
}

impl Licensee {
    // ── Encumbrance queries ──────────────────────────────────────────

    /// Whether any license is encumbered on `now`.
    pub fn has_encumbered_licenses(&self, now: NaiveDate) -> bool {
        self.licenses.iter().any(|r| r.is_encumbered(now))
    }

    /// Whether any privilege is encumbered on `now`.
    pub fn has_encumbered_privileges(&self, now: NaiveDate) -> bool {
        self.privileges.iter().any(|r| r.is_encumbered(now))
    }

    /// Whether any license or privilege is encumbered on `now`.
    pub fn is_encumbered(&self, now: NaiveDate) -> bool {
        self.has_encumbered_licenses(now) || self.has_encumbered_privileges(now)
    }

    /// Whether any *privilege* had its most recent encumbrance lifted within
    /// the last `wait_period_days` days.
    ///
    /// Licenses are deliberately not consulted here — the purchase flow's
    /// waiting period applies to privilege encumbrances only.
    pub fn has_encumbrance_lifted_within_wait_period(
        &self,
        now: NaiveDate,
        wait_period_days: u32,
    ) -> bool {
        self.privileges
            .iter()
            .any(|r| r.latest_lifted_encumbrance_within(now, wait_period_days))
    }

    // ── Investigation queries ────────────────────────────────────────

    /// Whether any license is under investigation on `now`.
    pub fn has_under_investigation_licenses(&self, now: NaiveDate) -> bool {
        self.licenses.iter().any(|r| r.is_under_investigation(now))
    }

    /// Whether any privilege is under investigation on `now`.
    pub fn has_under_investigation_privileges(&self, now: NaiveDate) -> bool {
        self.privileges.iter().any(|r| r.is_under_investigation(now))
    }

    /// Whether any license or privilege is under investigation on `now`.
    pub fn is_under_investigation(&self, now: NaiveDate) -> bool {
        self.has_under_investigation_licenses(now) || self.has_under_investigation_privileges(now)
    }

    /// Distinct jurisdictions investigating this licensee on `now`, across
    /// licenses then privileges, in order of first appearance.
    pub fn under_investigation_states(&self, now: NaiveDate) -> Vec<Jurisdiction> {
        let mut seen: Vec<Jurisdiction> = Vec::new();
        for record in self.licenses.iter().chain(self.privileges.iter()) {
            for jurisdiction in record.investigating_jurisdictions(now) {
                if !seen.contains(&jurisdiction) {
                    seen.push(jurisdiction);
                }
            }
        }
        seen
    }

    // ── Home-jurisdiction license filters ────────────────────────────

    /// Licenses issued by the home jurisdiction, source order preserved.
    /// Empty when no home jurisdiction is selected.
    pub fn home_jurisdiction_licenses(&self) -> Vec<&LicenseRecord> {
        match &self.home_jurisdiction {
            Some(home) => self
                .licenses
                .iter()
                .filter(|r| r.is_issued_by(home))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Active home-jurisdiction licenses.
    pub fn active_home_jurisdiction_licenses(&self) -> Vec<&LicenseRecord> {
        self.home_jurisdiction_licenses()
            .into_iter()
            .filter(|r| r.is_active())
            .collect()
    }

    /// Inactive (or unknown-status) home-jurisdiction licenses.
    pub fn inactive_home_jurisdiction_licenses(&self) -> Vec<&LicenseRecord> {
        self.home_jurisdiction_licenses()
            .into_iter()
            .filter(|r| !r.is_active())
            .collect()
    }

    // ── Purchase eligibility ─────────────────────────────────────────

    /// Home-jurisdiction licenses that qualify the licensee to purchase
    /// privileges: active, compact-eligible, and not encumbered on `now`.
    pub fn purchase_eligible_licenses(&self, now: NaiveDate) -> Vec<&LicenseRecord> {
        self.home_jurisdiction_licenses()
            .into_iter()
            .filter(|r| r.is_active() && r.is_compact_eligible() && !r.is_encumbered(now))
            .collect()
    }

    /// Whether the licensee can purchase privileges on `now`.
    ///
    /// Requires at least one qualifying home-jurisdiction license. An open
    /// investigation does not affect eligibility.
    pub fn can_purchase_privileges(&self, now: NaiveDate) -> bool {
        !self.purchase_eligible_licenses(now).is_empty()
    }

    // ── Best-record shortcuts ────────────────────────────────────────

    /// The best license across all jurisdictions.
    pub fn best_license(&self) -> LicenseRecord {
        selector::best_record(&self.licenses, self.home_jurisdiction.as_ref())
    }

    /// The best privilege across all jurisdictions.
    pub fn best_privilege(&self) -> LicenseRecord {
        selector::best_record(&self.privileges, self.home_jurisdiction.as_ref())
    }

    /// The best license among home-jurisdiction licenses only.
    pub fn best_home_jurisdiction_license(&self) -> LicenseRecord {
        selector::best_home_jurisdiction_record(&self.licenses, self.home_jurisdiction.as_ref())
    }

    // ── Military affiliation ─────────────────────────────────────────

    /// The single most recently uploaded affiliation, by `date_of_upload`.
    /// An affiliation without an upload date sorts oldest; on an exact tie
    /// the later-encountered record wins.
    pub fn latest_military_affiliation(&self) -> Option<&MilitaryAffiliation> {
        self.military_affiliations
            .iter()
            .max_by_key(|a| a.date_of_upload)
    }

    /// The most recently uploaded affiliation whose status is `Active`,
    /// or `None` when no affiliation is active.
    pub fn active_military_affiliation(&self) -> Option<&MilitaryAffiliation> {
        self.military_affiliations
            .iter()
            .filter(|a| a.status == Some(MilitaryAffiliationStatus::Active))
            .max_by_key(|a| a.date_of_upload)
    }

    /// Whether the single latest affiliation upload has status `Active`.
    pub fn is_military_status_active(&self) -> bool {
        self.latest_military_affiliation()
            .is_some_and(|a| a.status == Some(MilitaryAffiliationStatus::Active))
    }

    /// Whether the single latest affiliation upload has status `Initializing`.
    pub fn is_military_status_initializing(&self) -> bool {
        self.latest_military_affiliation()
            .is_some_and(|a| a.status == Some(MilitaryAffiliationStatus::Initializing))
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
