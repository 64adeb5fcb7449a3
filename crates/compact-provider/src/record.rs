//! # License & Privilege Records
//!
//! `LicenseRecord` models a single license or privilege — the same shape
//! serves both roles; a license is issued by a jurisdiction directly, a
//! privilege is derived from a home-jurisdiction license under the compact.
//!
//! Every leaf field is optional. A record constructed with no data at all is
//! the *placeholder* record, which callers receive instead of an error when a
//! selection has no candidates; its `license_number` is `None` and every
//! predicate on it is false.
//!
//! The point-in-time predicates (`is_encumbered`, `is_under_investigation`,
//! `latest_lifted_encumbrance_within`) are pure functions of the record and
//! an explicit `now` date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use compact_core::{CompactEligibility, Jurisdiction, LicenseStatus, RecordId};

// ─── Adverse Events ──────────────────────────────────────────────────

/// An encumbrance placed on a record: a restriction with a start date and an
/// optional lift date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Encumbrance {
    /// When the restriction took effect.
    pub start_date: Option<NaiveDate>,
    /// When the restriction was lifted, if it has been.
    pub lift_date: Option<NaiveDate>,
}

impl Encumbrance {
    /// Whether the restriction is in effect on `now`.
    ///
    /// An event with no start date carries no data and never matches.
    pub fn is_in_effect(&self, now: NaiveDate) -> bool {
        let Some(start) = self.start_date else {
            return false;
        };
        start <= now && self.lift_date.map_or(true, |lift| lift > now)
    }
}

/// An open or closed inquiry by a jurisdiction into the record's holder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Investigation {
    /// The jurisdiction conducting the inquiry.
    pub jurisdiction: Option<Jurisdiction>,
    /// When the inquiry was opened.
    pub start_date: Option<NaiveDate>,
    /// When the inquiry was closed, if it has been.
    pub end_date: Option<NaiveDate>,
}

impl Investigation {
    /// Whether the inquiry is open on `now`.
    pub fn is_open(&self, now: NaiveDate) -> bool {
        let Some(start) = self.start_date else {
            return false;
        };
        start <= now && self.end_date.map_or(true, |end| end > now)
    }
}

// ─── License Record ──────────────────────────────────────────────────

/// A single license or privilege record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LicenseRecord {
    /// Record identifier, unique per (licensee, jurisdiction, license-type).
    pub id: Option<RecordId>,
    /// The jurisdiction that issued the record.
    pub issue_jurisdiction: Option<Jurisdiction>,
    /// Calendar date the record was issued.
    pub issue_date: Option<NaiveDate>,
    /// Active/inactive status. Absent means unknown and counts as not active.
    pub status: Option<LicenseStatus>,
    /// Eligibility to practice under the compact, independent of status.
    pub eligibility: Option<CompactEligibility>,
    /// The jurisdiction-assigned license number.
    pub license_number: Option<String>,
    /// License type (e.g. "audiologist").
    pub license_type: Option<String>,
    /// Short form of the license type (e.g. "aud"), used in derived ids.
    pub license_type_abbreviation: Option<String>,
    /// Encumbrance history, oldest first as delivered by the server.
    #[serde(default)]
    pub encumbrances: Vec<Encumbrance>,
    /// Investigation history, oldest first as delivered by the server.
    #[serde(default)]
    pub investigations: Vec<Investigation>,
}

impl LicenseRecord {
    /// The empty placeholder record: every field `None`, every list empty.
    ///
    /// Returned by selection when there are no candidates, so callers can
    /// render `license_number` etc. without a presence check.
    pub fn placeholder() -> Self {
        Self::default()
    }

    /// Whether the record's status is known to be active.
    pub fn is_active(&self) -> bool {
        self.status.is_some_and(|s| s.is_active())
    }

    /// Whether the record is known to be compact-eligible.
    pub fn is_compact_eligible(&self) -> bool {
        self.eligibility.is_some_and(|e| e.is_eligible())
    }

    /// Whether the record was issued by `jurisdiction`.
    pub fn is_issued_by(&self, jurisdiction: &Jurisdiction) -> bool {
        self.issue_jurisdiction
            .as_ref()
            .is_some_and(|j| j == jurisdiction)
    }

    /// Whether any encumbrance is in effect on `now`.
    pub fn is_encumbered(&self, now: NaiveDate) -> bool {
        self.encumbrances.iter().any(|e| e.is_in_effect(now))
    }

    /// Whether any investigation is open on `now`.
    pub fn is_under_investigation(&self, now: NaiveDate) -> bool {
        self.investigations.iter().any(|i| i.is_open(now))
    }

    /// Distinct jurisdictions with an open investigation on `now`,
    /// in order of first appearance.
    pub fn investigating_jurisdictions(&self, now: NaiveDate) -> Vec<Jurisdiction> {
        let mut seen = Vec::new();
        for investigation in &self.investigations {
            if !investigation.is_open(now) {
                continue;
            }
            if let Some(jurisdiction) = &investigation.jurisdiction {
                if !seen.contains(jurisdiction) {
                    seen.push(jurisdiction.clone());
                }
            }
        }
        seen
    }

    /// Whether the most recently lifted encumbrance was lifted within the
    /// last `wait_period_days` days.
    ///
    /// Only encumbrances whose lift date is on or before `now` qualify;
    /// among those, the latest lift date is compared: true iff
    /// `now - lift < wait_period_days`. No qualifying event means false.
    pub fn latest_lifted_encumbrance_within(&self, now: NaiveDate, wait_period_days: u32) -> bool {
        let latest_lift = self
            .encumbrances
            .iter()
            .filter_map(|e| e.lift_date)
            .filter(|lift| *lift <= now)
            .max();
        match latest_lift {
            Some(lift) => (now - lift).num_days() < i64::from(wait_period_days),
            None => false,
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
