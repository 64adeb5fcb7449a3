//! # Status Enums — Single Source of Truth
//!
//! One definition per status concern, exhaustively matched everywhere.
//! Absence of a status in the domain model is `Option::None` — an unknown
//! server value never becomes a phantom variant.
//!
//! Each enum has a strict `FromStr` (error on unrecognized input) and a
//! lenient `parse_lenient` used at the payload boundary, which warns through
//! `tracing` and yields `None` so one bad field cannot fail a whole document.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::CompactError;

/// Status of a license or privilege record, and of a licensee overall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LicenseStatus {
    /// The record is in good standing.
    Active,
    /// The record exists but is not currently in force.
    Inactive,
}

impl LicenseStatus {
    /// Whether this status counts as active.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

/// Eligibility to practice under the compact, independent of status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompactEligibility {
    /// The record qualifies its holder for compact privileges.
    Eligible,
    /// The record does not qualify for compact privileges.
    Ineligible,
}

impl CompactEligibility {
    /// Whether this eligibility counts as eligible.
    pub fn is_eligible(&self) -> bool {
        matches!(self, Self::Eligible)
    }
}

/// Status of a military-affiliation record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MilitaryAffiliationStatus {
    /// Affiliation is confirmed and current.
    Active,
    /// Affiliation has ended or been withdrawn.
    Inactive,
    /// Affiliation was submitted but document processing has not finished.
    Initializing,
}

impl FromStr for LicenseStatus {
    type Err = CompactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            _ => Err(CompactError::InvalidStatus(s.to_string())),
        }
    }
}

impl FromStr for CompactEligibility {
    type Err = CompactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "eligible" => Ok(Self::Eligible),
            "ineligible" => Ok(Self::Ineligible),
            _ => Err(CompactError::InvalidStatus(s.to_string())),
        }
    }
}

impl FromStr for MilitaryAffiliationStatus {
    type Err = CompactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            "initializing" => Ok(Self::Initializing),
            _ => Err(CompactError::InvalidStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for LicenseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        };
        f.write_str(s)
    }
}

impl std::fmt::Display for CompactEligibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Eligible => "Eligible",
            Self::Ineligible => "Ineligible",
        };
        f.write_str(s)
    }
}

impl std::fmt::Display for MilitaryAffiliationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Initializing => "Initializing",
        };
        f.write_str(s)
    }
}

/// Parse a status-like value leniently at the payload boundary.
///
/// `None` input means the field was absent. Unrecognized input is warned and
/// mapped to `None` rather than failing the document.
pub fn parse_lenient<T: FromStr>(field: &'static str, raw: Option<&str>) -> Option<T> {
    let raw = raw?;
    match raw.parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(field, value = %raw, "unrecognized status value — treating as absent");
            None
        }
    }
}
