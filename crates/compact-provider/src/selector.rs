//! # Best-Record Selection
//!
//! Deterministically picks the single "best" record from a collection of
//! licenses or privileges, given the licensee's home jurisdiction.
//!
//! Candidates are partitioned into four tiers, best first:
//!
//! ```text
//! 1. ActiveHome    — issued by the home jurisdiction, status active
//! 2. InactiveHome  — issued by the home jurisdiction, not active
//! 3. ActiveOther   — active, any other (or unknown) jurisdiction
//! 4. InactiveOther — not active, any other jurisdiction
//! ```
//!
//! Within a tier the most recent `issue_date` wins; a record with no issue
//! date sorts older than any dated record. On an exact sort-key tie the
//! later-encountered candidate replaces the incumbent — one uniform rule
//! across all four tiers (see DESIGN.md). Active-versus-inactive at equal
//! dates never reaches the tie rule: tier precedence already decides it.
//!
//! With no home jurisdiction, tiers 1–2 are unreachable and selection runs
//! over tiers 3–4 only. An empty candidate pool yields the placeholder
//! record. Selection never errors and never mutates its input.

use compact_core::Jurisdiction;

use crate::record::LicenseRecord;

/// Priority tier of a candidate record. Derived `Ord` follows declaration
/// order: `ActiveHome` is the best tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum SelectionTier {
    ActiveHome,
    InactiveHome,
    ActiveOther,
    InactiveOther,
}

impl SelectionTier {
    fn classify(record: &LicenseRecord, home: Option<&Jurisdiction>) -> Self {
        let home_match = match home {
            Some(home) => record.is_issued_by(home),
            None => false,
        };
        match (home_match, record.is_active()) {
            (true, true) => Self::ActiveHome,
            (true, false) => Self::InactiveHome,
            (false, true) => Self::ActiveOther,
            (false, false) => Self::InactiveOther,
        }
    }
}

/// Single pass over the candidates, tracking the best (tier, date) seen.
///
/// `Option<NaiveDate>` ordering puts `None` below every present date, which
/// is exactly the "absent date sorts older" rule. The `>=` comparison makes
/// the later-encountered candidate win exact ties.
fn select<'a, I>(records: I, home: Option<&Jurisdiction>) -> Option<&'a LicenseRecord>
where
    I: IntoIterator<Item = &'a LicenseRecord>,
{
    let mut best: Option<(&'a LicenseRecord, SelectionTier)> = None;
    for record in records {
        let tier = SelectionTier::classify(record, home);
        let replaces = match best {
            None => true,
            Some((incumbent, incumbent_tier)) => {
                tier < incumbent_tier
                    || (tier == incumbent_tier && record.issue_date >= incumbent.issue_date)
            }
        };
        if replaces {
            best = Some((record, tier));
        }
    }
    best.map(|(record, _)| record)
}

/// Select the best record across all four tiers.
///
/// Returns a clone of the winner, or [`LicenseRecord::placeholder`] when
/// `records` is empty.
pub fn best_record(records: &[LicenseRecord], home: Option<&Jurisdiction>) -> LicenseRecord {
    select(records, home)
        .cloned()
        .unwrap_or_else(LicenseRecord::placeholder)
}

/// Select the best record among home-jurisdiction records only.
///
/// The candidate pool is restricted up front, so a collection with no
/// home-jurisdiction record yields the placeholder even when active
/// out-of-state records exist.
pub fn best_home_jurisdiction_record(
    records: &[LicenseRecord],
    home: Option<&Jurisdiction>,
) -> LicenseRecord {
    let Some(home) = home else {
        return LicenseRecord::placeholder();
    };
    select(
        records.iter().filter(|record| record.is_issued_by(home)),
        Some(home),
    )
    .cloned()
    .unwrap_or_else(LicenseRecord::placeholder)
}

// ─── Tests ───────────────────────────────────────────────────────────
