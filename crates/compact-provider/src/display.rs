//! # Presentation Formatting
//!
//! Display strings derived from the [`Licensee`] aggregate. Every formatter
//! degrades to an empty string when the underlying data is absent — the
//! rendering layer concatenates these without presence checks.

use chrono::NaiveDate;

use compact_core::temporal;
use compact_core::Jurisdiction;

use crate::licensee::Licensee;
use crate::record::LicenseRecord;

impl Licensee {
    /// `"First Last"`, skipping whichever part is absent.
    pub fn name_display(&self) -> String {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        parts.join(" ")
    }

    /// Date of birth as `M/D/YYYY`.
    pub fn dob_display(&self) -> String {
        self.dob.map(temporal::display_date).unwrap_or_default()
    }

    /// Masked SSN: `*** ** 1234`.
    pub fn ssn_display(&self) -> String {
        match self.ssn_last_four.as_deref() {
            Some(last_four) if !last_four.trim().is_empty() => {
                format!("*** ** {}", last_four.trim())
            }
            _ => String::new(),
        }
    }

    /// Last-updated date as `M/D/YYYY`.
    pub fn last_updated_display(&self) -> String {
        self.last_updated
            .map(|dt| temporal::display_date(dt.date_naive()))
            .unwrap_or_default()
    }

    /// Last-updated date relative to `now`: `today`, `1 day ago`, ...
    pub fn last_updated_display_relative(&self, now: NaiveDate) -> String {
        self.last_updated
            .map(|dt| temporal::relative_display(dt.date_naive(), now))
            .unwrap_or_default()
    }

    /// Distinct license jurisdictions, uppercase, comma-separated,
    /// first-seen order.
    pub fn license_states_display(&self) -> String {
        states_display(self.licenses.iter())
    }

    /// Distinct jurisdictions of *active* privileges.
    pub fn privilege_states_display(&self) -> String {
        states_display(self.privileges.iter().filter(|r| r.is_active()))
    }

    /// Distinct jurisdictions of all privileges, regardless of status.
    pub fn privilege_states_all_display(&self) -> String {
        states_display(self.privileges.iter())
    }

    /// Home jurisdiction abbreviation, uppercase.
    pub fn home_jurisdiction_display(&self) -> String {
        self.home_jurisdiction
            .as_ref()
            .map(Jurisdiction::display_abbrev)
            .unwrap_or_default()
    }

    /// Licensee status: `Active` / `Inactive`.
    pub fn status_display(&self) -> String {
        self.status.map(|s| s.to_string()).unwrap_or_default()
    }

    /// Phone number as `(303) 555-0100` when it reduces to ten digits
    /// (a leading country code `1` is stripped); otherwise the raw value.
    pub fn phone_number_display(&self) -> String {
        let raw = match self.phone_number.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => raw,
            _ => return String::new(),
        };
        let mut digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.len() == 11 && digits.starts_with('1') {
            digits.remove(0);
        }
        if digits.len() == 10 {
            format!("({}) {}-{}", &digits[0..3], &digits[3..6], &digits[6..10])
        } else {
            raw.to_string()
        }
    }

    /// Human form of the best license's type, title-cased per word.
    pub fn license_type_name(&self) -> String {
        self.best_license()
            .license_type
            .as_deref()
            .map(title_case)
            .unwrap_or_default()
    }
}

/// Distinct jurisdictions of the given records, uppercase, first-seen order.
fn states_display<'a, I>(records: I) -> String
where
    I: Iterator<Item = &'a LicenseRecord>,
{
    let mut seen: Vec<&Jurisdiction> = Vec::new();
    for record in records {
        if let Some(jurisdiction) = &record.issue_jurisdiction {
            if !seen.contains(&jurisdiction) {
                seen.push(jurisdiction);
            }
        }
    }
    seen.iter()
        .map(|j| j.display_abbrev())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Uppercase the first letter of each whitespace-separated word.
fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use compact_core::LicenseStatus;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn license(jurisdiction: &str, status: Option<LicenseStatus>) -> LicenseRecord {
        LicenseRecord {
            issue_jurisdiction: Jurisdiction::parse(jurisdiction),
            status,
            ..LicenseRecord::placeholder()
        }
    }

    #[test]
    fn test_name_display() {
        let licensee = Licensee {
            first_name: Some("Jordan".to_string()),
            last_name: Some("Quinn".to_string()),
            ..Licensee::default()
        };
        assert_eq!(licensee.name_display(), "Jordan Quinn");
    }

    #[test]
    fn test_name_display_partial_and_empty() {
        let first_only = Licensee {
            first_name: Some("Jordan".to_string()),
            ..Licensee::default()
        };
        assert_eq!(first_only.name_display(), "Jordan");
        assert_eq!(Licensee::default().name_display(), "");
    }

    #[test]
    fn test_dob_display() {
        let licensee = Licensee {
            dob: Some(date(1990, 8, 4)),
            ..Licensee::default()
        };
        assert_eq!(licensee.dob_display(), "8/4/1990");
        assert_eq!(Licensee::default().dob_display(), "");
    }

    #[test]
    fn test_ssn_display_masked() {
        let licensee = Licensee {
            ssn_last_four: Some("1234".to_string()),
            ..Licensee::default()
        };
        assert_eq!(licensee.ssn_display(), "*** ** 1234");
        assert_eq!(Licensee::default().ssn_display(), "");
    }

    #[test]
    fn test_last_updated_displays() {
        let licensee = Licensee {
            last_updated: Some(date(2025, 6, 10).and_hms_opt(8, 30, 0).unwrap().and_utc()),
            ..Licensee::default()
        };
        assert_eq!(licensee.last_updated_display(), "6/10/2025");
        assert_eq!(
            licensee.last_updated_display_relative(date(2025, 6, 15)),
            "5 days ago"
        );
        assert_eq!(Licensee::default().last_updated_display(), "");
        assert_eq!(
            Licensee::default().last_updated_display_relative(date(2025, 6, 15)),
            ""
        );
    }

    #[test]
    fn test_license_states_display_dedup() {
        let licensee = Licensee {
            licenses: vec![
                license("co", Some(LicenseStatus::Active)),
                license("ne", Some(LicenseStatus::Inactive)),
                license("co", Some(LicenseStatus::Inactive)),
            ],
            ..Licensee::default()
        };
        assert_eq!(licensee.license_states_display(), "CO, NE");
    }

    #[test]
    fn test_privilege_states_display_active_only() {
        let licensee = Licensee {
            privileges: vec![
                license("ne", Some(LicenseStatus::Active)),
                license("ky", Some(LicenseStatus::Inactive)),
            ],
            ..Licensee::default()
        };
        assert_eq!(licensee.privilege_states_display(), "NE");
        assert_eq!(licensee.privilege_states_all_display(), "NE, KY");
    }

    #[test]
    fn test_home_jurisdiction_and_status_display() {
        let licensee = Licensee {
            home_jurisdiction: Jurisdiction::parse("ky"),
            status: Some(LicenseStatus::Active),
            ..Licensee::default()
        };
        assert_eq!(licensee.home_jurisdiction_display(), "KY");
        assert_eq!(licensee.status_display(), "Active");
        assert_eq!(Licensee::default().home_jurisdiction_display(), "");
        assert_eq!(Licensee::default().status_display(), "");
    }

    #[test]
    fn test_phone_number_display() {
        let ten = Licensee {
            phone_number: Some("3035550100".to_string()),
            ..Licensee::default()
        };
        assert_eq!(ten.phone_number_display(), "(303) 555-0100");

        let e164 = Licensee {
            phone_number: Some("+13035550100".to_string()),
            ..Licensee::default()
        };
        assert_eq!(e164.phone_number_display(), "(303) 555-0100");

        let odd = Licensee {
            phone_number: Some("555-0100".to_string()),
            ..Licensee::default()
        };
        assert_eq!(odd.phone_number_display(), "555-0100");

        assert_eq!(Licensee::default().phone_number_display(), "");
    }

    #[test]
    fn test_license_type_name_from_best_license() {
        let licensee = Licensee {
            home_jurisdiction: Jurisdiction::parse("co"),
            licenses: vec![LicenseRecord {
                issue_jurisdiction: Jurisdiction::parse("co"),
                status: Some(LicenseStatus::Active),
                license_type: Some("speech-language pathologist".to_string()),
                ..LicenseRecord::placeholder()
            }],
            ..Licensee::default()
        };
        assert_eq!(licensee.license_type_name(), "Speech-language Pathologist");
        assert_eq!(Licensee::default().license_type_name(), "");
    }
}
