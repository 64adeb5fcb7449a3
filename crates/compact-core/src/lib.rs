//! # compact-core — Foundational Types for the Compact Licensure Stack
//!
//! This crate is the bedrock of the Compact Licensure Stack. It defines the
//! domain primitives shared by every other crate in the workspace; it depends
//! on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `Jurisdiction`,
//!    `ProviderId`, `RecordId` — no bare strings for identifiers, and
//!    jurisdiction equality is normalized once at construction instead of
//!    lowercased at every comparison site.
//!
//! 2. **Single status enum per concern.** `LicenseStatus`,
//!    `CompactEligibility`, and `MilitaryAffiliationStatus` each have one
//!    definition, exhaustively matched everywhere. An unknown server value is
//!    `None`, never a panic.
//!
//! 3. **Lenient at the boundary, strict inside.** Server payloads carry
//!    loosely-formatted dates and legacy status strings; the `temporal` and
//!    `status` parsers warn and degrade to `None` rather than failing the
//!    whole document. Inside the domain, fields are typed `NaiveDate` /
//!    `DateTime<Utc>` / enum.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `compact-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug` and `Clone`.

pub mod error;
pub mod identity;
pub mod jurisdiction;
pub mod status;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use error::CompactError;
pub use identity::{ProviderId, RecordId};
pub use jurisdiction::Jurisdiction;
pub use status::{CompactEligibility, LicenseStatus, MilitaryAffiliationStatus};
