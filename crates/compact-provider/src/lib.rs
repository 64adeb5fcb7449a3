//! # compact-provider — Licensee Status & Best-Record Resolution
//!
//! The domain crate of the Compact Licensure Stack. It models a licensee's
//! licenses and privileges, answers point-in-time questions about
//! encumbrances and investigations, selects the "best" record for display,
//! and derives purchase eligibility — all as pure, synchronous functions over
//! in-memory data.
//!
//! ## Modules
//!
//! - **record** (`record.rs`): `LicenseRecord` — one shape for both licenses
//!   and privileges — with its encumbrance and investigation event histories
//!   and the point-in-time predicates over them.
//!
//! - **selector** (`selector.rs`): deterministic four-tier best-record
//!   selection over a record collection and a home jurisdiction.
//!
//! - **licensee** (`licensee.rs`): the `Licensee` aggregate — composes both
//!   record collections plus military affiliations and exposes the derived
//!   query surface (encumbrance/investigation flags, purchase eligibility,
//!   best-record shortcuts).
//!
//! - **display** (`display.rs`): presentation formatting over the aggregate.
//!   Every formatter degrades to an empty string when data is absent.
//!
//! - **payload** (`payload.rs`): the deserialization boundary from the
//!   server-shaped JSON document into the aggregate, including the legacy
//!   field-name fallback chains.
//!
//! - **config** (`config.rs`): purchase-rule configuration (encumbrance
//!   wait period), loadable from YAML.
//!
//! ## Design
//!
//! "Now" is an explicit parameter of every time-dependent query — nothing in
//! this crate reads a clock. The aggregate is a computed-view value object:
//! no query mutates it, and the owning application layer replaces the whole
//! value when fresh server data arrives. Failure handling is defensive
//! degradation: absent or malformed data yields `None`, `false`, an empty
//! collection, or a placeholder record, never a panic.

pub mod config;
pub mod display;
pub mod licensee;
pub mod payload;
pub mod record;
pub mod selector;

pub use config::{CompactConfig, DEFAULT_ENCUMBRANCE_WAIT_PERIOD_DAYS};
pub use licensee::{Licensee, MilitaryAffiliation};
pub use payload::{parse_provider_document, ProviderPayload};
pub use record::{Encumbrance, Investigation, LicenseRecord};
pub use selector::{best_home_jurisdiction_record, best_record};
