//! Activity catalog: domain model, validation, and file loading.
//!
//! # Key Components
//!
//! - [`Activity`] — a validated activity (duration, freshness cost, skill
//!   yield vector); negative cost marks a recovery unit
//! - [`ActivityRecord`] — the serde wire form, accepting both the
//!   multi-dimensional `skillYield` map and the legacy flat `skillPoints`
//!   scalar
//! - [`ActivityCatalog`] — immutable, ordered, duplicate-free set of
//!   activities; the order is normative for the search's tie-break
//! - [`load_catalog`] / [`read_catalog`] — JSON loading with a strict
//!   not-found / parse / validation error split
//!
//! # Design
//!
//! The catalog is owned by the caller and passed by reference into a
//! search; nothing in this crate holds catalog state across requests.

mod activity;
#[allow(clippy::module_inception)]
mod catalog;
mod loader;

pub use activity::{Activity, ActivityRecord, LEGACY_SKILL_DIMENSION};
pub use catalog::ActivityCatalog;
pub use loader::{catalog_to_json, load_catalog, read_catalog};
