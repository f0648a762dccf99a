//! Training-plan combination optimizer.
//!
//! Selects, from a catalog of activities that each cost time and a
//! depletable freshness budget and yield skill points, the best-scoring
//! multisets ("combinations") that fit both budgets simultaneously.
//!
//! - **`catalog`**: Domain types and validation — [`Activity`],
//!   [`ActivityCatalog`], JSON loading with the legacy flat
//!   `skillPoints` form accepted alongside the multi-dimensional
//!   `skillYield` map.
//! - **`search`**: The engine — canonical depth-first enumeration of
//!   multisets with branch-and-bound pruning, feasibility evaluation
//!   with clamped resource accounting, and deterministic top-N ranking.
//! - **`error`**: The error taxonomy. An empty result is not an error.
//!
//! # Example
//!
//! ```
//! use trainplan::catalog::ActivityCatalog;
//! use trainplan::search::{SearchConfig, SearchRunner};
//!
//! let catalog = ActivityCatalog::builtin();
//! let config = SearchConfig::default()
//!     .with_available_time(10)
//!     .with_available_resource(80)
//!     .with_top_n(3);
//! let result = SearchRunner::run(&catalog, &config).unwrap();
//! assert!(!result.combinations.is_empty());
//! ```
//!
//! # Scale
//!
//! Designed for small catalogs (tens of activities) and bounded budgets
//! (tens of hours, a 0–100 freshness scale). The pruned search is exact
//! within those bounds; it is not a general integer-programming solver.
//!
//! [`Activity`]: catalog::Activity
//! [`ActivityCatalog`]: catalog::ActivityCatalog

pub mod catalog;
pub mod error;
pub mod search;

pub use error::{Error, Result};
