//! Combination search: enumeration, feasibility, ranking, top-N.
//!
//! # Key Components
//!
//! - [`SearchConfig`] — budgets and caps, builder-style
//! - [`SearchRunner`] — pruned depth-first enumeration with cooperative
//!   cancellation and an optional node cap
//! - [`eval`] — totals aggregation and the feasibility check, shared by
//!   the enumerator and by re-scoring
//! - [`RankedBuffer`] — bounded top-N collection under the total
//!   score/duration/cost/name order
//! - [`SearchResult`] / [`Combination`] — the ranked response
//!
//! # Pipeline
//!
//! The runner emits each candidate multiset exactly once, straight into
//! the ranked buffer; infeasible candidates are dropped silently during
//! generation. Nothing materializes the full candidate space.

mod config;
pub mod eval;
mod rank;
mod runner;
mod types;

pub use config::SearchConfig;
pub use rank::RankedBuffer;
pub use runner::SearchRunner;
pub use types::{ActivityCount, Combination, SearchResult, SearchStatus};
