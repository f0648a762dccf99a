//! Result types for the combination search.

use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// How often one activity appears in a combination.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct ActivityCount {
    /// Activity name.
    pub name: String,
    /// Repetitions, always >= 1 (zero counts are omitted).
    pub count: u32,
}

/// A feasible multiset of activities with its aggregate totals.
///
/// A pure value object: two combinations with the same counts are the
/// same combination. `counts` lists activities in catalog order, which
/// makes the representation canonical and the name tie-break
/// reproducible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Combination {
    /// Per-activity repetitions in catalog order; zero counts omitted.
    pub counts: Vec<ActivityCount>,
    /// Sum of `duration_hours * count` over all entries.
    pub total_duration: u32,
    /// Cumulative freshness cost, clamped into `[0, resource_ceiling]`
    /// per catalog index during aggregation.
    pub total_resource_cost: i32,
    /// Per-dimension skill totals.
    pub skill_totals: BTreeMap<String, u64>,
    /// Sum across all skill dimensions; the ranking scalar.
    pub score: u64,
}

impl Combination {
    /// Ranking order: higher score first, then shorter duration, then
    /// lower resource cost, then the canonical count sequence. Total, so
    /// ranked output is reproducible across runs and workers.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .cmp(&self.score)
            .then_with(|| self.total_duration.cmp(&other.total_duration))
            .then_with(|| self.total_resource_cost.cmp(&other.total_resource_cost))
            .then_with(|| self.counts.cmp(&other.counts))
    }

    /// Human-readable count listing, e.g. `2x Barbells, 1x Passing`.
    pub fn describe(&self) -> String {
        self.counts
            .iter()
            .map(|c| format!("{}x {}", c.count, c.name))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// How a search run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStatus {
    /// The full (pruned) candidate space was enumerated and at least one
    /// feasible combination was found.
    Complete,
    /// The full candidate space was enumerated and no combination fits
    /// both budgets. An expected outcome, not an error.
    Infeasible,
    /// The node cap fired in best-effort mode; results cover only the
    /// subtrees visited so far.
    NodeLimit,
    /// The search was cancelled in best-effort mode; results are partial.
    Cancelled,
}

/// Ranked outcome of a combination search.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Up to `top_n` combinations in rank order.
    pub combinations: Vec<Combination>,
    /// How the run ended.
    pub status: SearchStatus,
    /// Search-tree nodes visited.
    pub nodes_visited: u64,
    /// Branches cut by the budget bounds.
    pub nodes_pruned: u64,
    /// Feasible candidates seen during enumeration (including ones that
    /// did not make the top list).
    pub feasible_count: u64,
    /// Wall-clock time of the run in milliseconds.
    pub elapsed_ms: u64,
}

impl SearchResult {
    /// The best-ranked combination, if any was found.
    pub fn best(&self) -> Option<&Combination> {
        self.combinations.first()
    }

    /// Whether the search completed without finding any feasible
    /// combination.
    pub fn is_infeasible(&self) -> bool {
        self.status == SearchStatus::Infeasible
    }
}
