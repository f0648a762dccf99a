//! Candidate aggregation and feasibility.
//!
//! One aggregation routine serves both sides of the pipeline: the
//! enumerator applies it incrementally while descending, and
//! [`build_combination`] recomputes it from a finished count vector.
//! Re-scoring a returned combination therefore reproduces its stored
//! totals exactly.
//!
//! # Resource clamping
//!
//! The running freshness cost accumulates per catalog index
//! (`resource_cost * count`) and is clamped into `[0, resource_ceiling]`
//! after each index: recovery units cannot drive the cumulative cost
//! below zero (the budget cannot end up above a full scale) and the
//! running quantity saturates at the scale ceiling. Feasibility compares
//! the final clamped cost against `available_resource`.

use std::collections::BTreeMap;

use super::config::SearchConfig;
use super::types::{ActivityCount, Combination};
use crate::catalog::Activity;

/// Scalar totals of a candidate multiset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    /// Total duration in hours.
    pub duration: u32,
    /// Final clamped freshness cost.
    pub resource_cost: i32,
    /// Sum across all skill dimensions.
    pub score: u64,
}

/// Aggregates duration, clamped resource cost, and score for a count
/// vector aligned with `activities` (catalog order).
pub fn aggregate(activities: &[Activity], counts: &[u32], resource_ceiling: i32) -> Totals {
    debug_assert_eq!(activities.len(), counts.len());

    let mut duration: u64 = 0;
    let mut cost: i64 = 0;
    let mut score: u64 = 0;
    for (activity, &count) in activities.iter().zip(counts) {
        if count == 0 {
            continue;
        }
        duration += u64::from(activity.duration_hours) * u64::from(count);
        cost = step_resource(cost, activity.resource_cost, count, resource_ceiling);
        score += activity.total_yield() * u64::from(count);
    }

    Totals {
        duration: u32::try_from(duration).unwrap_or(u32::MAX),
        resource_cost: cost as i32,
        score,
    }
}

/// Applies one catalog index's resource contribution to a running cost,
/// clamping into `[0, resource_ceiling]`.
pub(crate) fn step_resource(cost: i64, resource_cost: i32, count: u32, ceiling: i32) -> i64 {
    (cost + i64::from(resource_cost) * i64::from(count)).clamp(0, i64::from(ceiling))
}

/// Whether totals fit both budgets.
pub fn is_feasible(totals: &Totals, config: &SearchConfig) -> bool {
    totals.duration <= config.available_time && totals.resource_cost <= config.available_resource
}

/// Per-dimension skill totals for a count vector.
pub fn skill_totals(activities: &[Activity], counts: &[u32]) -> BTreeMap<String, u64> {
    let mut totals = BTreeMap::new();
    for (activity, &count) in activities.iter().zip(counts) {
        if count == 0 {
            continue;
        }
        for (dimension, &points) in &activity.skill_yield {
            if points == 0 {
                continue;
            }
            *totals.entry(dimension.clone()).or_insert(0) += u64::from(points) * u64::from(count);
        }
    }
    totals
}

/// Materializes a full [`Combination`] from a count vector.
pub fn build_combination(
    activities: &[Activity],
    counts: &[u32],
    resource_ceiling: i32,
) -> Combination {
    let totals = aggregate(activities, counts, resource_ceiling);
    Combination {
        counts: activities
            .iter()
            .zip(counts)
            .filter(|&(_, &count)| count > 0)
            .map(|(activity, &count)| ActivityCount {
                name: activity.name.clone(),
                count,
            })
            .collect(),
        total_duration: totals.duration,
        total_resource_cost: totals.resource_cost,
        skill_totals: skill_totals(activities, counts),
        score: totals.score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Activity;

    fn fixture() -> Vec<Activity> {
        vec![
            Activity::new("A", 3, 60).with_points(180),
            Activity::new("B", 1, 15).with_points(36),
            Activity::new("R", 1, -13),
        ]
    }

    #[test]
    fn test_plain_totals() {
        let acts = fixture();
        let t = aggregate(&acts, &[1, 2, 0], 100);
        assert_eq!(t.duration, 5);
        assert_eq!(t.resource_cost, 90);
        assert_eq!(t.score, 252);
    }

    #[test]
    fn test_recovery_reduces_cost_but_consumes_time() {
        let acts = fixture();
        let t = aggregate(&acts, &[1, 0, 2], 100);
        assert_eq!(t.duration, 5);
        assert_eq!(t.resource_cost, 34);
        assert_eq!(t.score, 180);
    }

    #[test]
    fn test_recovery_clamped_at_zero() {
        let acts = fixture();
        // 10 cooldown hours would "refund" 130, but cost floors at 0.
        let t = aggregate(&acts, &[0, 1, 10], 100);
        assert_eq!(t.resource_cost, 0);
        assert_eq!(t.duration, 11); // recovery still consumes time
    }

    #[test]
    fn test_running_cost_saturates_at_ceiling() {
        let acts = fixture();
        // Two barbell sessions nominally cost 120; the running quantity
        // saturates at the scale ceiling of 100.
        let t = aggregate(&acts, &[2, 0, 0], 100);
        assert_eq!(t.resource_cost, 100);
    }

    #[test]
    fn test_feasibility_checks_both_budgets() {
        let acts = fixture();
        let config = SearchConfig::default()
            .with_available_time(5)
            .with_available_resource(80);
        let ok = aggregate(&acts, &[1, 1, 0], 100);
        assert!(is_feasible(&ok, &config));
        let too_long = aggregate(&acts, &[1, 3, 0], 100);
        assert!(!is_feasible(&too_long, &config)); // duration 6 > 5
        let too_costly = aggregate(&acts, &[1, 2, 0], 100);
        assert!(!is_feasible(&too_costly, &config)); // cost 90 > 80
    }

    #[test]
    fn test_skill_totals_per_dimension() {
        let acts = vec![
            Activity::new("P", 1, 15).with_yield("technique", 20).with_yield("vision", 16),
            Activity::new("J", 1, 10).with_yield("technique", 24),
        ];
        let totals = skill_totals(&acts, &[2, 1]);
        assert_eq!(totals["technique"], 64);
        assert_eq!(totals["vision"], 32);
    }

    #[test]
    fn test_build_combination_omits_zero_counts() {
        let acts = fixture();
        let combo = build_combination(&acts, &[2, 0, 1], 100);
        assert_eq!(combo.counts.len(), 2);
        assert_eq!(combo.counts[0].name, "A");
        assert_eq!(combo.counts[1].name, "R");
        assert_eq!(combo.score, 360);
    }
}
