//! Property tests for the combination search.
//!
//! Small random instances are cross-checked against a brute-force
//! odometer enumeration that shares only the aggregation code with the
//! engine, so the pruned traversal itself is what gets verified.

use proptest::prelude::*;

use trainplan::catalog::{Activity, ActivityCatalog};
use trainplan::search::eval;
use trainplan::search::{Combination, SearchConfig, SearchRunner};

fn arb_activities() -> impl Strategy<Value = Vec<Activity>> {
    proptest::collection::vec((1u32..=3, -20i32..=60, 0u32..=50), 0..=4).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(index, (duration, cost, points))| {
                Activity::new(format!("act{index}"), duration, cost).with_points(points)
            })
            .collect()
    })
}

fn arb_config() -> impl Strategy<Value = SearchConfig> {
    (1u32..=8, 0i32..=100, 1usize..=6).prop_map(|(time, resource, top_n)| {
        SearchConfig::default()
            .with_available_time(time)
            .with_available_resource(resource)
            .with_resource_ceiling(100)
            .with_top_n(top_n)
    })
}

/// Exhaustive reference: every count vector within the per-activity time
/// bound, filtered by feasibility, sorted by the rank order.
fn brute_force(activities: &[Activity], config: &SearchConfig) -> Vec<Combination> {
    let max_counts: Vec<u32> = activities
        .iter()
        .map(|a| config.available_time / a.duration_hours)
        .collect();

    let mut feasible = Vec::new();
    let mut counts = vec![0u32; activities.len()];
    'outer: loop {
        if counts.iter().any(|&c| c > 0) {
            let totals = eval::aggregate(activities, &counts, config.resource_ceiling);
            if eval::is_feasible(&totals, config) {
                feasible.push(eval::build_combination(
                    activities,
                    &counts,
                    config.resource_ceiling,
                ));
            }
        }
        let mut index = 0;
        loop {
            if index == counts.len() {
                break 'outer;
            }
            if counts[index] < max_counts[index] {
                counts[index] += 1;
                break;
            }
            counts[index] = 0;
            index += 1;
        }
    }

    feasible.sort_by(|a, b| a.rank_cmp(b));
    feasible.truncate(config.top_n);
    feasible
}

proptest! {
    #[test]
    fn returned_entries_respect_both_budgets(
        activities in arb_activities(),
        config in arb_config(),
    ) {
        let catalog = ActivityCatalog::from_activities(activities).unwrap();
        let result = SearchRunner::run(&catalog, &config).unwrap();
        for combination in &result.combinations {
            prop_assert!(combination.total_duration <= config.available_time);
            prop_assert!(combination.total_resource_cost <= config.available_resource);
            prop_assert!(!combination.counts.is_empty());
        }
        prop_assert!(result.combinations.len() <= config.top_n);
    }

    #[test]
    fn rescoring_reproduces_stored_totals(
        activities in arb_activities(),
        config in arb_config(),
    ) {
        let catalog = ActivityCatalog::from_activities(activities).unwrap();
        let result = SearchRunner::run(&catalog, &config).unwrap();
        for combination in &result.combinations {
            let mut counts = vec![0u32; catalog.len()];
            for entry in &combination.counts {
                let index = catalog
                    .iter()
                    .position(|a| a.name == entry.name)
                    .expect("returned name must be in the catalog");
                counts[index] = entry.count;
            }
            let rebuilt =
                eval::build_combination(catalog.as_slice(), &counts, config.resource_ceiling);
            prop_assert_eq!(&rebuilt, combination);
        }
    }

    #[test]
    fn identical_inputs_rank_identically(
        activities in arb_activities(),
        config in arb_config(),
    ) {
        let catalog = ActivityCatalog::from_activities(activities).unwrap();
        let first = SearchRunner::run(&catalog, &config).unwrap();
        let second = SearchRunner::run(&catalog, &config).unwrap();
        prop_assert_eq!(first.combinations, second.combinations);
        prop_assert_eq!(first.nodes_visited, second.nodes_visited);
    }

    #[test]
    fn larger_top_n_extends_the_prefix(
        activities in arb_activities(),
        config in arb_config(),
    ) {
        let catalog = ActivityCatalog::from_activities(activities).unwrap();
        let small = SearchRunner::run(&catalog, &config).unwrap();
        let large = SearchRunner::run(&catalog, &config.clone().with_top_n(config.top_n + 1))
            .unwrap();
        prop_assert!(large.combinations.len() >= small.combinations.len());
        let prefix = small.combinations.len();
        prop_assert_eq!(&small.combinations[..], &large.combinations[..prefix]);
    }

    #[test]
    fn pruned_search_matches_brute_force(
        activities in arb_activities(),
        config in arb_config(),
    ) {
        let catalog = ActivityCatalog::from_activities(activities.clone()).unwrap();
        let result = SearchRunner::run(&catalog, &config).unwrap();
        let expected = brute_force(&activities, &config);
        prop_assert_eq!(result.combinations, expected);
    }
}
