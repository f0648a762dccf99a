//! Pruned depth-first enumeration of activity combinations.
//!
//! [`SearchRunner`] walks the catalog in index order; at each level it
//! picks a repeat count for the current activity before moving to the
//! next index. This canonical traversal enumerates combinations with
//! repetition, so a multiset is visited exactly once regardless of how
//! many orderings it has.
//!
//! Branch-and-bound keeps the walk tractable: a branch dies as soon as
//! its cumulative duration exceeds the time budget, or its clamped
//! cumulative cost exceeds the freshness budget with no recovery
//! activity left in the remaining index range. The unpruned space is
//! exponential in catalog size and time budget; ten activities and ten
//! hours are already out of reach without the bound.
//!
//! Cancellation and the node cap are checked between recursive steps, so
//! a long search stops cleanly with the subtrees ranked so far intact.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use super::config::SearchConfig;
use super::eval::{build_combination, step_resource};
use super::rank::RankedBuffer;
use super::types::{SearchResult, SearchStatus};
use crate::catalog::{Activity, ActivityCatalog};
use crate::error::{Error, Result};

/// Executes combination searches over a read-only catalog.
pub struct SearchRunner;

impl SearchRunner {
    /// Runs a search to completion (or to its node cap).
    pub fn run(catalog: &ActivityCatalog, config: &SearchConfig) -> Result<SearchResult> {
        Self::run_with_cancel(catalog, config, None)
    }

    /// Runs a search with an optional cancellation token.
    ///
    /// The flag is polled between recursive steps. Unless
    /// `config.best_effort` is set, a cancelled or node-capped search
    /// discards partial results and surfaces an error.
    pub fn run_with_cancel(
        catalog: &ActivityCatalog,
        config: &SearchConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SearchResult> {
        config.validate().map_err(Error::Config)?;

        let started = Instant::now();
        let activities = catalog.as_slice();
        let bounds = Bounds::new(activities, config);
        let visited = AtomicU64::new(0);

        tracing::debug!(
            activities = activities.len(),
            available_time = config.available_time,
            available_resource = config.available_resource,
            top_n = config.top_n,
            "starting combination search"
        );

        let output = run_tree(activities, config, &bounds, cancel.as_deref(), &visited);

        let nodes_visited = visited.load(Ordering::Relaxed);
        let elapsed_ms = started.elapsed().as_millis() as u64;

        let status = match output.stop {
            Some(Stop::NodeLimit) if !config.best_effort => {
                return Err(Error::ResourceExhausted {
                    visited: nodes_visited,
                    limit: config.max_nodes.unwrap_or(0),
                });
            }
            Some(Stop::Cancelled) if !config.best_effort => return Err(Error::Cancelled),
            Some(Stop::NodeLimit) => SearchStatus::NodeLimit,
            Some(Stop::Cancelled) => SearchStatus::Cancelled,
            None if output.buffer.is_empty() => SearchStatus::Infeasible,
            None => SearchStatus::Complete,
        };

        tracing::debug!(
            ?status,
            nodes_visited,
            nodes_pruned = output.pruned,
            feasible = output.feasible,
            elapsed_ms,
            "combination search finished"
        );

        Ok(SearchResult {
            combinations: output.buffer.into_ranked(),
            status,
            nodes_visited,
            nodes_pruned: output.pruned,
            feasible_count: output.feasible,
            elapsed_ms,
        })
    }
}

/// Why a traversal stopped early.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stop {
    NodeLimit,
    Cancelled,
}

/// Per-index bounds precomputed once per search.
struct Bounds {
    /// Max repeat count per index, from the time budget and the optional
    /// per-activity cap.
    max_counts: Vec<u32>,
    /// `recovery_from[i]`: some activity at index >= i has negative cost.
    /// Length `n + 1`; the final entry is `false`.
    recovery_from: Vec<bool>,
}

impl Bounds {
    fn new(activities: &[Activity], config: &SearchConfig) -> Self {
        let max_counts = activities
            .iter()
            .map(|a| {
                let by_time = config.available_time / a.duration_hours;
                match config.max_count_per_activity {
                    Some(cap) => by_time.min(cap),
                    None => by_time,
                }
            })
            .collect();

        let mut recovery_from = vec![false; activities.len() + 1];
        for i in (0..activities.len()).rev() {
            recovery_from[i] = activities[i].is_recovery() || recovery_from[i + 1];
        }

        Self {
            max_counts,
            recovery_from,
        }
    }
}

/// Accumulated output of one traversal (or one parallel worker).
struct TreeOutput {
    buffer: RankedBuffer,
    pruned: u64,
    feasible: u64,
    stop: Option<Stop>,
}

fn run_tree(
    activities: &[Activity],
    config: &SearchConfig,
    bounds: &Bounds,
    cancel: Option<&AtomicBool>,
    visited: &AtomicU64,
) -> TreeOutput {
    #[cfg(feature = "parallel")]
    if config.parallel && !activities.is_empty() {
        return run_tree_parallel(activities, config, bounds, cancel, visited);
    }

    let mut walker = Walker::new(activities, config, bounds, cancel, visited);
    let stop = walker.descend(0, 0, 0, 0).err();
    walker.into_output(stop)
}

/// Splits the first activity's repeat counts across rayon workers.
///
/// Workers share only the node counter and the cancel flag; each owns a
/// private ranked buffer, and buffers merge under the total rank order,
/// so the parallel result is identical to the sequential one.
#[cfg(feature = "parallel")]
fn run_tree_parallel(
    activities: &[Activity],
    config: &SearchConfig,
    bounds: &Bounds,
    cancel: Option<&AtomicBool>,
    visited: &AtomicU64,
) -> TreeOutput {
    use rayon::prelude::*;

    // The root node is accounted once, not per worker.
    visited.fetch_add(1, Ordering::Relaxed);

    let first = &activities[0];
    let outputs: Vec<TreeOutput> = (0..=bounds.max_counts[0])
        .into_par_iter()
        .map(|first_count| {
            let mut walker = Walker::new(activities, config, bounds, cancel, visited);
            let duration = u64::from(first.duration_hours) * u64::from(first_count);
            let cost = step_resource(0, first.resource_cost, first_count, config.resource_ceiling);
            if cost > i64::from(config.available_resource) && !bounds.recovery_from[1] {
                walker.pruned += 1;
                return walker.into_output(None);
            }
            walker.counts[0] = first_count;
            let score = first.total_yield() * u64::from(first_count);
            let stop = walker.descend(1, duration, cost, score).err();
            walker.into_output(stop)
        })
        .collect();

    outputs
        .into_iter()
        .reduce(|left, right| {
            let stop = match (left.stop, right.stop) {
                (Some(Stop::Cancelled), _) | (_, Some(Stop::Cancelled)) => Some(Stop::Cancelled),
                (Some(Stop::NodeLimit), _) | (_, Some(Stop::NodeLimit)) => Some(Stop::NodeLimit),
                (None, None) => None,
            };
            TreeOutput {
                buffer: left.buffer.merge(right.buffer),
                pruned: left.pruned + right.pruned,
                feasible: left.feasible + right.feasible,
                stop,
            }
        })
        .unwrap_or_else(|| TreeOutput {
            buffer: RankedBuffer::new(config.top_n),
            pruned: 0,
            feasible: 0,
            stop: None,
        })
}

/// One depth-first traversal with its working state.
struct Walker<'a> {
    activities: &'a [Activity],
    config: &'a SearchConfig,
    bounds: &'a Bounds,
    cancel: Option<&'a AtomicBool>,
    visited: &'a AtomicU64,
    counts: Vec<u32>,
    buffer: RankedBuffer,
    pruned: u64,
    feasible: u64,
}

impl<'a> Walker<'a> {
    fn new(
        activities: &'a [Activity],
        config: &'a SearchConfig,
        bounds: &'a Bounds,
        cancel: Option<&'a AtomicBool>,
        visited: &'a AtomicU64,
    ) -> Self {
        Self {
            activities,
            config,
            bounds,
            cancel,
            visited,
            counts: vec![0; activities.len()],
            buffer: RankedBuffer::new(config.top_n),
            pruned: 0,
            feasible: 0,
        }
    }

    fn into_output(self, stop: Option<Stop>) -> TreeOutput {
        TreeOutput {
            buffer: self.buffer,
            pruned: self.pruned,
            feasible: self.feasible,
            stop,
        }
    }

    /// Recursive step: pick a repeat count for `index`, then descend.
    ///
    /// `duration`, `cost` and `score` are the running totals of the
    /// partial assignment in `counts[..index]`; `cost` is already
    /// clamped into `[0, resource_ceiling]`.
    fn descend(
        &mut self,
        index: usize,
        duration: u64,
        cost: i64,
        score: u64,
    ) -> std::result::Result<(), Stop> {
        let visited = self.visited.fetch_add(1, Ordering::Relaxed) + 1;
        if let Some(limit) = self.config.max_nodes {
            if visited > limit {
                return Err(Stop::NodeLimit);
            }
        }
        if let Some(flag) = self.cancel {
            if flag.load(Ordering::Relaxed) {
                return Err(Stop::Cancelled);
            }
        }

        if index == self.activities.len() {
            self.emit_leaf(duration, cost, score);
            return Ok(());
        }

        let activity = &self.activities[index];
        for count in 0..=self.bounds.max_counts[index] {
            let branch_duration =
                duration + u64::from(activity.duration_hours) * u64::from(count);
            if branch_duration > u64::from(self.config.available_time) {
                // Higher counts only get longer.
                self.pruned += 1;
                break;
            }

            let branch_cost =
                step_resource(cost, activity.resource_cost, count, self.config.resource_ceiling);
            if branch_cost > i64::from(self.config.available_resource)
                && !self.bounds.recovery_from[index + 1]
            {
                // Nothing after this index can lower the cost again. For
                // a non-recovery activity higher counts are hopeless too;
                // for a recovery activity they still shrink the cost.
                self.pruned += 1;
                if activity.is_recovery() {
                    continue;
                }
                break;
            }

            self.counts[index] = count;
            let branch_score = score + activity.total_yield() * u64::from(count);
            let outcome = self.descend(index + 1, branch_duration, branch_cost, branch_score);
            self.counts[index] = 0;
            outcome?;
        }
        Ok(())
    }

    /// A fully assigned count vector; keep it if non-empty and feasible.
    fn emit_leaf(&mut self, duration: u64, cost: i64, score: u64) {
        if duration == 0 || cost > i64::from(self.config.available_resource) {
            return;
        }
        self.feasible += 1;
        if self.buffer.admits(score, duration as u32, cost as i32) {
            let combination =
                build_combination(self.activities, &self.counts, self.config.resource_ceiling);
            debug_assert_eq!(u64::from(combination.total_duration), duration);
            debug_assert_eq!(i64::from(combination.total_resource_cost), cost);
            debug_assert_eq!(combination.score, score);
            self.buffer.insert(combination);
        }
    }
}
