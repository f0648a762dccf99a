//! Bounded ranked collection of the best combinations.

use std::cmp::Ordering;

use super::types::Combination;

/// Keeps at most `capacity` combinations in rank order.
///
/// Candidates stream in during enumeration; the buffer never grows past
/// the requested top-N, so the search ranks without materializing the
/// full feasible space. Buffers from parallel workers merge under the
/// same total order, which makes the split reproducible.
#[derive(Debug, Clone)]
pub struct RankedBuffer {
    capacity: usize,
    entries: Vec<Combination>,
}

impl RankedBuffer {
    /// Creates a buffer holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Vec::with_capacity(capacity.min(64)),
        }
    }

    /// Cheap admission pre-check on the scalar part of the rank key.
    ///
    /// Lets the enumerator skip materializing a combination that cannot
    /// enter the buffer. Conservative on exact ties (the name tie-break
    /// still needs the full combination).
    pub fn admits(&self, score: u64, duration: u32, resource_cost: i32) -> bool {
        if self.entries.len() < self.capacity {
            return true;
        }
        let last = &self.entries[self.entries.len() - 1];
        let order = last
            .score
            .cmp(&score)
            .then_with(|| duration.cmp(&last.total_duration))
            .then_with(|| resource_cost.cmp(&last.total_resource_cost));
        order != Ordering::Greater
    }

    /// Inserts a combination at its rank position, evicting the worst
    /// entry when the buffer is full.
    pub fn insert(&mut self, combination: Combination) {
        let position = self
            .entries
            .binary_search_by(|entry| entry.rank_cmp(&combination))
            .unwrap_or_else(|pos| pos);
        if position >= self.capacity {
            return;
        }
        self.entries.insert(position, combination);
        self.entries.truncate(self.capacity);
    }

    /// Merges another buffer into this one under the same order.
    pub fn merge(mut self, other: Self) -> Self {
        for combination in other.entries {
            self.insert(combination);
        }
        self
    }

    /// Consumes the buffer, yielding entries in rank order.
    pub fn into_ranked(self) -> Vec<Combination> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
