//! Activity model and its wire form.
//!
//! [`Activity`] is the validated in-memory type; [`ActivityRecord`] is the
//! serde-facing form read from catalog files. Records carry either a
//! multi-dimensional `skillYield` map or the legacy flat `skillPoints`
//! scalar — the latter is folded into the map as the single dimension
//! `"total"`, so downstream code never sees two representations.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{Error, Result};

/// Skill dimension used when a legacy flat `skillPoints` record is folded
/// into the multi-dimensional model.
pub const LEGACY_SKILL_DIMENSION: &str = "total";

/// A schedulable activity: one unit of it costs time and freshness and
/// yields skill points.
///
/// Immutable once constructed; identified by `name`, which is unique
/// within an [`ActivityCatalog`](crate::catalog::ActivityCatalog).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Unique, non-empty label.
    pub name: String,
    /// Time cost in whole hours for one unit. Always >= 1.
    #[serde(rename = "duration")]
    pub duration_hours: u32,
    /// Freshness cost for one unit. Negative means the activity is a
    /// recovery unit that replenishes the budget.
    pub resource_cost: i32,
    /// Points per skill dimension for one unit. Dimensions absent from
    /// the map are implicitly zero. A `BTreeMap` keeps per-dimension
    /// iteration deterministic for ranking output and serialization.
    pub skill_yield: BTreeMap<String, u32>,
}

impl Activity {
    /// Creates an activity with an empty skill yield.
    ///
    /// Intended for tests and programmatic catalog construction; inputs
    /// are validated when the activity enters a catalog.
    pub fn new(name: impl Into<String>, duration_hours: u32, resource_cost: i32) -> Self {
        Self {
            name: name.into(),
            duration_hours,
            resource_cost,
            skill_yield: BTreeMap::new(),
        }
    }

    /// Adds points on a skill dimension.
    pub fn with_yield(mut self, dimension: impl Into<String>, points: u32) -> Self {
        self.skill_yield.insert(dimension.into(), points);
        self
    }

    /// Sets a single-dimension yield, the degenerate legacy form.
    pub fn with_points(self, points: u32) -> Self {
        self.with_yield(LEGACY_SKILL_DIMENSION, points)
    }

    /// Sum of all skill dimensions for one unit.
    pub fn total_yield(&self) -> u64 {
        self.skill_yield.values().map(|&p| u64::from(p)).sum()
    }

    /// Whether one unit replenishes the resource budget instead of
    /// consuming it.
    pub fn is_recovery(&self) -> bool {
        self.resource_cost < 0
    }
}

/// Wire form of an activity as stored in a catalog file.
///
/// Exactly one of `skill_yield` / `skill_points` may be present; neither
/// means a zero-yield activity (e.g. a pure recovery unit).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    /// Unique activity name.
    pub name: String,
    /// Duration in hours; must be >= 1.
    pub duration: i64,
    /// Freshness cost; may be negative (recovery).
    pub resource_cost: i64,
    /// Multi-dimensional yield map.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill_yield: Option<BTreeMap<String, i64>>,
    /// Legacy flat scalar, treated as `skillYield = { "total": n }`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill_points: Option<i64>,
}

impl ActivityRecord {
    /// Validates the record and converts it into an [`Activity`].
    ///
    /// Rejects empty names, `duration < 1`, negative yield points, and
    /// records carrying both yield forms. Catalog-level checks
    /// (duplicate names) happen in
    /// [`ActivityCatalog::from_records`](crate::catalog::ActivityCatalog::from_records).
    pub fn into_activity(self) -> Result<Activity> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(Error::Validation {
                record: "<unnamed>".into(),
                reason: "name must be non-empty".into(),
            });
        }

        let duration_hours = u32::try_from(self.duration).ok().filter(|&d| d >= 1).ok_or_else(|| {
            Error::Validation {
                record: name.clone(),
                reason: format!("duration must be an integer >= 1, got {}", self.duration),
            }
        })?;

        let resource_cost = i32::try_from(self.resource_cost).map_err(|_| Error::Validation {
            record: name.clone(),
            reason: format!("resourceCost {} is out of range", self.resource_cost),
        })?;

        let skill_yield = match (self.skill_yield, self.skill_points) {
            (Some(_), Some(_)) => {
                return Err(Error::Validation {
                    record: name,
                    reason: "record carries both skillYield and legacy skillPoints".into(),
                });
            }
            (Some(map), None) => {
                let mut yields = BTreeMap::new();
                for (dimension, points) in map {
                    let points = u32::try_from(points).map_err(|_| Error::Validation {
                        record: name.clone(),
                        reason: format!(
                            "skillYield.{dimension} must be a non-negative integer, got {points}"
                        ),
                    })?;
                    yields.insert(dimension, points);
                }
                yields
            }
            (None, Some(points)) => {
                let points = u32::try_from(points).map_err(|_| Error::Validation {
                    record: name.clone(),
                    reason: format!("skillPoints must be a non-negative integer, got {points}"),
                })?;
                let mut yields = BTreeMap::new();
                yields.insert(LEGACY_SKILL_DIMENSION.to_string(), points);
                yields
            }
            (None, None) => BTreeMap::new(),
        };

        Ok(Activity {
            name,
            duration_hours,
            resource_cost,
            skill_yield,
        })
    }
}

impl From<Activity> for ActivityRecord {
    fn from(activity: Activity) -> Self {
        Self {
            name: activity.name,
            duration: i64::from(activity.duration_hours),
            resource_cost: i64::from(activity.resource_cost),
            skill_yield: Some(
                activity
                    .skill_yield
                    .into_iter()
                    .map(|(k, v)| (k, i64::from(v)))
                    .collect(),
            ),
            skill_points: None,
        }
    }
}
