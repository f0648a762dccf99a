//! Validated, ordered activity catalog.

use std::collections::HashSet;

use super::activity::{Activity, ActivityRecord};
use crate::error::{Error, Result};

/// An immutable, validated set of activities.
///
/// Iteration order is source order and is part of the contract: the
/// search's canonical multiset representation and its name tie-break both
/// follow catalog order, so two runs over the same catalog produce
/// identical output.
///
/// The catalog is a plain value: callers pass it by reference into a
/// search, which never mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityCatalog {
    activities: Vec<Activity>,
}

impl ActivityCatalog {
    /// Builds a catalog from wire records, validating each record and
    /// rejecting duplicate names.
    pub fn from_records(records: Vec<ActivityRecord>) -> Result<Self> {
        let mut activities = Vec::with_capacity(records.len());
        for record in records {
            activities.push(record.into_activity()?);
        }
        Self::from_activities(activities)
    }

    /// Builds a catalog from already-constructed activities, applying the
    /// same validation as [`from_records`](Self::from_records).
    pub fn from_activities(activities: Vec<Activity>) -> Result<Self> {
        let mut seen = HashSet::new();
        for activity in &activities {
            if activity.name.trim().is_empty() {
                return Err(Error::Validation {
                    record: "<unnamed>".into(),
                    reason: "name must be non-empty".into(),
                });
            }
            if activity.duration_hours < 1 {
                return Err(Error::Validation {
                    record: activity.name.clone(),
                    reason: "duration must be >= 1".into(),
                });
            }
            if !seen.insert(activity.name.as_str()) {
                return Err(Error::Validation {
                    record: activity.name.clone(),
                    reason: "duplicate activity name".into(),
                });
            }
        }
        Ok(Self { activities })
    }

    /// The catalog of the original training planner: seven drills plus a
    /// cooldown recovery unit that restores 13 freshness per hour.
    pub fn builtin() -> Self {
        let activities = vec![
            Activity::new("Barbells", 3, 60).with_points(180),
            Activity::new("Slalom dribbling", 3, 30).with_points(102),
            Activity::new("Medicine ball", 3, 50).with_points(126),
            Activity::new("Jogging with ball", 1, 20).with_points(34),
            Activity::new("Passing", 1, 15).with_points(36),
            Activity::new("Juggling", 1, 10).with_points(24),
            Activity::new("Target wall", 2, 25).with_points(76),
            Activity::new("Cooldown", 1, -13),
        ];
        // Names and bounds above satisfy validation by construction.
        Self { activities }
    }

    /// Activities in source order.
    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        self.activities.iter()
    }

    /// Activities in source order, as a slice.
    pub fn as_slice(&self) -> &[Activity] {
        &self.activities
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Looks an activity up by name.
    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.name == name)
    }

    /// Builds a sub-catalog containing only the named activities,
    /// preserving source order. A name that is not in the catalog is a
    /// validation error, not a silent no-op.
    pub fn restrict<S: AsRef<str>>(&self, names: &[S]) -> Result<Self> {
        for name in names {
            if self.get(name.as_ref()).is_none() {
                return Err(Error::Validation {
                    record: name.as_ref().to_string(),
                    reason: "not in catalog".into(),
                });
            }
        }
        let wanted: HashSet<&str> = names.iter().map(|n| n.as_ref()).collect();
        let activities = self
            .activities
            .iter()
            .filter(|a| wanted.contains(a.name.as_str()))
            .cloned()
            .collect();
        Ok(Self { activities })
    }
}
