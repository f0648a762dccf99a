//! Search configuration.
//!
//! [`SearchConfig`] holds the two budgets and all knobs that control the
//! enumeration.

/// Configuration for a combination search.
///
/// Carries the time and freshness budgets, the requested result count,
/// and the caps that keep the enumeration bounded.
///
/// # Defaults
///
/// ```
/// use trainplan::search::SearchConfig;
///
/// let config = SearchConfig::default();
/// assert_eq!(config.available_time, 10);
/// assert_eq!(config.available_resource, 80);
/// assert_eq!(config.resource_ceiling, 100);
/// assert_eq!(config.top_n, 10);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use trainplan::search::SearchConfig;
///
/// let config = SearchConfig::default()
///     .with_available_time(8)
///     .with_available_resource(60)
///     .with_top_n(3)
///     .with_max_count_per_activity(2);
/// ```
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Time budget in whole hours. Must be >= 1.
    pub available_time: u32,

    /// Freshness available at the start of the plan.
    ///
    /// Must lie in `0..=resource_ceiling`.
    pub available_resource: i32,

    /// Upper bound of the freshness scale.
    ///
    /// Recovery activities cannot push the running budget past this
    /// ceiling; the cumulative cost is clamped into `[0, resource_ceiling]`.
    pub resource_ceiling: i32,

    /// Number of ranked combinations to return. Must be >= 1.
    pub top_n: usize,

    /// Cap on how often any single activity may repeat in one
    /// combination.
    ///
    /// `None` bounds repetition only by the time budget.
    pub max_count_per_activity: Option<u32>,

    /// Cap on visited search-tree nodes.
    ///
    /// When the cap fires, the search either fails with
    /// `Error::ResourceExhausted` or, in best-effort mode, returns the
    /// combinations ranked so far. `None` disables the cap; the budgets
    /// alone then bound the traversal.
    pub max_nodes: Option<u64>,

    /// Return partial results instead of an error when the search is
    /// cancelled or hits `max_nodes`.
    pub best_effort: bool,

    /// Whether to split the top-level branches across rayon workers.
    ///
    /// Requires the `parallel` cargo feature; without it the flag is
    /// ignored and the search runs sequentially.
    pub parallel: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            available_time: 10,
            available_resource: 80,
            resource_ceiling: 100,
            top_n: 10,
            max_count_per_activity: None,
            max_nodes: None,
            best_effort: false,
            parallel: false,
        }
    }
}

impl SearchConfig {
    /// Sets the time budget in hours.
    pub fn with_available_time(mut self, hours: u32) -> Self {
        self.available_time = hours;
        self
    }

    /// Sets the available freshness.
    pub fn with_available_resource(mut self, resource: i32) -> Self {
        self.available_resource = resource;
        self
    }

    /// Sets the freshness scale ceiling.
    pub fn with_resource_ceiling(mut self, ceiling: i32) -> Self {
        self.resource_ceiling = ceiling;
        self
    }

    /// Sets the requested result count.
    pub fn with_top_n(mut self, n: usize) -> Self {
        self.top_n = n;
        self
    }

    /// Caps per-activity repetition.
    pub fn with_max_count_per_activity(mut self, count: u32) -> Self {
        self.max_count_per_activity = Some(count);
        self
    }

    /// Caps visited nodes.
    pub fn with_max_nodes(mut self, nodes: u64) -> Self {
        self.max_nodes = Some(nodes);
        self
    }

    /// Enables best-effort partial results on cancellation/exhaustion.
    pub fn with_best_effort(mut self, enabled: bool) -> Self {
        self.best_effort = enabled;
        self
    }

    /// Enables parallel top-level branch evaluation.
    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Validates parameter ranges.
    pub fn validate(&self) -> Result<(), String> {
        if self.available_time < 1 {
            return Err("available_time must be >= 1".into());
        }
        if self.resource_ceiling < 0 {
            return Err("resource_ceiling must be >= 0".into());
        }
        if self.available_resource < 0 || self.available_resource > self.resource_ceiling {
            return Err(format!(
                "available_resource must lie in 0..={}, got {}",
                self.resource_ceiling, self.available_resource
            ));
        }
        if self.top_n < 1 {
            return Err("top_n must be >= 1".into());
        }
        if self.max_count_per_activity == Some(0) {
            return Err("max_count_per_activity must be >= 1 when set".into());
        }
        if self.max_nodes == Some(0) {
            return Err("max_nodes must be >= 1 when set".into());
        }
        Ok(())
    }
}
