use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::data;
use crate::errors::CoreError;

/// One month's recorded rate triple: how much local currency buys
/// 1 USD, 1 EUR, and 1 gram of gold in that calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateObservation {
    pub year: i32,
    /// Calendar month, 1..=12
    pub month: u32,
    /// Local currency per 1 USD
    pub usd: f64,
    /// Local currency per 1 EUR
    pub eur: f64,
    /// Local currency per 1 gram of gold
    pub gold: f64,
}

impl RateObservation {
    pub fn new(year: i32, month: u32, usd: f64, eur: f64, gold: f64) -> Self {
        Self {
            year,
            month,
            usd,
            eur,
            gold,
        }
    }

    /// Chronological sort key for this observation.
    pub fn key(&self) -> i64 {
        month_key(self.year, self.month)
    }
}

/// Flatten a (year, month) pair into a single comparable key.
/// Twelve fixed months per year; no calendar-library assumptions.
pub fn month_key(year: i32, month: u32) -> i64 {
    i64::from(year) * 12 + i64::from(month)
}

/// Immutable, sparsely-populated table of monthly rate observations.
///
/// Gaps between observations are expected: a month with no direct entry
/// resolves to the chronologically nearest observation at or before it
/// ("last known rate persists until a new one is observed"). Queries that
/// precede every observation degrade to the earliest known rate, so
/// `lookup` is total — it never fails.
///
/// Read-only after construction; safe to share across concurrent
/// calculations without locking.
#[derive(Debug, Clone)]
pub struct RateTable {
    /// Sorted ascending by chronological key, at most one entry per month.
    observations: Vec<RateObservation>,
}

impl RateTable {
    /// Build a table from an arbitrary (unordered, possibly duplicated)
    /// set of observations.
    ///
    /// Duplicate (year, month) pairs collapse to the last occurrence.
    /// Rejects an empty set and any non-finite or non-positive rate, so
    /// every later `lookup` and every division against these rates is safe.
    pub fn new(observations: Vec<RateObservation>) -> Result<Self, CoreError> {
        if observations.is_empty() {
            return Err(CoreError::ValidationError(
                "Rate table must contain at least one observation".to_string(),
            ));
        }

        for obs in &observations {
            if !(1..=12).contains(&obs.month) {
                return Err(CoreError::ValidationError(format!(
                    "Observation {}-{} has month outside 1..=12",
                    obs.year, obs.month
                )));
            }
            for (label, rate) in [("usd", obs.usd), ("eur", obs.eur), ("gold", obs.gold)] {
                if !rate.is_finite() || rate <= 0.0 {
                    return Err(CoreError::ValidationError(format!(
                        "Observation {}-{:02} has invalid {label} rate {rate}: must be finite and positive",
                        obs.year, obs.month
                    )));
                }
            }
        }

        Ok(Self::from_unsorted(observations))
    }

    /// Build the table backed by the embedded 2005–2026 data set.
    pub fn builtin() -> Self {
        Self::from_unsorted(data::builtin_observations())
    }

    fn from_unsorted(observations: Vec<RateObservation>) -> Self {
        // BTreeMap both deduplicates (later insert wins) and yields the
        // observations back in chronological order.
        let by_month: BTreeMap<i64, RateObservation> = observations
            .into_iter()
            .map(|obs| (obs.key(), obs))
            .collect();
        Self {
            observations: by_month.into_values().collect(),
        }
    }

    /// Resolve the rate for a given month.
    ///
    /// Exact match → that observation, unchanged. Otherwise the nearest
    /// observation at or before the query, with `year`/`month` overridden
    /// to the requested values (rates untouched). A query earlier than the
    /// whole table returns the earliest observation, date overridden.
    pub fn lookup(&self, year: i32, month: u32) -> RateObservation {
        let target = month_key(year, month);
        let resolved = match self
            .observations
            .binary_search_by_key(&target, RateObservation::key)
        {
            Ok(idx) => return self.observations[idx].clone(),
            Err(0) => &self.observations[0],
            Err(idx) => &self.observations[idx - 1],
        };

        let mut obs = resolved.clone();
        obs.year = year;
        obs.month = month;
        obs
    }

    /// Whether the table holds a direct observation for this exact month.
    #[must_use]
    pub fn contains(&self, year: i32, month: u32) -> bool {
        let target = month_key(year, month);
        self.observations
            .binary_search_by_key(&target, RateObservation::key)
            .is_ok()
    }

    /// The chronologically first observation in the table.
    #[must_use]
    pub fn earliest(&self) -> &RateObservation {
        // Constructor guarantees at least one observation.
        &self.observations[0]
    }

    /// The chronologically last observation — the natural end point for
    /// "value the debt up to today" reports.
    #[must_use]
    pub fn latest(&self) -> &RateObservation {
        &self.observations[self.observations.len() - 1]
    }

    /// Number of distinct months with a direct observation.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// All observations in chronological order (oldest first).
    #[must_use]
    pub fn observations(&self) -> &[RateObservation] {
        &self.observations
    }
}
