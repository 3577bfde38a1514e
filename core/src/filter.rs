//! Filter criteria — the selection contract shared by Aggregator and
//! Ranker callers.
//!
//! RULE: criteria are an explicit parameter object passed into every
//! call. The engine holds no filter state between calls.
//!
//! A row passes iff it matches every dimension that carries a
//! restriction: logical AND across dimensions, membership OR within a
//! dimension's value set. Matching is exact — case-sensitive, with
//! whitespace significant.

use crate::row::ObservationRow;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default)]
    pub parameters: Option<Vec<String>>,
    #[serde(default)]
    pub drgs: Option<Vec<String>>,
    #[serde(default)]
    pub fachabteilungen: Option<Vec<String>>,
}

impl FilterCriteria {
    /// No restriction on any dimension: passes every row.
    pub fn unrestricted() -> Self {
        Self::default()
    }

    pub fn matches(&self, row: &ObservationRow) -> bool {
        dimension_matches(&self.parameters, &row.parameter_name)
            && dimension_matches(&self.drgs, &row.drg)
            && dimension_matches(&self.fachabteilungen, &row.fachabteilung)
    }
}

/// An absent or empty restriction passes everything; a non-empty one
/// requires exact membership.
fn dimension_matches(allowed: &Option<Vec<String>>, value: &str) -> bool {
    match allowed {
        Some(values) if !values.is_empty() => values.iter().any(|v| v == value),
        _ => true,
    }
}
