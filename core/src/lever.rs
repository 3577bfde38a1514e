//! The four explanatory levers of the benchmark gap.
//!
//! Every net potential decomposes into Indikation (whether a test is
//! ordered at all), MultiCaseRate (how many tested cases recur into
//! monitoring), Frequenz (days between repeat orders — lower is worse)
//! and Monitorzeit (days a case stays monitored — higher is worse).
//!
//! The engine iterates the fixed set uniformly through this enum.
//! Labels, colors and units are a presentation concern and live with
//! the caller.

use crate::row::ObservationRow;
use crate::types::Count;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lever {
    Indikation,
    MultiCaseRate,
    Frequenz,
    Monitorzeit,
}

impl Lever {
    /// All levers in decomposition order. NEVER reorder — aggregate
    /// outputs and reports list lever blocks in this order.
    pub const ALL: [Lever; 4] = [
        Lever::Indikation,
        Lever::MultiCaseRate,
        Lever::Frequenz,
        Lever::Monitorzeit,
    ];

    /// Stable name for logs and diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Indikation => "indikation",
            Self::MultiCaseRate => "multi_case_rate",
            Self::Frequenz => "frequenz",
            Self::Monitorzeit => "monitorzeit",
        }
    }

    /// The row's precomputed potential component for this lever.
    pub fn potential(&self, row: &ObservationRow) -> Count {
        match self {
            Self::Indikation => row.pot_indikation_analysen,
            Self::MultiCaseRate => row.pot_multi_case_rate_analysen,
            Self::Frequenz => row.pot_frequenz_analysen,
            Self::Monitorzeit => row.pot_span_day_analysen,
        }
    }

    /// Facility-side metric. None means the row carries no observation
    /// for this lever; means must skip it, not coerce it to zero.
    pub fn kunde(&self, row: &ObservationRow) -> Option<f64> {
        match self {
            Self::Indikation => Some(row.indikationsquote_kunde),
            Self::MultiCaseRate => row.multi_case_rate,
            Self::Frequenz => row.frequenz_tage_kunde,
            Self::Monitorzeit => row.span_kunde,
        }
    }

    /// Benchmark-side metric. Always observed.
    pub fn benchmark(&self, row: &ObservationRow) -> f64 {
        match self {
            Self::Indikation => row.indikationsquote_benchmark,
            Self::MultiCaseRate => row.multi_case_rate_benchmark,
            Self::Frequenz => row.frequenz_tage_benchmark,
            Self::Monitorzeit => row.span_benchmark,
        }
    }

    /// Scale applied to mean metric values for display. MultiCaseRate
    /// is stored as a fraction and reported as a percentage.
    pub fn display_scale(&self) -> f64 {
        match self {
            Self::MultiCaseRate => 100.0,
            _ => 1.0,
        }
    }
}
