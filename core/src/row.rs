//! Observation row model — one record per (parameter, DRG, department).
//!
//! Rows arrive precomputed from the upstream benchmark pipeline: the net
//! potential and its four lever components are inputs, never derived
//! here. Duplicate dimension triples are legitimate distinct rows; the
//! model enforces no key uniqueness. A loaded batch is immutable — the
//! engine only ever reads rows and allocates fresh output objects.
//!
//! Serde names follow the external JSON schema, which mixes snake_case
//! and camelCase; the camelCase fields carry explicit renames.

use crate::types::{Count, Euro};
use serde::{Deserialize, Serialize};

/// Ratio of gross reducible value to net value after the revenue-loss
/// offset from reduced billing volume. Domain constant, applied at row
/// and top-item level alike.
pub const GROSS_MARKUP_FACTOR: f64 = 1.35;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationRow {
    // Natural key: (parameter, DRG, department).
    pub parameter_name: String,
    pub drg: String,
    pub fachabteilung: String,

    // Observed volumes.
    pub faelle_kunde: Count,
    pub faelle_mit_anforderung_kunde: Count,
    pub multifaelle: Count,
    pub analysen: Count,

    /// Price per test result.
    pub befundpreis: Euro,

    // Primary ratio: tests per case, facility vs. reference.
    pub analysen_pro_fall_kunde: f64,
    pub analysen_pro_fall_benchmark: f64,

    // Lever metrics, facility vs. benchmark. The facility side of
    // MultiCaseRate, Frequenz and Span is nullable: None means "no
    // observation", which is not the same as zero.
    pub indikationsquote_kunde: f64,
    pub indikationsquote_benchmark: f64,
    #[serde(rename = "multiCaseRate")]
    pub multi_case_rate: Option<f64>,
    #[serde(rename = "multiCaseRate_benchmark")]
    pub multi_case_rate_benchmark: f64,
    pub frequenz_tage_kunde: Option<f64>,
    pub frequenz_tage_benchmark: f64,
    pub span_kunde: Option<f64>,
    pub span_benchmark: f64,

    // Precomputed potential: net reducible test count and its four
    // lever components.
    pub hauptpot_net_analysen: Count,
    pub pot_indikation_analysen: Count,
    #[serde(rename = "pot_multiCaseRate_analysen")]
    pub pot_multi_case_rate_analysen: Count,
    pub pot_frequenz_analysen: Count,
    #[serde(rename = "pot_spanDay_analysen")]
    pub pot_span_day_analysen: Count,

    // Precomputed row-level lever shares (0..=100). Independent of the
    // shares the engine recomputes for aggregates; the two may disagree
    // by rounding and are never reconciled.
    pub indikation_pct: f64,
    #[serde(rename = "multiCaseRate_pct")]
    pub multi_case_rate_pct: f64,
    pub frequenz_pct: f64,
    #[serde(rename = "monitorZeit_pct")]
    pub monitor_zeit_pct: f64,
}

impl ObservationRow {
    /// Net reducible value of this row in euros.
    pub fn net_euro(&self) -> Euro {
        self.hauptpot_net_analysen * self.befundpreis
    }

    /// Gross reducible value, before the revenue-loss offset.
    pub fn brutto_euro(&self) -> Euro {
        self.net_euro() * GROSS_MARKUP_FACTOR
    }

    /// Revenue lost by reducing billed test volume.
    pub fn erlosverlust_euro(&self) -> Euro {
        self.brutto_euro() - self.net_euro()
    }
}
