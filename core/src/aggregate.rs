//! Aggregator — one filtered summary with four sub-benchmark blocks.
//!
//! `aggregate` reduces an observation batch to:
//!   1. Volume totals (analyses, cases) over the filtered rows
//!   2. The volume-weighted facility ratio vs. the case-weighted
//!      benchmark ratio
//!   3. The net potential, in test counts and euros
//!   4. Four lever blocks: potential sum, share of the four-lever
//!      total, and mean facility/benchmark metric values
//!
//! Every division guards the zero denominator and substitutes 0. An
//! empty filtered set yields an all-zero summary, never an error —
//! "no data for this selection" is a meaningful result.

use crate::{
    filter::FilterCriteria,
    lever::Lever,
    row::ObservationRow,
    types::{Count, Euro},
};
use serde::{Deserialize, Serialize};

/// One lever's slice of the aggregated potential.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubBenchmark {
    /// Potential analyses attributable to this lever.
    pub analysen: Count,
    /// Share of the four-lever total, 0..=100.
    pub pct: f64,
    /// Mean facility metric over rows carrying an observation.
    pub kunde: f64,
    /// Mean benchmark metric over the filtered rows.
    pub benchmark: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregatedBenchmark {
    pub analysen_pro_fall_kunde: f64,
    pub analysen_pro_fall_benchmark: f64,
    pub hauptpot_net_analysen: Count,
    pub hauptpot_net_euro: Euro,
    pub total_analysen: Count,
    pub total_faelle: Count,
    pub indikation: SubBenchmark,
    pub multi_case_rate: SubBenchmark,
    pub frequenz: SubBenchmark,
    pub monitor_zeit: SubBenchmark,
}

impl AggregatedBenchmark {
    pub fn sub(&self, lever: Lever) -> &SubBenchmark {
        match lever {
            Lever::Indikation => &self.indikation,
            Lever::MultiCaseRate => &self.multi_case_rate,
            Lever::Frequenz => &self.frequenz,
            Lever::Monitorzeit => &self.monitor_zeit,
        }
    }
}

/// Filter `rows` by `criteria` and reduce to one summary.
pub fn aggregate(rows: &[ObservationRow], criteria: &FilterCriteria) -> AggregatedBenchmark {
    let filtered: Vec<&ObservationRow> = rows.iter().filter(|r| criteria.matches(r)).collect();

    let total_analysen: Count = filtered.iter().map(|r| r.analysen).sum();
    let total_faelle: Count = filtered.iter().map(|r| r.faelle_kunde).sum();

    // The facility ratio is volume-weighted by construction; the
    // benchmark ratio must be weighted by the same case denominator to
    // stay comparable. NOT the mean of per-row ratios.
    let analysen_pro_fall_kunde = if total_faelle > 0.0 {
        total_analysen / total_faelle
    } else {
        0.0
    };
    let weighted_benchmark: f64 = filtered
        .iter()
        .map(|r| r.analysen_pro_fall_benchmark * r.faelle_kunde)
        .sum();
    let analysen_pro_fall_benchmark = if total_faelle > 0.0 {
        weighted_benchmark / total_faelle
    } else {
        0.0
    };

    let hauptpot_net_analysen: Count = filtered.iter().map(|r| r.hauptpot_net_analysen).sum();

    // Unit price enters as a simple mean over rows, not volume-weighted.
    let avg_preis = if filtered.is_empty() {
        0.0
    } else {
        filtered.iter().map(|r| r.befundpreis).sum::<Euro>() / filtered.len() as f64
    };
    let hauptpot_net_euro = hauptpot_net_analysen * avg_preis;

    let pot_total: Count = Lever::ALL
        .iter()
        .map(|lever| filtered.iter().map(|r| lever.potential(r)).sum::<Count>())
        .sum();

    let sub = |lever: Lever| -> SubBenchmark {
        let analysen: Count = filtered.iter().map(|r| lever.potential(r)).sum();
        let pct = if pot_total > 0.0 {
            analysen / pot_total * 100.0
        } else {
            0.0
        };
        let scale = lever.display_scale();
        SubBenchmark {
            analysen,
            pct,
            kunde: mean_present(filtered.iter().map(|r| lever.kunde(r))) * scale,
            benchmark: mean_present(filtered.iter().map(|r| Some(lever.benchmark(r)))) * scale,
        }
    };

    log::debug!(
        "aggregated {} of {} rows: potential {:.1} analyses / {:.2} EUR",
        filtered.len(),
        rows.len(),
        hauptpot_net_analysen,
        hauptpot_net_euro,
    );

    AggregatedBenchmark {
        analysen_pro_fall_kunde,
        analysen_pro_fall_benchmark,
        hauptpot_net_analysen,
        hauptpot_net_euro,
        total_analysen,
        total_faelle,
        indikation: sub(Lever::Indikation),
        multi_case_rate: sub(Lever::MultiCaseRate),
        frequenz: sub(Lever::Frequenz),
        monitor_zeit: sub(Lever::Monitorzeit),
    }
}

/// Arithmetic mean over the present values, skipping None. All-null
/// (or empty) input yields 0 — never a NaN.
fn mean_present<I>(values: I) -> f64
where
    I: Iterator<Item = Option<f64>>,
{
    let mut sum = 0.0;
    let mut n = 0u32;
    for value in values.flatten() {
        sum += value;
        n += 1;
    }
    if n > 0 {
        sum / n as f64
    } else {
        0.0
    }
}
