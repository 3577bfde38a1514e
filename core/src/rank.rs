//! Ranker — ordered top-N rollups by parameter, department or DRG.
//!
//! Operates on an already-filtered row set: filtering happens once
//! upstream with the same criteria the Aggregator saw, not in here.
//! One generic grouping routine backs all three dimensions so the
//! weighting and rounding rules cannot drift apart.
//!
//! Groups form by exact string value (case-sensitive, whitespace
//! significant) in encounter order; the sort is stable, so groups with
//! equal potential keep that order.

use crate::{
    lever::Lever,
    row::{ObservationRow, GROSS_MARKUP_FACTOR},
    types::{Count, Euro},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const DEFAULT_TOP_LIMIT: usize = 10;

/// One ranked entity: a distinct value of the grouping dimension with
/// its aggregated potential and lever shares.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopItem {
    pub name: String,
    /// Net potential in test counts, summed over the group's rows.
    pub potential_analysen: Count,
    /// Net potential scaled by the group's mean unit price.
    pub potential_euro: Euro,
    /// Observed test volume of the group.
    pub current_analysen: Count,
    /// Potential as a fraction of observed volume.
    pub share: f64,
    pub indikation_pct: f64,
    pub multi_case_rate_pct: f64,
    pub frequenz_pct: f64,
    pub monitor_zeit_pct: f64,
}

impl TopItem {
    /// Gross reducible value, before the revenue-loss offset.
    pub fn brutto_euro(&self) -> Euro {
        self.potential_euro * GROSS_MARKUP_FACTOR
    }

    /// Revenue lost by reducing billed test volume.
    pub fn erlosverlust_euro(&self) -> Euro {
        self.brutto_euro() - self.potential_euro
    }
}

pub fn top_parameters(rows: &[ObservationRow], limit: usize) -> Vec<TopItem> {
    top_by_dimension(rows, limit, |r| &r.parameter_name)
}

pub fn top_fachabteilungen(rows: &[ObservationRow], limit: usize) -> Vec<TopItem> {
    top_by_dimension(rows, limit, |r| &r.fachabteilung)
}

pub fn top_drgs(rows: &[ObservationRow], limit: usize) -> Vec<TopItem> {
    top_by_dimension(rows, limit, |r| &r.drg)
}

#[derive(Default)]
struct GroupAccumulator {
    potential: Count,
    analysen: Count,
    preis_sum: Euro,
    row_count: usize,
    lever_pot: [Count; 4],
}

fn top_by_dimension<'a, F>(rows: &'a [ObservationRow], limit: usize, key: F) -> Vec<TopItem>
where
    F: Fn(&'a ObservationRow) -> &'a str,
{
    assert!(limit > 0, "top-N limit must be positive");

    // Encounter-ordered grouping: the map only locates the slot, the
    // vecs preserve first-seen order for stable ties.
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut names: Vec<&str> = Vec::new();
    let mut groups: Vec<GroupAccumulator> = Vec::new();

    for row in rows {
        let name = key(row);
        let slot = *slots.entry(name).or_insert_with(|| {
            names.push(name);
            groups.push(GroupAccumulator::default());
            groups.len() - 1
        });
        let acc = &mut groups[slot];
        acc.potential += row.hauptpot_net_analysen;
        acc.analysen += row.analysen;
        acc.preis_sum += row.befundpreis;
        acc.row_count += 1;
        for (i, lever) in Lever::ALL.iter().enumerate() {
            acc.lever_pot[i] += lever.potential(row);
        }
    }

    let mut items: Vec<TopItem> = names
        .iter()
        .zip(&groups)
        .map(|(name, acc)| {
            // A group exists only because at least one row hit it.
            let mean_preis = acc.preis_sum / acc.row_count as f64;
            let lever_total: Count = acc.lever_pot.iter().sum();
            let pct = |i: usize| {
                if lever_total > 0.0 {
                    acc.lever_pot[i] / lever_total * 100.0
                } else {
                    0.0
                }
            };
            TopItem {
                name: (*name).to_string(),
                potential_analysen: acc.potential,
                potential_euro: acc.potential * mean_preis,
                current_analysen: acc.analysen,
                share: if acc.analysen > 0.0 {
                    acc.potential / acc.analysen
                } else {
                    0.0
                },
                indikation_pct: pct(0),
                multi_case_rate_pct: pct(1),
                frequenz_pct: pct(2),
                monitor_zeit_pct: pct(3),
            }
        })
        .collect();

    // Vec::sort_by is stable: equal potentials keep encounter order.
    items.sort_by(|a, b| {
        b.potential_analysen
            .partial_cmp(&a.potential_analysen)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    items.truncate(limit);
    items
}
