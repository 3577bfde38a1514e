//! Embedded demo data and deterministic synthetic generation.
//!
//! `demo_rows` is the reference batch used by the runner when no data
//! file is given; its values mirror the upstream demo extract, rounded
//! row-level shares included. `synthetic_rows` produces arbitrarily
//! large schema-consistent batches from curated dimension lists — all
//! draws flow through a seeded `DataRng`, so the same seed yields the
//! same batch.

use crate::rng::DataRng;
use crate::row::ObservationRow;
use crate::types::Count;

// ── Demo batch ───────────────────────────────────────────────────────────────

/// The embedded twelve-row reference batch.
pub fn demo_rows() -> Vec<ObservationRow> {
    vec![
        ObservationRow {
            parameter_name: "Procalcitonin, immunologisch".into(),
            drg: "801A".into(),
            fachabteilung: "Nephrologie".into(),
            faelle_kunde: 1.0, faelle_mit_anforderung_kunde: 1.0, multifaelle: 1.0,
            analysen: 3.0, befundpreis: 8.44,
            analysen_pro_fall_kunde: 3.0, analysen_pro_fall_benchmark: 3.0,
            indikationsquote_kunde: 100.0, indikationsquote_benchmark: 100.0,
            frequenz_tage_kunde: Some(4.11), frequenz_tage_benchmark: 4.11,
            multi_case_rate: Some(1.0), multi_case_rate_benchmark: 1.0,
            span_kunde: Some(8.23), span_benchmark: 8.23,
            hauptpot_net_analysen: 0.0, pot_indikation_analysen: 0.0,
            pot_multi_case_rate_analysen: 0.0, pot_frequenz_analysen: 0.0,
            pot_span_day_analysen: 0.0,
            indikation_pct: 0.0, multi_case_rate_pct: 0.0, frequenz_pct: 0.0,
            monitor_zeit_pct: 0.0,
        },
        ObservationRow {
            parameter_name: "Procalcitonin, immunologisch".into(),
            drg: "801B".into(),
            fachabteilung: "Allgemeine Chirurgie".into(),
            faelle_kunde: 2.0, faelle_mit_anforderung_kunde: 1.0, multifaelle: 1.0,
            analysen: 3.0, befundpreis: 8.44,
            analysen_pro_fall_kunde: 1.5, analysen_pro_fall_benchmark: 1.0,
            indikationsquote_kunde: 50.0, indikationsquote_benchmark: 50.0,
            frequenz_tage_kunde: Some(1.01), frequenz_tage_benchmark: 1.01,
            multi_case_rate: Some(0.5), multi_case_rate_benchmark: 0.333,
            span_kunde: Some(2.01), span_benchmark: 2.01,
            hauptpot_net_analysen: 1.0, pot_indikation_analysen: 0.0,
            pot_multi_case_rate_analysen: 0.5, pot_frequenz_analysen: 0.0,
            pot_span_day_analysen: 0.0,
            indikation_pct: 0.0, multi_case_rate_pct: 100.0, frequenz_pct: 0.0,
            monitor_zeit_pct: 0.0,
        },
        ObservationRow {
            parameter_name: "Procalcitonin, immunologisch".into(),
            drg: "801C".into(),
            fachabteilung: "Neurochirurgie".into(),
            faelle_kunde: 1.0, faelle_mit_anforderung_kunde: 1.0, multifaelle: 1.0,
            analysen: 2.0, befundpreis: 8.44,
            analysen_pro_fall_kunde: 2.0, analysen_pro_fall_benchmark: 1.0,
            indikationsquote_kunde: 100.0, indikationsquote_benchmark: 66.67,
            frequenz_tage_kunde: Some(0.95), frequenz_tage_benchmark: 0.95,
            multi_case_rate: Some(1.0), multi_case_rate_benchmark: 0.5,
            span_kunde: Some(0.95), span_benchmark: 0.95,
            hauptpot_net_analysen: 1.0, pot_indikation_analysen: 0.33,
            pot_multi_case_rate_analysen: 1.0, pot_frequenz_analysen: 0.0,
            pot_span_day_analysen: 0.0,
            indikation_pct: 14.0, multi_case_rate_pct: 86.0, frequenz_pct: 0.0,
            monitor_zeit_pct: 0.0,
        },
        ObservationRow {
            parameter_name: "Procalcitonin, immunologisch".into(),
            drg: "801D".into(),
            fachabteilung: "Kardiologie".into(),
            faelle_kunde: 1.0, faelle_mit_anforderung_kunde: 1.0, multifaelle: 1.0,
            analysen: 2.0, befundpreis: 8.44,
            analysen_pro_fall_kunde: 2.0, analysen_pro_fall_benchmark: 0.69,
            indikationsquote_kunde: 100.0, indikationsquote_benchmark: 50.0,
            frequenz_tage_kunde: Some(6.68), frequenz_tage_benchmark: 4.63,
            multi_case_rate: Some(1.0), multi_case_rate_benchmark: 0.231,
            span_kunde: Some(6.68), span_benchmark: 4.63,
            hauptpot_net_analysen: 1.31, pot_indikation_analysen: 0.5,
            pot_multi_case_rate_analysen: 1.54, pot_frequenz_analysen: 0.0,
            pot_span_day_analysen: 0.31,
            indikation_pct: 7.0, multi_case_rate_pct: 89.0, frequenz_pct: 0.0,
            monitor_zeit_pct: 4.0,
        },
        ObservationRow {
            parameter_name: "Procalcitonin, immunologisch".into(),
            drg: "801D".into(),
            fachabteilung: "Pneumologie".into(),
            faelle_kunde: 1.0, faelle_mit_anforderung_kunde: 1.0, multifaelle: 1.0,
            analysen: 2.0, befundpreis: 8.44,
            analysen_pro_fall_kunde: 2.0, analysen_pro_fall_benchmark: 0.69,
            indikationsquote_kunde: 100.0, indikationsquote_benchmark: 50.0,
            frequenz_tage_kunde: Some(6.7), frequenz_tage_benchmark: 4.63,
            multi_case_rate: Some(1.0), multi_case_rate_benchmark: 0.231,
            span_kunde: Some(6.7), span_benchmark: 4.63,
            hauptpot_net_analysen: 1.31, pot_indikation_analysen: 0.5,
            pot_multi_case_rate_analysen: 1.54, pot_frequenz_analysen: 0.0,
            pot_span_day_analysen: 0.31,
            indikation_pct: 7.0, multi_case_rate_pct: 89.0, frequenz_pct: 0.0,
            monitor_zeit_pct: 4.0,
        },
        ObservationRow {
            parameter_name: "CRP (C-reaktives Protein)".into(),
            drg: "801A".into(),
            fachabteilung: "Innere Medizin".into(),
            faelle_kunde: 320.0, faelle_mit_anforderung_kunde: 280.0, multifaelle: 195.0,
            analysen: 1420.0, befundpreis: 3.50,
            analysen_pro_fall_kunde: 4.44, analysen_pro_fall_benchmark: 2.80,
            indikationsquote_kunde: 87.5, indikationsquote_benchmark: 72.0,
            frequenz_tage_kunde: Some(1.2), frequenz_tage_benchmark: 1.8,
            multi_case_rate: Some(0.696), multi_case_rate_benchmark: 0.52,
            span_kunde: Some(5.4), span_benchmark: 4.1,
            hauptpot_net_analysen: 524.0, pot_indikation_analysen: 89.0,
            pot_multi_case_rate_analysen: 210.0, pot_frequenz_analysen: 145.0,
            pot_span_day_analysen: 80.0,
            indikation_pct: 17.0, multi_case_rate_pct: 40.0, frequenz_pct: 28.0,
            monitor_zeit_pct: 15.0,
        },
        ObservationRow {
            parameter_name: "CRP (C-reaktives Protein)".into(),
            drg: "801B".into(),
            fachabteilung: "Allgemeine Chirurgie".into(),
            faelle_kunde: 180.0, faelle_mit_anforderung_kunde: 150.0, multifaelle: 98.0,
            analysen: 720.0, befundpreis: 3.50,
            analysen_pro_fall_kunde: 4.0, analysen_pro_fall_benchmark: 2.50,
            indikationsquote_kunde: 83.0, indikationsquote_benchmark: 65.0,
            frequenz_tage_kunde: Some(1.4), frequenz_tage_benchmark: 2.0,
            multi_case_rate: Some(0.653), multi_case_rate_benchmark: 0.45,
            span_kunde: Some(4.8), span_benchmark: 3.5,
            hauptpot_net_analysen: 270.0, pot_indikation_analysen: 54.0,
            pot_multi_case_rate_analysen: 108.0, pot_frequenz_analysen: 68.0,
            pot_span_day_analysen: 40.0,
            indikation_pct: 20.0, multi_case_rate_pct: 40.0, frequenz_pct: 25.0,
            monitor_zeit_pct: 15.0,
        },
        ObservationRow {
            parameter_name: "TSH (Thyreotropin)".into(),
            drg: "802A".into(),
            fachabteilung: "Endokrinologie".into(),
            faelle_kunde: 95.0, faelle_mit_anforderung_kunde: 90.0, multifaelle: 12.0,
            analysen: 142.0, befundpreis: 5.80,
            analysen_pro_fall_kunde: 1.49, analysen_pro_fall_benchmark: 1.10,
            indikationsquote_kunde: 94.7, indikationsquote_benchmark: 78.0,
            frequenz_tage_kunde: Some(3.2), frequenz_tage_benchmark: 5.0,
            multi_case_rate: Some(0.133), multi_case_rate_benchmark: 0.08,
            span_kunde: Some(3.8), span_benchmark: 3.2,
            hauptpot_net_analysen: 37.0, pot_indikation_analysen: 18.0,
            pot_multi_case_rate_analysen: 8.0, pot_frequenz_analysen: 7.0,
            pot_span_day_analysen: 4.0,
            indikation_pct: 49.0, multi_case_rate_pct: 22.0, frequenz_pct: 19.0,
            monitor_zeit_pct: 10.0,
        },
        ObservationRow {
            parameter_name: "Troponin T, hochsensitiv".into(),
            drg: "803A".into(),
            fachabteilung: "Kardiologie".into(),
            faelle_kunde: 210.0, faelle_mit_anforderung_kunde: 195.0, multifaelle: 160.0,
            analysen: 980.0, befundpreis: 12.20,
            analysen_pro_fall_kunde: 4.67, analysen_pro_fall_benchmark: 3.10,
            indikationsquote_kunde: 92.9, indikationsquote_benchmark: 85.0,
            frequenz_tage_kunde: Some(0.8), frequenz_tage_benchmark: 1.2,
            multi_case_rate: Some(0.821), multi_case_rate_benchmark: 0.62,
            span_kunde: Some(3.2), span_benchmark: 2.5,
            hauptpot_net_analysen: 329.0, pot_indikation_analysen: 33.0,
            pot_multi_case_rate_analysen: 148.0, pot_frequenz_analysen: 99.0,
            pot_span_day_analysen: 49.0,
            indikation_pct: 10.0, multi_case_rate_pct: 45.0, frequenz_pct: 30.0,
            monitor_zeit_pct: 15.0,
        },
        ObservationRow {
            parameter_name: "Kalium".into(),
            drg: "801A".into(),
            fachabteilung: "Nephrologie".into(),
            faelle_kunde: 280.0, faelle_mit_anforderung_kunde: 270.0, multifaelle: 230.0,
            analysen: 2100.0, befundpreis: 1.10,
            analysen_pro_fall_kunde: 7.5, analysen_pro_fall_benchmark: 5.2,
            indikationsquote_kunde: 96.4, indikationsquote_benchmark: 90.0,
            frequenz_tage_kunde: Some(0.6), frequenz_tage_benchmark: 0.9,
            multi_case_rate: Some(0.852), multi_case_rate_benchmark: 0.75,
            span_kunde: Some(7.1), span_benchmark: 5.8,
            hauptpot_net_analysen: 644.0, pot_indikation_analysen: 45.0,
            pot_multi_case_rate_analysen: 193.0, pot_frequenz_analysen: 258.0,
            pot_span_day_analysen: 148.0,
            indikation_pct: 7.0, multi_case_rate_pct: 30.0, frequenz_pct: 40.0,
            monitor_zeit_pct: 23.0,
        },
        ObservationRow {
            parameter_name: "Laktat".into(),
            drg: "801C".into(),
            fachabteilung: "Intensivmedizin".into(),
            faelle_kunde: 150.0, faelle_mit_anforderung_kunde: 140.0, multifaelle: 120.0,
            analysen: 840.0, befundpreis: 2.80,
            analysen_pro_fall_kunde: 5.6, analysen_pro_fall_benchmark: 3.8,
            indikationsquote_kunde: 93.3, indikationsquote_benchmark: 80.0,
            frequenz_tage_kunde: Some(0.5), frequenz_tage_benchmark: 0.8,
            multi_case_rate: Some(0.857), multi_case_rate_benchmark: 0.65,
            span_kunde: Some(4.2), span_benchmark: 3.0,
            hauptpot_net_analysen: 270.0, pot_indikation_analysen: 35.0,
            pot_multi_case_rate_analysen: 108.0, pot_frequenz_analysen: 81.0,
            pot_span_day_analysen: 46.0,
            indikation_pct: 13.0, multi_case_rate_pct: 40.0, frequenz_pct: 30.0,
            monitor_zeit_pct: 17.0,
        },
        ObservationRow {
            parameter_name: "NT-proBNP".into(),
            drg: "803B".into(),
            fachabteilung: "Kardiologie".into(),
            faelle_kunde: 175.0, faelle_mit_anforderung_kunde: 160.0, multifaelle: 85.0,
            analysen: 410.0, befundpreis: 15.60,
            analysen_pro_fall_kunde: 2.34, analysen_pro_fall_benchmark: 1.60,
            indikationsquote_kunde: 91.4, indikationsquote_benchmark: 75.0,
            frequenz_tage_kunde: Some(2.8), frequenz_tage_benchmark: 4.0,
            multi_case_rate: Some(0.531), multi_case_rate_benchmark: 0.38,
            span_kunde: Some(5.6), span_benchmark: 4.2,
            hauptpot_net_analysen: 130.0, pot_indikation_analysen: 36.0,
            pot_multi_case_rate_analysen: 46.0, pot_frequenz_analysen: 30.0,
            pot_span_day_analysen: 18.0,
            indikation_pct: 28.0, multi_case_rate_pct: 35.0, frequenz_pct: 23.0,
            monitor_zeit_pct: 14.0,
        },
    ]
}

// ── Synthetic batches ────────────────────────────────────────────────────────

const PARAMETERS: &[&str] = &[
    "Procalcitonin, immunologisch",
    "CRP (C-reaktives Protein)",
    "TSH (Thyreotropin)",
    "Troponin T, hochsensitiv",
    "Kalium",
    "Natrium",
    "Kreatinin",
    "Harnstoff",
    "Laktat",
    "NT-proBNP",
    "D-Dimere",
    "Lipase",
    "GGT (Gamma-GT)",
    "Ferritin",
    "Leukozyten",
    "Haemoglobin",
];

const DRGS: &[&str] = &[
    "801A", "801B", "801C", "801D", "802A", "802B", "803A", "803B", "804A", "805A", "F62B",
    "G67C",
];

const FACHABTEILUNGEN: &[&str] = &[
    "Nephrologie",
    "Allgemeine Chirurgie",
    "Neurochirurgie",
    "Kardiologie",
    "Pneumologie",
    "Innere Medizin",
    "Endokrinologie",
    "Intensivmedizin",
    "Gastroenterologie",
    "Unfallchirurgie",
    "Geriatrie",
    "Onkologie",
];

/// Generate `n` schema-consistent rows deterministically from `seed`.
pub fn synthetic_rows(seed: u64, n: usize) -> Vec<ObservationRow> {
    let mut rng = DataRng::new(seed);
    (0..n).map(|_| synthetic_row(&mut rng)).collect()
}

fn synthetic_row(rng: &mut DataRng) -> ObservationRow {
    let parameter_name = pick(rng, PARAMETERS).to_string();
    let drg = pick(rng, DRGS).to_string();
    let fachabteilung = pick(rng, FACHABTEILUNGEN).to_string();

    let faelle_kunde = (rng.next_u64_below(400) + 1) as Count;
    let indikationsquote_benchmark = rng.range_f64(40.0, 95.0);
    let indikationsquote_kunde =
        (indikationsquote_benchmark * rng.range_f64(0.9, 1.4)).min(100.0);
    let faelle_mit_anforderung_kunde = (faelle_kunde * indikationsquote_kunde / 100.0).round();

    let analysen_pro_fall_benchmark = rng.range_f64(0.5, 5.0);
    let analysen = (faelle_kunde * analysen_pro_fall_benchmark * rng.range_f64(0.85, 1.9)).round();
    // Store the ratio the rounded volume actually implies.
    let analysen_pro_fall_kunde = analysen / faelle_kunde;

    let multifaelle = (faelle_mit_anforderung_kunde * rng.range_f64(0.1, 0.9)).round();
    let befundpreis = rng.range_f64(1.0, 18.0);

    // Monitoring metrics only exist where repeat orders were observed.
    // Frequenz runs below benchmark (more frequent = worse), Span above
    // (longer monitoring = worse).
    let has_monitoring = multifaelle > 0.0;
    let multi_case_rate_benchmark = rng.range_f64(0.05, 0.8);
    let multi_case_rate = if has_monitoring && faelle_mit_anforderung_kunde > 0.0 {
        Some((multifaelle / faelle_mit_anforderung_kunde).min(1.0))
    } else {
        None
    };
    let frequenz_tage_benchmark = rng.range_f64(0.5, 6.0);
    let frequenz_tage_kunde = if has_monitoring {
        Some(frequenz_tage_benchmark * rng.range_f64(0.5, 1.1))
    } else {
        None
    };
    let span_benchmark = rng.range_f64(1.0, 8.0);
    let span_kunde = if has_monitoring {
        Some(span_benchmark * rng.range_f64(0.9, 1.8))
    } else {
        None
    };

    // Net potential: excess over benchmark volume, net of the revenue
    // offset, split across the four levers. Components sum to the net
    // total by construction.
    let excess = (analysen - faelle_kunde * analysen_pro_fall_benchmark).max(0.0);
    let hauptpot_net_analysen = excess * rng.range_f64(0.5, 0.9);
    let weights = [
        rng.next_f64(),
        rng.next_f64(),
        rng.next_f64(),
        rng.next_f64(),
    ];
    let weight_sum: f64 = weights.iter().sum();
    let component = |i: usize| {
        if weight_sum > 0.0 {
            hauptpot_net_analysen * weights[i] / weight_sum
        } else {
            0.0
        }
    };
    let share = |i: usize| {
        if hauptpot_net_analysen > 0.0 {
            component(i) / hauptpot_net_analysen * 100.0
        } else {
            0.0
        }
    };

    ObservationRow {
        parameter_name,
        drg,
        fachabteilung,
        faelle_kunde,
        faelle_mit_anforderung_kunde,
        multifaelle,
        analysen,
        befundpreis,
        analysen_pro_fall_kunde,
        analysen_pro_fall_benchmark,
        indikationsquote_kunde,
        indikationsquote_benchmark,
        multi_case_rate,
        multi_case_rate_benchmark,
        frequenz_tage_kunde,
        frequenz_tage_benchmark,
        span_kunde,
        span_benchmark,
        hauptpot_net_analysen,
        pot_indikation_analysen: component(0),
        pot_multi_case_rate_analysen: component(1),
        pot_frequenz_analysen: component(2),
        pot_span_day_analysen: component(3),
        indikation_pct: share(0),
        multi_case_rate_pct: share(1),
        frequenz_pct: share(2),
        monitor_zeit_pct: share(3),
    }
}

fn pick<'a>(rng: &mut DataRng, values: &[&'a str]) -> &'a str {
    values[rng.next_u64_below(values.len() as u64) as usize]
}
