use labbench_core::dataset::{distinct_drgs, distinct_fachabteilungen, distinct_parameters};
use labbench_core::filter::FilterCriteria;
use labbench_core::fixture;
use labbench_core::row::ObservationRow;

// ── Helpers ──────────────────────────────────────────────────────────────────

fn row(parameter: &str, drg: &str, fachabteilung: &str) -> ObservationRow {
    ObservationRow {
        parameter_name: parameter.into(),
        drg: drg.into(),
        fachabteilung: fachabteilung.into(),
        faelle_kunde: 1.0,
        faelle_mit_anforderung_kunde: 1.0,
        multifaelle: 0.0,
        analysen: 1.0,
        befundpreis: 1.0,
        analysen_pro_fall_kunde: 1.0,
        analysen_pro_fall_benchmark: 1.0,
        indikationsquote_kunde: 100.0,
        indikationsquote_benchmark: 100.0,
        multi_case_rate: None,
        multi_case_rate_benchmark: 0.0,
        frequenz_tage_kunde: None,
        frequenz_tage_benchmark: 0.0,
        span_kunde: None,
        span_benchmark: 0.0,
        hauptpot_net_analysen: 0.0,
        pot_indikation_analysen: 0.0,
        pot_multi_case_rate_analysen: 0.0,
        pot_frequenz_analysen: 0.0,
        pot_span_day_analysen: 0.0,
        indikation_pct: 0.0,
        multi_case_rate_pct: 0.0,
        frequenz_pct: 0.0,
        monitor_zeit_pct: 0.0,
    }
}

fn some(values: &[&str]) -> Option<Vec<String>> {
    Some(values.iter().map(|v| v.to_string()).collect())
}

// ── Tests ────────────────────────────────────────────────────────────────────

/// Criteria without any restriction pass every row.
#[test]
fn unrestricted_passes_all() {
    let criteria = FilterCriteria::unrestricted();
    for r in fixture::demo_rows() {
        assert!(criteria.matches(&r));
    }
}

/// A restriction on one dimension leaves the others unrestricted.
#[test]
fn single_dimension_restricts() {
    let criteria = FilterCriteria {
        fachabteilungen: some(&["Kardiologie"]),
        ..FilterCriteria::default()
    };

    assert!(criteria.matches(&row("Kalium", "801A", "Kardiologie")));
    assert!(!criteria.matches(&row("Kalium", "801A", "Nephrologie")));
}

/// Within a dimension, any listed value matches (membership OR).
#[test]
fn or_within_dimension() {
    let criteria = FilterCriteria {
        drgs: some(&["801A", "803B"]),
        ..FilterCriteria::default()
    };

    assert!(criteria.matches(&row("Kalium", "801A", "Nephrologie")));
    assert!(criteria.matches(&row("Kalium", "803B", "Nephrologie")));
    assert!(!criteria.matches(&row("Kalium", "801B", "Nephrologie")));
}

/// Across dimensions, every restricted dimension must match (AND).
#[test]
fn and_across_dimensions() {
    let criteria = FilterCriteria {
        parameters: some(&["Kalium"]),
        fachabteilungen: some(&["Nephrologie"]),
        ..FilterCriteria::default()
    };

    assert!(criteria.matches(&row("Kalium", "801A", "Nephrologie")));
    assert!(!criteria.matches(&row("Kalium", "801A", "Kardiologie")));
    assert!(!criteria.matches(&row("Laktat", "801A", "Nephrologie")));
}

/// An empty value list behaves like an absent restriction.
#[test]
fn empty_list_is_unrestricted() {
    let criteria = FilterCriteria {
        parameters: Some(vec![]),
        ..FilterCriteria::default()
    };

    assert!(criteria.matches(&row("Kalium", "801A", "Nephrologie")));
}

/// Matching is exact: case and whitespace are significant.
#[test]
fn matching_is_exact() {
    let criteria = FilterCriteria {
        fachabteilungen: some(&["Kardiologie"]),
        ..FilterCriteria::default()
    };

    assert!(!criteria.matches(&row("Kalium", "801A", "kardiologie")));
    assert!(!criteria.matches(&row("Kalium", "801A", "Kardiologie ")));
}

/// Distinct-value helpers deduplicate in first-seen order.
#[test]
fn distinct_values_keep_first_seen_order() {
    let rows = vec![
        row("Kalium", "801A", "Nephrologie"),
        row("Laktat", "801B", "Kardiologie"),
        row("Kalium", "801A", "Nephrologie"),
        row("CRP (C-reaktives Protein)", "801A", "Geriatrie"),
    ];

    assert_eq!(
        distinct_parameters(&rows),
        ["Kalium", "Laktat", "CRP (C-reaktives Protein)"]
    );
    assert_eq!(distinct_drgs(&rows), ["801A", "801B"]);
    assert_eq!(
        distinct_fachabteilungen(&rows),
        ["Nephrologie", "Kardiologie", "Geriatrie"]
    );
}

/// The demo batch exposes the expected filter choices.
#[test]
fn demo_batch_distinct_counts() {
    let rows = fixture::demo_rows();

    let parameters = distinct_parameters(&rows);
    assert_eq!(parameters.len(), 7);
    assert_eq!(parameters[0], "Procalcitonin, immunologisch");

    assert_eq!(distinct_drgs(&rows).len(), 7);
    assert_eq!(distinct_fachabteilungen(&rows).len(), 8);
}
