use labbench_core::rank::top_fachabteilungen;
use labbench_core::row::{ObservationRow, GROSS_MARKUP_FACTOR};

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

// ── Tests ────────────────────────────────────────────────────────────────────

/// Befundpreis 8.44 and net potential 1.31 give net ≈ 11.06 EUR,
/// gross ≈ 14.93 EUR, revenue loss ≈ 3.87 EUR.
#[test]
fn row_financial_projection_scenario() {
    let mut r = row("Procalcitonin, immunologisch", "801D", "Kardiologie");
    r.befundpreis = 8.44;
    r.hauptpot_net_analysen = 1.31;

    assert!((r.net_euro() - 11.0564).abs() < 1e-9);
    assert!((r.brutto_euro() - 14.92614).abs() < 1e-9);
    assert!((r.erlosverlust_euro() - 3.86974).abs() < 1e-9);
}

/// Revenue loss is exactly gross minus net, i.e. net × 0.35 under the
/// fixed markup.
#[test]
fn erlosverlust_is_gross_minus_net() {
    let mut r = row("Kalium", "801A", "Nephrologie");
    r.befundpreis = 1.10;
    r.hauptpot_net_analysen = 644.0;

    let expected = r.net_euro() * (GROSS_MARKUP_FACTOR - 1.0);
    assert!((r.erlosverlust_euro() - expected).abs() < 1e-9);
    assert!((r.brutto_euro() - r.net_euro() - r.erlosverlust_euro()).abs() < 1e-9);
}

/// A row with zero potential projects zero across the whole family.
#[test]
fn zero_potential_projects_zero() {
    let mut r = row("Kalium", "801A", "Nephrologie");
    r.befundpreis = 9.99;
    r.hauptpot_net_analysen = 0.0;

    assert_eq!(r.net_euro(), 0.0);
    assert_eq!(r.brutto_euro(), 0.0);
    assert_eq!(r.erlosverlust_euro(), 0.0);
}

/// The same formula family applies at top-item level, seeded from the
/// item's aggregate potential and group mean price.
#[test]
fn top_item_financial_family() {
    let mut a = row("Kalium", "801A", "Kardiologie");
    a.befundpreis = 8.0;
    a.hauptpot_net_analysen = 2.0;
    let mut b = row("Laktat", "801B", "Kardiologie");
    b.befundpreis = 12.0;
    b.hauptpot_net_analysen = 3.0;

    let items = top_fachabteilungen(&[a, b], 10);
    let item = &items[0];

    // potential 5 × mean price 10 = 50 net
    assert!((item.potential_euro - 50.0).abs() < 1e-9);
    assert!((item.brutto_euro() - 67.5).abs() < 1e-9);
    assert!((item.erlosverlust_euro() - 17.5).abs() < 1e-9);
}
