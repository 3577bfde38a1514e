//! bench-runner: headless benchmarking report for LabBench.
//!
//! Usage:
//!   bench-runner --data rows.json --fachabteilung Kardiologie --top 5
//!   bench-runner --rows 500 --seed 42
//!   bench-runner                      (embedded demo batch)

use anyhow::Result;
use labbench_core::{
    aggregate::aggregate,
    dataset,
    filter::FilterCriteria,
    fixture,
    lever::Lever,
    rank::{DEFAULT_TOP_LIMIT, TopItem, top_drgs, top_fachabteilungen, top_parameters},
    row::ObservationRow,
};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let data_path = arg_value(&args, "--data");
    let synth_count = parse_arg(&args, "--rows", 0usize);
    let seed = parse_arg(&args, "--seed", 42u64);
    let top = parse_arg(&args, "--top", DEFAULT_TOP_LIMIT);
    if top == 0 {
        anyhow::bail!("--top must be positive");
    }

    let criteria = FilterCriteria {
        parameters: arg_values(&args, "--parameter"),
        drgs: arg_values(&args, "--drg"),
        fachabteilungen: arg_values(&args, "--fachabteilung"),
    };

    let rows: Vec<ObservationRow> = if let Some(path) = data_path {
        dataset::load_rows(&path)?
    } else if synth_count > 0 {
        log::info!("generating {synth_count} synthetic rows (seed {seed})");
        fixture::synthetic_rows(seed, synth_count)
    } else {
        fixture::demo_rows()
    };

    let inconsistent = dataset::validate_rows(&rows);
    if inconsistent > 0 {
        log::warn!(
            "{inconsistent} of {} rows carry lever components that do not sum to their net potential",
            rows.len()
        );
    }

    // Filter once; the Aggregator re-applies the same criteria, the
    // Ranker expects the filtered subset.
    let filtered: Vec<ObservationRow> = rows
        .iter()
        .filter(|r| criteria.matches(r))
        .cloned()
        .collect();
    let summary = aggregate(&rows, &criteria);

    print_report(&summary, &filtered, &criteria, rows.len(), top);
    Ok(())
}

fn print_report(
    summary: &labbench_core::aggregate::AggregatedBenchmark,
    filtered: &[ObservationRow],
    criteria: &FilterCriteria,
    total_rows: usize,
    top: usize,
) {
    println!("=== LABORATORY BENCHMARK REPORT ===");
    println!("  generated:            {}", chrono::Utc::now().format("%Y-%m-%d %H:%M:%SZ"));
    println!("  rows:                 {} of {total_rows} selected", filtered.len());
    if let Some(p) = &criteria.parameters {
        println!("  parameter filter:     {}", p.join(", "));
    }
    if let Some(d) = &criteria.drgs {
        println!("  drg filter:           {}", d.join(", "));
    }
    if let Some(f) = &criteria.fachabteilungen {
        println!("  department filter:    {}", f.join(", "));
    }
    println!();
    println!("  analyses per case:    {:.2} (benchmark {:.2})",
        summary.analysen_pro_fall_kunde, summary.analysen_pro_fall_benchmark);
    println!("  total analyses:       {:.0}", summary.total_analysen);
    println!("  total cases:          {:.0}", summary.total_faelle);
    println!("  net potential:        {:.1} analyses / {:.2} EUR",
        summary.hauptpot_net_analysen, summary.hauptpot_net_euro);

    println!();
    println!("=== SUB-BENCHMARKS ===");
    for lever in Lever::ALL {
        let sub = summary.sub(lever);
        println!(
            "  {:<16} {:>9.1} analyses  {:>5.1}%  (facility {:.2} vs benchmark {:.2})",
            lever.name(),
            sub.analysen,
            sub.pct,
            sub.kunde,
            sub.benchmark,
        );
    }

    print_top_table("TOP PARAMETERS", &top_parameters(filtered, top));
    print_top_table("TOP DEPARTMENTS", &top_fachabteilungen(filtered, top));
    print_top_table("TOP DRGS", &top_drgs(filtered, top));
}

fn print_top_table(title: &str, items: &[TopItem]) {
    println!();
    println!("=== {title} ===");
    if items.is_empty() {
        println!("  (no data for this selection)");
        return;
    }
    for (rank, item) in items.iter().enumerate() {
        println!(
            "  {:>2}. {:<36} {:>9.1} analyses  {:>10.2} EUR  share {:>5.1}%",
            rank + 1,
            item.name,
            item.potential_analysen,
            item.potential_euro,
            item.share * 100.0,
        );
    }
}

// ── Argument scanning ────────────────────────────────────────────────────────

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}

fn arg_value(args: &[String], flag: &str) -> Option<String> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].clone())
}

/// Collect every occurrence of a repeatable flag. None when absent, so
/// the dimension stays unrestricted.
fn arg_values(args: &[String], flag: &str) -> Option<Vec<String>> {
    let values: Vec<String> = args
        .windows(2)
        .filter(|w| w[0] == flag)
        .map(|w| w[1].clone())
        .collect();
    if values.is_empty() {
        None
    } else {
        Some(values)
    }
}
