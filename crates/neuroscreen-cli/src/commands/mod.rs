pub mod analyze;
pub mod ingest;
pub mod serve;

use neuroscreen_core::{AnalysisReport, Band};

/// Resolve an optional seed, drawing a random one when absent.
fn resolve_seed(seed: Option<u32>) -> u32 {
    seed.unwrap_or_else(|| {
        let s = rand::random::<u32>();
        println!("(no --seed given; using random seed {s})");
        s
    })
}

/// Print the shared report table: band powers, score, tier, attribution,
/// coherence.
fn print_report(report: &AnalysisReport) {
    println!();
    println!("Band powers (uV\u{b2}/Hz):");
    for band in Band::ALL {
        let power = report.band_powers.get(band);
        let baseline = band.baseline();
        let pct = (power / baseline - 1.0) * 100.0;
        println!("  {:<7} {:>8.4}   baseline {:>4.1}   {:>+6.1}%", band, power, baseline, pct);
    }
    println!("  theta/alpha ratio: {:.4}", report.theta_alpha_ratio);
    println!();

    let risk = &report.risk;
    let class = &report.classification;
    println!("Risk score: {}/100  [{}]", risk.score, class.level);
    if let Some(c) = risk.confidence {
        println!("Confidence: {c}%");
    }
    println!("Key marker: {} ({})", risk.key_marker, risk.key_deviation);
    println!("{}", class.alert);
    println!();

    println!("Top feature attributions:");
    for entry in report.attribution.iter().take(5) {
        println!(
            "  {:<28} {:<9} {:<6} {:>+8.4}",
            entry.name,
            entry.band.name(),
            entry.region,
            entry.value
        );
    }
    println!();

    println!("Inter-region coherence:");
    for pair in &report.coherence {
        println!("  {:<6} {:.3}", pair.pair, pair.value);
    }
}

/// Write the full report as JSON when an output path was requested.
fn write_report(report: &AnalysisReport, path: Option<&str>) {
    let Some(path) = path else { return };
    match serde_json::to_string_pretty(report) {
        Ok(json) => match std::fs::write(path, json) {
            Ok(()) => println!("\nFull report written to {path}"),
            Err(e) => eprintln!("Failed to write {path}: {e}"),
        },
        Err(e) => eprintln!("Failed to serialize report: {e}"),
    }
}
