//! Analyze every built-in sample property side by side
//!
//! Usage: cargo run --bin compare_presets

use anyhow::Result;
use property_analyzer::{
    analysis::AnalysisRunner,
    projection::ProjectionConfig,
    property::sample_properties,
};
use rayon::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    let presets = sample_properties();
    let runner = AnalysisRunner::new(ProjectionConfig { years: 10 });

    // Standard financing terms applied uniformly for comparability
    let loan_rate = 5.5;
    let loan_term = 30;
    let tax_rate = 25.0;

    let reports: Vec<_> = presets
        .par_iter()
        .map(|preset| (preset, runner.analyze_preset(preset, loan_rate, loan_term, tax_rate)))
        .collect();

    println!("Sample Property Comparison (20% down, {}% rate, {}-year loan)\n", loan_rate, loan_term);
    println!("{:<20} {:>12} {:>11} {:>9} {:>9} {:>12} {:>8} {:>6}",
        "Property", "Price", "Cash Flow", "CoC", "Cap Rate", "Break-Even", "Risk", "Score");
    println!("{}", "-".repeat(94));

    for (preset, report) in &reports {
        let metrics = &report.metrics;
        let break_even = match metrics.break_even_months {
            Some(months) => format!("{:.1} mo", months),
            None => "N/A".to_string(),
        };

        println!("{:<20} {:>12.0} {:>11.2} {:>8.2}% {:>8.2}% {:>12} {:>8} {:>6.2}",
            preset.name,
            preset.property.price,
            metrics.monthly_cash_flow,
            metrics.cash_on_cash,
            metrics.cap_rate,
            break_even,
            report.risk.overall_risk,
            report.risk.risk_score,
        );
    }

    // Rank by 10-year projected cash flow
    let mut ranked: Vec<_> = reports
        .iter()
        .map(|(preset, report)| (preset.name.clone(), report.projection.summary().total_cash_flow))
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    println!("\nRanked by 10-year total cash flow:");
    for (i, (name, total)) in ranked.iter().enumerate() {
        println!("  {}. {:<20} ${:.2}", i + 1, name, total);
    }

    Ok(())
}
