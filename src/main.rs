//! Property Analyzer CLI
//!
//! Runs the metrics, projection, and risk engines for one property and
//! renders the combined report.

use anyhow::{bail, Context, Result};
use chrono::Utc;
use clap::Parser;
use property_analyzer::{
    analysis::AnalysisRunner,
    market::{MarketCondition, MarketInput},
    projection::ProjectionConfig,
    property::{self, FinancingInput, PropertyInput, PropertyType},
    risk::RiskLevel,
    AnalysisReport,
};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "property_analyzer", version, about = "Real estate investment analyzer")]
struct Args {
    /// Use a built-in sample property by name (e.g. "Suburban House")
    #[arg(long, conflicts_with = "price")]
    preset: Option<String>,

    /// Load presets from a CSV file instead of the built-in samples
    #[arg(long)]
    presets_file: Option<PathBuf>,

    /// List available presets and exit
    #[arg(long)]
    list_presets: bool,

    /// Purchase price ($), for a custom property
    #[arg(long)]
    price: Option<f64>,

    /// Monthly rental income ($)
    #[arg(long, default_value_t = 2000.0)]
    rent: f64,

    /// Monthly expenses ($)
    #[arg(long, default_value_t = 600.0)]
    expenses: f64,

    /// Property age in years
    #[arg(long, default_value_t = 15)]
    age: u32,

    /// Living area in square feet
    #[arg(long, default_value_t = 1500.0)]
    area: f64,

    /// Property type (single-family, apartment, condo, multi-family, commercial)
    #[arg(long, default_value = "single-family")]
    property_type: PropertyType,

    /// Down payment as a percentage of price
    #[arg(long, default_value_t = 20.0)]
    down_payment_pct: f64,

    /// Annual loan interest rate (%)
    #[arg(long, default_value_t = 5.5)]
    loan_rate: f64,

    /// Loan term in years
    #[arg(long, default_value_t = 30)]
    loan_term: u32,

    /// Renovation costs ($)
    #[arg(long, default_value_t = 0.0)]
    renovation_costs: f64,

    /// Income tax rate (%)
    #[arg(long, default_value_t = 25.0)]
    tax_rate: f64,

    /// Vacancy rate (%), overrides the preset value
    #[arg(long)]
    vacancy_rate: Option<f64>,

    /// Annual appreciation rate (%), overrides the preset value
    #[arg(long)]
    appreciation_rate: Option<f64>,

    /// Market condition (strong-growth, stable, declining, volatile)
    #[arg(long, default_value = "stable")]
    condition: MarketCondition,

    /// Annual income growth (%)
    #[arg(long, default_value_t = 2.0)]
    income_growth: f64,

    /// Annual expense growth (%)
    #[arg(long, default_value_t = 3.0)]
    expense_growth: f64,

    /// Projection horizon in years
    #[arg(long, default_value_t = 10)]
    years: u32,

    /// Emit the full report as JSON instead of tables
    #[arg(long)]
    json: bool,

    /// Write the projection table to a CSV file
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let presets = match &args.presets_file {
        Some(path) => property::load_presets(path)
            .with_context(|| format!("loading presets from {}", path.display()))?,
        None => property::sample_properties(),
    };

    if args.list_presets {
        for preset in &presets {
            println!(
                "{:<20} ${:>9.0}  rent ${:>6.0}/mo  {} yrs old  {}",
                preset.name,
                preset.property.price,
                preset.property.rental_income,
                preset.property.property_age,
                preset.property.property_type,
            );
        }
        return Ok(());
    }

    if args.years == 0 {
        bail!("projection horizon must be at least 1 year");
    }

    // Resolve inputs from a preset or the custom flags
    let (name, property, vacancy_rate, appreciation_rate) = match &args.preset {
        Some(preset_name) => {
            let preset = presets
                .iter()
                .find(|p| p.name.eq_ignore_ascii_case(preset_name))
                .with_context(|| format!("no preset named '{}'", preset_name))?;
            (
                preset.name.clone(),
                preset.property.clone(),
                preset.vacancy_rate,
                preset.appreciation_rate,
            )
        }
        None => {
            let price = args.price.unwrap_or(300_000.0);
            let property = PropertyInput {
                price,
                rental_income: args.rent,
                expenses: args.expenses,
                property_age: args.age,
                area: args.area,
                property_type: args.property_type,
                location: "Custom".to_string(),
            };
            ("Custom Property".to_string(), property, 5.0, 3.0)
        }
    };

    let financing = FinancingInput {
        down_payment: property.price * args.down_payment_pct / 100.0,
        loan_rate: args.loan_rate,
        loan_term: args.loan_term,
        closing_costs: (property.price * 0.03).round(),
        renovation_costs: args.renovation_costs,
        tax_rate: args.tax_rate,
    };

    let market = MarketInput {
        vacancy_rate: args.vacancy_rate.unwrap_or(vacancy_rate),
        appreciation_rate: args.appreciation_rate.unwrap_or(appreciation_rate),
        condition: args.condition,
        annual_income_growth: args.income_growth,
        annual_expense_growth: args.expense_growth,
    };

    log::info!(
        "analyzing '{}': price=${:.0}, down=${:.0}, rate={}%, term={}yr, horizon={}yr",
        name,
        property.price,
        financing.down_payment,
        financing.loan_rate,
        financing.loan_term,
        args.years
    );

    let runner = AnalysisRunner::new(ProjectionConfig { years: args.years });
    let report = runner.analyze(&property, &financing, &market);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_report(&name, &property, &market, &report);

    if let Some(path) = &args.output {
        write_projection_csv(path, &report)
            .with_context(|| format!("writing projection CSV to {}", path.display()))?;
        println!("\nProjection table written to: {}", path.display());
    }

    Ok(())
}

fn print_report(
    name: &str,
    property: &PropertyInput,
    market: &MarketInput,
    report: &AnalysisReport,
) {
    let metrics = &report.metrics;

    println!("Property Analyzer v0.1.0");
    println!("========================\n");
    println!("Report for: {} ({})", name, Utc::now().format("%Y-%m-%d"));
    println!("  Price: ${:.2}", property.price);
    println!("  Monthly Rent: ${:.2}", property.rental_income);
    println!("  Monthly Expenses: ${:.2}", property.expenses);
    println!("  Market: {} | Vacancy {:.1}% | Appreciation {:.1}%",
        market.condition, market.vacancy_rate, market.appreciation_rate);
    println!();

    println!("Investment Metrics:");
    println!("  Initial Investment: ${:.2}", metrics.initial_investment);
    println!("  Monthly Mortgage Payment: ${:.2}", metrics.mortgage_payment);
    println!("  Monthly Cash Flow: ${:.2}", metrics.monthly_cash_flow);
    println!("  Annual Cash Flow: ${:.2}", metrics.annual_cash_flow);
    println!("  Cash-on-Cash Return: {:.2}%", metrics.cash_on_cash);
    println!("  Cap Rate: {:.2}%", metrics.cap_rate);
    println!("  ROI: {:.2}%", metrics.roi);
    match metrics.break_even_months {
        Some(months) => println!("  Break-Even Point: {:.1} months", months),
        None => println!("  Break-Even Point: N/A (negative cash flow)"),
    }
    println!("  Tax Savings: ${:.2}", metrics.tax_savings);
    println!("  After-Tax Cash Flow: ${:.2}", metrics.after_tax_cash_flow);
    println!("  Future Value 5/10/20 yr: ${:.2} / ${:.2} / ${:.2}",
        metrics.future_value_5yr, metrics.future_value_10yr, metrics.future_value_20yr);
    println!("  Total Equity 5/10 yr: ${:.2} / ${:.2}",
        metrics.total_equity_5yr, metrics.total_equity_10yr);
    println!();

    println!("Cash Flow Projection ({} years):", report.projection.rows.len());
    println!("{:>5} {:>14} {:>13} {:>13} {:>13} {:>13} {:>14}",
        "Year", "Value", "Income", "Expenses", "Mortgage", "Cash Flow", "Cumulative");
    println!("{}", "-".repeat(90));
    for row in &report.projection.rows {
        println!("{:>5} {:>14.2} {:>13.2} {:>13.2} {:>13.2} {:>13.2} {:>14.2}",
            row.year,
            row.property_value,
            row.annual_income,
            row.annual_expenses,
            row.annual_mortgage,
            row.annual_cash_flow,
            row.cumulative_cash_flow,
        );
    }

    let summary = report.projection.summary();
    println!("\nProjection Summary:");
    println!("  Total Cash Flow: ${:.2}", summary.total_cash_flow);
    println!("  Final Property Value: ${:.2}", summary.final_property_value);
    println!();

    let risk = &report.risk;
    println!("Risk Assessment: {} ({:.2} / 3.00)", risk.overall_risk, risk.risk_score);
    for factor in &risk.factors {
        println!(
            "  [{}] {}: {}",
            RiskLevel::from_factor_score(factor.score),
            factor.name,
            factor.description
        );
    }
}

fn write_projection_csv(path: &Path, report: &AnalysisReport) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([
        "Year",
        "PropertyValue",
        "AnnualIncome",
        "AnnualExpenses",
        "AnnualMortgage",
        "AnnualCashFlow",
        "CumulativeCashFlow",
    ])?;

    for row in &report.projection.rows {
        writer.write_record([
            row.year.to_string(),
            format!("{:.2}", row.property_value),
            format!("{:.2}", row.annual_income),
            format!("{:.2}", row.annual_expenses),
            format!("{:.2}", row.annual_mortgage),
            format!("{:.2}", row.annual_cash_flow),
            format!("{:.2}", row.cumulative_cash_flow),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
