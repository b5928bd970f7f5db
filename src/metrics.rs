//! Point-in-time investment metrics

use crate::market::MarketInput;
use crate::mortgage;
use crate::property::{FinancingInput, PropertyInput};
use serde::{Deserialize, Serialize};

/// Residential straight-line depreciation schedule in years
const DEPRECIATION_PERIOD_YEARS: f64 = 27.5;

/// Assumed land share of the purchase price (land does not depreciate)
const LAND_VALUE_SHARE: f64 = 0.2;

/// Full set of point-in-time metrics for one property purchase.
///
/// All figures are derived; nothing is carried between calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsResult {
    /// Monthly cash flow after vacancy, expenses, and mortgage ($)
    pub monthly_cash_flow: f64,

    /// Annualized cash flow ($)
    pub annual_cash_flow: f64,

    /// Annual cash flow over initial investment (%)
    pub roi: f64,

    /// Net operating income over price (%)
    pub cap_rate: f64,

    /// Annual cash flow over cash invested (%)
    pub cash_on_cash: f64,

    /// Monthly principal-and-interest payment ($)
    pub mortgage_payment: f64,

    /// Months to recover the initial investment. `None` when monthly cash
    /// flow is non-positive: negative cash flow never breaks even.
    pub break_even_months: Option<f64>,

    /// Annual tax savings from deductions ($), never negative
    pub tax_savings: f64,

    /// Annual cash flow plus tax savings ($)
    pub after_tax_cash_flow: f64,

    /// Appreciated property value at 5 years ($)
    pub future_value_5yr: f64,

    /// Appreciated property value at 10 years ($)
    pub future_value_10yr: f64,

    /// Appreciated property value at 20 years ($)
    pub future_value_20yr: f64,

    /// Equity position at 5 years ($)
    pub total_equity_5yr: f64,

    /// Equity position at 10 years ($)
    pub total_equity_10yr: f64,

    /// Total cash invested up front ($)
    pub initial_investment: f64,
}

/// Compute all point-in-time metrics for a property purchase.
///
/// Pure and deterministic. Degenerate inputs (zero price, zero cash
/// invested, all-cash purchase) produce defined zero results rather than
/// errors.
pub fn compute_metrics(
    property: &PropertyInput,
    financing: &FinancingInput,
    market: &MarketInput,
) -> MetricsResult {
    let initial_investment = financing.initial_investment();
    let loan_amount = financing.loan_amount(property.price);

    let mortgage_payment =
        mortgage::monthly_payment(loan_amount, financing.loan_rate, financing.loan_term);

    // Effective rental income accounts for expected vacancy
    let effective_rental_income = property.rental_income * (1.0 - market.vacancy_rate / 100.0);

    let monthly_cash_flow = effective_rental_income - property.expenses - mortgage_payment;
    let annual_cash_flow = monthly_cash_flow * 12.0;

    let roi = if initial_investment > 0.0 {
        annual_cash_flow / initial_investment * 100.0
    } else {
        0.0
    };

    let cap_rate = if property.price > 0.0 {
        (effective_rental_income - property.expenses) * 12.0 / property.price * 100.0
    } else {
        0.0
    };

    // ROI and cash-on-cash share a definition here: both relate annual cash
    // flow to total cash invested
    let cash_on_cash = roi;

    let break_even_months = if monthly_cash_flow > 0.0 {
        Some(initial_investment / monthly_cash_flow)
    } else {
        None
    };

    // Straight-line depreciation on the improved portion of the price
    let annual_depreciation =
        property.price * (1.0 - LAND_VALUE_SHARE) / DEPRECIATION_PERIOD_YEARS;

    // The interest term approximates the deductible interest portion from
    // the annual payment, not an exact amortization schedule
    let taxable_income = effective_rental_income * 12.0
        - property.expenses * 12.0
        - annual_depreciation
        - mortgage_payment * 12.0 * financing.loan_rate / 100.0;
    let tax_savings = (taxable_income * financing.tax_rate / 100.0).max(0.0);

    let after_tax_cash_flow = annual_cash_flow + tax_savings;

    let future_value_5yr = future_value(property.price, market.appreciation_rate, 5);
    let future_value_10yr = future_value(property.price, market.appreciation_rate, 10);
    let future_value_20yr = future_value(property.price, market.appreciation_rate, 20);

    // Equity gates on whether the loan term has elapsed; the outstanding
    // balance is not amortized down over time
    let total_equity_5yr = if financing.loan_term >= 5 {
        future_value_5yr - loan_amount
    } else {
        future_value_5yr
    };
    let total_equity_10yr = if financing.loan_term >= 10 {
        future_value_10yr - loan_amount
    } else {
        future_value_10yr
    };

    MetricsResult {
        monthly_cash_flow,
        annual_cash_flow,
        roi,
        cap_rate,
        cash_on_cash,
        mortgage_payment,
        break_even_months,
        tax_savings,
        after_tax_cash_flow,
        future_value_5yr,
        future_value_10yr,
        future_value_20yr,
        total_equity_5yr,
        total_equity_10yr,
        initial_investment,
    }
}

/// Compounded property value after `years` of appreciation.
fn future_value(price: f64, appreciation_rate_pct: f64, years: u32) -> f64 {
    price * (1.0 + appreciation_rate_pct / 100.0).powi(years as i32)
}
