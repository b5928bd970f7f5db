//! Multi-year cash flow projection engine

use crate::market::MarketInput;
use crate::mortgage;
use crate::property::{FinancingInput, PropertyInput};
use super::rows::{ProjectionRow, ProjectionResult};

/// Configuration for a projection run
#[derive(Debug, Clone)]
pub struct ProjectionConfig {
    /// Number of years to project, >= 1
    pub years: u32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self { years: 10 }
    }
}

/// Year-by-year cash flow projection.
///
/// Income and expenses grow at independent annual rates while the property
/// value compounds at the appreciation rate. The mortgage payment is
/// computed once and held constant (fixed-rate assumption; the loan balance
/// is not amortized per year). A pure function of its inputs: re-running
/// with the same inputs yields the identical row sequence.
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// Create a new projection engine with the given config
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    /// Run the projection for a single property
    pub fn project(
        &self,
        property: &PropertyInput,
        financing: &FinancingInput,
        market: &MarketInput,
    ) -> ProjectionResult {
        let mortgage_payment = mortgage::monthly_payment(
            financing.loan_amount(property.price),
            financing.loan_rate,
            financing.loan_term,
        );
        let annual_mortgage = mortgage_payment * 12.0;

        let income_growth = 1.0 + market.annual_income_growth / 100.0;
        let expense_growth = 1.0 + market.annual_expense_growth / 100.0;
        let appreciation = 1.0 + market.appreciation_rate / 100.0;
        let occupancy = 1.0 - market.vacancy_rate / 100.0;

        let mut result = ProjectionResult::new();

        for year in 1..=self.config.years {
            // Growth applies from year 2 onward; year 1 uses the base figures
            let year_rental_income = property.rental_income * income_growth.powi(year as i32 - 1);
            let year_expenses = property.expenses * expense_growth.powi(year as i32 - 1);

            let effective_rental_income = year_rental_income * occupancy;

            let annual_income = effective_rental_income * 12.0;
            let annual_expenses = year_expenses * 12.0;
            let annual_cash_flow = annual_income - annual_expenses - annual_mortgage;

            let property_value = property.price * appreciation.powi(year as i32);

            result.add_row(ProjectionRow {
                year,
                property_value,
                annual_income,
                annual_expenses,
                annual_mortgage,
                annual_cash_flow,
                // Simplified cumulative: current year's flow scaled by year
                // number, not a running sum of prior years
                cumulative_cash_flow: annual_cash_flow * year as f64,
            });
        }

        result
    }
}
