//! Projection output structures

use serde::{Deserialize, Serialize};

/// A single row of projection output for one year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionRow {
    /// Projection year, 1-indexed
    pub year: u32,

    /// Appreciated property value at end of year ($)
    pub property_value: f64,

    /// Effective rental income for the year ($)
    pub annual_income: f64,

    /// Operating expenses for the year ($)
    pub annual_expenses: f64,

    /// Mortgage payments for the year ($)
    pub annual_mortgage: f64,

    /// Income less expenses and mortgage ($)
    pub annual_cash_flow: f64,

    /// Simplified running total: the current year's cash flow scaled by the
    /// year number
    pub cumulative_cash_flow: f64,
}

/// Complete projection result: one row per year, in chronological order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub rows: Vec<ProjectionRow>,
}

impl ProjectionResult {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Add a projection row
    pub fn add_row(&mut self, row: ProjectionRow) {
        self.rows.push(row);
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let total_income: f64 = self.rows.iter().map(|r| r.annual_income).sum();
        let total_expenses: f64 = self.rows.iter().map(|r| r.annual_expenses).sum();
        let total_mortgage: f64 = self.rows.iter().map(|r| r.annual_mortgage).sum();
        let total_cash_flow: f64 = self.rows.iter().map(|r| r.annual_cash_flow).sum();

        let final_property_value = self.rows.last().map(|r| r.property_value).unwrap_or(0.0);

        ProjectionSummary {
            total_years: self.rows.len() as u32,
            total_income,
            total_expenses,
            total_mortgage,
            total_cash_flow,
            final_property_value,
        }
    }
}

impl Default for ProjectionResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub total_years: u32,
    pub total_income: f64,
    pub total_expenses: f64,
    pub total_mortgage: f64,
    pub total_cash_flow: f64,
    pub final_property_value: f64,
}
