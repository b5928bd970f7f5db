//! Analysis runner bundling the three engines behind one call
//!
//! The metrics, projection, and risk computations are independent and share
//! no state; the runner is a convenience for callers that want the complete
//! report.

use crate::market::MarketInput;
use crate::metrics::{compute_metrics, MetricsResult};
use crate::projection::{ProjectionConfig, ProjectionEngine, ProjectionResult};
use crate::property::{FinancingInput, PropertyInput, PropertyPreset};
use crate::risk::{assess_risk, RiskAssessment};
use serde::{Deserialize, Serialize};

/// Combined output of a full analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub metrics: MetricsResult,
    pub projection: ProjectionResult,
    pub risk: RiskAssessment,
}

/// Runs all three engines for a property with a configured projection horizon.
///
/// # Example
/// ```ignore
/// let runner = AnalysisRunner::new(ProjectionConfig { years: 15 });
/// let report = runner.analyze(&property, &financing, &market);
/// ```
#[derive(Debug, Clone)]
pub struct AnalysisRunner {
    projection_config: ProjectionConfig,
}

impl AnalysisRunner {
    /// Create a runner with the given projection horizon
    pub fn new(projection_config: ProjectionConfig) -> Self {
        Self { projection_config }
    }

    /// Run metrics, projection, and risk for one property
    pub fn analyze(
        &self,
        property: &PropertyInput,
        financing: &FinancingInput,
        market: &MarketInput,
    ) -> AnalysisReport {
        let engine = ProjectionEngine::new(self.projection_config.clone());

        AnalysisReport {
            metrics: compute_metrics(property, financing, market),
            projection: engine.project(property, financing, market),
            risk: assess_risk(property, market),
        }
    }

    /// Analyze a preset, deriving financing and market assumptions from its
    /// data: 20% down, 3% closing costs, and the preset's vacancy and
    /// appreciation rates.
    pub fn analyze_preset(
        &self,
        preset: &PropertyPreset,
        loan_rate: f64,
        loan_term: u32,
        tax_rate: f64,
    ) -> AnalysisReport {
        let financing = FinancingInput {
            down_payment: preset.property.price * 0.20,
            loan_rate,
            loan_term,
            closing_costs: (preset.property.price * 0.03).round(),
            renovation_costs: 0.0,
            tax_rate,
        };
        let market = MarketInput {
            vacancy_rate: preset.vacancy_rate,
            appreciation_rate: preset.appreciation_rate,
            ..MarketInput::default()
        };

        self.analyze(&preset.property, &financing, &market)
    }
}

impl Default for AnalysisRunner {
    fn default() -> Self {
        Self::new(ProjectionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market::MarketCondition;
    use crate::property::{sample_properties, PropertyType};

    #[test]
    fn test_full_report() {
        let property = PropertyInput {
            price: 300_000.0,
            rental_income: 2_000.0,
            expenses: 600.0,
            property_age: 15,
            area: 1_500.0,
            property_type: PropertyType::SingleFamily,
            location: "Suburban".to_string(),
        };
        let financing = FinancingInput {
            down_payment: 60_000.0,
            loan_rate: 5.5,
            loan_term: 30,
            closing_costs: 9_000.0,
            renovation_costs: 0.0,
            tax_rate: 25.0,
        };
        let market = MarketInput {
            vacancy_rate: 5.0,
            appreciation_rate: 3.0,
            condition: MarketCondition::Stable,
            ..MarketInput::default()
        };

        let runner = AnalysisRunner::new(ProjectionConfig { years: 10 });
        let report = runner.analyze(&property, &financing, &market);

        assert_eq!(report.projection.rows.len(), 10);
        assert_eq!(report.risk.factors.len(), 5);
        assert!(report.metrics.mortgage_payment > 0.0);

        // Both engines use the same shared mortgage formula
        assert_eq!(
            report.projection.rows[0].annual_mortgage,
            report.metrics.mortgage_payment * 12.0
        );
    }

    #[test]
    fn test_preset_analysis() {
        let presets = sample_properties();
        let runner = AnalysisRunner::default();

        for preset in &presets {
            let report = runner.analyze_preset(preset, 5.5, 30, 25.0);
            assert_eq!(report.projection.rows.len(), 10);
            assert!(report.metrics.initial_investment > 0.0);
        }
    }

    #[test]
    fn test_report_serializes() {
        let runner = AnalysisRunner::default();
        let preset = &sample_properties()[0];
        let report = runner.analyze_preset(preset, 5.5, 30, 25.0);

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"metrics\""));
        assert!(json.contains("\"Vacancy Risk\""));
    }
}
