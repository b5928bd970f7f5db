//! Property Analyzer - Real estate investment analysis engine
//!
//! This library provides:
//! - Point-in-time investment metrics (cash flow, returns, break-even, tax effects)
//! - Multi-year income/expense/value projections under growth assumptions
//! - Multi-factor qualitative risk scoring
//!
//! The three engines are pure and independent; callers may invoke them in
//! any order or combination.

pub mod analysis;
pub mod market;
pub mod metrics;
pub mod mortgage;
pub mod projection;
pub mod property;
pub mod risk;

// Re-export commonly used types
pub use analysis::{AnalysisReport, AnalysisRunner};
pub use market::{MarketCondition, MarketImpact, MarketInput};
pub use metrics::{compute_metrics, MetricsResult};
pub use projection::{ProjectionConfig, ProjectionEngine, ProjectionResult, ProjectionRow};
pub use property::{FinancingInput, PropertyInput, PropertyPreset, PropertyType};
pub use risk::{assess_risk, RiskAssessment, RiskFactor, RiskLevel};
