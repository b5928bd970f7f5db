//! Multi-year cash flow projections

mod engine;
mod rows;

pub use engine::{ProjectionConfig, ProjectionEngine};
pub use rows::{ProjectionResult, ProjectionRow, ProjectionSummary};
