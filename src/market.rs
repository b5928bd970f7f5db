//! Market assumptions: vacancy, appreciation, growth rates, and the
//! enumerated market condition table

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Enumerated market condition labels. A closed vocabulary: each label maps
/// to a fixed impact triple used by the risk analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketCondition {
    StrongGrowth,
    Stable,
    Declining,
    Volatile,
}

/// Fixed impact triple for a market condition.
///
/// All three fields are percentage-point adjustments: `vacancy_impact` is
/// added to the caller's vacancy rate, `appreciation_impact` and
/// `price_trend` describe the label for display purposes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketImpact {
    pub vacancy_impact: f64,
    pub appreciation_impact: f64,
    pub price_trend: f64,
}

impl MarketCondition {
    /// All labels in display order.
    pub const ALL: [MarketCondition; 4] = [
        MarketCondition::StrongGrowth,
        MarketCondition::Stable,
        MarketCondition::Declining,
        MarketCondition::Volatile,
    ];

    /// Impact triple for this label.
    pub fn impact(&self) -> MarketImpact {
        match self {
            MarketCondition::StrongGrowth => MarketImpact {
                vacancy_impact: -2.0,
                appreciation_impact: 2.0,
                price_trend: 5.0,
            },
            MarketCondition::Stable => MarketImpact {
                vacancy_impact: 0.0,
                appreciation_impact: 0.0,
                price_trend: 2.0,
            },
            MarketCondition::Declining => MarketImpact {
                vacancy_impact: 3.0,
                appreciation_impact: -2.0,
                price_trend: -3.0,
            },
            MarketCondition::Volatile => MarketImpact {
                vacancy_impact: 2.0,
                appreciation_impact: 1.0,
                price_trend: 0.0,
            },
        }
    }

    /// Display label matching the original vocabulary.
    pub fn as_str(&self) -> &'static str {
        match self {
            MarketCondition::StrongGrowth => "Strong Growth",
            MarketCondition::Stable => "Stable",
            MarketCondition::Declining => "Declining",
            MarketCondition::Volatile => "Volatile",
        }
    }
}

impl fmt::Display for MarketCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognized market condition label.
#[derive(Debug, Error)]
#[error("unknown market condition: {0}")]
pub struct ParseMarketConditionError(String);

impl FromStr for MarketCondition {
    type Err = ParseMarketConditionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept both the display label and a hyphen/case-insensitive form
        // so the CLI can take "strong-growth"
        match s.to_ascii_lowercase().replace(['-', '_'], " ").as_str() {
            "strong growth" => Ok(MarketCondition::StrongGrowth),
            "stable" => Ok(MarketCondition::Stable),
            "declining" => Ok(MarketCondition::Declining),
            "volatile" => Ok(MarketCondition::Volatile),
            _ => Err(ParseMarketConditionError(s.to_string())),
        }
    }
}

/// Market-level assumptions supplied by the caller.
///
/// Percentages are whole numbers (5.5 means 5.5%) and converted to fractions
/// only inside formulas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketInput {
    /// Expected vacancy rate (%)
    pub vacancy_rate: f64,

    /// Annual appreciation rate (%), may be negative
    pub appreciation_rate: f64,

    /// Enumerated market condition label
    pub condition: MarketCondition,

    /// Annual rental income growth (%)
    pub annual_income_growth: f64,

    /// Annual expense growth (%)
    pub annual_expense_growth: f64,
}

impl Default for MarketInput {
    fn default() -> Self {
        Self {
            vacancy_rate: 5.0,
            appreciation_rate: 3.0,
            condition: MarketCondition::Stable,
            annual_income_growth: 2.0,
            annual_expense_growth: 3.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_impact_table() {
        let strong = MarketCondition::StrongGrowth.impact();
        assert_eq!(strong.vacancy_impact, -2.0);
        assert_eq!(strong.price_trend, 5.0);

        let declining = MarketCondition::Declining.impact();
        assert_eq!(declining.vacancy_impact, 3.0);
        assert_eq!(declining.appreciation_impact, -2.0);
        assert_eq!(declining.price_trend, -3.0);

        assert_eq!(MarketCondition::Volatile.impact().price_trend, 0.0);
        assert_eq!(MarketCondition::Stable.impact().vacancy_impact, 0.0);
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!(
            "Strong Growth".parse::<MarketCondition>().unwrap(),
            MarketCondition::StrongGrowth
        );
        assert_eq!(
            "strong-growth".parse::<MarketCondition>().unwrap(),
            MarketCondition::StrongGrowth
        );
        assert_eq!(
            "stable".parse::<MarketCondition>().unwrap(),
            MarketCondition::Stable
        );
        assert!("booming".parse::<MarketCondition>().is_err());
    }

    #[test]
    fn test_default_growth_rates() {
        let market = MarketInput::default();
        assert_eq!(market.annual_income_growth, 2.0);
        assert_eq!(market.annual_expense_growth, 3.0);
    }
}
