//! Multi-factor investment risk scoring

use crate::market::{MarketCondition, MarketInput};
use crate::property::{LocationClass, PropertyInput};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tier bounds per factor: value < bounds[0] scores 1, < bounds[1] scores 2,
/// otherwise 3. Boundary values fall into the higher tier.
const VACANCY_TIERS: [f64; 2] = [5.0, 8.0];
const PRICE_TO_RENT_TIERS: [f64; 2] = [15.0, 20.0];
const EXPENSE_RATIO_TIERS: [f64; 2] = [35.0, 45.0];
const PROPERTY_AGE_TIERS: [f64; 2] = [10.0, 30.0];

/// Mean-score cutoffs for the overall classification
const LOW_RISK_BELOW: f64 = 1.7;
const MEDIUM_RISK_BELOW: f64 = 2.3;

/// Overall risk classification on a 3-point scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }

    /// Level for a single factor score in {1, 2, 3}.
    pub fn from_factor_score(score: u8) -> Self {
        match score {
            1 => RiskLevel::Low,
            2 => RiskLevel::Medium,
            _ => RiskLevel::High,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One scored risk factor with its display description
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskFactor {
    pub name: String,
    /// Integer score: 1 low, 2 moderate, 3 high
    pub score: u8,
    pub description: String,
}

/// Complete risk assessment: five scored factors and their mean.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub overall_risk: RiskLevel,

    /// Mean of the five factor scores, in [1, 3]
    pub risk_score: f64,

    /// The five factors in fixed display order
    pub factors: Vec<RiskFactor>,

    /// Location bucket derived from the property type
    pub location_class: LocationClass,
}

impl RiskAssessment {
    /// Look up a factor by name.
    pub fn factor(&self, name: &str) -> Option<&RiskFactor> {
        self.factors.iter().find(|f| f.name == name)
    }
}

/// Score one value against a pair of tier bounds.
fn tier(value: f64, bounds: [f64; 2]) -> u8 {
    if value < bounds[0] {
        1
    } else if value < bounds[1] {
        2
    } else {
        3
    }
}

/// Assess investment risk across five weighted factors.
///
/// Pure and infallible: degenerate inputs (zero rent) score as high risk
/// rather than failing.
pub fn assess_risk(property: &PropertyInput, market: &MarketInput) -> RiskAssessment {
    let impact = market.condition.impact();
    let adjusted_vacancy = market.vacancy_rate + impact.vacancy_impact;

    let annual_rent = property.annual_rent();

    let vacancy_score = tier(adjusted_vacancy, VACANCY_TIERS);
    let vacancy = RiskFactor {
        name: "Vacancy Risk".to_string(),
        score: vacancy_score,
        description: format!(
            "Adjusted vacancy rate of {:.1}% indicates {} risk.",
            adjusted_vacancy,
            tier_word(vacancy_score, ["low", "moderate", "high"])
        ),
    };

    let price_to_rent = if annual_rent > 0.0 {
        let ratio = property.price / annual_rent;
        let score = tier(ratio, PRICE_TO_RENT_TIERS);
        RiskFactor {
            name: "Price to Rent Ratio".to_string(),
            score,
            description: format!(
                "Price to annual rent ratio of {:.1} indicates {} cash flow potential.",
                ratio,
                tier_word(score, ["good", "fair", "poor"])
            ),
        }
    } else {
        RiskFactor {
            name: "Price to Rent Ratio".to_string(),
            score: 3,
            description: "No rental income: price can never be recovered from rent.".to_string(),
        }
    };

    let expense_ratio = if annual_rent > 0.0 {
        let ratio = property.expenses * 12.0 / annual_rent * 100.0;
        let score = tier(ratio, EXPENSE_RATIO_TIERS);
        RiskFactor {
            name: "Expense Ratio".to_string(),
            score,
            description: format!(
                "Expense ratio of {:.1}% is {}.",
                ratio,
                tier_word(score, ["favorable", "typical", "concerning"])
            ),
        }
    } else {
        RiskFactor {
            name: "Expense Ratio".to_string(),
            score: 3,
            description: "No rental income: expenses are not covered by rent.".to_string(),
        }
    };

    let market_score = match market.condition {
        MarketCondition::StrongGrowth | MarketCondition::Stable => 1,
        MarketCondition::Volatile => 2,
        MarketCondition::Declining => 3,
    };
    let market_factor = RiskFactor {
        name: "Market Condition".to_string(),
        score: market_score,
        description: format!(
            "{} market suggests {} risk.",
            market.condition,
            tier_word(market_score, ["low", "moderate", "high"])
        ),
    };

    let age_score = tier(property.property_age as f64, PROPERTY_AGE_TIERS);
    let age = RiskFactor {
        name: "Property Age".to_string(),
        score: age_score,
        description: format!(
            "{} year old property has {} maintenance risk.",
            property.property_age,
            tier_word(age_score, ["low", "moderate", "high"])
        ),
    };

    let factors = vec![vacancy, price_to_rent, expense_ratio, market_factor, age];

    let risk_score =
        factors.iter().map(|f| f.score as f64).sum::<f64>() / factors.len() as f64;

    let overall_risk = if risk_score < LOW_RISK_BELOW {
        RiskLevel::Low
    } else if risk_score < MEDIUM_RISK_BELOW {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    };

    RiskAssessment {
        overall_risk,
        risk_score,
        factors,
        location_class: property.location_class(),
    }
}

fn tier_word(score: u8, words: [&'static str; 3]) -> &'static str {
    words[(score as usize - 1).min(2)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market::MarketCondition;
    use crate::property::PropertyType;
    use approx::assert_relative_eq;

    fn property(price: f64, rent: f64, expenses: f64, age: u32) -> PropertyInput {
        PropertyInput {
            price,
            rental_income: rent,
            expenses,
            property_age: age,
            area: 1_200.0,
            property_type: PropertyType::SingleFamily,
            location: "Suburban".to_string(),
        }
    }

    fn market(vacancy: f64, condition: MarketCondition) -> MarketInput {
        MarketInput {
            vacancy_rate: vacancy,
            condition,
            ..MarketInput::default()
        }
    }

    fn scores(assessment: &RiskAssessment) -> Vec<u8> {
        assessment.factors.iter().map(|f| f.score).collect()
    }

    #[test]
    fn test_all_low_factors_classify_low() {
        // ptr 12.5, expense ratio 30%, vacancy 4, Stable, age 5
        let assessment = assess_risk(
            &property(150_000.0, 1_000.0, 300.0, 5),
            &market(4.0, MarketCondition::Stable),
        );

        assert_eq!(scores(&assessment), vec![1, 1, 1, 1, 1]);
        assert_relative_eq!(assessment.risk_score, 1.0);
        assert_eq!(assessment.overall_risk, RiskLevel::Low);
    }

    #[test]
    fn test_all_high_factors_classify_high() {
        // vacancy 10 + 3 (Declining), ptr 33.3, expense ratio 50%, age 40
        let assessment = assess_risk(
            &property(400_000.0, 1_000.0, 500.0, 40),
            &market(10.0, MarketCondition::Declining),
        );

        assert_eq!(scores(&assessment), vec![3, 3, 3, 3, 3]);
        assert_relative_eq!(assessment.risk_score, 3.0);
        assert_eq!(assessment.overall_risk, RiskLevel::High);
    }

    #[test]
    fn test_mixed_factors_classify_medium() {
        // vacancy 2 + 2 (Volatile) = 4 -> 1; ptr 15 -> 2; expense 40% -> 2;
        // Volatile -> 2; age 50 -> 3. Mean 2.0.
        let assessment = assess_risk(
            &property(216_000.0, 1_200.0, 480.0, 50),
            &market(2.0, MarketCondition::Volatile),
        );

        assert_eq!(scores(&assessment), vec![1, 2, 2, 2, 3]);
        assert_relative_eq!(assessment.risk_score, 2.0);
        assert_eq!(assessment.overall_risk, RiskLevel::Medium);
    }

    #[test]
    fn test_boundaries_fall_to_higher_tier() {
        // Adjusted vacancy exactly 5 scores 2, exactly 8 scores 3
        assert_eq!(tier(5.0, VACANCY_TIERS), 2);
        assert_eq!(tier(8.0, VACANCY_TIERS), 3);
        assert_eq!(tier(4.999, VACANCY_TIERS), 1);

        assert_eq!(tier(15.0, PRICE_TO_RENT_TIERS), 2);
        assert_eq!(tier(20.0, PRICE_TO_RENT_TIERS), 3);

        assert_eq!(tier(35.0, EXPENSE_RATIO_TIERS), 2);
        assert_eq!(tier(45.0, EXPENSE_RATIO_TIERS), 3);

        assert_eq!(tier(10.0, PROPERTY_AGE_TIERS), 2);
        assert_eq!(tier(30.0, PROPERTY_AGE_TIERS), 3);
    }

    #[test]
    fn test_vacancy_boundary_through_market_impact() {
        // 7 + (-2) from StrongGrowth = 5: exactly at the boundary, tier 2
        let assessment = assess_risk(
            &property(150_000.0, 1_000.0, 300.0, 5),
            &market(7.0, MarketCondition::StrongGrowth),
        );
        assert_eq!(assessment.factor("Vacancy Risk").unwrap().score, 2);
    }

    #[test]
    fn test_market_condition_scores() {
        let prop = property(150_000.0, 1_000.0, 300.0, 5);
        for (condition, expected) in [
            (MarketCondition::StrongGrowth, 1),
            (MarketCondition::Stable, 1),
            (MarketCondition::Volatile, 2),
            (MarketCondition::Declining, 3),
        ] {
            let assessment = assess_risk(&prop, &market(0.0, condition));
            assert_eq!(
                assessment.factor("Market Condition").unwrap().score,
                expected
            );
        }
    }

    #[test]
    fn test_zero_rent_does_not_panic() {
        let assessment = assess_risk(
            &property(150_000.0, 0.0, 300.0, 5),
            &market(4.0, MarketCondition::Stable),
        );

        assert_eq!(assessment.factor("Price to Rent Ratio").unwrap().score, 3);
        assert_eq!(assessment.factor("Expense Ratio").unwrap().score, 3);
        assert!(assessment.risk_score.is_finite());
    }

    #[test]
    fn test_factor_order_is_fixed() {
        let assessment = assess_risk(
            &property(150_000.0, 1_000.0, 300.0, 5),
            &market(4.0, MarketCondition::Stable),
        );

        let names: Vec<_> = assessment.factors.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Vacancy Risk",
                "Price to Rent Ratio",
                "Expense Ratio",
                "Market Condition",
                "Property Age",
            ]
        );
    }

    #[test]
    fn test_location_class_reported() {
        let mut prop = property(150_000.0, 1_000.0, 300.0, 5);
        prop.property_type = PropertyType::Condo;
        let assessment = assess_risk(&prop, &market(4.0, MarketCondition::Stable));
        assert_eq!(assessment.location_class, LocationClass::Urban);
    }
}
