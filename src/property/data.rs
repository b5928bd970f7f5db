//! Property and financing input structures

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Type of property under evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyType {
    SingleFamily,
    Apartment,
    Condo,
    MultiFamily,
    Commercial,
}

impl PropertyType {
    /// Display label for the property type.
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::SingleFamily => "Single Family",
            PropertyType::Apartment => "Apartment",
            PropertyType::Condo => "Condo",
            PropertyType::MultiFamily => "Multi-Family",
            PropertyType::Commercial => "Commercial",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognized property type label.
#[derive(Debug, Error)]
#[error("unknown property type: {0}")]
pub struct ParsePropertyTypeError(String);

impl FromStr for PropertyType {
    type Err = ParsePropertyTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['-', '_'], " ").as_str() {
            "single family" => Ok(PropertyType::SingleFamily),
            "apartment" => Ok(PropertyType::Apartment),
            "condo" => Ok(PropertyType::Condo),
            "multi family" => Ok(PropertyType::MultiFamily),
            "commercial" => Ok(PropertyType::Commercial),
            _ => Err(ParsePropertyTypeError(s.to_string())),
        }
    }
}

/// Location bucket derived from property type, used only by risk reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationClass {
    Urban,
    Suburban,
}

/// A single property under evaluation. Immutable per analysis.
///
/// Money amounts are non-negative; `rental_income` and `expenses` are
/// monthly figures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyInput {
    /// Purchase price ($)
    pub price: f64,

    /// Monthly rental income ($)
    pub rental_income: f64,

    /// Monthly operating expenses ($)
    pub expenses: f64,

    /// Property age in years
    pub property_age: u32,

    /// Living area in square feet (descriptive only)
    pub area: f64,

    /// Property type
    pub property_type: PropertyType,

    /// Location description (descriptive only)
    pub location: String,
}

impl PropertyInput {
    /// Location bucket used by risk reporting: apartments and condos are
    /// treated as urban, everything else as suburban.
    pub fn location_class(&self) -> LocationClass {
        match self.property_type {
            PropertyType::Apartment | PropertyType::Condo => LocationClass::Urban,
            _ => LocationClass::Suburban,
        }
    }

    /// Annual gross rent ($)
    pub fn annual_rent(&self) -> f64 {
        self.rental_income * 12.0
    }
}

/// Financing terms for the purchase.
///
/// `loan_rate` and `tax_rate` are whole-number percentages (5.5 = 5.5%).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancingInput {
    /// Down payment ($), in [0, price]
    pub down_payment: f64,

    /// Annual loan interest rate (%)
    pub loan_rate: f64,

    /// Loan term in years
    pub loan_term: u32,

    /// One-time closing costs ($)
    pub closing_costs: f64,

    /// One-time renovation costs ($)
    pub renovation_costs: f64,

    /// Marginal income tax rate (%)
    pub tax_rate: f64,
}

impl FinancingInput {
    /// Financed amount: price less the down payment.
    pub fn loan_amount(&self, price: f64) -> f64 {
        price - self.down_payment
    }

    /// Total cash invested up front: down payment plus closing and
    /// renovation costs.
    pub fn initial_investment(&self) -> f64 {
        self.down_payment + self.closing_costs + self.renovation_costs
    }
}
