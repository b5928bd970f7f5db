//! Built-in sample properties for quick evaluations

use super::{PropertyInput, PropertyType};

/// A named sample property with its market rates.
///
/// Vacancy and appreciation live here rather than on [`PropertyInput`]
/// because they are market assumptions tied to the sample, not intrinsic
/// property attributes.
#[derive(Debug, Clone)]
pub struct PropertyPreset {
    pub name: String,
    pub property: PropertyInput,
    pub vacancy_rate: f64,
    pub appreciation_rate: f64,
}

/// The built-in sample property database.
pub fn sample_properties() -> Vec<PropertyPreset> {
    vec![
        PropertyPreset {
            name: "Downtown Apartment".to_string(),
            property: PropertyInput {
                price: 250_000.0,
                rental_income: 2_000.0,
                expenses: 600.0,
                property_age: 15,
                area: 850.0,
                property_type: PropertyType::Apartment,
                location: "Urban".to_string(),
            },
            vacancy_rate: 5.0,
            appreciation_rate: 3.5,
        },
        PropertyPreset {
            name: "Suburban House".to_string(),
            property: PropertyInput {
                price: 350_000.0,
                rental_income: 2_500.0,
                expenses: 800.0,
                property_age: 12,
                area: 1_800.0,
                property_type: PropertyType::SingleFamily,
                location: "Suburban".to_string(),
            },
            vacancy_rate: 4.0,
            appreciation_rate: 3.0,
        },
        PropertyPreset {
            name: "Beach Condo".to_string(),
            property: PropertyInput {
                price: 400_000.0,
                rental_income: 3_200.0,
                expenses: 1_100.0,
                property_age: 5,
                area: 1_100.0,
                property_type: PropertyType::Condo,
                location: "Coastal".to_string(),
            },
            vacancy_rate: 8.0,
            appreciation_rate: 4.2,
        },
        PropertyPreset {
            name: "Rural Farm House".to_string(),
            property: PropertyInput {
                price: 180_000.0,
                rental_income: 1_400.0,
                expenses: 500.0,
                property_age: 35,
                area: 1_600.0,
                property_type: PropertyType::SingleFamily,
                location: "Rural".to_string(),
            },
            vacancy_rate: 6.0,
            appreciation_rate: 2.0,
        },
    ]
}

/// Find a preset by its display name (case-insensitive).
pub fn find_preset(name: &str) -> Option<PropertyPreset> {
    sample_properties()
        .into_iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_database() {
        let presets = sample_properties();
        assert_eq!(presets.len(), 4);

        let condo = &presets[2];
        assert_eq!(condo.name, "Beach Condo");
        assert_eq!(condo.property.price, 400_000.0);
        assert_eq!(condo.vacancy_rate, 8.0);
    }

    #[test]
    fn test_find_preset() {
        assert!(find_preset("Suburban House").is_some());
        assert!(find_preset("suburban house").is_some());
        assert!(find_preset("Penthouse").is_none());
    }
}
