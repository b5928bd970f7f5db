//! Load property presets from a CSV file

use super::{PropertyInput, PropertyPreset, PropertyType};
use csv::Reader;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading a preset CSV.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read preset CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("unknown property type: {0}")]
    UnknownPropertyType(String),
}

/// Raw CSV row matching the preset file columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Price")]
    price: f64,
    #[serde(rename = "RentalIncome")]
    rental_income: f64,
    #[serde(rename = "Expenses")]
    expenses: f64,
    #[serde(rename = "Location")]
    location: String,
    #[serde(rename = "PropertyType")]
    property_type: String,
    #[serde(rename = "Area")]
    area: f64,
    #[serde(rename = "Age")]
    age: u32,
    #[serde(rename = "VacancyRate")]
    vacancy_rate: f64,
    #[serde(rename = "AppreciationRate")]
    appreciation_rate: f64,
}

impl CsvRow {
    fn to_preset(self) -> Result<PropertyPreset, LoadError> {
        let property_type: PropertyType = self
            .property_type
            .parse()
            .map_err(|_| LoadError::UnknownPropertyType(self.property_type.clone()))?;

        Ok(PropertyPreset {
            name: self.name,
            property: PropertyInput {
                price: self.price,
                rental_income: self.rental_income,
                expenses: self.expenses,
                property_age: self.age,
                area: self.area,
                property_type,
                location: self.location,
            },
            vacancy_rate: self.vacancy_rate,
            appreciation_rate: self.appreciation_rate,
        })
    }
}

/// Load property presets from a CSV file.
pub fn load_presets<P: AsRef<Path>>(path: P) -> Result<Vec<PropertyPreset>, LoadError> {
    let mut reader = Reader::from_path(path)?;
    let presets = read_presets(&mut reader)?;
    log::info!("loaded {} property presets", presets.len());
    Ok(presets)
}

/// Load property presets from any reader (e.g., string buffer).
pub fn load_presets_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<Vec<PropertyPreset>, LoadError> {
    let mut csv_reader = Reader::from_reader(reader);
    read_presets(&mut csv_reader)
}

fn read_presets<R: std::io::Read>(
    reader: &mut Reader<R>,
) -> Result<Vec<PropertyPreset>, LoadError> {
    let mut presets = Vec::new();
    for result in reader.deserialize() {
        let row: CsvRow = result?;
        presets.push(row.to_preset()?);
    }
    Ok(presets)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CSV: &str = "\
Name,Price,RentalIncome,Expenses,Location,PropertyType,Area,Age,VacancyRate,AppreciationRate
Downtown Apartment,250000,2000,600,Urban,Apartment,850,15,5,3.5
Suburban House,350000,2500,800,Suburban,Single Family,1800,12,4,3.0
";

    #[test]
    fn test_load_from_reader() {
        let presets = load_presets_from_reader(SAMPLE_CSV.as_bytes()).unwrap();
        assert_eq!(presets.len(), 2);

        let first = &presets[0];
        assert_eq!(first.name, "Downtown Apartment");
        assert_eq!(first.property.property_type, PropertyType::Apartment);
        assert_eq!(first.property.property_age, 15);
        assert_eq!(first.appreciation_rate, 3.5);
    }

    #[test]
    fn test_unknown_property_type() {
        let csv = "\
Name,Price,RentalIncome,Expenses,Location,PropertyType,Area,Age,VacancyRate,AppreciationRate
Odd One,100000,900,300,Rural,Castle,5000,200,6,1.0
";
        let err = load_presets_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::UnknownPropertyType(t) if t == "Castle"));
    }
}
