//! Property and financing inputs, sample presets, and the preset loader

mod data;
mod presets;
pub mod loader;

pub use data::{
    FinancingInput, LocationClass, ParsePropertyTypeError, PropertyInput, PropertyType,
};
pub use loader::{load_presets, LoadError};
pub use presets::{find_preset, sample_properties, PropertyPreset};
