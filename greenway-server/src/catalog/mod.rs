//! Mode catalog.
//!
//! A declarative table of the travel modes a comparison covers. Each entry
//! names the provider mode it is requested as, an optional transit vehicle
//! filter, its emissions factor and a duration multiplier for modes derived
//! from a faster one. Adding a mode is a data change, not a code change.

mod descriptor;
mod error;

pub use descriptor::ModeDescriptor;
pub use error::CatalogError;

use std::collections::HashSet;
use std::path::Path;

use crate::domain::{ModeId, ProviderMode, TransitVehicle};

/// Validated, ordered set of mode descriptors.
#[derive(Debug, Clone, PartialEq)]
pub struct ModeCatalog {
    modes: Vec<ModeDescriptor>,
}

impl ModeCatalog {
    /// Build a catalog, validating every entry and id uniqueness.
    pub fn new(modes: Vec<ModeDescriptor>) -> Result<Self, CatalogError> {
        if modes.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for mode in &modes {
            mode.validate()?;
            if !seen.insert(mode.id.clone()) {
                return Err(CatalogError::DuplicateMode(mode.id.clone()));
            }
        }

        Ok(Self { modes })
    }

    /// Parse a catalog from a JSON array of descriptors.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let modes: Vec<ModeDescriptor> =
            serde_json::from_str(json).map_err(|e| CatalogError::Json {
                message: e.to_string(),
            })?;
        Self::new(modes)
    }

    /// Load a catalog from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json_str(&json)
    }

    pub fn get(&self, id: &ModeId) -> Option<&ModeDescriptor> {
        self.modes.iter().find(|m| &m.id == id)
    }

    /// Descriptors in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &ModeDescriptor> {
        self.modes.iter()
    }

    pub fn len(&self) -> usize {
        self.modes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }
}

impl Default for ModeCatalog {
    fn default() -> Self {
        default_catalog()
    }
}

/// The built-in eight-mode catalog.
///
/// Emissions factors are in kg CO₂ per passenger-km. E-bikes and e-scooters
/// are derived from the driving route, slowed down by their multiplier.
pub fn default_catalog() -> ModeCatalog {
    let mode = |id: &str| ModeId::parse(id).expect("built-in mode ids are valid");

    ModeCatalog {
        modes: vec![
            ModeDescriptor::new(mode("driving"), ProviderMode::Driving, 0.18),
            ModeDescriptor::new(mode("bus"), ProviderMode::Transit, 0.089)
                .with_vehicle(TransitVehicle::Bus),
            ModeDescriptor::new(mode("tram"), ProviderMode::Transit, 0.029)
                .with_vehicle(TransitVehicle::Tram),
            ModeDescriptor::new(mode("subway"), ProviderMode::Transit, 0.028)
                .with_vehicle(TransitVehicle::Subway),
            ModeDescriptor::new(mode("walking"), ProviderMode::Walking, 0.0),
            ModeDescriptor::new(mode("bicycling"), ProviderMode::Bicycling, 0.0),
            ModeDescriptor::new(mode("e-bike"), ProviderMode::Driving, 0.005)
                .with_multiplier(1.5),
            ModeDescriptor::new(mode("e-scooter"), ProviderMode::Driving, 0.007)
                .with_multiplier(1.5 * 1.6),
        ],
    }
}
