//! A single catalog entry.

use serde::Deserialize;

use crate::domain::{ModeId, ProviderMode, TransitVehicle};

use super::error::CatalogError;

fn default_multiplier() -> f64 {
    1.0
}

/// How one travel mode is looked up and scored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ModeDescriptor {
    pub id: ModeId,

    /// Mode the directions provider is asked for.
    pub provider_mode: ProviderMode,

    /// Vehicle filter for transit sub-modes.
    #[serde(default)]
    pub transit_vehicle: Option<TransitVehicle>,

    pub emissions_factor_kg_per_km: f64,

    /// Applied to the provider duration to model a slower derived mode.
    #[serde(default = "default_multiplier")]
    pub duration_multiplier: f64,
}

impl ModeDescriptor {
    pub fn new(id: ModeId, provider_mode: ProviderMode, emissions_factor_kg_per_km: f64) -> Self {
        Self {
            id,
            provider_mode,
            transit_vehicle: None,
            emissions_factor_kg_per_km,
            duration_multiplier: 1.0,
        }
    }

    pub fn with_vehicle(mut self, vehicle: TransitVehicle) -> Self {
        self.transit_vehicle = Some(vehicle);
        self
    }

    pub fn with_multiplier(mut self, multiplier: f64) -> Self {
        self.duration_multiplier = multiplier;
        self
    }

    /// The provider lookup this entry resolves to.
    ///
    /// Entries with equal keys can share one provider result.
    pub fn lookup_key(&self) -> (ProviderMode, Option<TransitVehicle>) {
        (self.provider_mode, self.transit_vehicle)
    }

    /// Whether this entry is synthesized from another mode's lookup rather
    /// than requested as itself.
    pub fn is_derived(&self) -> bool {
        self.transit_vehicle.is_some()
            || self.duration_multiplier != 1.0
            || self.id.as_str() != self.provider_mode.as_str()
    }

    pub(super) fn validate(&self) -> Result<(), CatalogError> {
        let factor = self.emissions_factor_kg_per_km;
        if !factor.is_finite() || factor < 0.0 {
            return Err(CatalogError::InvalidEmissionsFactor {
                mode: self.id.clone(),
                value: factor,
            });
        }

        let multiplier = self.duration_multiplier;
        if !multiplier.is_finite() || multiplier < 1.0 {
            return Err(CatalogError::InvalidDurationMultiplier {
                mode: self.id.clone(),
                value: multiplier,
            });
        }

        if self.transit_vehicle.is_some() && self.provider_mode != ProviderMode::Transit {
            return Err(CatalogError::VehicleWithoutTransit {
                mode: self.id.clone(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mode(s: &str) -> ModeId {
        ModeId::parse(s).unwrap()
    }

    #[test]
    fn builder_defaults() {
        let d = ModeDescriptor::new(mode("walking"), ProviderMode::Walking, 0.0);
        assert_eq!(d.duration_multiplier, 1.0);
        assert_eq!(d.transit_vehicle, None);
        assert!(!d.is_derived());
        assert!(d.validate().is_ok());
    }

    #[test]
    fn derived_detection() {
        let bus = ModeDescriptor::new(mode("bus"), ProviderMode::Transit, 0.089)
            .with_vehicle(TransitVehicle::Bus);
        assert!(bus.is_derived());

        let ebike =
            ModeDescriptor::new(mode("e-bike"), ProviderMode::Driving, 0.005).with_multiplier(1.5);
        assert!(ebike.is_derived());
        assert_eq!(ebike.lookup_key(), (ProviderMode::Driving, None));
    }

    #[test]
    fn rejects_negative_factor() {
        let d = ModeDescriptor::new(mode("walking"), ProviderMode::Walking, -0.1);
        assert!(matches!(
            d.validate(),
            Err(CatalogError::InvalidEmissionsFactor { .. })
        ));

        let d = ModeDescriptor::new(mode("walking"), ProviderMode::Walking, f64::NAN);
        assert!(d.validate().is_err());
    }

    #[test]
    fn rejects_speedup_multiplier() {
        let d = ModeDescriptor::new(mode("e-bike"), ProviderMode::Driving, 0.005)
            .with_multiplier(0.5);
        assert!(matches!(
            d.validate(),
            Err(CatalogError::InvalidDurationMultiplier { .. })
        ));
    }

    #[test]
    fn rejects_vehicle_on_non_transit() {
        let d = ModeDescriptor::new(mode("bus"), ProviderMode::Driving, 0.1)
            .with_vehicle(TransitVehicle::Bus);
        assert_eq!(
            d.validate(),
            Err(CatalogError::VehicleWithoutTransit { mode: mode("bus") })
        );
    }
}
