//! User-facing impact parameters.
//!
//! The presentation layer edits speed in km/s; the model wants m/s. This
//! module owns that boundary, the default slider ranges, and advisory
//! range validation.

use std::ops::RangeInclusive;

use bevy::prelude::Resource;

use crate::geodesic::GeoLocation;
use crate::impact::ImpactInputs;
use crate::scenarios::ImpactScenario;
use crate::types::KilometersPerSecond;

/// Errors from validating user-entered impact parameters.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    #[error("{name} must be a finite number (got {value})")]
    NonFinite { name: &'static str, value: f64 },

    #[error("{name} = {value} is outside the supported range [{min}, {max}]")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// Representative impactor compositions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImpactorMaterial {
    /// Icy, porous cometary nucleus
    Cometary,
    /// C-type rubble
    Carbonaceous,
    /// S-type stony body
    Stony,
    /// M-type iron-nickel
    Iron,
}

impl ImpactorMaterial {
    pub const ALL: [ImpactorMaterial; 4] = [
        ImpactorMaterial::Cometary,
        ImpactorMaterial::Carbonaceous,
        ImpactorMaterial::Stony,
        ImpactorMaterial::Iron,
    ];

    /// Bulk density (kg/m³).
    pub fn density(&self) -> f64 {
        match self {
            ImpactorMaterial::Cometary => 600.0,
            ImpactorMaterial::Carbonaceous => 1700.0,
            ImpactorMaterial::Stony => 3000.0,
            ImpactorMaterial::Iron => 7800.0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ImpactorMaterial::Cometary => "Comet (ice)",
            ImpactorMaterial::Carbonaceous => "Carbonaceous",
            ImpactorMaterial::Stony => "Stony",
            ImpactorMaterial::Iron => "Iron",
        }
    }
}

/// Supported ranges for each parameter, matching the input sliders.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct ParameterRanges {
    /// Impactor diameter (meters).
    pub diameter: RangeInclusive<f64>,
    /// Bulk density (kg/m³).
    pub density: RangeInclusive<f64>,
    /// Entry speed (km/s). Earth escape speed to the solar-system maximum.
    pub velocity_km_s: RangeInclusive<f64>,
    /// Entry angle from horizontal (degrees).
    pub angle: RangeInclusive<f64>,
}

impl Default for ParameterRanges {
    fn default() -> Self {
        Self {
            diameter: 1.0..=20_000.0,
            density: 500.0..=8000.0,
            velocity_km_s: 11.0..=72.0,
            angle: 5.0..=90.0,
        }
    }
}

fn check(
    name: &'static str,
    value: f64,
    range: &RangeInclusive<f64>,
) -> Result<(), ParameterError> {
    if !value.is_finite() {
        return Err(ParameterError::NonFinite { name, value });
    }
    if !range.contains(&value) {
        return Err(ParameterError::OutOfRange {
            name,
            value,
            min: *range.start(),
            max: *range.end(),
        });
    }
    Ok(())
}

/// Impact parameters as the user enters them.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct ImpactParameters {
    /// Impactor diameter (meters).
    pub diameter: f64,
    /// Bulk density (kg/m³).
    pub density: f64,
    /// Entry speed.
    pub velocity: KilometersPerSecond,
    /// Entry angle from horizontal (degrees).
    pub angle: f64,
    /// Selected ground zero, if any.
    pub location: Option<GeoLocation>,
}

impl Default for ImpactParameters {
    fn default() -> Self {
        Self {
            diameter: 100.0,
            density: ImpactorMaterial::Stony.density(),
            velocity: KilometersPerSecond(20.0),
            angle: 45.0,
            location: None,
        }
    }
}

impl ImpactParameters {
    /// Parameters describing a preset scenario, aimed at its reference site.
    pub fn from_scenario(scenario: &ImpactScenario) -> Self {
        Self {
            diameter: scenario.diameter,
            density: scenario.density,
            velocity: KilometersPerSecond(scenario.velocity_km_s),
            angle: scenario.angle,
            location: Some(scenario.location),
        }
    }

    /// Replace the density with a material preset.
    pub fn with_material(mut self, material: ImpactorMaterial) -> Self {
        self.density = material.density();
        self
    }

    /// Model inputs, with speed converted to m/s.
    pub fn to_inputs(&self) -> ImpactInputs {
        ImpactInputs::new(self.diameter, self.density, self.velocity, self.angle)
    }

    /// Check every parameter against `ranges`, reporting the first violation.
    pub fn validate(&self, ranges: &ParameterRanges) -> Result<(), ParameterError> {
        check("diameter", self.diameter, &ranges.diameter)?;
        check("density", self.density, &ranges.density)?;
        check("velocity", self.velocity.value(), &ranges.velocity_km_s)?;
        check("angle", self.angle, &ranges.angle)?;
        Ok(())
    }
}
