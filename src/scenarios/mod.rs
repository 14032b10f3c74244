//! Preset impact scenarios.
//!
//! Immutable reference data for the presentation layer's "try an example"
//! list. Each scenario maps onto [`ImpactParameters`](crate::params::ImpactParameters)
//! through `ImpactParameters::from_scenario`.

pub mod presets;

use crate::geodesic::GeoLocation;

pub use presets::SCENARIOS;

/// A predefined impact configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImpactScenario {
    /// Unique identifier for the scenario.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Brief description of the scenario.
    pub description: &'static str,
    /// Impactor diameter (meters).
    pub diameter: f64,
    /// Bulk density (kg/m³).
    pub density: f64,
    /// Entry speed (km/s).
    pub velocity_km_s: f64,
    /// Entry angle from horizontal (degrees).
    pub angle: f64,
    /// Ground zero.
    pub location: GeoLocation,
}

/// Get a scenario by ID.
pub fn find_scenario(id: &str) -> Option<&'static ImpactScenario> {
    SCENARIOS.iter().find(|s| s.id == id)
}
