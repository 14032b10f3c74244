//! Common test utilities for integration tests.

#![allow(dead_code)]

use impact_effects::geodesic::GeoLocation;
use impact_effects::impact::{ImpactInputs, ImpactResults, evaluate};
use impact_effects::types::{KilometersPerSecond, MetersPerSecond};

/// Evaluate an impact given speed in km/s, the unit scenarios are quoted in.
pub fn evaluate_km_s(
    diameter: f64,
    density: f64,
    velocity_km_s: f64,
    angle: f64,
) -> ImpactResults {
    evaluate(ImpactInputs::new(
        diameter,
        density,
        KilometersPerSecond(velocity_km_s),
        angle,
    ))
}

/// Evaluate an impact given speed in m/s.
pub fn evaluate_m_s(
    diameter: f64,
    density: f64,
    velocity_m_s: f64,
    angle: f64,
) -> ImpactResults {
    evaluate(ImpactInputs::new(
        diameter,
        density,
        MetersPerSecond(velocity_m_s),
        angle,
    ))
}

/// All numeric fields of a result bundle, by name.
pub fn numeric_fields(r: &ImpactResults) -> Vec<(&'static str, f64)> {
    vec![
        ("mass", r.mass),
        ("kinetic_energy", r.kinetic_energy),
        ("energy_tnt", r.energy_tnt),
        ("volcano_equivalent", r.volcano_equivalent),
        ("crater_diameter", r.crater_diameter),
        ("severe_damage_radius", r.severe_damage_radius),
        ("third_degree_burn_radius", r.third_degree_burn_radius),
        ("second_degree_burn_radius", r.second_degree_burn_radius),
        ("noise_damage_radius", r.noise_damage_radius),
        ("ozone_depletion_percent", r.ozone_depletion_percent),
    ]
}

/// Planar distance in degrees between a vertex and a location.
pub fn degrees_from(vertex: bevy::math::DVec2, center: GeoLocation) -> f64 {
    vertex.distance(center.to_lng_lat())
}
