//! Impact effects model.
//!
//! Converts an impactor's diameter, density, speed and entry angle into
//! energy, crater size, damage radii and environmental classifications.
//! The model is a coarse educational approximation built from published
//! empirical power laws:
//! - Mass and kinetic energy from a uniform sphere
//! - Crater size from point-source scaling ([`crater`])
//! - Blast, thermal and acoustic radii from yield ([`effects`])
//!
//! Evaluation is total: degenerate inputs produce zeros, never NaN or a panic.

pub mod crater;
pub mod effects;

#[cfg(test)]
mod proptest_impact;

use bevy::color::Color;
use bevy::prelude::Resource;

use crate::geodesic::ImpactRing;
use crate::types::{
    METERS_PER_KM, MetersPerSecond, REFERENCE_ERUPTION_MEGATONS, Yield,
    finite_positive_or_zero,
};

pub use crater::CraterScaling;
pub use effects::{AcidRainSeverity, ClimateImpact, DamageRadii, DamageScaling};

/// Physical description of the impactor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImpactInputs {
    /// Impactor diameter (meters).
    pub diameter: f64,
    /// Bulk density (kg/m³).
    pub density: f64,
    /// Impact speed. Convert from km/s before constructing.
    pub velocity: MetersPerSecond,
    /// Entry angle from horizontal (degrees), 90 = vertical.
    pub angle: f64,
}

impl ImpactInputs {
    /// Create a new set of impact inputs.
    pub fn new(
        diameter: f64,
        density: f64,
        velocity: impl Into<MetersPerSecond>,
        angle: f64,
    ) -> Self {
        Self {
            diameter,
            density,
            velocity: velocity.into(),
            angle,
        }
    }

    /// Mass of a uniform sphere (kg).
    pub fn mass(&self) -> f64 {
        let radius = self.diameter / 2.0;
        (4.0 / 3.0) * std::f64::consts::PI * radius.powi(3) * self.density
    }

    /// Kinetic energy at impact (J).
    pub fn kinetic_energy(&self) -> f64 {
        let v = self.velocity.value();
        0.5 * self.mass() * v * v
    }
}

/// Derived effects of a single impact.
///
/// Every numeric field is finite and non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImpactResults {
    /// Impactor mass (kg).
    pub mass: f64,
    /// Kinetic energy (J).
    pub kinetic_energy: f64,
    /// Yield (tons TNT).
    pub energy_tnt: f64,
    /// Yield as multiples of a ~200 Mt reference eruption.
    pub volcano_equivalent: f64,
    /// Final crater diameter (km).
    pub crater_diameter: f64,
    /// Severe blast damage radius (km).
    pub severe_damage_radius: f64,
    /// Third-degree burn radius (km).
    pub third_degree_burn_radius: f64,
    /// Second-degree burn radius (km), never below the third-degree radius.
    pub second_degree_burn_radius: f64,
    /// Window-breaking noise radius (km).
    pub noise_damage_radius: f64,
    /// Estimated ozone depletion (percent).
    pub ozone_depletion_percent: f64,
    pub acid_rain_severity: AcidRainSeverity,
    pub climate_impact: ClimateImpact,
}

impl ImpactResults {
    /// Yield in kilotons TNT.
    pub fn energy_kilotons(&self) -> f64 {
        Yield::from_joules(self.kinetic_energy).kilotons
    }

    /// Yield in megatons TNT.
    pub fn energy_megatons(&self) -> f64 {
        Yield::from_joules(self.kinetic_energy).megatons
    }

    /// Rings for the overlay in a fixed effect order: noise, burns, blast,
    /// crater.
    ///
    /// Which ring is outermost depends on yield; [`RingBuilder::build`]
    /// sorts them into paint order. Effects with zero radius are omitted.
    ///
    /// [`RingBuilder::build`]: crate::geodesic::RingBuilder::build
    pub fn effect_rings(&self) -> Vec<ImpactRing> {
        let candidates = [
            (
                "noise_damage",
                self.noise_damage_radius,
                Color::srgba(0.55, 0.75, 1.0, 0.25),
                "Window-breaking noise",
            ),
            (
                "second_degree_burn",
                self.second_degree_burn_radius,
                Color::srgba(1.0, 0.8, 0.2, 0.30),
                "2nd-degree burns",
            ),
            (
                "third_degree_burn",
                self.third_degree_burn_radius,
                Color::srgba(1.0, 0.5, 0.1, 0.35),
                "3rd-degree burns",
            ),
            (
                "severe_damage",
                self.severe_damage_radius,
                Color::srgba(0.9, 0.15, 0.1, 0.40),
                "Severe blast damage",
            ),
            (
                "crater",
                self.crater_diameter / 2.0,
                Color::srgba(0.25, 0.2, 0.15, 0.60),
                "Crater rim",
            ),
        ];

        candidates
            .into_iter()
            .filter(|(_, radius, _, _)| *radius > 0.0)
            .map(|(id, radius, color, label)| {
                ImpactRing::new(id, radius).with_color(color).with_label(label)
            })
            .collect()
    }

    /// One-line digest for logs.
    pub fn summary(&self) -> String {
        format!(
            "{:.3e} Mt TNT ({:.2}x Krakatoa), crater {:.2} km, severe damage {:.1} km, \
             burns {:.1}/{:.1} km, noise {:.1} km, ozone -{:.1}%, {}; {}",
            self.energy_megatons(),
            self.volcano_equivalent,
            self.crater_diameter,
            self.severe_damage_radius,
            self.third_degree_burn_radius,
            self.second_degree_burn_radius,
            self.noise_damage_radius,
            self.ozone_depletion_percent,
            self.acid_rain_severity,
            self.climate_impact,
        )
    }
}

/// Impact model with tunable empirical coefficients.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq)]
pub struct ImpactModel {
    pub crater: CraterScaling,
    pub damage: DamageScaling,
}

impl ImpactModel {
    /// Evaluate all effects of an impact.
    pub fn evaluate(&self, inputs: ImpactInputs) -> ImpactResults {
        let mass = inputs.mass();
        let kinetic_energy = inputs.kinetic_energy();
        let energy = Yield::from_joules(kinetic_energy);

        let volcano_equivalent = energy.megatons / REFERENCE_ERUPTION_MEGATONS;

        let crater_m = self.crater.final_diameter(
            inputs.diameter,
            inputs.density,
            inputs.velocity,
            inputs.angle,
        );

        let radii = self.damage.radii(&energy);
        let ozone = self.damage.ozone_depletion_percent(energy.megatons);

        let safe = finite_positive_or_zero;
        let third_degree_burn_radius = safe(radii.third_degree_burn);
        // Ordering must hold after sanitizing too
        let second_degree_burn_radius =
            safe(radii.second_degree_burn).max(third_degree_burn_radius);

        ImpactResults {
            mass: safe(mass),
            kinetic_energy: safe(kinetic_energy),
            energy_tnt: safe(energy.tons),
            volcano_equivalent: safe(volcano_equivalent),
            crater_diameter: safe(crater_m / METERS_PER_KM),
            severe_damage_radius: safe(radii.severe),
            third_degree_burn_radius,
            second_degree_burn_radius,
            noise_damage_radius: safe(radii.noise),
            ozone_depletion_percent: ozone.clamp(0.0, 100.0),
            acid_rain_severity: AcidRainSeverity::from_energy(kinetic_energy),
            climate_impact: ClimateImpact::from_megatons(energy.megatons),
        }
    }
}

/// Evaluate an impact with the default coefficients.
pub fn evaluate(inputs: ImpactInputs) -> ImpactResults {
    ImpactModel::default().evaluate(inputs)
}
