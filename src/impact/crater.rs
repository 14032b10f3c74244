//! Point-source crater scaling.
//!
//! Transient crater size follows a Holsapple/Schmidt-style power law in
//! impactor radius, speed and entry angle; the final crater widens the
//! transient one by a fixed collapse factor.

use crate::types::{CRUSTAL_ROCK_DENSITY, DEG_TO_RAD, MetersPerSecond, STANDARD_GRAVITY};

/// Empirical constants of the crater scaling law.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CraterScaling {
    /// Material scaling exponent μ (dimensionless).
    pub mu: f64,
    /// Scaling coefficient k1 (dimensionless).
    pub k1: f64,
    /// Target rock density (kg/m³).
    pub target_density: f64,
    /// Surface gravity at the target (m/s²).
    pub gravity: f64,
    /// Widening from transient to final crater during gravitational collapse.
    pub collapse_factor: f64,
    /// Entry angles below this (degrees) are raised to it.
    pub min_angle_deg: f64,
}

impl Default for CraterScaling {
    fn default() -> Self {
        Self {
            mu: 0.22,
            k1: 1.161,
            target_density: CRUSTAL_ROCK_DENSITY,
            gravity: STANDARD_GRAVITY,
            collapse_factor: 1.3,
            min_angle_deg: 0.1,
        }
    }
}

impl CraterScaling {
    /// Clamp an entry angle (degrees from horizontal) into `[min_angle_deg, 90]`.
    ///
    /// The floor keeps `sin(θ)` away from zero for grazing impacts.
    pub fn clamp_angle(&self, angle_deg: f64) -> f64 {
        angle_deg.clamp(self.min_angle_deg, 90.0)
    }

    /// Transient crater diameter (meters).
    ///
    /// # Arguments
    /// * `diameter` - Impactor diameter (meters)
    /// * `density` - Impactor bulk density (kg/m³)
    /// * `velocity` - Impact speed
    /// * `angle_deg` - Entry angle from horizontal (degrees)
    ///
    /// # Returns
    /// May be NaN for non-physical inputs (negative radius or density);
    /// callers sanitize.
    pub fn transient_diameter(
        &self,
        diameter: f64,
        density: f64,
        velocity: MetersPerSecond,
        angle_deg: f64,
    ) -> f64 {
        let theta = self.clamp_angle(angle_deg) * DEG_TO_RAD;
        let radius = diameter / 2.0;

        self.k1
            * self.gravity.powf(-self.mu)
            * (density / self.target_density).powf(1.0 / 3.0)
            * radius.powf(1.0 - self.mu)
            * velocity.value().powf(2.0 * self.mu)
            * theta.sin().powf(1.0 / 3.0)
    }

    /// Final crater diameter (meters), never negative.
    pub fn final_diameter(
        &self,
        diameter: f64,
        density: f64,
        velocity: MetersPerSecond,
        angle_deg: f64,
    ) -> f64 {
        let transient = self.transient_diameter(diameter, density, velocity, angle_deg);
        // f64::max drops NaN in favour of the other operand
        (transient * self.collapse_factor).max(0.0)
    }
}
