//! Core physical constants and unit-carrying types for impact estimation.

use std::fmt;

/// Physical constants (SI units)

/// Energy released by one ton of TNT (J). Exact by convention.
pub const JOULES_PER_TON_TNT: f64 = 4.184e9;

/// Tons per kiloton
pub const TONS_PER_KILOTON: f64 = 1e3;

/// Tons per megaton
pub const TONS_PER_MEGATON: f64 = 1e6;

/// Reference eruption yield used for volcano-equivalence (Krakatoa, 1883), in megatons TNT
pub const REFERENCE_ERUPTION_MEGATONS: f64 = 200.0;

/// Mean Earth radius for spherical geodesy (km)
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Standard surface gravity (m/s²)
pub const STANDARD_GRAVITY: f64 = 9.81;

/// Bulk density of typical crustal target rock (kg/m³)
pub const CRUSTAL_ROCK_DENSITY: f64 = 2700.0;

/// Meters per kilometer
pub const METERS_PER_KM: f64 = 1000.0;

/// Degrees to radians conversion factor
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Radians to degrees conversion factor
pub const RAD_TO_DEG: f64 = 180.0 / std::f64::consts::PI;

/// Speed in meters per second.
///
/// The impact model consumes this unit only. Anything entered or displayed
/// in km/s must pass through [`KilometersPerSecond`] and be converted.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct MetersPerSecond(pub f64);

/// Speed in kilometers per second, the unit used for entry and display.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct KilometersPerSecond(pub f64);

impl MetersPerSecond {
    /// Raw value in m/s
    pub fn value(self) -> f64 {
        self.0
    }
}

impl KilometersPerSecond {
    /// Raw value in km/s
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<KilometersPerSecond> for MetersPerSecond {
    fn from(v: KilometersPerSecond) -> Self {
        MetersPerSecond(v.0 * METERS_PER_KM)
    }
}

impl From<MetersPerSecond> for KilometersPerSecond {
    fn from(v: MetersPerSecond) -> Self {
        KilometersPerSecond(v.0 / METERS_PER_KM)
    }
}

impl fmt::Display for MetersPerSecond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0} m/s", self.0)
    }
}

impl fmt::Display for KilometersPerSecond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} km/s", self.0)
    }
}

/// Explosive yield expressed in every TNT unit the scaling laws use.
///
/// Built once from joules so each downstream law can pick the unit its
/// coefficient was calibrated in without re-deriving it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Yield {
    /// Tons of TNT
    pub tons: f64,
    /// Kilotons of TNT
    pub kilotons: f64,
    /// Megatons of TNT
    pub megatons: f64,
}

impl Yield {
    /// Convert kinetic energy in joules to TNT equivalence.
    pub fn from_joules(joules: f64) -> Self {
        let tons = joules / JOULES_PER_TON_TNT;
        Self {
            tons,
            kilotons: tons / TONS_PER_KILOTON,
            megatons: tons / TONS_PER_MEGATON,
        }
    }
}

/// Pass a value through only if it is finite and positive, otherwise zero.
pub fn finite_positive_or_zero(x: f64) -> f64 {
    if x.is_finite() && x > 0.0 { x } else { 0.0 }
}
