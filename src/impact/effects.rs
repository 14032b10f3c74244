//! Yield-driven damage and environmental effects.
//!
//! Every relationship here is a closed-form power law of total yield. Each
//! law reads the yield unit its coefficient was calibrated in: blast and burn
//! radii use megatons, acoustic damage uses kilotons, and the categorical
//! acid-rain classification reads raw joules.

use std::fmt;

use crate::types::Yield;

/// Coefficients for the damage-radius and ozone laws.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DamageScaling {
    /// Severe (≈5 psi) blast radius coefficient, km per Mt^(1/3).
    pub severe_coefficient: f64,
    /// Third-degree burn radius coefficient, km per Mt^burn_exponent.
    pub third_degree_coefficient: f64,
    /// Second-degree burn radius coefficient, km per Mt^burn_exponent.
    pub second_degree_coefficient: f64,
    /// Exponent shared by both thermal radii.
    pub burn_exponent: f64,
    /// Second-degree radius is at least this multiple of the third-degree radius.
    pub burn_ratio_floor: f64,
    /// Window-break noise radius coefficient, km per kt^(1/4).
    pub noise_coefficient: f64,
    /// Ozone depletion coefficient, percent per Mt^(1/4).
    pub ozone_coefficient: f64,
    /// Upper bound on ozone depletion (percent), Chicxulub-class.
    pub ozone_ceiling: f64,
}

impl Default for DamageScaling {
    fn default() -> Self {
        Self {
            severe_coefficient: 4.5,
            third_degree_coefficient: 8.0,
            second_degree_coefficient: 13.0,
            burn_exponent: 0.40,
            burn_ratio_floor: 1.1,
            noise_coefficient: 15.0,
            ozone_coefficient: 5.0,
            ozone_ceiling: 50.0,
        }
    }
}

/// Damage radii around ground zero, all in kilometers.
///
/// Values are raw law outputs; non-physical yields can make them NaN.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DamageRadii {
    pub severe: f64,
    pub third_degree_burn: f64,
    pub second_degree_burn: f64,
    pub noise: f64,
}

impl DamageScaling {
    /// Compute all damage radii for a given yield.
    pub fn radii(&self, energy: &Yield) -> DamageRadii {
        let mt = energy.megatons;

        let severe = self.severe_coefficient * mt.powf(1.0 / 3.0);
        let third_degree_burn = self.third_degree_coefficient * mt.powf(self.burn_exponent);
        let mut second_degree_burn = self.second_degree_coefficient * mt.powf(self.burn_exponent);

        // 2nd-degree burns always reach farther than 3rd-degree
        let floor = third_degree_burn * self.burn_ratio_floor;
        if second_degree_burn < floor {
            second_degree_burn = floor;
        }

        let noise = self.noise_coefficient * energy.kilotons.powf(0.25);

        DamageRadii {
            severe,
            third_degree_burn,
            second_degree_burn,
            noise,
        }
    }

    /// Estimated global ozone depletion (percent) for a yield in megatons.
    ///
    /// Quarter-power growth saturating at `ozone_ceiling`. Zero for
    /// non-positive or non-finite yields.
    pub fn ozone_depletion_percent(&self, megatons: f64) -> f64 {
        if !megatons.is_finite() || megatons <= 0.0 {
            return 0.0;
        }
        (self.ozone_coefficient * megatons.powf(0.25)).clamp(0.0, self.ozone_ceiling)
    }
}

/// Likely extent of acid rain from shock-heated atmospheric nitrogen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AcidRainSeverity {
    /// Below 1e16 J.
    Localized,
    /// From 1e16 J.
    Regional,
    /// From 1e18 J.
    Severe,
}

impl AcidRainSeverity {
    /// Energy (J) at which acid rain becomes regional.
    pub const REGIONAL_THRESHOLD_J: f64 = 1e16;
    /// Energy (J) at which acid rain becomes global.
    pub const SEVERE_THRESHOLD_J: f64 = 1e18;

    /// Classify by raw kinetic energy in joules.
    pub fn from_energy(joules: f64) -> Self {
        if joules >= Self::SEVERE_THRESHOLD_J {
            AcidRainSeverity::Severe
        } else if joules >= Self::REGIONAL_THRESHOLD_J {
            AcidRainSeverity::Regional
        } else {
            AcidRainSeverity::Localized
        }
    }

    /// Display text.
    pub fn label(&self) -> &'static str {
        match self {
            AcidRainSeverity::Localized => "Localized acid rain possible",
            AcidRainSeverity::Regional => "Regional acid rain possible",
            AcidRainSeverity::Severe => "Severe acid rain likely (global)",
        }
    }
}

impl fmt::Display for AcidRainSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Global climate consequence of the impact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClimateImpact {
    /// Below 1 Mt.
    Negligible,
    /// From 1 Mt up to 1000 Mt.
    RegionalCooling,
    /// 1000 Mt and above.
    ImpactWinter,
}

impl ClimateImpact {
    /// Yield (Mt) from which regional cooling is expected.
    pub const REGIONAL_THRESHOLD_MT: f64 = 1.0;
    /// Yield (Mt) from which a global impact winter is expected.
    pub const GLOBAL_THRESHOLD_MT: f64 = 1000.0;

    /// Classify by yield in megatons. NaN classifies as negligible.
    pub fn from_megatons(megatons: f64) -> Self {
        if megatons.is_nan() || megatons < Self::REGIONAL_THRESHOLD_MT {
            ClimateImpact::Negligible
        } else if megatons < Self::GLOBAL_THRESHOLD_MT {
            ClimateImpact::RegionalCooling
        } else {
            ClimateImpact::ImpactWinter
        }
    }

    /// Display text.
    pub fn label(&self) -> &'static str {
        match self {
            ClimateImpact::Negligible => "Negligible global climate impact",
            ClimateImpact::RegionalCooling => "Regional cooling ('mini impact winter')",
            ClimateImpact::ImpactWinter => {
                "Global impact winter (years of cooling) followed by greenhouse warming"
            }
        }
    }
}

impl fmt::Display for ClimateImpact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
