//! Preset scenario definitions.
//!
//! Historical and hypothetical impacts spanning airbursts to extinction-level
//! events. Figures are representative published estimates, not precise
//! reconstructions.

use crate::geodesic::GeoLocation;

use super::ImpactScenario;

/// All available preset scenarios, smallest to largest.
pub static SCENARIOS: &[ImpactScenario] = &[
    CHELYABINSK,
    BARRINGER,
    CITY_KILLER,
    TUNGUSKA,
    APOPHIS,
    CHICXULUB,
];

/// Chelyabinsk airburst, 15 February 2013.
///
/// A ~20 m stony body entering at a shallow angle. Shattered windows
/// across the city; no global consequences.
pub static CHELYABINSK: ImpactScenario = ImpactScenario {
    id: "chelyabinsk",
    name: "Chelyabinsk (2013)",
    description: "20 m stony airburst over the southern Urals. Shallow entry, broken windows.",
    diameter: 20.0,
    density: 3300.0,
    velocity_km_s: 19.0,
    angle: 18.0,
    location: GeoLocation {
        lat: 54.82,
        lng: 61.12,
    },
};

/// Tunguska event, 30 June 1908.
///
/// Flattened ~2000 km² of Siberian forest.
pub static TUNGUSKA: ImpactScenario = ImpactScenario {
    id: "tunguska",
    name: "Tunguska (1908)",
    description: "~60 m body over Siberia. Flattened 80 million trees.",
    diameter: 60.0,
    density: 2000.0,
    velocity_km_s: 27.0,
    angle: 35.0,
    location: GeoLocation {
        lat: 60.886,
        lng: 101.894,
    },
};

/// Barringer (Meteor) Crater, Arizona, ~50,000 years ago.
pub static BARRINGER: ImpactScenario = ImpactScenario {
    id: "barringer",
    name: "Meteor Crater",
    description: "50 m iron impactor that excavated Arizona's Meteor Crater.",
    diameter: 50.0,
    density: 7800.0,
    velocity_km_s: 12.8,
    angle: 45.0,
    location: GeoLocation {
        lat: 35.027,
        lng: -111.022,
    },
};

/// A 2024 YR4-class "city killer" striking a dense metropolitan area.
pub static CITY_KILLER: ImpactScenario = ImpactScenario {
    id: "city_killer",
    name: "City Killer",
    description: "60 m stony asteroid, the size class of 2024 YR4, over a major city.",
    diameter: 60.0,
    density: 2600.0,
    velocity_km_s: 17.0,
    angle: 45.0,
    location: GeoLocation {
        lat: 19.076,
        lng: 72.878,
    },
};

/// Hypothetical Apophis strike.
///
/// Apophis will miss Earth in 2029; this shows what a hit would mean.
pub static APOPHIS: ImpactScenario = ImpactScenario {
    id: "apophis",
    name: "Apophis (hypothetical)",
    description: "370 m asteroid in the open Pacific. Regional devastation.",
    diameter: 370.0,
    density: 3200.0,
    velocity_km_s: 12.6,
    angle: 45.0,
    location: GeoLocation {
        lat: 30.0,
        lng: -140.0,
    },
};

/// Chicxulub, 66 million years ago.
///
/// The extinction-level impact that ended the Cretaceous.
pub static CHICXULUB: ImpactScenario = ImpactScenario {
    id: "chicxulub",
    name: "Chicxulub",
    description: "10 km impactor on the Yucatán. Ended the age of dinosaurs.",
    diameter: 10_000.0,
    density: 3000.0,
    velocity_km_s: 20.0,
    angle: 60.0,
    location: GeoLocation {
        lat: 21.4,
        lng: -89.5,
    },
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{ImpactParameters, ParameterRanges};

    #[test]
    fn test_scenarios_have_unique_ids() {
        let mut ids: Vec<&str> = SCENARIOS.iter().map(|s| s.id).collect();
        let original_len = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), original_len, "Scenario IDs must be unique");
    }

    #[test]
    fn test_scenario_count() {
        assert_eq!(SCENARIOS.len(), 6, "Should have exactly 6 scenarios");
    }

    #[test]
    fn test_all_scenarios_within_slider_ranges() {
        let ranges = ParameterRanges::default();
        for scenario in SCENARIOS.iter() {
            let params = ImpactParameters::from_scenario(scenario);
            assert!(
                params.validate(&ranges).is_ok(),
                "Scenario {} outside slider ranges: {:?}",
                scenario.id,
                params.validate(&ranges)
            );
        }
    }

    #[test]
    fn test_scenarios_ordered_by_energy() {
        let energies: Vec<f64> = SCENARIOS
            .iter()
            .map(|s| ImpactParameters::from_scenario(s).to_inputs().kinetic_energy())
            .collect();
        assert!(
            energies.windows(2).all(|w| w[0] < w[1]),
            "Scenarios should be listed smallest to largest: {energies:?}"
        );
    }
}
