//! Property-based tests for the impact model using proptest.
//!
//! These tests verify monotonicity and output invariants across the full
//! range of impactor parameters the presentation layer can produce.

use proptest::prelude::*;

use super::{DamageScaling, ImpactInputs, ImpactModel, ImpactResults, evaluate};
use crate::types::MetersPerSecond;

fn numeric_fields(r: &ImpactResults) -> [(&'static str, f64); 11] {
    [
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
        ("energy_megatons", r.energy_megatons()),
    ]
}

/// Quantities that must grow with both diameter and speed.
fn growing_fields(r: &ImpactResults) -> [(&'static str, f64); 6] {
    [
        ("energy_tnt", r.energy_tnt),
        ("crater_diameter", r.crater_diameter),
        ("severe_damage_radius", r.severe_damage_radius),
        ("third_degree_burn_radius", r.third_degree_burn_radius),
        ("second_degree_burn_radius", r.second_degree_burn_radius),
        ("noise_damage_radius", r.noise_damage_radius),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every numeric output is finite and non-negative for in-domain inputs.
    #[test]
    fn prop_outputs_finite_non_negative(
        diameter in 0.1f64..20_000.0,
        density in 500.0f64..8000.0,
        velocity in 100.0f64..72_000.0,
        angle in 0.001f64..=90.0,
    ) {
        let inputs = ImpactInputs::new(diameter, density, MetersPerSecond(velocity), angle);
        let results = evaluate(inputs);

        for (name, value) in numeric_fields(&results) {
            prop_assert!(
                value.is_finite() && value >= 0.0,
                "{} = {} for {:?}", name, value, inputs
            );
        }
    }

    /// Energy, crater and every damage radius grow strictly with diameter.
    #[test]
    fn prop_monotonic_in_diameter(
        diameter in 1.0f64..10_000.0,
        factor in 1.01f64..2.0,
        density in 500.0f64..8000.0,
        velocity in 11_000.0f64..72_000.0,
        angle in 1.0f64..=90.0,
    ) {
        let small = evaluate(ImpactInputs::new(diameter, density, MetersPerSecond(velocity), angle));
        let large = evaluate(ImpactInputs::new(diameter * factor, density, MetersPerSecond(velocity), angle));

        for ((name, a), (_, b)) in growing_fields(&small).into_iter().zip(growing_fields(&large)) {
            prop_assert!(b > a, "{} did not grow with diameter: {} -> {}", name, a, b);
        }
    }

    /// Energy, crater and every damage radius grow strictly with speed.
    #[test]
    fn prop_monotonic_in_velocity(
        diameter in 1.0f64..20_000.0,
        density in 500.0f64..8000.0,
        velocity in 11_000.0f64..50_000.0,
        factor in 1.01f64..1.4,
        angle in 1.0f64..=90.0,
    ) {
        let slow = evaluate(ImpactInputs::new(diameter, density, MetersPerSecond(velocity), angle));
        let fast = evaluate(ImpactInputs::new(diameter, density, MetersPerSecond(velocity * factor), angle));

        for ((name, a), (_, b)) in growing_fields(&slow).into_iter().zip(growing_fields(&fast)) {
            prop_assert!(b > a, "{} did not grow with velocity: {} -> {}", name, a, b);
        }
    }

    /// Second-degree burns reach at least as far as third-degree burns,
    /// even with a second-degree coefficient tuned below the floor.
    #[test]
    fn prop_burn_radius_ordering(
        diameter in 1.0f64..20_000.0,
        velocity in 11_000.0f64..72_000.0,
        second_degree_coefficient in 0.0f64..20.0,
    ) {
        let model = ImpactModel {
            damage: DamageScaling { second_degree_coefficient, ..Default::default() },
            ..Default::default()
        };
        let r = model.evaluate(ImpactInputs::new(diameter, 3000.0, MetersPerSecond(velocity), 45.0));

        prop_assert!(r.second_degree_burn_radius >= r.third_degree_burn_radius);
        if second_degree_coefficient < 8.0 * 1.1 {
            let expected = r.third_degree_burn_radius * 1.1;
            prop_assert!((r.second_degree_burn_radius - expected).abs() <= expected * 1e-12);
        }
    }

    /// Ozone depletion stays within [0, 50] for any positive yield.
    #[test]
    fn prop_ozone_bounded(megatons in 1e-12f64..1e12) {
        let pct = DamageScaling::default().ozone_depletion_percent(megatons);
        prop_assert!((0.0..=50.0).contains(&pct), "ozone {} out of range at {} Mt", pct, megatons);
    }

    /// Angles at or below the floor all behave like 0.1°.
    #[test]
    fn prop_angle_floor(angle in -90.0f64..=0.1) {
        let at_floor = evaluate(ImpactInputs::new(500.0, 3000.0, MetersPerSecond(20_000.0), 0.1));
        let clamped = evaluate(ImpactInputs::new(500.0, 3000.0, MetersPerSecond(20_000.0), angle));
        prop_assert_eq!(at_floor.crater_diameter, clamped.crater_diameter);
    }
}
