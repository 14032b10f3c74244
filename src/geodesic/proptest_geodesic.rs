//! Property-based tests for ring geometry using proptest.
//!
//! Centres range over the whole globe short of the exact poles, and radii
//! reach the antipode, so rings freely wrap over either pole.

use proptest::prelude::*;

use super::{GeoLocation, ImpactRing, RingBuilder, build_rings, haversine_distance_km};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Every ring closes and every vertex is a finite coordinate.
    #[test]
    fn prop_ring_closed_and_finite(
        lat in -89.9f64..=89.9,
        lng in -180.0f64..=180.0,
        radius_km in 0.0f64..=20_000.0,
    ) {
        let out = build_rings(GeoLocation::new(lat, lng), &[ImpactRing::new("r", radius_km)]);
        let polygon = &out[0].polygon;

        prop_assert!(polygon.is_closed(1e-9), "open ring {:?} .. {:?}",
            polygon.vertices.first(), polygon.vertices.last());
        for v in &polygon.vertices {
            prop_assert!(v.x.is_finite() && v.y.is_finite(), "vertex {:?}", v);
            prop_assert!(v.y.abs() <= 90.0 + 1e-9, "latitude out of range {:?}", v);
        }
    }

    /// Every vertex sits at the requested great-circle distance.
    #[test]
    fn prop_vertices_on_circle(
        lat in -89.9f64..=89.9,
        lng in -180.0f64..=180.0,
        radius_km in 1.0f64..=19_000.0,
        steps in 3usize..64,
    ) {
        let center = GeoLocation::new(lat, lng);
        let polygon = RingBuilder { steps, ..Default::default() }.circle(center, radius_km);

        prop_assert_eq!(polygon.vertices.len(), steps + 1);
        for v in &polygon.vertices {
            let d = haversine_distance_km(center, GeoLocation::new(v.y, v.x));
            prop_assert!((d - radius_km).abs() < 1e-3, "distance {} for radius {}", d, radius_km);
        }
    }
}
