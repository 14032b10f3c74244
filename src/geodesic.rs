//! Geodesic rings around an impact point.
//!
//! Turns a list of effect radii into closed polygons approximating circles
//! of constant great-circle distance on a spherical Earth. Polygons are
//! emitted outermost first so stacked fills paint inner rings on top.

use std::borrow::Cow;
use std::f64::consts::TAU;

use bevy::color::Color;
use bevy::math::DVec2;
use bevy::prelude::Resource;

use crate::types::{DEG_TO_RAD, EARTH_RADIUS_KM, RAD_TO_DEG};

#[cfg(test)]
mod proptest_geodesic;

/// Geographic coordinate in degrees on a spherical Earth.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GeoLocation {
    /// Latitude (degrees, -90 to 90)
    pub lat: f64,
    /// Longitude (degrees)
    pub lng: f64,
}

impl GeoLocation {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// As a `(lng, lat)` vertex, the order polygons use.
    pub fn to_lng_lat(self) -> DVec2 {
        DVec2::new(self.lng, self.lat)
    }
}

/// One effect radius to draw around an impact point.
#[derive(Clone, Debug, PartialEq)]
pub struct ImpactRing {
    /// Stable identifier, e.g. `"severe_damage"`.
    pub id: Cow<'static, str>,
    /// Great-circle radius (km). Negative values are treated as zero.
    pub radius_km: f64,
    /// Fill color, passed through untouched.
    pub color: Option<Color>,
    /// Display label, passed through untouched.
    pub label: Option<Cow<'static, str>>,
}

impl ImpactRing {
    pub fn new(id: impl Into<Cow<'static, str>>, radius_km: f64) -> Self {
        Self {
            id: id.into(),
            radius_km,
            color: None,
            label: None,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_label(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Radius with negatives and NaN floored to zero.
    fn clamped_radius_km(&self) -> f64 {
        // f64::max drops NaN in favour of the other operand
        self.radius_km.max(0.0)
    }
}

/// Closed ring of `(lng, lat)` vertices in degrees.
///
/// The first and last vertex are the same point.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeoPolygon {
    pub vertices: Vec<DVec2>,
}

impl GeoPolygon {
    /// True when the ring ends where it starts (within `tolerance` degrees).
    pub fn is_closed(&self, tolerance: f64) -> bool {
        match (self.vertices.first(), self.vertices.last()) {
            (Some(first), Some(last)) => first.distance(*last) <= tolerance,
            _ => false,
        }
    }

    /// Vertices as `[lng, lat]` pairs, the layout GeoJSON-style consumers expect.
    pub fn to_lng_lat_pairs(&self) -> Vec<[f64; 2]> {
        self.vertices.iter().map(|v| [v.x, v.y]).collect()
    }
}

/// A ring paired with its polygon.
#[derive(Clone, Debug, PartialEq)]
pub struct GeodesicRing {
    pub ring: ImpactRing,
    pub polygon: GeoPolygon,
}

/// Polygon resolution and sphere used when building rings.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct RingBuilder {
    /// Bearing steps per ring; the polygon has `steps + 1` vertices.
    pub steps: usize,
    /// Sphere radius (km).
    pub earth_radius_km: f64,
}

impl Default for RingBuilder {
    fn default() -> Self {
        Self {
            steps: 128,
            earth_radius_km: EARTH_RADIUS_KM,
        }
    }
}

impl RingBuilder {
    /// Fewest bearing steps that still outline an area.
    pub const MIN_STEPS: usize = 3;

    /// Build a polygon for every ring, largest radius first.
    ///
    /// Rings with equal radius keep their input order.
    pub fn build(&self, center: GeoLocation, rings: &[ImpactRing]) -> Vec<GeodesicRing> {
        let mut sorted: Vec<&ImpactRing> = rings.iter().collect();
        sorted.sort_by(|a, b| b.clamped_radius_km().total_cmp(&a.clamped_radius_km()));

        sorted
            .into_iter()
            .map(|ring| GeodesicRing {
                polygon: self.circle(center, ring.clamped_radius_km()),
                ring: ring.clone(),
            })
            .collect()
    }

    /// Polygon approximating the circle of `radius_km` around `center`.
    pub fn circle(&self, center: GeoLocation, radius_km: f64) -> GeoPolygon {
        let steps = self.steps.max(Self::MIN_STEPS);
        let angular_radius = radius_km.max(0.0) / self.earth_radius_km;

        let mut vertices: Vec<DVec2> = (0..steps)
            .map(|i| {
                let bearing = TAU * i as f64 / steps as f64;
                destination_point(center, bearing, angular_radius).to_lng_lat()
            })
            .collect();

        // Recomputing at TAU can land 360° away when the ring crosses a pole
        vertices.push(vertices[0]);

        GeoPolygon { vertices }
    }
}

/// Build rings with the default resolution (128 steps).
pub fn build_rings(center: GeoLocation, rings: &[ImpactRing]) -> Vec<GeodesicRing> {
    RingBuilder::default().build(center, rings)
}

/// Point reached by travelling `angular_distance` radians along the great
/// circle leaving `start` at `bearing` radians (clockwise from north).
pub fn destination_point(start: GeoLocation, bearing: f64, angular_distance: f64) -> GeoLocation {
    let phi1 = start.lat * DEG_TO_RAD;
    let lambda1 = start.lng * DEG_TO_RAD;
    let (sin_phi1, cos_phi1) = phi1.sin_cos();
    let (sin_delta, cos_delta) = angular_distance.sin_cos();
    let (sin_beta, cos_beta) = bearing.sin_cos();

    // Rounding can push |sin φ2| past 1 near the poles
    let sin_phi2 = (sin_phi1 * cos_delta + cos_phi1 * sin_delta * cos_beta).clamp(-1.0, 1.0);
    let phi2 = sin_phi2.asin();

    let lambda2 =
        lambda1 + (sin_beta * sin_delta * cos_phi1).atan2(cos_delta - sin_phi1 * sin_phi2);

    GeoLocation {
        lat: phi2 * RAD_TO_DEG,
        lng: lambda2 * RAD_TO_DEG,
    }
}

/// Great-circle distance between two points (km) on a sphere of `EARTH_RADIUS_KM`.
pub fn haversine_distance_km(a: GeoLocation, b: GeoLocation) -> f64 {
    let phi1 = a.lat * DEG_TO_RAD;
    let phi2 = b.lat * DEG_TO_RAD;
    let d_phi = (b.lat - a.lat) * DEG_TO_RAD;
    let d_lambda = (b.lng - a.lng) * DEG_TO_RAD;

    let h = (d_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().min(1.0).asin()
}
