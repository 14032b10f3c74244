//! Impact Effects - Asteroid Impact Consequence Estimator
//!
//! A library crate turning impactor parameters into energy, crater size,
//! damage radii and environmental effects, plus geodesic overlay rings for
//! map display.

pub mod assessment;
pub mod geodesic;
pub mod impact;
pub mod params;
pub mod scenarios;
pub mod types;
