//! Geodesic distance and coordinate resolution.
//!
//! Ranking only ever compares two distances measured from the same focus
//! point, so any metric that grows with true distance is acceptable.

use crate::core::{LatLon, PlaceResult};

/// Mean equatorial radius in metres (WGS84 semi-major axis)
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Distance metric between two coordinates.
pub trait GeoDistance: Send + Sync {
    /// Non-negative distance between `from` and `to`
    fn distance(&self, from: LatLon, to: LatLon) -> f64;

    /// Metric name for logging
    fn name(&self) -> &str;
}

/// Great-circle distance in metres using the haversine formula.
#[derive(Debug, Clone, Copy, Default)]
pub struct Haversine;

impl GeoDistance for Haversine {
    fn distance(&self, from: LatLon, to: LatLon) -> f64 {
        let lat1_rad = from.lat * DEG_TO_RAD;
        let lat2_rad = to.lat * DEG_TO_RAD;
        let delta_lat = (to.lat - from.lat) * DEG_TO_RAD;
        let delta_lon = (to.lon - from.lon) * DEG_TO_RAD;

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
        // rounding can push `a` a hair above 1 for antipodal points
        let c = 2.0 * a.sqrt().min(1.0).asin();

        EARTH_RADIUS_M * c
    }

    fn name(&self) -> &str {
        "haversine"
    }
}

impl<T: GeoDistance + ?Sized> GeoDistance for &T {
    fn distance(&self, from: LatLon, to: LatLon) -> f64 {
        (**self).distance(from, to)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Center coordinate of a result, if both latitude and longitude are present.
///
/// Non-finite coordinates count as missing.
pub fn center_of(result: &PlaceResult) -> Option<LatLon> {
    let center = result.center_point.as_ref()?;
    match (center.lat, center.lon) {
        (Some(lat), Some(lon)) if lat.is_finite() && lon.is_finite() => {
            Some(LatLon::new(lat, lon))
        }
        _ => None,
    }
}
