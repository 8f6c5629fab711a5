use crate::models::Coordinates;
use geo::{GeodesicDistance, Point};
use thiserror::Error;

const METERS_PER_KM: f64 = 1000.0;

/// Errors raised when a latitude/longitude pair cannot describe a point on Earth
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeoError {
    #[error("Latitude must be within [-90, 90], got {0}")]
    InvalidLatitude(f64),

    #[error("Longitude must be within [-180, 180], got {0}")]
    InvalidLongitude(f64),
}

/// Check that a latitude/longitude pair is finite and in range
#[inline]
pub fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), GeoError> {
    if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
        return Err(GeoError::InvalidLatitude(latitude));
    }
    if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
        return Err(GeoError::InvalidLongitude(longitude));
    }
    Ok(())
}

/// Calculate the geodesic distance between two points in kilometers
///
/// Uses the WGS-84 ellipsoid (Karney's algorithm via `geo`), not the
/// spherical haversine approximation.
#[inline]
pub fn geodesic_distance(from: Coordinates, to: Coordinates) -> f64 {
    let a = Point::new(from.longitude(), from.latitude());
    let b = Point::new(to.longitude(), to.latitude());

    a.geodesic_distance(&b) / METERS_PER_KM
}

/// Geodesic distance in kilometers between two raw latitude/longitude pairs
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lon1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lon2` - Longitude of second point in degrees
///
/// # Returns
/// Distance in kilometers, or the first coordinate error found
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> Result<f64, GeoError> {
    let from = Coordinates::new(lat1, lon1)?;
    let to = Coordinates::new(lat2, lon2)?;
    Ok(geodesic_distance(from, to))
}
