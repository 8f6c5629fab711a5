use crate::core::distance::geodesic_distance;
use crate::models::{AlertCandidate, CandidateLocation, Coordinates, Listing, NearbyListing};

/// Select candidates within `radius_km` of `origin`
///
/// Input order is preserved. The candidate whose id equals `exclude_id`
/// (the sender) is never returned, and candidates with invalid
/// coordinates are skipped.
pub fn find_within_radius(
    origin: Coordinates,
    candidates: &[CandidateLocation],
    radius_km: f64,
    exclude_id: Option<&str>,
) -> Vec<AlertCandidate> {
    candidates
        .iter()
        .filter(|c| exclude_id != Some(c.id.as_str()))
        .filter_map(|c| {
            let location = match Coordinates::new(c.latitude, c.longitude) {
                Ok(l) => l,
                Err(e) => {
                    tracing::debug!("Skipping candidate {}: {}", c.id, e);
                    return None;
                }
            };

            let distance_km = geodesic_distance(origin, location);
            (distance_km <= radius_km).then(|| AlertCandidate {
                recipient_id: c.id.clone(),
                distance_km,
            })
        })
        .collect()
}

/// Available listings within `radius_km` of `origin`, with their distance
///
/// Input order is preserved; unavailable listings and listings with
/// invalid coordinates are skipped.
pub fn find_listings_within_radius(
    origin: Coordinates,
    listings: &[Listing],
    radius_km: f64,
) -> Vec<NearbyListing> {
    listings
        .iter()
        .filter(|listing| listing.is_available)
        .filter_map(|listing| {
            let location = match listing.coordinates() {
                Ok(l) => l,
                Err(e) => {
                    tracing::debug!("Skipping listing {}: {}", listing.id, e);
                    return None;
                }
            };

            let distance_km = geodesic_distance(origin, location);
            (distance_km <= radius_km).then(|| NearbyListing {
                listing: listing.clone(),
                distance_km,
            })
        })
        .collect()
}
