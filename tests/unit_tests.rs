// Unit tests for Foodshare Engine

use foodshare_engine::core::{
    categorize,
    distance::{distance_km, geodesic_distance, GeoError},
    find_within_radius,
};
use foodshare_engine::models::{CandidateLocation, Category, Coordinates};

#[test]
fn test_categorize_is_deterministic() {
    let text = "Homemade vegetable soup with fresh bread";
    let first = categorize(text);
    for _ in 0..10 {
        assert_eq!(categorize(text), first);
    }
}

#[test]
fn test_categorize_examples() {
    assert_eq!(categorize("random gibberish xyz"), Category::Other);
    assert_eq!(categorize("fresh banana and apple salad"), Category::Fruits);
    assert_eq!(categorize("Greek yogurt and cheddar cheese"), Category::Dairy);
    assert_eq!(categorize("Cold brew coffee"), Category::Beverages);
    assert_eq!(categorize("Bag of popcorn and crackers"), Category::Snacks);
}

#[test]
fn test_category_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Category::Prepared).unwrap(), "\"prepared\"");
    assert_eq!(Category::Other.to_string(), "other");
}

#[test]
fn test_distance_manhattan_to_brooklyn() {
    // Manhattan to Brooklyn is approximately 5-10 km
    let distance = distance_km(40.7580, -73.9855, 40.6782, -73.9442).unwrap();
    assert!(distance > 5.0 && distance < 15.0);
}

#[test]
fn test_distance_symmetry_grid() {
    let points = [
        (40.7128, -74.0060),
        (-33.8688, 151.2093),
        (51.5074, -0.1278),
        (0.0, 179.9),
        (89.0, 0.0),
    ];

    for &(lat1, lon1) in &points {
        for &(lat2, lon2) in &points {
            let a = Coordinates::new(lat1, lon1).unwrap();
            let b = Coordinates::new(lat2, lon2).unwrap();
            let ab = geodesic_distance(a, b);
            let ba = geodesic_distance(b, a);
            assert!(ab >= 0.0);
            assert!((ab - ba).abs() < 1e-6, "asymmetric: {} vs {}", ab, ba);
        }
    }
}

#[test]
fn test_invalid_coordinates_rejected() {
    assert_eq!(Coordinates::new(-90.5, 0.0), Err(GeoError::InvalidLatitude(-90.5)));
    assert_eq!(Coordinates::new(0.0, 200.0), Err(GeoError::InvalidLongitude(200.0)));
    assert!(distance_km(40.0, -73.0, f64::INFINITY, 0.0).is_err());
}

#[test]
fn test_proximity_excludes_sender() {
    let origin = Coordinates::new(40.7128, -74.0060).unwrap();
    let candidates = vec![
        CandidateLocation { id: "1".to_string(), latitude: 40.7128, longitude: -74.0060 },
        CandidateLocation { id: "2".to_string(), latitude: 40.7200, longitude: -74.0100 },
    ];

    let found = find_within_radius(origin, &candidates, 5.0, Some("1"));

    assert!(found.iter().all(|c| c.recipient_id != "1"));
    assert_eq!(found.len(), 1);
}

#[test]
fn test_proximity_boundary_is_inclusive() {
    let origin = Coordinates::new(40.0, -73.0).unwrap();
    let edge = Coordinates::new(40.03, -73.0).unwrap();
    let radius = geodesic_distance(origin, edge);

    let candidates = vec![CandidateLocation { id: "edge".to_string(), latitude: 40.03, longitude: -73.0 }];

    assert_eq!(find_within_radius(origin, &candidates, radius, None).len(), 1);
    assert!(find_within_radius(origin, &candidates, radius - 0.001, None).is_empty());
}
