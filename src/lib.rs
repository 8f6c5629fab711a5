//! Foodshare Engine - categorization, recommendation and proximity alerts
//!
//! This library provides the matching core used by the food sharing app:
//! keyword categorization of new listings, TF-IDF recommendations filtered
//! by geodesic distance, and the nearby-user fan-out for alerts.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{categorize, find_listings_within_radius, find_within_radius, geodesic_distance, Recommender, RecommenderConfig};
pub use models::{AlertCandidate, CandidateLocation, Category, Coordinates, Listing, RecommendationResult, UserProfile};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        assert_eq!(categorize("random gibberish xyz"), Category::Other);
        assert!(Coordinates::new(40.7128, -74.0060).is_ok());
    }
}
