// Model exports
pub mod domain;
pub mod feed;
pub mod requests;
pub mod responses;

pub use domain::{AlertCandidate, CandidateLocation, Category, Coordinates, Listing, NearbyListing, RecommendationResult, UserProfile};
pub use feed::{FoodPost, LikeAction};
pub use requests::{CategorizeRequest, NearbyAlertRequest, NearbyListingsRequest, RecommendationsRequest};
pub use responses::{CategorizeResponse, ErrorResponse, HealthResponse, NearbyAlertResponse, NearbyListingsResponse, RecommendationsResponse};
