// Core algorithm exports
pub mod categorizer;
pub mod distance;
pub mod proximity;
pub mod recommender;
pub mod tfidf;

pub use categorizer::categorize;
pub use distance::{distance_km, geodesic_distance, validate_coordinates, GeoError};
pub use proximity::{find_listings_within_radius, find_within_radius};
pub use recommender::{Recommender, RecommenderConfig};
pub use tfidf::{cosine_similarity, TfidfVectorizer, VectorizeError};
