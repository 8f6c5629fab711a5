use crate::models::{Category, Coordinates, NearbyListing, RecommendationResult};
use crate::services::AlertDraft;
use serde::Serialize;

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategorizeResponse {
    pub category: Category,
}

/// Response for the recommendations endpoint
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationsResponse {
    pub recommendations: Vec<RecommendationResult>,
    pub total_candidates: usize,
}

/// Response for the nearby alert endpoint
#[derive(Debug, Clone, Serialize)]
pub struct NearbyAlertResponse {
    pub message: String,
    pub alerts: Vec<AlertDraft>,
    pub total_nearby_users: usize,
    pub image_captured: bool,
    pub sender_location: Coordinates,
}

/// Response for the nearby listings endpoint
#[derive(Debug, Clone, Serialize)]
pub struct NearbyListingsResponse {
    pub listings: Vec<NearbyListing>,
    pub radius_km: f64,
    pub total_candidates: usize,
}
