use crate::models::{CandidateLocation, Listing};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to categorize a new listing or post
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CategorizeRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[serde(default, alias = "content")]
    pub description: String,
}

/// Request for recommendations over a snapshot of available listings
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendationsRequest {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub preferences: Vec<String>,
    pub latitude: f64,
    pub longitude: f64,
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<u16>,
    #[serde(default)]
    pub listings: Vec<Listing>,
}

/// Request to alert users near the sender
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NearbyAlertRequest {
    #[validate(length(min = 1))]
    pub sender_id: String,
    pub latitude: f64,
    pub longitude: f64,
    #[validate(length(max = 500))]
    pub message: Option<String>,
    #[serde(default)]
    pub camera_used: bool,
    #[serde(default)]
    pub image_data: Option<String>,
    #[serde(default)]
    pub candidates: Vec<CandidateLocation>,
}

/// Request for available listings around a point
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NearbyListingsRequest {
    pub latitude: f64,
    pub longitude: f64,
    #[validate(range(min = 0.0, max = 20000.0))]
    pub radius_km: Option<f64>,
    #[serde(default)]
    pub listings: Vec<Listing>,
}
