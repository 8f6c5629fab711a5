use crate::core::distance::{validate_coordinates, GeoError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

impl Coordinates {
    /// Build a point, rejecting non-finite or out-of-range values
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, GeoError> {
        validate_coordinates(latitude, longitude)?;
        Ok(Self { latitude, longitude })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Fixed food taxonomy assigned by the categorizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Fruits,
    Vegetables,
    Grains,
    Protein,
    Dairy,
    Snacks,
    Beverages,
    Prepared,
    #[serde(other)]
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Fruits => "fruits",
            Category::Vegetables => "vegetables",
            Category::Grains => "grains",
            Category::Protein => "protein",
            Category::Dairy => "dairy",
            Category::Snacks => "snacks",
            Category::Beverages => "beverages",
            Category::Prepared => "prepared",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A food listing offered for pickup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    #[serde(default)]
    pub quantity: String,
    pub latitude: f64,
    pub longitude: f64,
    pub available_until: DateTime<Utc>,
    #[serde(default = "default_true")]
    pub is_available: bool,
}

fn default_true() -> bool {
    true
}

impl Listing {
    /// Create a new available listing, categorized from its title and description
    pub fn create(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        quantity: impl Into<String>,
        location: Coordinates,
        available_until: DateTime<Utc>,
    ) -> Self {
        let title = title.into();
        let description = description.into();
        let category = crate::core::categorize(&format!("{} {}", title, description));

        Self {
            id: id.into(),
            title,
            description,
            category,
            quantity: quantity.into(),
            latitude: location.latitude(),
            longitude: location.longitude(),
            available_until,
            is_available: true,
        }
    }

    /// Stored location, validated
    pub fn coordinates(&self) -> Result<Coordinates, GeoError> {
        Coordinates::new(self.latitude, self.longitude)
    }

    /// Text the recommender indexes for this listing
    pub fn document_text(&self) -> String {
        format!("{} {} {}", self.title, self.description, self.category)
    }

    /// Mark the listing unavailable once its window has passed.
    ///
    /// Returns true only when the flag actually flipped. Never re-enables.
    pub fn expire_if_due(&mut self, now: DateTime<Utc>) -> bool {
        if self.is_available && self.available_until < now {
            self.is_available = false;
            return true;
        }
        false
    }
}

/// The slice of a user profile the engine consumes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub preferences: Vec<String>,
}

impl UserProfile {
    pub fn location(&self) -> Result<Coordinates, GeoError> {
        Coordinates::new(self.latitude, self.longitude)
    }

    /// Decode preference terms stored as a JSON array string.
    ///
    /// Missing, empty or malformed values decode to no preferences.
    pub fn preferences_from_json(raw: Option<&str>) -> Vec<String> {
        match raw.map(str::trim) {
            Some(s) if !s.is_empty() => serde_json::from_str(s).unwrap_or_else(|e| {
                tracing::debug!("Ignoring malformed stored preferences: {}", e);
                Vec::new()
            }),
            _ => Vec::new(),
        }
    }
}

/// A ranked recommendation
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationResult {
    pub listing: Listing,
    pub similarity_score: f64,
    pub distance_km: f64,
}

/// An available listing found near a search point
#[derive(Debug, Clone, Serialize)]
pub struct NearbyListing {
    pub listing: Listing,
    pub distance_km: f64,
}

/// A user location considered for an alert fan-out
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateLocation {
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// An alert recipient selected by the proximity filter
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertCandidate {
    pub recipient_id: String,
    pub distance_km: f64,
}
