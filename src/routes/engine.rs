use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::config::EngineSettings;
use crate::core::{categorize, find_listings_within_radius, find_within_radius, GeoError};
use crate::models::{
    CategorizeRequest, CategorizeResponse, Coordinates, ErrorResponse, HealthResponse,
    NearbyAlertRequest, NearbyAlertResponse, NearbyListingsRequest, NearbyListingsResponse,
    RecommendationsRequest, RecommendationsResponse,
};
use crate::services::{AlertBroadcast, IndexCache};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub index_cache: Arc<IndexCache>,
    pub engine: EngineSettings,
}

impl AppState {
    pub fn new(engine: EngineSettings, cache_entries: u64, cache_ttl_secs: u64) -> Self {
        let index_cache = IndexCache::new(engine.recommender_config(), cache_entries, cache_ttl_secs);
        Self {
            index_cache: Arc::new(index_cache),
            engine,
        }
    }
}

/// Configure all engine routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/categorize", web::post().to(categorize_text))
        .route("/recommendations", web::post().to(recommendations))
        .route("/listings/nearby", web::post().to(nearby_listings))
        .route("/alerts/nearby", web::post().to(alert_nearby_users));
}

fn bad_request(error: &str, message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: 400,
    })
}

fn invalid_location(e: GeoError) -> HttpResponse {
    bad_request("Invalid location", e.to_string())
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    tracing::trace!("Health check ({} cached indexes)", state.index_cache.entry_count());

    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Categorize a new listing or post
///
/// POST /api/v1/categorize
///
/// Request body:
/// ```json
/// { "title": "string", "description": "string" }
/// ```
async fn categorize_text(req: web::Json<CategorizeRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return bad_request("Validation failed", errors.to_string());
    }

    let category = categorize(&format!("{} {}", req.title, req.description));
    tracing::debug!("Categorized {:?} as {}", req.title, category);

    HttpResponse::Ok().json(CategorizeResponse { category })
}

/// Recommend available listings near the user
///
/// POST /api/v1/recommendations
///
/// Request body:
/// ```json
/// {
///   "preferences": ["string"],
///   "latitude": 40.0,
///   "longitude": -73.0,
///   "limit": 5,
///   "listings": [ { "id": "...", "title": "...", ... } ]
/// }
/// ```
async fn recommendations(
    state: web::Data<AppState>,
    req: web::Json<RecommendationsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return bad_request("Validation failed", errors.to_string());
    }

    let origin = match Coordinates::new(req.latitude, req.longitude) {
        Ok(origin) => origin,
        Err(e) => return invalid_location(e),
    };

    let limit = req
        .limit
        .map(usize::from)
        .unwrap_or(state.engine.default_limit)
        .min(state.engine.max_limit);

    let recommender = state.index_cache.get_or_train(&req.listings).await;
    let recommendations = recommender.get_recommendations(req.preferences.as_slice(), origin, limit);

    tracing::info!(
        "Returning {} recommendations for user {} (from {} indexed listings)",
        recommendations.len(),
        req.user_id.as_deref().unwrap_or("anonymous"),
        recommender.corpus_len()
    );

    HttpResponse::Ok().json(RecommendationsResponse {
        recommendations,
        total_candidates: req.listings.len(),
    })
}

/// Available listings around a point, each with its distance
///
/// POST /api/v1/listings/nearby
///
/// `radius_km` defaults to the configured listing radius (10 km).
async fn nearby_listings(
    state: web::Data<AppState>,
    req: web::Json<NearbyListingsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return bad_request("Validation failed", errors.to_string());
    }

    let origin = match Coordinates::new(req.latitude, req.longitude) {
        Ok(origin) => origin,
        Err(e) => return invalid_location(e),
    };

    let radius_km = req.radius_km.unwrap_or(state.engine.listing_radius_km);
    let listings = find_listings_within_radius(origin, &req.listings, radius_km);

    tracing::debug!(
        "Found {} of {} listings within {} km",
        listings.len(),
        req.listings.len(),
        radius_km
    );

    HttpResponse::Ok().json(NearbyListingsResponse {
        listings,
        radius_km,
        total_candidates: req.listings.len(),
    })
}

/// Select users near the sender and draft one alert each
///
/// POST /api/v1/alerts/nearby
///
/// The caller persists the returned alerts.
async fn alert_nearby_users(
    state: web::Data<AppState>,
    req: web::Json<NearbyAlertRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return bad_request("Validation failed", errors.to_string());
    }

    let origin = match Coordinates::new(req.latitude, req.longitude) {
        Ok(origin) => origin,
        Err(e) => return invalid_location(e),
    };

    let nearby = find_within_radius(
        origin,
        &req.candidates,
        state.engine.alert_radius_km,
        Some(req.sender_id.as_str()),
    );

    let broadcast = AlertBroadcast::new(req.sender_id.clone(), origin, req.message.clone())
        .with_camera(req.camera_used)
        .with_image(req.image_data.as_deref().is_some_and(|d| !d.is_empty()));
    let alerts = broadcast.build_alerts(&nearby, chrono::Utc::now());

    tracing::info!(
        "User {} alerted {} of {} candidates",
        req.sender_id,
        alerts.len(),
        req.candidates.len()
    );

    HttpResponse::Ok().json(NearbyAlertResponse {
        message: broadcast.summary(alerts.len()),
        total_nearby_users: nearby.len(),
        image_captured: req.camera_used,
        sender_location: origin,
        alerts,
    })
}
