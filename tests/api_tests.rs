// HTTP tests for the engine routes

use actix_web::{test, web, App};
use foodshare_engine::config::EngineSettings;
use foodshare_engine::routes::{configure_routes, AppState};
use serde_json::{json, Value};

fn state() -> AppState {
    AppState::new(EngineSettings::default(), 16, 60)
}

fn listing(id: &str, title: &str, description: &str, lat: f64, available: bool) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": description,
        "category": "other",
        "quantity": "1",
        "latitude": lat,
        "longitude": -73.0,
        "available_until": "2099-01-01T00:00:00Z",
        "is_available": available
    })
}

#[actix_web::test]
async fn test_health() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
}

#[actix_web::test]
async fn test_categorize_endpoint() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/categorize")
        .set_json(json!({ "title": "Fresh Bananas", "description": "and an apple" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["category"], "fruits");

    let req = test::TestRequest::post()
        .uri("/api/v1/categorize")
        .set_json(json!({ "title": "", "description": "apple" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_recommendations_endpoint() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state()))
            .configure(configure_routes),
    )
    .await;

    let payload = json!({
        "user_id": "u1",
        "preferences": ["apples"],
        "latitude": 40.0,
        "longitude": -73.0,
        "listings": [
            listing("near", "Fresh Apples", "ripe red apples free", 40.01, true),
            listing("hidden", "Apples", "crisp apples", 40.01, false),
            listing("far", "Apples", "crisp apples", 41.0, true),
        ]
    });

    let req = test::TestRequest::post()
        .uri("/api/v1/recommendations")
        .set_json(&payload)
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let recommendations = body["recommendations"].as_array().unwrap();
    assert_eq!(recommendations.len(), 1);
    assert_eq!(recommendations[0]["listing"]["id"], "near");
    assert!(recommendations[0]["similarity_score"].as_f64().unwrap() > 0.0);
    assert!(recommendations[0]["distance_km"].as_f64().unwrap() < 2.0);
    assert_eq!(body["total_candidates"], 3);
}

#[actix_web::test]
async fn test_recommendations_rejects_invalid_origin() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/recommendations")
        .set_json(json!({ "preferences": [], "latitude": 120.0, "longitude": 0.0, "listings": [] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_nearby_alerts_endpoint() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state()))
            .configure(configure_routes),
    )
    .await;

    let payload = json!({
        "sender_id": "u1",
        "latitude": 40.0,
        "longitude": -73.0,
        "message": "Soup on the porch",
        "camera_used": true,
        "candidates": [
            { "id": "u1", "latitude": 40.0, "longitude": -73.0 },
            { "id": "u2", "latitude": 40.02, "longitude": -73.0 },
            { "id": "u3", "latitude": 40.2, "longitude": -73.0 }
        ]
    });

    let req = test::TestRequest::post()
        .uri("/api/v1/alerts/nearby")
        .set_json(&payload)
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["total_nearby_users"], 1);
    assert_eq!(body["message"], "Alert sent to 1 nearby users with photo attachment");
    let alerts = body["alerts"].as_array().unwrap();
    assert_eq!(alerts[0]["recipient_id"], "u2");
    assert_eq!(alerts[0]["message"], "📸 Soup on the porch");
    assert_eq!(body["sender_location"]["latitude"], 40.0);
}

#[actix_web::test]
async fn test_nearby_listings_endpoint() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state()))
            .configure(configure_routes),
    )
    .await;

    let payload = json!({
        "latitude": 40.0,
        "longitude": -73.0,
        "listings": [
            listing("near", "Bagels", "a dozen bagels", 40.05, true),
            listing("gone", "Bagels", "a dozen bagels", 40.01, false),
            listing("far", "Bagels", "a dozen bagels", 40.2, true),
            listing("here", "Bagels", "a dozen bagels", 40.0, true),
        ]
    });

    let req = test::TestRequest::post()
        .uri("/api/v1/listings/nearby")
        .set_json(&payload)
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["radius_km"], 10.0);
    assert_eq!(body["total_candidates"], 4);
    let listings = body["listings"].as_array().unwrap();
    let ids: Vec<&str> = listings.iter().map(|l| l["listing"]["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["near", "here"]);
    assert!(listings[0]["distance_km"].as_f64().unwrap() > 5.0);
    assert_eq!(listings[1]["distance_km"].as_f64().unwrap(), 0.0);

    // A wider radius picks up the far listing too
    let mut wide = payload.clone();
    wide["radius_km"] = json!(50.0);
    let req = test::TestRequest::post()
        .uri("/api/v1/listings/nearby")
        .set_json(&wide)
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["listings"].as_array().unwrap().len(), 3);

    let req = test::TestRequest::post()
        .uri("/api/v1/listings/nearby")
        .set_json(json!({ "latitude": 0.0, "longitude": 200.0 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}
