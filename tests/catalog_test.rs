//! Catalog behavior end-to-end: categories, services with derived slugs,
//! soft deletion, cascading category deletes, and child records.

mod common;

use axum::http::{Method, StatusCode};
use common::{decimal_field, response_json, TestApp};
use rust_decimal_macros::dec;
use serde_json::json;

#[tokio::test]
async fn creating_a_service_derives_its_slug() {
    let app = TestApp::new().await;
    let category = app.seed_category("Cleaning").await;

    let response = app
        .request(
            Method::POST,
            "/api/v1/services",
            Some(json!({
                "category_id": category.id,
                "name": "Deep Clean & Shine",
                "thumbnail": "thumbnails/deep-clean.png",
                "description": "Full-house deep cleaning",
                "duration_minutes": 180,
                "price": "150000",
                "is_popular": true
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response_json(response).await;
    assert_eq!(body["slug"], "deep-clean-shine");
    assert_eq!(body["name"], "Deep Clean & Shine");
    assert_eq!(decimal_field(&body["price"]), dec!(150000));
}

#[tokio::test]
async fn renaming_a_service_recomputes_the_slug() {
    let app = TestApp::new().await;
    let category = app.seed_category("Cleaning").await;
    let service = app
        .seed_service(category.id, "Carpet Wash", dec!(90000))
        .await;
    assert_eq!(service.slug, "carpet-wash");

    let response = app
        .request(
            Method::PUT,
            &format!("/api/v1/services/{}", service.id),
            Some(json!({ "name": "Premium Carpet Wash" })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["slug"], "premium-carpet-wash");

    // Updating the price alone leaves the slug untouched
    let response = app
        .request(
            Method::PUT,
            &format!("/api/v1/services/{}", service.id),
            Some(json!({ "price": "95000" })),
        )
        .await;
    let body = response_json(response).await;
    assert_eq!(body["slug"], "premium-carpet-wash");
}

#[tokio::test]
async fn services_are_reachable_by_slug() {
    let app = TestApp::new().await;
    let category = app.seed_category("Cleaning").await;
    let service = app
        .seed_service(category.id, "Window Detailing", dec!(45000))
        .await;

    let response = app
        .request(Method::GET, "/api/v1/services/slug/window-detailing", None)
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["id"], service.id.to_string());
}

#[tokio::test]
async fn soft_deleted_services_disappear_from_reads() {
    let app = TestApp::new().await;
    let category = app.seed_category("Cleaning").await;
    let service = app
        .seed_service(category.id, "Sofa Shampoo", dec!(60000))
        .await;

    let response = app
        .request(
            Method::DELETE,
            &format!("/api/v1/services/{}", service.id),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .request(Method::GET, &format!("/api/v1/services/{}", service.id), None)
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.request(Method::GET, "/api/v1/services", None).await;
    let body = response_json(response).await;
    assert_eq!(body["pagination"]["total"], 0);
}

#[tokio::test]
async fn listing_filters_by_category_and_popularity() {
    let app = TestApp::new().await;
    let cleaning = app.seed_category("Cleaning").await;
    let plumbing = app.seed_category("Plumbing").await;

    app.seed_service(cleaning.id, "Deep Clean", dec!(150000))
        .await;
    app.seed_service(plumbing.id, "Pipe Fix", dec!(80000)).await;

    let response = app
        .request(
            Method::GET,
            &format!("/api/v1/services?category_id={}", cleaning.id),
            None,
        )
        .await;
    let body = response_json(response).await;
    assert_eq!(body["pagination"]["total"], 1);
    assert_eq!(body["data"][0]["name"], "Deep Clean");

    let response = app
        .request(Method::GET, "/api/v1/services?popular=true", None)
        .await;
    let body = response_json(response).await;
    assert_eq!(body["pagination"]["total"], 0);
}

#[tokio::test]
async fn deleting_a_category_cascades_to_its_services() {
    let app = TestApp::new().await;
    let category = app.seed_category("Gardening").await;
    let service = app
        .seed_service(category.id, "Lawn Mowing", dec!(50000))
        .await;

    let response = app
        .request(
            Method::DELETE,
            &format!("/api/v1/categories/{}", category.id),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .request(Method::GET, &format!("/api/v1/services/{}", service.id), None)
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .request(
            Method::GET,
            &format!("/api/v1/categories/{}", category.id),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn benefits_and_testimonials_follow_their_service() {
    let app = TestApp::new().await;
    let category = app.seed_category("Cleaning").await;
    let service = app
        .seed_service(category.id, "Move-Out Clean", dec!(200000))
        .await;

    let response = app
        .request(
            Method::POST,
            &format!("/api/v1/services/{}/benefits", service.id),
            Some(json!({ "name": "Eco-friendly supplies" })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let benefit = response_json(response).await;

    let response = app
        .request(
            Method::POST,
            &format!("/api/v1/services/{}/testimonials", service.id),
            Some(json!({
                "name": "Rina",
                "photo": "photos/rina.jpg",
                "message": "Spotless result, highly recommended."
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .request(
            Method::GET,
            &format!("/api/v1/services/{}/benefits", service.id),
            None,
        )
        .await;
    let body = response_json(response).await;
    assert_eq!(body.as_array().map(Vec::len), Some(1));

    let response = app
        .request(
            Method::DELETE,
            &format!(
                "/api/v1/services/{}/benefits/{}",
                service.id,
                benefit["id"].as_str().unwrap()
            ),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .request(
            Method::GET,
            &format!("/api/v1/services/{}/benefits", service.id),
            None,
        )
        .await;
    let body = response_json(response).await;
    assert_eq!(body.as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn creating_a_service_under_an_unknown_category_fails() {
    let app = TestApp::new().await;

    let response = app
        .request(
            Method::POST,
            "/api/v1/services",
            Some(json!({
                "category_id": uuid::Uuid::new_v4(),
                "name": "Orphan Service",
                "thumbnail": "thumbnails/orphan.png",
                "description": "No category to live in",
                "duration_minutes": 30,
                "price": "10000"
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_probes_respond() {
    let app = TestApp::new().await;

    let response = app.request(Method::GET, "/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.request(Method::GET, "/health/ready", None).await;
    assert_eq!(response.status(), StatusCode::OK);
}
