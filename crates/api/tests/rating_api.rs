//! HTTP-level integration tests for ratings and per-venue rating views.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

fn rating(user_id: i64, venue_id: i64, service: i64, location: i64) -> serde_json::Value {
    json!({
        "service_rating": service,
        "location_rating": location,
        "review": "Friendly staff, easy load-in.",
        "user_id": user_id,
        "venue_id": venue_id,
    })
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_rating_returns_201(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/ratings", rating(1, 10, 4, 5)).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["id"].as_i64().unwrap() > 0);
    assert_eq!(json["service_rating"], 4);
    assert_eq!(json["location_rating"], 5);
    assert_eq!(json["venue_id"], 10);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn out_of_range_scores_are_rejected(pool: PgPool) {
    for (service, location) in [(0, 3), (3, 6)] {
        let app = common::build_test_app(pool.clone());
        let response = post_json(app, "/api/v1/ratings", rating(1, 10, service, location)).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["violations"][0]["kind"], "out_of_range");
    }

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/ratings").await).await;
    assert!(json["data"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_score_is_required(pool: PgPool) {
    let app = common::build_test_app(pool);
    let body = json!({ "location_rating": 3, "user_id": 1, "venue_id": 10 });
    let response = post_json(app, "/api/v1/ratings", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["violations"][0]["kind"], "required");
    assert_eq!(json["violations"][0]["field"], "service_rating");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn review_length_boundary(pool: PgPool) {
    let mut at_limit = rating(1, 10, 3, 3);
    at_limit["review"] = json!("a".repeat(500));
    let app = common::build_test_app(pool.clone());
    assert_eq!(
        post_json(app, "/api/v1/ratings", at_limit).await.status(),
        StatusCode::CREATED
    );

    let mut too_long = rating(2, 10, 3, 3);
    too_long["review"] = json!("a".repeat(501));
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/ratings", too_long).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["violations"][0]["kind"], "too_long");
    assert_eq!(json["violations"][0]["field"], "review");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn second_rating_for_same_venue_conflicts(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/v1/ratings", rating(7, 10, 5, 5)).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/ratings", rating(7, 10, 1, 1)).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
    assert_eq!(json["violations"][0]["kind"], "duplicate");

    // Same user, different venue is fine.
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/ratings", rating(7, 11, 1, 1)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_and_delete_rating(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(post_json(app, "/api/v1/ratings", rating(1, 10, 2, 2)).await).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/ratings/{id}"),
        json!({ "service_rating": 5 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["service_rating"], 5);
    assert_eq!(json["location_rating"], 2);

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/ratings/{id}"),
        json!({ "location_rating": 9 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/ratings/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/ratings/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn venue_ratings_and_summary(pool: PgPool) {
    for (user_id, venue_id) in [(1, 10), (2, 10), (3, 20)] {
        let app = common::build_test_app(pool.clone());
        let response = post_json(app, "/api/v1/ratings", rating(user_id, venue_id, 4, 4)).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/venues/10/ratings").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/venues/10/rating-summary").await).await;
    let summary = &json["data"];
    assert_eq!(summary["venue_id"], 10);
    assert_eq!(summary["rating_count"], 2);
    assert_eq!(summary["overall"], 4.0);
    assert_eq!(
        summary["stars"],
        json!(["filled", "filled", "filled", "filled", "unfilled"])
    );

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/venues/99/rating-summary").await).await;
    assert_eq!(json["data"]["rating_count"], 0);
    assert!(json["data"]["overall"].is_null());
    assert_eq!(
        json["data"]["stars"],
        json!(["unfilled", "unfilled", "unfilled", "unfilled", "unfilled"])
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_filters_by_user(pool: PgPool) {
    for (user_id, venue_id) in [(1, 10), (1, 11), (2, 10)] {
        let app = common::build_test_app(pool.clone());
        post_json(app, "/api/v1/ratings", rating(user_id, venue_id, 3, 3)).await;
    }

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/ratings?user_id=1").await).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert!(data.iter().all(|r| r["user_id"] == 1));
}
