//! HTTP-level integration tests for the enrollment lifecycle.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_empty, seed_event, seed_user, token_for};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_enroll_returns_201(pool: PgPool) {
    let member = seed_user(&pool, "member@lab.example", "member").await;
    let event = seed_event(&pool, "Seminar", None, 60).await;
    let app = common::build_test_app(pool);

    let response = post_empty(
        app,
        &format!("/api/v1/events/{}/enroll", event.id),
        &token_for(&member),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["status"], "enrolled");
    assert_eq!(json["user_id"], member.id);
    assert_eq!(json["event_id"], event.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_enroll_twice_returns_409(pool: PgPool) {
    let member = seed_user(&pool, "member@lab.example", "member").await;
    let event = seed_event(&pool, "Seminar", None, 60).await;
    let token = token_for(&member);
    let uri = format!("/api/v1/events/{}/enroll", event.id);

    let app = common::build_test_app(pool.clone());
    assert_eq!(
        post_empty(app, &uri, &token).await.status(),
        StatusCode::CREATED
    );

    let app = common::build_test_app(pool);
    let response = post_empty(app, &uri, &token).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "DUPLICATE_ENROLLMENT");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_capacity_exhaustion_returns_409(pool: PgPool) {
    let u1 = seed_user(&pool, "a@lab.example", "member").await;
    let u2 = seed_user(&pool, "b@lab.example", "member").await;
    let u3 = seed_user(&pool, "c@lab.example", "member").await;
    let event = seed_event(&pool, "Tiny Workshop", Some(2), 60).await;
    let uri = format!("/api/v1/events/{}/enroll", event.id);

    for user in [&u1, &u2] {
        let app = common::build_test_app(pool.clone());
        assert_eq!(
            post_empty(app, &uri, &token_for(user)).await.status(),
            StatusCode::CREATED
        );
    }

    let app = common::build_test_app(pool);
    let response = post_empty(app, &uri, &token_for(&u3)).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CAPACITY_EXHAUSTED");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_enroll_after_start_returns_422(pool: PgPool) {
    let member = seed_user(&pool, "member@lab.example", "member").await;
    // Started an hour ago, still running.
    let event = seed_event(&pool, "Started", None, -60).await;
    let app = common::build_test_app(pool);

    let response = post_empty(
        app,
        &format!("/api/v1/events/{}/enroll", event.id),
        &token_for(&member),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_enroll_missing_event_returns_404(pool: PgPool) {
    let member = seed_user(&pool, "member@lab.example", "member").await;
    let app = common::build_test_app(pool);

    let response = post_empty(app, "/api/v1/events/999999/enroll", &token_for(&member)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_cancel_then_reenroll_reuses_row(pool: PgPool) {
    let member = seed_user(&pool, "member@lab.example", "member").await;
    let event = seed_event(&pool, "Seminar", Some(5), 60).await;
    let token = token_for(&member);
    let enroll_uri = format!("/api/v1/events/{}/enroll", event.id);
    let cancel_uri = format!("/api/v1/events/{}/cancel", event.id);

    let app = common::build_test_app(pool.clone());
    let first = body_json(post_empty(app, &enroll_uri, &token).await).await;
    let first_id = first["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let cancelled = post_empty(app, &cancel_uri, &token).await;
    assert_eq!(cancelled.status(), StatusCode::OK);
    let json = body_json(cancelled).await;
    assert_eq!(json["status"], "cancelled");

    let app = common::build_test_app(pool);
    let second = post_empty(app, &enroll_uri, &token).await;
    assert_eq!(second.status(), StatusCode::CREATED);
    let json = body_json(second).await;
    assert_eq!(json["status"], "enrolled");
    assert_eq!(json["id"].as_i64().unwrap(), first_id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_cancel_twice_returns_409(pool: PgPool) {
    let member = seed_user(&pool, "member@lab.example", "member").await;
    let event = seed_event(&pool, "Seminar", None, 60).await;
    let token = token_for(&member);
    let cancel_uri = format!("/api/v1/events/{}/cancel", event.id);

    let app = common::build_test_app(pool.clone());
    post_empty(
        app,
        &format!("/api/v1/events/{}/enroll", event.id),
        &token,
    )
    .await;

    let app = common::build_test_app(pool.clone());
    assert_eq!(
        post_empty(app, &cancel_uri, &token).await.status(),
        StatusCode::OK
    );

    let app = common::build_test_app(pool);
    let response = post_empty(app, &cancel_uri, &token).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INVALID_STATUS");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_cancel_without_enrollment_returns_404(pool: PgPool) {
    let member = seed_user(&pool, "member@lab.example", "member").await;
    let event = seed_event(&pool, "Seminar", None, 60).await;
    let app = common::build_test_app(pool);

    let response = post_empty(
        app,
        &format!("/api/v1/events/{}/cancel", event.id),
        &token_for(&member),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reenroll_respects_capacity(pool: PgPool) {
    let u1 = seed_user(&pool, "a@lab.example", "member").await;
    let u2 = seed_user(&pool, "b@lab.example", "member").await;
    let event = seed_event(&pool, "One Seat", Some(1), 60).await;
    let enroll_uri = format!("/api/v1/events/{}/enroll", event.id);

    // u1 takes the seat, releases it, u2 takes it; u1's re-activation
    // must now hit the capacity guard like any fresh enrollment.
    let app = common::build_test_app(pool.clone());
    post_empty(app, &enroll_uri, &token_for(&u1)).await;

    let app = common::build_test_app(pool.clone());
    post_empty(
        app,
        &format!("/api/v1/events/{}/cancel", event.id),
        &token_for(&u1),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    assert_eq!(
        post_empty(app, &enroll_uri, &token_for(&u2)).await.status(),
        StatusCode::CREATED
    );

    let app = common::build_test_app(pool);
    let response = post_empty(app, &enroll_uri, &token_for(&u1)).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CAPACITY_EXHAUSTED");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_my_participations_lists_history(pool: PgPool) {
    let member = seed_user(&pool, "member@lab.example", "member").await;
    let e1 = seed_event(&pool, "Seminar", None, 60).await;
    let e2 = seed_event(&pool, "Workshop", None, 120).await;
    let token = token_for(&member);

    let app = common::build_test_app(pool.clone());
    post_empty(app, &format!("/api/v1/events/{}/enroll", e1.id), &token).await;
    let app = common::build_test_app(pool.clone());
    post_empty(app, &format!("/api/v1/events/{}/enroll", e2.id), &token).await;
    let app = common::build_test_app(pool.clone());
    post_empty(app, &format!("/api/v1/events/{}/cancel", e1.id), &token).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/me/participations", &token).await).await;
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_event_ledger_requires_staff(pool: PgPool) {
    let member = seed_user(&pool, "member@lab.example", "member").await;
    let staff = seed_user(&pool, "staff@lab.example", "staff").await;
    let event = seed_event(&pool, "Seminar", None, 60).await;
    let uri = format!("/api/v1/events/{}/participations", event.id);

    let app = common::build_test_app(pool.clone());
    post_empty(
        app,
        &format!("/api/v1/events/{}/enroll", event.id),
        &token_for(&member),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    assert_eq!(
        get(app, &uri, &token_for(&member)).await.status(),
        StatusCode::FORBIDDEN
    );

    let app = common::build_test_app(pool);
    let response = get(app, &uri, &token_for(&staff)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
}
