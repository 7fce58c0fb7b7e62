mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use chrono::{Duration, Utc};
use common::{AuthHeaders, TestApp};
use serde_json::json;
use tower::ServiceExt;

fn booking_request(auth: &AuthHeaders, room_id: &str, start: chrono::DateTime<Utc>) -> Request<Body> {
    Request::builder().method("POST").uri(format!("/room/{}/", room_id))
        .header(header::COOKIE, format!("access_token={}", auth.access_token))
        .header("X-CSRF-Token", &auth.csrf_token)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({
            "start_time": start.to_rfc3339(),
            "end_time": (start + Duration::hours(1)).to_rfc3339()
        }).to_string())).unwrap()
}

/// Two submissions race for the same slot. Both may pass the in-process
/// validation, but the guarded insert at the storage layer lets exactly one
/// commit; the loser gets a conflict (or, if it arrived late enough to see
/// the winner, an overlap rejection).
#[tokio::test]
async fn test_concurrent_submissions_for_same_slot_yield_one_booking() {
    let app = TestApp::new().await;
    let room = app.seed_room("Contested", 1, "AVAILABLE").await;
    let alice = app.signup("alice", "password123").await;
    let bob = app.signup("bob", "password123").await;

    let start = Utc::now() + Duration::hours(1);

    let router_a = app.router.clone();
    let router_b = app.router.clone();
    let req_a = booking_request(&alice, &room.id, start);
    let req_b = booking_request(&bob, &room.id, start);

    let (res_a, res_b) = tokio::join!(
        tokio::spawn(async move { router_a.oneshot(req_a).await.unwrap() }),
        tokio::spawn(async move { router_b.oneshot(req_b).await.unwrap() }),
    );
    let statuses = [res_a.unwrap().status(), res_b.unwrap().status()];

    let successes = statuses.iter().filter(|s| **s == StatusCode::OK).count();
    assert_eq!(successes, 1, "exactly one submission must win, got {:?}", statuses);

    let loser = statuses.iter().find(|s| **s != StatusCode::OK).unwrap();
    assert!(
        *loser == StatusCode::CONFLICT || *loser == StatusCode::UNPROCESSABLE_ENTITY,
        "loser must be turned away cleanly, got {:?}", loser
    );

    // Exactly one row made it to storage.
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM bookings WHERE room_id = ?")
        .bind(&room.id)
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}
