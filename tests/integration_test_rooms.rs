mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use chrono::{Duration, Utc};
use common::TestApp;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_index_lists_all_rooms() {
    let app = TestApp::new().await;
    app.seed_room("Study Room A", 1, "AVAILABLE").await;
    app.seed_room("Study Room B", 2, "UNAVAILABLE").await;

    let res = app.router.clone().oneshot(
        Request::builder().uri("/").body(Body::empty()).unwrap()
    ).await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    let rooms = body.as_array().unwrap();
    assert_eq!(rooms.len(), 2);
    // Unavailable rooms still show up in the listing; only booking is gated.
    assert!(rooms.iter().any(|r| r["status"] == "UNAVAILABLE"));
}

#[tokio::test]
async fn test_room_detail_includes_existing_bookings() {
    let app = TestApp::new().await;
    let room = app.seed_room("Lab", 2, "AVAILABLE").await;
    let auth = app.signup("viewer", "password123").await;

    let start = Utc::now() + Duration::hours(1);
    let end = start + Duration::hours(1);
    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/room/{}/", room.id))
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .header("X-CSRF-Token", &auth.csrf_token)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({
                "start_time": start.to_rfc3339(),
                "end_time": end.to_rfc3339()
            }).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.router.clone().oneshot(
        Request::builder().uri(format!("/room/{}/", room.id)).body(Body::empty()).unwrap()
    ).await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["room"]["id"], room.id.as_str());
    assert_eq!(body["bookings"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_unknown_room_is_not_found() {
    let app = TestApp::new().await;

    let res = app.router.clone().oneshot(
        Request::builder().uri("/room/no-such-room/").body(Body::empty()).unwrap()
    ).await.unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
