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
async fn test_anonymous_can_view_room_but_post_redirects_to_login() {
    let app = TestApp::new().await;
    let room = app.seed_room("Open Room", 1, "AVAILABLE").await;

    let res = app.router.clone().oneshot(
        Request::builder().uri(format!("/room/{}/", room.id)).body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let start = Utc::now() + Duration::hours(1);
    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/room/{}/", room.id))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({
                "start_time": start.to_rfc3339(),
                "end_time": (start + Duration::hours(1)).to_rfc3339()
            }).to_string())).unwrap()
    ).await.unwrap();

    assert!(res.status().is_redirection());
    let location = res.headers().get(header::LOCATION).unwrap().to_str().unwrap();
    assert_eq!(location, format!("/login/?next=/room/{}/", room.id));
}

#[tokio::test]
async fn test_signup_logs_the_user_in_immediately() {
    let app = TestApp::new().await;

    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/signup/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({
                "username": "newbie",
                "password": "password123"
            }).to_string())).unwrap()
    ).await.unwrap();

    assert_eq!(res.status(), StatusCode::CREATED);

    let cookies: Vec<String> = res.headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|h| h.to_str().unwrap().to_string())
        .collect();
    assert!(cookies.iter().any(|c| c.contains("access_token=")));
    assert!(cookies.iter().any(|c| c.contains("refresh_token=")));

    let body = parse_body(res).await;
    assert_eq!(body["user"]["username"], "newbie");
    assert_eq!(body["user"]["role"], "MEMBER");
    assert!(body["csrf_token"].as_str().is_some());
}

#[tokio::test]
async fn test_signup_rejects_duplicate_username() {
    let app = TestApp::new().await;
    app.signup("taken", "password123").await;

    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/signup/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({
                "username": "taken",
                "password": "password456"
            }).to_string())).unwrap()
    ).await.unwrap();

    assert_eq!(res.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_signup_rejects_short_password() {
    let app = TestApp::new().await;

    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/signup/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({
                "username": "shorty",
                "password": "short"
            }).to_string())).unwrap()
    ).await.unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_with_wrong_password_is_unauthorized() {
    let app = TestApp::new().await;
    app.signup("alice", "password123").await;

    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/login/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({
                "username": "alice",
                "password": "wrong-password"
            }).to_string())).unwrap()
    ).await.unwrap();

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_mine_requires_authentication() {
    let app = TestApp::new().await;

    let res = app.router.clone().oneshot(
        Request::builder().uri("/mine/").body(Body::empty()).unwrap()
    ).await.unwrap();

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_mutation_without_csrf_header_is_forbidden() {
    let app = TestApp::new().await;
    let auth = app.signup("alice", "password123").await;

    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/booking/some-id/cancel/")
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .body(Body::empty()).unwrap()
    ).await.unwrap();

    assert_eq!(res.status(), StatusCode::FORBIDDEN);
}
