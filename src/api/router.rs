use axum::{
    body::Body,
    extract::Request,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{auth, booking, health, room, staff};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tower_cookies::CookieManagerLayer;
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Auth
        .route("/signup/", post(auth::signup))
        .route("/login/", post(auth::login))
        .route("/logout/", post(auth::logout))
        .route("/refresh/", post(auth::refresh))

        // Public browsing + booking submission
        .route("/", get(room::list_rooms))
        .route("/room/{id}/", get(room::room_detail).post(room::submit_booking))

        // Own bookings
        .route("/mine/", get(booking::my_bookings))
        .route("/booking/{id}/cancel/", post(booking::cancel_booking))

        // Staff
        .route("/staff/bookings/", get(staff::list_bookings))
        .route("/staff/rooms/", post(staff::create_room))
        .route("/staff/rooms/{id}/", put(staff::update_room).delete(staff::delete_room))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        user_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .layer(CookieManagerLayer::new())
        .with_state(state)
}
