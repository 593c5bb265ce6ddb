// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use chrono::Duration;
use quillpress_core::{
    application::{
        dto::AuthenticatedUser,
        ports::{sanitizer::HtmlSanitizer, time::Clock, util::SlugGenerator},
        services::{ApplicationServices, Repositories},
    },
    domain::{
        sanitation::{SanitationProfiles, SanitizationProfile},
        user::UserId,
    },
    infrastructure::{sanitizer::AmmoniaHtmlSanitizer, util::RegexSlugGenerator},
    presentation::http::{
        routes::{RouterSettings, build_router},
        state::HttpState,
    },
};
use serde_json::Value;

use super::mocks::{MemoryStore, SteppingClock};

pub fn actor(id: i64) -> AuthenticatedUser {
    AuthenticatedUser::new(UserId::new(id).unwrap())
}

/// Services over `repos` with the production sanitizer and slug generator.
pub fn services_with(repos: Repositories, clock: Arc<dyn Clock>) -> ApplicationServices {
    let profiles =
        SanitationProfiles::new(SanitizationProfile::authoring(), SanitizationProfile::display())
            .unwrap();
    let sanitizer: Arc<dyn HtmlSanitizer> = Arc::new(AmmoniaHtmlSanitizer::new(&profiles));
    let slugger: Arc<dyn SlugGenerator> = Arc::new(RegexSlugGenerator);
    ApplicationServices::new(repos, sanitizer, clock, slugger)
}

pub fn services_for(store: &MemoryStore) -> ApplicationServices {
    services_with(
        store.repositories(),
        Arc::new(SteppingClock::new(Duration::seconds(1))),
    )
}

pub fn build_test_state(store: &MemoryStore) -> HttpState {
    HttpState {
        services: Arc::new(services_for(store)),
    }
}

/// Router without rate limiting; oneshot requests carry no peer address.
pub fn make_test_router(store: &MemoryStore) -> axum::Router {
    build_router(build_test_state(store), &RouterSettings::default())
}

pub fn json_request(method: &str, uri: &str, user: Option<i64>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(id) = user {
        builder = builder.header("x-user-id", id.to_string());
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn get_request(uri: &str, user: Option<i64>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(id) = user {
        builder = builder.header("x-user-id", id.to_string());
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn read_json(resp: axum::response::Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

/// Asserts an `ErrorResponse` body with the given status and reason phrase.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) -> Value {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = read_json(resp).await;
    let err_field = json.get("error").and_then(Value::as_str).unwrap_or("");
    let msg_field = json.get("message").and_then(Value::as_str).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field");
    json
}
