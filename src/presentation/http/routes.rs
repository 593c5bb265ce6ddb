// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{categories, comments, dashboard, home, posts, search},
    middleware::{
        rate_limit::{RateLimitSettings, rate_limit_layer},
        security_headers::with_security_headers,
    },
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderName, HeaderValue, Method, header},
    routing::{get, post, put},
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

/// Cross-cutting knobs of the HTTP stack.
#[derive(Debug, Clone, Default)]
pub struct RouterSettings {
    pub allowed_origins: Vec<String>,
    pub rate_limit: Option<RateLimitSettings>,
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring unparsable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            HeaderName::from_static("x-user-id"),
        ])
        .max_age(Duration::from_secs(3600))
}

fn api_routes() -> Router {
    Router::new()
        .route("/api/v1/home", get(home::home_page))
        .route("/api/v1/search", get(search::search_posts))
        .route("/api/v1/categories", get(categories::list_categories))
        .route(
            "/api/v1/categories/{id}/posts",
            get(categories::browse_category),
        )
        .route("/api/v1/tags/{tag}/posts", get(search::browse_tag))
        .route("/api/v1/posts", post(posts::create_post))
        .route("/api/v1/posts/{id}", put(posts::update_post))
        .route("/api/v1/posts/by-slug/{slug}", get(posts::get_post_by_slug))
        .route("/api/v1/posts/{id}/comments", post(comments::create_comment))
        .route("/api/v1/dashboard", get(dashboard::dashboard))
        .route("/api/v1/dashboard/statistics", get(dashboard::statistics))
}

pub fn build_router(state: HttpState, settings: &RouterSettings) -> Router {
    let mut api = api_routes();
    if let Some(limits) = settings.rate_limit {
        match rate_limit_layer(limits) {
            Some(layer) => api = api.layer(layer),
            None => tracing::warn!(?limits, "invalid rate limit settings, rate limiting disabled"),
        }
    }

    let router = Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .merge(api)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&settings.allowed_origins))
        .layer(Extension(state));

    with_security_headers(router)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
