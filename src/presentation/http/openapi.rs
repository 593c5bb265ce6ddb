// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{ApiKey, ApiKeyValue, SecurityScheme},
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

pub const DEFAULT_SNAPSHOT_PATH: &str = "docs/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        super::routes::health,
        crate::presentation::http::controllers::home::home_page,
        crate::presentation::http::controllers::search::search_posts,
        crate::presentation::http::controllers::search::browse_tag,
        crate::presentation::http::controllers::categories::list_categories,
        crate::presentation::http::controllers::categories::browse_category,
        crate::presentation::http::controllers::posts::create_post,
        crate::presentation::http::controllers::posts::update_post,
        crate::presentation::http::controllers::posts::get_post_by_slug,
        crate::presentation::http::controllers::comments::create_comment,
        crate::presentation::http::controllers::dashboard::dashboard,
        crate::presentation::http::controllers::dashboard::statistics
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::posts::PostRequest,
            crate::presentation::http::controllers::comments::CommentRequest,
            crate::application::dto::PostDto,
            crate::application::dto::PostDetailsDto,
            crate::application::dto::CommentDto,
            crate::application::dto::CommentThreadDto,
            crate::application::dto::CategoryDto,
            crate::application::dto::CategoryWithCountDto,
            crate::application::dto::BlogSummaryDto,
            crate::application::dto::UserProfileDto,
            crate::application::dto::DashboardDto,
            crate::application::dto::DashboardStatisticsDto,
            crate::application::dto::HomePageDto,
            crate::application::dto::SearchResultsDto,
            crate::application::dto::PageMeta
        )
    ),
    tags(
        (name = "Posts", description = "Authoring and reading posts"),
        (name = "Comments", description = "Threaded comments"),
        (name = "Browse", description = "Home feed, search, categories and tags"),
        (name = "Dashboard", description = "Per-user statistics"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Quillpress API",
        description = "Multi-user blogging backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        components.add_security_scheme(
            "userId",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                "x-user-id",
                "Caller id asserted by the identity proxy",
            ))),
        );
    }
}

/// Swagger UI at `/docs`, ReDoc at `/redoc` and the raw document at `/openapi.json`.
pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

/// Writes the document to `OPENAPI_SNAPSHOT_PATH` (or the default path) and
/// returns the path written.
pub fn write_openapi_snapshot() -> std::io::Result<String> {
    let document = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &document)?;
    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        for expected in [
            "/health",
            "/api/v1/home",
            "/api/v1/search",
            "/api/v1/categories",
            "/api/v1/categories/{id}/posts",
            "/api/v1/tags/{tag}/posts",
            "/api/v1/posts",
            "/api/v1/posts/{id}",
            "/api/v1/posts/by-slug/{slug}",
            "/api/v1/posts/{id}/comments",
            "/api/v1/dashboard",
            "/api/v1/dashboard/statistics",
        ] {
            assert!(paths.contains(&expected), "missing {expected}");
        }
    }

    #[test]
    fn user_id_security_scheme_is_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("userId"));
    }
}
