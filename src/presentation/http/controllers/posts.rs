// src/presentation/http/controllers/posts.rs
use crate::application::{
    commands::posts::{PostInput, UpdatePostCommand},
    dto::{PostDetailsDto, PostDto},
    queries::posts::GetPostDetailsQuery,
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Path,
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Full set of editable post fields, used for both create and update.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct PostRequest {
    #[validate(length(min = 1, max = 300, message = "title must be between 1 and 300 chars"))]
    pub title: String,
    #[serde(default)]
    #[validate(length(max = 500, message = "excerpt must be at most 500 chars"))]
    pub excerpt: Option<String>,
    /// HTML; unsafe markup is stripped on save.
    #[validate(length(min = 1, message = "content is required"))]
    pub content: String,
    #[serde(default)]
    #[validate(
        url(message = "featured_image_url must be a valid URL"),
        length(max = 2000, message = "featured_image_url must be at most 2000 chars")
    )]
    pub featured_image_url: Option<String>,
    #[serde(default)]
    pub blog_id: Option<i64>,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    #[validate(length(max = 500, message = "meta_description must be at most 500 chars"))]
    pub meta_description: Option<String>,
    /// Comma separated.
    #[serde(default)]
    #[validate(length(max = 200, message = "tags must be at most 200 chars"))]
    pub tags: Option<String>,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub is_featured: bool,
}

impl From<PostRequest> for PostInput {
    fn from(request: PostRequest) -> Self {
        Self {
            title: request.title,
            excerpt: request.excerpt,
            content: request.content,
            featured_image_url: request.featured_image_url,
            blog_id: request.blog_id,
            category_id: request.category_id,
            meta_description: request.meta_description,
            tags: request.tags,
            is_published: request.is_published,
            is_featured: request.is_featured,
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/posts",
    request_body = PostRequest,
    responses(
        (status = 201, description = "Post created.", body = PostDto),
        (status = 400, description = "Invalid input.", body = ErrorResponse),
        (status = 401, description = "Missing identity.", body = ErrorResponse),
        (status = 404, description = "Category or blog not found.", body = ErrorResponse)
    ),
    security(("userId" = [])),
    tag = "Posts"
)]
pub async fn create_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<PostRequest>,
) -> HttpResult<(StatusCode, Json<PostDto>)> {
    payload.validate()?;
    let post = state
        .services
        .post_commands
        .create_post(&user, payload.into())
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(post)))
}

#[utoipa::path(
    put,
    path = "/api/v1/posts/{id}",
    params(("id" = i64, Path, description = "Post id")),
    request_body = PostRequest,
    responses(
        (status = 200, description = "Post updated.", body = PostDto),
        (status = 400, description = "Invalid input.", body = ErrorResponse),
        (status = 401, description = "Missing identity.", body = ErrorResponse),
        (status = 403, description = "Caller is not the author.", body = ErrorResponse),
        (status = 404, description = "Post not found.", body = ErrorResponse),
        (status = 409, description = "Concurrent modification.", body = ErrorResponse)
    ),
    security(("userId" = [])),
    tag = "Posts"
)]
pub async fn update_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<PostRequest>,
) -> HttpResult<Json<PostDto>> {
    payload.validate()?;
    let post = state
        .services
        .post_commands
        .update_post(
            &user,
            UpdatePostCommand {
                id,
                input: payload.into(),
            },
        )
        .await
        .into_http()?;
    Ok(Json(post))
}

#[utoipa::path(
    get,
    path = "/api/v1/posts/by-slug/{slug}",
    params(("slug" = String, Path, description = "Post slug")),
    responses(
        (status = 200, description = "Post with its comment thread and related posts. Counts one view.", body = PostDetailsDto),
        (status = 404, description = "Post not found.", body = ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn get_post_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<PostDetailsDto>> {
    let details = state
        .services
        .post_queries
        .get_post_details(GetPostDetailsQuery { slug })
        .await
        .into_http()?;
    Ok(Json(details))
}
