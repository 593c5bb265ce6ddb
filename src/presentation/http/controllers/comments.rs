// src/presentation/http/controllers/comments.rs
use crate::application::{commands::comments::CreateCommentCommand, dto::CommentDto};
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

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CommentRequest {
    /// HTML; only basic inline markup survives.
    #[validate(length(min = 3, max = 1000, message = "comment must be between 3 and 1000 chars"))]
    pub content: String,
    /// Comment being replied to; must be on the same post.
    #[serde(default)]
    pub parent_id: Option<i64>,
}

#[utoipa::path(
    post,
    path = "/api/v1/posts/{id}/comments",
    params(("id" = i64, Path, description = "Post id")),
    request_body = CommentRequest,
    responses(
        (status = 201, description = "Comment created.", body = CommentDto),
        (status = 400, description = "Invalid input or parent on another post.", body = ErrorResponse),
        (status = 401, description = "Missing identity.", body = ErrorResponse),
        (status = 404, description = "Post or parent comment not found.", body = ErrorResponse)
    ),
    security(("userId" = [])),
    tag = "Comments"
)]
pub async fn create_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(post_id): Path<i64>,
    Json(payload): Json<CommentRequest>,
) -> HttpResult<(StatusCode, Json<CommentDto>)> {
    payload.validate()?;
    let comment = state
        .services
        .comment_commands
        .create_comment(
            &user,
            CreateCommentCommand {
                post_id,
                parent_id: payload.parent_id,
                content: payload.content,
            },
        )
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(comment)))
}
