// src/application/dto/comments.rs
use crate::domain::comment::{Comment, CommentNode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentDto {
    pub id: i64,
    pub post_id: i64,
    pub author_id: i64,
    #[serde(default)]
    pub parent_id: Option<i64>,
    /// Sanitized HTML.
    pub content: String,
    pub is_approved: bool,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.into(),
            post_id: comment.post_id.into(),
            author_id: comment.author_id.into(),
            parent_id: comment.parent_id.map(Into::into),
            content: comment.body.into_inner(),
            is_approved: comment.is_approved,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentThreadDto {
    pub comment: CommentDto,
    #[schema(no_recursion)]
    pub replies: Vec<CommentThreadDto>,
}

impl From<CommentNode> for CommentThreadDto {
    fn from(node: CommentNode) -> Self {
        Self {
            comment: node.comment.into(),
            replies: node.replies.into_iter().map(Into::into).collect(),
        }
    }
}
